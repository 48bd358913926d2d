//! Neurogenesis Predictor — best-effort "what fires next" diagnostics.
//!
//! Given the three accumulator counters, their configured thresholds, and
//! the last-created neuron type, predicts which kind of neuron the engine is
//! most likely to create next. Advisory only — this never triggers actual
//! neurogenesis, it exists so hosts can render a forecast.
//!
//! Stateless and deterministic: identical inputs always yield identical
//! results, and every branch produces a non-empty human-readable label.

use std::cmp::Reverse;

use ordered_float::OrderedFloat;

use crate::config::PredictorConfig;
use crate::types::{NeurogenesisCounters, NeurogenesisThresholds, NeuronType, PredictionResult};

/// A neuron type at or past its threshold.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    neuron: NeuronType,
    /// How far past the threshold the counter is (>= 0 for candidates).
    urgency: f64,
    counter: f64,
}

/// Predict the next neuron type the engine is likely to create.
///
/// Gate checks short-circuit in order: active cooldown, disabled
/// neurogenesis, unavailable thresholds. Unconfigured thresholds are
/// reported as unavailable, never defaulted to 0 — that would flip every
/// inequality below.
#[must_use]
pub fn predict_next_neuron_type(
    counters: &NeurogenesisCounters,
    thresholds: &NeurogenesisThresholds,
    cooldown_remaining_secs: f64,
    enabled: bool,
    last_type: Option<NeuronType>,
    config: &PredictorConfig,
) -> PredictionResult {
    // Gates.
    if cooldown_remaining_secs > 0.0 {
        return PredictionResult::undetermined(format!(
            "cooldown active, {}s remaining",
            cooldown_remaining_secs.round() as i64
        ));
    }
    if !enabled {
        return PredictionResult::undetermined("disabled");
    }
    if !thresholds.all_finite() {
        return PredictionResult::undetermined("thresholds unavailable");
    }

    // Candidate selection. Thresholds are all finite past the gate.
    let mut candidates: Vec<Candidate> = NeuronType::ALL
        .iter()
        .filter_map(|&neuron| {
            let counter = counters.get(neuron);
            let threshold = thresholds.get(neuron)?;
            let urgency = counter - threshold;
            (urgency >= 0.0).then_some(Candidate {
                neuron,
                urgency,
                counter,
            })
        })
        .collect();

    match candidates.len() {
        0 => approaching(counters, thresholds),
        1 => PredictionResult::likely(candidates[0].neuron, "exceeds threshold"),
        _ => {
            // Urgency is the primary sort key, counter breaks ties.
            candidates.sort_by_key(|c| {
                Reverse((OrderedFloat(c.urgency), OrderedFloat(c.counter)))
            });
            pick_among(&candidates, last_type, config)
        }
    }
}

/// No counter has reached its threshold: report the one closest to firing.
fn approaching(
    counters: &NeurogenesisCounters,
    thresholds: &NeurogenesisThresholds,
) -> PredictionResult {
    let closest = NeuronType::ALL
        .iter()
        .filter_map(|&neuron| {
            let counter = counters.get(neuron);
            let distance = thresholds.get(neuron)? - counter;
            (distance >= 0.0).then_some((neuron, distance, counter))
        })
        // Smallest distance wins; ties go to the larger counter.
        .min_by_key(|&(_, distance, counter)| {
            (OrderedFloat(distance), Reverse(OrderedFloat(counter)))
        });

    match closest {
        Some((neuron, _, _)) => PredictionResult {
            neuron: Some(neuron),
            label: format!("Likely {neuron} (approaching threshold)"),
            also_watching: Vec::new(),
        },
        // No non-negative distance left — inconsistent counter state.
        None => PredictionResult::undetermined("evaluating conditions"),
    }
}

/// Choose among multiple at-threshold candidates, avoiding an immediate
/// repeat of the last-created type when a strong-enough alternative exists.
fn pick_among(
    sorted: &[Candidate],
    last_type: Option<NeuronType>,
    config: &PredictorConfig,
) -> PredictionResult {
    let primary = sorted[0];

    let chosen = if last_type == Some(primary.neuron) {
        let alternative = sorted[1];
        // Promote the alternative only if it is within striking distance of
        // the primary on either axis; otherwise accept the repeat.
        let ratio = config.repeat_override_ratio;
        if alternative.urgency > ratio * primary.urgency
            || alternative.counter > ratio * primary.counter
        {
            let mut result = PredictionResult::likely(
                alternative.neuron,
                format!("prioritized over repeating {}", primary.neuron),
            );
            result.also_watching = watching(sorted, alternative.neuron);
            return result;
        }
        primary
    } else {
        primary
    };

    let mut result = PredictionResult::likely(chosen.neuron, "highest urgency");
    result.also_watching = watching(sorted, chosen.neuron);
    result
}

/// All candidates beyond the chosen one, in sorted order.
fn watching(sorted: &[Candidate], chosen: NeuronType) -> Vec<NeuronType> {
    sorted
        .iter()
        .filter(|c| c.neuron != chosen)
        .map(|c| c.neuron)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counters(novelty: f64, stress: f64, reward: f64) -> NeurogenesisCounters {
        NeurogenesisCounters {
            novelty,
            stress,
            reward,
        }
    }

    fn predict(
        c: NeurogenesisCounters,
        t: NeurogenesisThresholds,
        cooldown: f64,
        enabled: bool,
        last: Option<NeuronType>,
    ) -> PredictionResult {
        predict_next_neuron_type(&c, &t, cooldown, enabled, last, &PredictorConfig::default())
    }

    #[test]
    fn cooldown_gates_everything() {
        let result = predict(
            counters(100.0, 100.0, 100.0),
            NeurogenesisThresholds::new(3.0, 5.0, 5.0),
            12.0,
            true,
            None,
        );
        assert!(result.is_undetermined());
        assert_eq!(result.label, "Undetermined (cooldown active, 12s remaining)");
    }

    #[test]
    fn disabled_is_undetermined() {
        let result = predict(
            counters(100.0, 0.0, 0.0),
            NeurogenesisThresholds::new(3.0, 5.0, 5.0),
            0.0,
            false,
            None,
        );
        assert_eq!(result.label, "Undetermined (disabled)");
    }

    #[test]
    fn missing_threshold_is_unavailable() {
        let mut thresholds = NeurogenesisThresholds::new(3.0, 5.0, 5.0);
        thresholds.stress = None;
        let result = predict(counters(100.0, 0.0, 0.0), thresholds, 0.0, true, None);
        assert_eq!(result.label, "Undetermined (thresholds unavailable)");
    }

    #[test]
    fn single_candidate_exceeds_threshold() {
        let result = predict(
            counters(5.0, 1.0, 1.0),
            NeurogenesisThresholds::new(3.0, 5.0, 5.0),
            0.0,
            true,
            None,
        );
        assert_eq!(result.neuron, Some(NeuronType::Novelty));
        assert_eq!(result.label, "Novelty (exceeds threshold)");
        assert!(result.also_watching.is_empty());
    }

    #[test]
    fn repeat_avoidance_promotes_qualified_alternative() {
        // Novelty leads on urgency but repeats the last-created type;
        // stress ties on counter, so the 75% rule promotes it.
        let result = predict(
            counters(6.0, 6.0, 1.0),
            NeurogenesisThresholds::new(3.0, 5.0, 5.0),
            0.0,
            true,
            Some(NeuronType::Novelty),
        );
        assert_eq!(result.neuron, Some(NeuronType::Stress));
        assert_eq!(result.label, "Stress (prioritized over repeating Novelty)");
        assert_eq!(result.also_watching, vec![NeuronType::Novelty]);
    }

    #[test]
    fn weak_alternative_keeps_repeating_primary() {
        // Stress barely crossed its threshold with a small counter: it
        // exceeds neither 75% of novelty's urgency nor of its counter.
        let result = predict(
            counters(20.0, 5.0, 0.0),
            NeurogenesisThresholds::new(3.0, 5.0, 5.0),
            0.0,
            true,
            Some(NeuronType::Novelty),
        );
        assert_eq!(result.neuron, Some(NeuronType::Novelty));
        assert_eq!(result.label, "Novelty (highest urgency)");
        assert_eq!(result.also_watching, vec![NeuronType::Stress]);
    }

    #[test]
    fn non_repeating_primary_wins_directly() {
        let result = predict(
            counters(6.0, 6.0, 1.0),
            NeurogenesisThresholds::new(3.0, 5.0, 5.0),
            0.0,
            true,
            Some(NeuronType::Reward),
        );
        assert_eq!(result.neuron, Some(NeuronType::Novelty));
        assert_eq!(result.label, "Novelty (highest urgency)");
    }

    #[test]
    fn no_candidate_reports_closest() {
        let result = predict(
            counters(2.5, 1.0, 1.0),
            NeurogenesisThresholds::new(3.0, 5.0, 5.0),
            0.0,
            true,
            None,
        );
        assert_eq!(result.neuron, Some(NeuronType::Novelty));
        assert_eq!(result.label, "Likely Novelty (approaching threshold)");
    }

    #[test]
    fn approaching_tie_breaks_by_larger_counter() {
        // Stress and reward are equidistant from their thresholds; stress
        // has the larger counter and must win the tie.
        let result = predict(
            counters(0.0, 4.0, 3.0),
            NeurogenesisThresholds::new(10.0, 5.0, 4.0),
            0.0,
            true,
            None,
        );
        // distances: novelty 10, stress 1, reward 1 — tie between stress
        // and reward, stress has counter 4 vs reward 3.
        assert_eq!(result.neuron, Some(NeuronType::Stress));
    }

    #[test]
    fn nan_counters_fall_back_to_evaluating() {
        let result = predict(
            counters(f64::NAN, f64::NAN, f64::NAN),
            NeurogenesisThresholds::new(3.0, 5.0, 5.0),
            0.0,
            true,
            None,
        );
        assert_eq!(result.label, "Undetermined (evaluating conditions)");
    }

    #[test]
    fn every_branch_labels_nonempty() {
        let cases = [
            predict(counters(0.0, 0.0, 0.0), NeurogenesisThresholds::default(), 0.0, true, None),
            predict(counters(9.0, 9.0, 9.0), NeurogenesisThresholds::new(1.0, 1.0, 1.0), 0.0, true, None),
            predict(counters(0.0, 0.0, 0.0), NeurogenesisThresholds::new(1.0, 1.0, 1.0), 5.0, false, None),
        ];
        for result in cases {
            assert!(!result.label.is_empty());
        }
    }
}
