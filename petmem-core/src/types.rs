//! Core type definitions for the petmem decision layer.
//!
//! Everything here mirrors the payloads the external pet engine hands over:
//! loosely typed memory records keyed by `(category, key)`, and the three
//! neurogenesis accumulators with their configured thresholds.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Memory categories
// ---------------------------------------------------------------------------

/// Category tag of a memory record, as emitted by the engine's memory manager.
///
/// Unrecognized tags are preserved as [`MemoryCategory::Other`] rather than
/// rejected — a new engine-side category must not break the display layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MemoryCategory {
    /// Feeding events.
    Food,
    /// Tank decoration events.
    Decorations,
    /// Direct user interaction events.
    Interaction,
    /// Internal mood / state changes (startled, curious, ...).
    MentalState,
    /// Health changes.
    Health,
    /// Play sessions.
    Play,
    /// Autonomous behavior transitions.
    Behavior,
    /// Any category this layer has no special handling for.
    Other(String),
}

impl MemoryCategory {
    /// Parse an engine category tag. Total — unknown tags become `Other`.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "food" => Self::Food,
            "decorations" => Self::Decorations,
            "interaction" => Self::Interaction,
            "mental_state" => Self::MentalState,
            "health" => Self::Health,
            "play" => Self::Play,
            "behavior" => Self::Behavior,
            other => Self::Other(other.to_string()),
        }
    }

    /// The wire tag the engine uses for this category.
    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            Self::Food => "food",
            Self::Decorations => "decorations",
            Self::Interaction => "interaction",
            Self::MentalState => "mental_state",
            Self::Health => "health",
            Self::Play => "play",
            Self::Behavior => "behavior",
            Self::Other(tag) => tag,
        }
    }

    /// Whether this category sits on the always-displayable allow-list
    /// (subject only to the disguised-timestamp check).
    #[must_use]
    pub fn is_allow_listed(&self) -> bool {
        matches!(self, Self::Food | Self::Decorations | Self::Interaction)
    }
}

impl From<String> for MemoryCategory {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<MemoryCategory> for String {
    fn from(category: MemoryCategory) -> Self {
        category.tag().to_string()
    }
}

impl fmt::Display for MemoryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

// ---------------------------------------------------------------------------
// Memory values
// ---------------------------------------------------------------------------

/// Raw payload of a memory record.
///
/// The engine serializes these as plain JSON scalars or as a mapping of
/// effect-name → delta. Effect deltas stay as [`serde_json::Value`] because
/// engine payloads are not guaranteed to be uniformly numeric; the summation
/// in the color logic treats any non-numeric entry as "not an effect record".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MemoryValue {
    /// A bare numeric payload.
    Number(f64),
    /// A free-text payload.
    Text(String),
    /// A mapping of effect names to deltas.
    Effects(BTreeMap<String, serde_json::Value>),
}

impl MemoryValue {
    /// Sum of all effect deltas, or `None` if this is not a mapping or any
    /// entry is non-numeric.
    #[must_use]
    pub fn effect_sum(&self) -> Option<f64> {
        match self {
            Self::Effects(map) => {
                let mut sum = 0.0;
                for value in map.values() {
                    sum += value.as_f64()?;
                }
                Some(sum)
            }
            _ => None,
        }
    }

    /// Whether the payload is effectively empty (blank text).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Text(text) if text.trim().is_empty())
    }

    /// Render the payload for display when no formatted text exists.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(text) => text.clone(),
            Self::Effects(map) => {
                serde_json::to_string(map).unwrap_or_default()
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Memory records
// ---------------------------------------------------------------------------

/// A single memory record as read from the engine's memory manager.
///
/// Every field is serde-defaulted: partially populated payloads deserialize
/// to a record with absent fields rather than failing, so one malformed
/// record cannot break a display refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryRecord {
    /// Category tag, unique namespace for `key`.
    #[serde(default = "default_category")]
    pub category: MemoryCategory,
    /// Identifier, unique within the category at a point in time.
    #[serde(default)]
    pub key: String,
    /// Raw payload.
    #[serde(default)]
    pub value: Option<MemoryValue>,
    /// Human-readable payload, preferred for display when present.
    #[serde(default)]
    pub formatted_value: Option<String>,
    /// Salience score; starts low, incremented on user interaction.
    #[serde(default)]
    pub importance: i64,
    /// How many times this record has been surfaced / clicked.
    #[serde(default)]
    pub access_count: u32,
    /// When the record was created or last touched.
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

fn default_category() -> MemoryCategory {
    MemoryCategory::Other(String::new())
}

impl MemoryRecord {
    /// Create a record with a text payload and zeroed counters.
    #[must_use]
    pub fn new(category: MemoryCategory, key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            category,
            key: key.into(),
            value: Some(MemoryValue::Text(value.into())),
            formatted_value: None,
            importance: 0,
            access_count: 0,
            timestamp: Utc::now(),
        }
    }

    /// Attach a formatted display string.
    #[must_use]
    pub fn with_formatted(mut self, formatted: impl Into<String>) -> Self {
        self.formatted_value = Some(formatted.into());
        self
    }

    /// Replace the raw payload.
    #[must_use]
    pub fn with_value(mut self, value: MemoryValue) -> Self {
        self.value = Some(value);
        self
    }

    /// Set the importance score.
    #[must_use]
    pub fn with_importance(mut self, importance: i64) -> Self {
        self.importance = importance;
        self
    }

    /// Set the access count.
    #[must_use]
    pub fn with_access_count(mut self, access_count: u32) -> Self {
        self.access_count = access_count;
        self
    }

    /// The text shown to the user: formatted value if present, otherwise a
    /// rendering of the raw payload, otherwise empty.
    #[must_use]
    pub fn display_text(&self) -> String {
        if let Some(formatted) = &self.formatted_value {
            return formatted.clone();
        }
        self.value.as_ref().map(MemoryValue::render).unwrap_or_default()
    }

    /// Dedupe identity of this record.
    #[must_use]
    pub fn identity(&self) -> (MemoryCategory, String) {
        (self.category.clone(), self.key.clone())
    }
}

// ---------------------------------------------------------------------------
// Display color classes
// ---------------------------------------------------------------------------

/// Valence class a record is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorClass {
    /// Beneficial event (rendered green by hosts).
    Positive,
    /// Harmful event (rendered red by hosts).
    Negative,
    /// Everything else.
    Neutral,
}

impl fmt::Display for ColorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positive => write!(f, "positive"),
            Self::Negative => write!(f, "negative"),
            Self::Neutral => write!(f, "neutral"),
        }
    }
}

// ---------------------------------------------------------------------------
// Neurogenesis state
// ---------------------------------------------------------------------------

/// Kind of neuron the engine can create when a counter crosses its threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NeuronType {
    /// Created by accumulated novel experiences.
    Novelty,
    /// Created by sustained stress.
    Stress,
    /// Created by accumulated rewards.
    Reward,
}

impl NeuronType {
    /// All neuron types, in the engine's canonical order.
    pub const ALL: [Self; 3] = [Self::Novelty, Self::Stress, Self::Reward];

    /// Lowercase engine tag.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Novelty => "novelty",
            Self::Stress => "stress",
            Self::Reward => "reward",
        }
    }

    /// Parse an engine tag. Total — unknown tags yield `None`.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "novelty" => Some(Self::Novelty),
            "stress" => Some(Self::Stress),
            "reward" => Some(Self::Reward),
            _ => None,
        }
    }
}

impl fmt::Display for NeuronType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Novelty => write!(f, "Novelty"),
            Self::Stress => write!(f, "Stress"),
            Self::Reward => write!(f, "Reward"),
        }
    }
}

/// Current values of the three neurogenesis accumulators.
///
/// Missing engine values are supplied as 0 at the boundary — a counter the
/// engine has not started tracking yet behaves like an empty one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NeurogenesisCounters {
    /// Novel-experience accumulator.
    #[serde(default)]
    pub novelty: f64,
    /// Stress accumulator.
    #[serde(default)]
    pub stress: f64,
    /// Reward accumulator.
    #[serde(default)]
    pub reward: f64,
}

impl NeurogenesisCounters {
    /// Counter value for a neuron type.
    #[must_use]
    pub fn get(&self, neuron: NeuronType) -> f64 {
        match neuron {
            NeuronType::Novelty => self.novelty,
            NeuronType::Stress => self.stress,
            NeuronType::Reward => self.reward,
        }
    }
}

/// Configured thresholds for the three accumulators.
///
/// `None` means "unconfigured". An unconfigured threshold is surfaced as an
/// unavailable prediction — it is never substituted with 0, since that would
/// flip every inequality the predictor evaluates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NeurogenesisThresholds {
    /// Novelty threshold, if configured.
    #[serde(default)]
    pub novelty: Option<f64>,
    /// Stress threshold, if configured.
    #[serde(default)]
    pub stress: Option<f64>,
    /// Reward threshold, if configured.
    #[serde(default)]
    pub reward: Option<f64>,
}

impl NeurogenesisThresholds {
    /// Create thresholds with all three values configured.
    #[must_use]
    pub fn new(novelty: f64, stress: f64, reward: f64) -> Self {
        Self {
            novelty: Some(novelty),
            stress: Some(stress),
            reward: Some(reward),
        }
    }

    /// Threshold for a neuron type, if configured.
    #[must_use]
    pub fn get(&self, neuron: NeuronType) -> Option<f64> {
        match neuron {
            NeuronType::Novelty => self.novelty,
            NeuronType::Stress => self.stress,
            NeuronType::Reward => self.reward,
        }
    }

    /// Whether all three thresholds are configured and finite.
    #[must_use]
    pub fn all_finite(&self) -> bool {
        NeuronType::ALL
            .iter()
            .all(|n| self.get(*n).is_some_and(f64::is_finite))
    }
}

// ---------------------------------------------------------------------------
// Prediction results
// ---------------------------------------------------------------------------

/// Outcome of a neurogenesis prediction.
///
/// `neuron` is `None` for an undetermined prediction. `label` is always a
/// non-empty human-readable justification suitable for direct display, e.g.
/// `"Novelty (exceeds threshold)"` or
/// `"Undetermined (cooldown active, 12s remaining)"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Predicted neuron type, if one could be determined.
    pub neuron: Option<NeuronType>,
    /// Rendered justification string.
    pub label: String,
    /// Other at-threshold candidates beyond the chosen one.
    pub also_watching: Vec<NeuronType>,
}

impl PredictionResult {
    /// An undetermined result with the given reason.
    #[must_use]
    pub fn undetermined(reason: impl fmt::Display) -> Self {
        Self {
            neuron: None,
            label: format!("Undetermined ({reason})"),
            also_watching: Vec::new(),
        }
    }

    /// A determined result for `neuron` with the given reason.
    #[must_use]
    pub fn likely(neuron: NeuronType, reason: impl fmt::Display) -> Self {
        Self {
            neuron: Some(neuron),
            label: format!("{neuron} ({reason})"),
            also_watching: Vec::new(),
        }
    }

    /// Whether no type could be predicted.
    #[must_use]
    pub fn is_undetermined(&self) -> bool {
        self.neuron.is_none()
    }
}

impl fmt::Display for PredictionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)?;
        if !self.also_watching.is_empty() {
            let names: Vec<String> =
                self.also_watching.iter().map(ToString::to_string).collect();
            write!(f, " — also watching: {}", names.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_round_trips_through_tag() {
        for tag in ["food", "decorations", "interaction", "mental_state", "health", "play", "behavior"] {
            assert_eq!(MemoryCategory::from_tag(tag).tag(), tag);
        }
        assert_eq!(
            MemoryCategory::from_tag("dreams"),
            MemoryCategory::Other("dreams".to_string())
        );
    }

    #[test]
    fn effect_sum_requires_all_numeric() {
        let numeric: MemoryValue = serde_json::from_str(r#"{"hunger": -5, "happiness": 10}"#)
            .expect("deserialize effects");
        assert_eq!(numeric.effect_sum(), Some(5.0));

        let mixed: MemoryValue = serde_json::from_str(r#"{"hunger": -5, "note": "fed"}"#)
            .expect("deserialize effects");
        assert_eq!(mixed.effect_sum(), None);
    }

    #[test]
    fn partial_record_deserializes_with_defaults() {
        let record: MemoryRecord = serde_json::from_str(r#"{"category": "food"}"#)
            .expect("deserialize partial record");
        assert_eq!(record.category, MemoryCategory::Food);
        assert!(record.key.is_empty());
        assert!(record.value.is_none());
        assert_eq!(record.importance, 0);
    }

    #[test]
    fn display_text_prefers_formatted_value() {
        let record = MemoryRecord::new(MemoryCategory::Food, "fed_1", "raw text")
            .with_formatted("Ate a sushi roll");
        assert_eq!(record.display_text(), "Ate a sushi roll");
    }

    #[test]
    fn thresholds_with_gap_are_not_finite() {
        let mut thresholds = NeurogenesisThresholds::new(3.0, 5.0, 5.0);
        assert!(thresholds.all_finite());
        thresholds.reward = None;
        assert!(!thresholds.all_finite());
        thresholds.reward = Some(f64::NAN);
        assert!(!thresholds.all_finite());
    }
}
