//! Snapshot-building refresh path.
//!
//! A host polls the engine on a timer (order of seconds) and pushes the
//! result into read-only views. Each poll produces an immutable
//! [`RefreshSnapshot`]: deduplicated, filtered, colored rows for both
//! memory tiers plus the current neurogenesis forecast. Views render
//! snapshots; they never reach into the engine themselves.
//!
//! The refresh path is pure and idempotent — polling twice with unchanged
//! engine state yields equivalent snapshots.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use petmem_core::config::PetmemConfig;
use petmem_core::predictor::predict_next_neuron_type;
use petmem_core::salience::{color_for, dedupe, is_displayable};
use petmem_core::types::{ColorClass, MemoryRecord, PredictionResult};

use crate::engine::PetEngine;

/// A displayable record paired with its valence color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryRow {
    /// The underlying record.
    pub record: MemoryRecord,
    /// Valence class the host renders it with.
    pub color: ColorClass,
}

/// One poll's worth of display state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefreshSnapshot {
    /// Displayable short-term records, deduplicated, first-seen order.
    pub short_term: Vec<MemoryRow>,
    /// Displayable long-term records, deduplicated, first-seen order.
    pub long_term: Vec<MemoryRow>,
    /// Current neurogenesis forecast.
    pub prediction: PredictionResult,
    /// When this snapshot was taken.
    pub taken_at: DateTime<Utc>,
}

/// Poll the engine and build a fresh display snapshot.
pub fn refresh<E: PetEngine>(engine: &E, config: &PetmemConfig) -> RefreshSnapshot {
    let short_term = build_rows(engine.short_term_memories(), config);
    let long_term = build_rows(engine.long_term_memories(), config);

    let prediction = predict_next_neuron_type(
        &engine.neurogenesis_counters(),
        &engine.neurogenesis_thresholds(),
        engine.neurogenesis_cooldown_remaining(),
        engine.neurogenesis_enabled(),
        engine.last_created_neuron_type(),
        &config.predictor,
    );

    debug!(
        short_term = short_term.len(),
        long_term = long_term.len(),
        prediction = %prediction,
        "display refresh"
    );

    RefreshSnapshot {
        short_term,
        long_term,
        prediction,
        taken_at: Utc::now(),
    }
}

/// Dedupe → displayability filter → color, for one memory tier.
fn build_rows(records: Vec<MemoryRecord>, config: &PetmemConfig) -> Vec<MemoryRow> {
    dedupe(records)
        .into_iter()
        .filter(|record| is_displayable(record, &config.display))
        .map(|record| {
            let color = color_for(&record);
            MemoryRow { record, color }
        })
        .collect()
}
