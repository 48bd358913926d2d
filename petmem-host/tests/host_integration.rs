//! Integration tests — full poll/interact lifecycle against a mock engine.
//!
//! Covers the display-refresh contract end to end: dedupe + filter + color
//! per tier, the neurogenesis forecast riding along in the snapshot, the
//! exactly-once interaction side effect, and the log-and-continue policy on
//! a failing engine.

use petmem_core::config::PetmemConfig;
use petmem_core::types::{ColorClass, MemoryCategory, MemoryRecord, NeuronType};

use petmem_host::testing::MockEngine;
use petmem_host::{on_record_interacted, on_record_interacted_logged, refresh};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn seeded_engine() -> MockEngine {
    let mut engine = MockEngine::default();

    engine.short_term.push(MemoryRecord::new(
        MemoryCategory::Food,
        "fed_1",
        "Ate a sushi roll",
    ));
    // Duplicate key — must collapse to the first occurrence.
    engine.short_term.push(MemoryRecord::new(
        MemoryCategory::Food,
        "fed_1",
        "stale duplicate",
    ));
    // Behavior noise — must be filtered out.
    engine.short_term.push(MemoryRecord::new(
        MemoryCategory::Behavior,
        "b1",
        "status changed to roaming",
    ));
    // Startled mental state — colors negative.
    engine.short_term.push(MemoryRecord::new(
        MemoryCategory::MentalState,
        "startled",
        "jumped at a falling rock",
    ));

    engine.long_term.push(
        MemoryRecord::new(MemoryCategory::Health, "h1", "recovered")
            .with_formatted("positive: recovered from white spot disease"),
    );

    engine.counters.novelty = 5.0;
    engine.counters.stress = 1.0;
    engine.counters.reward = 1.0;
    engine
}

#[test]
fn full_refresh_lifecycle() {
    init_tracing();
    let engine = seeded_engine();
    let config = PetmemConfig::default();

    let snapshot = refresh(&engine, &config);

    // Short-term tier: duplicate collapsed, noise filtered.
    assert_eq!(snapshot.short_term.len(), 2);
    assert_eq!(snapshot.short_term[0].record.key, "fed_1");
    assert_eq!(snapshot.short_term[0].record.display_text(), "Ate a sushi roll");
    assert_eq!(snapshot.short_term[1].color, ColorClass::Negative);

    // Long-term tier colored independently.
    assert_eq!(snapshot.long_term.len(), 1);
    assert_eq!(snapshot.long_term[0].color, ColorClass::Positive);

    // Forecast rides along with the snapshot.
    assert_eq!(snapshot.prediction.neuron, Some(NeuronType::Novelty));
    assert_eq!(snapshot.prediction.label, "Novelty (exceeds threshold)");
}

#[test]
fn interaction_promotes_exactly_once() {
    init_tracing();
    let mut engine = seeded_engine();
    let config = PetmemConfig::default();

    let record = engine.short_term[0].clone().with_importance(7);
    engine.short_term[0].importance = 7;

    let outcome = on_record_interacted(&mut engine, &record, &config.promotion)
        .expect("interaction succeeds");

    assert!(outcome.promoted);
    assert_eq!(outcome.new_importance, 8);
    assert_eq!(engine.importance_updates.len(), 1);
    assert_eq!(
        engine.importance_updates[0],
        (MemoryCategory::Food, "fed_1".to_string(), 1)
    );
    assert_eq!(engine.transfers.len(), 1);

    // The promoted record now shows up in the long-term tier on the next
    // poll, deduplicated as usual.
    let snapshot = refresh(&engine, &config);
    assert!(
        snapshot
            .long_term
            .iter()
            .any(|row| row.record.key == "fed_1")
    );
}

#[test]
fn repeated_interactions_accumulate_importance() {
    init_tracing();
    let mut engine = seeded_engine();
    let config = PetmemConfig::default();

    let mut record = engine.short_term[0].clone();
    for _ in 0..3 {
        let outcome = on_record_interacted(&mut engine, &record, &config.promotion)
            .expect("interaction succeeds");
        record.importance = outcome.new_importance;
    }

    assert_eq!(engine.importance_updates.len(), 3);
    assert_eq!(engine.short_term[0].importance, 3);
    // Still below every promotion floor.
    assert!(engine.transfers.is_empty());
}

#[test]
fn failing_engine_does_not_abort_refresh_loop() {
    init_tracing();
    let mut engine = seeded_engine();
    engine.fail_writes = true;
    let config = PetmemConfig::default();

    let record = engine.short_term[0].clone().with_importance(7);
    let outcome = on_record_interacted_logged(&mut engine, &record, &config.promotion);
    assert!(outcome.is_none());

    // The read path is unaffected: the next poll still renders everything.
    let snapshot = refresh(&engine, &config);
    assert_eq!(snapshot.short_term.len(), 2);
    assert_eq!(snapshot.long_term.len(), 1);
}

#[test]
fn cooldown_surfaces_in_snapshot() {
    init_tracing();
    let mut engine = seeded_engine();
    engine.cooldown_remaining = 12.0;

    let snapshot = refresh(&engine, &PetmemConfig::default());
    assert!(snapshot.prediction.is_undetermined());
    assert_eq!(
        snapshot.prediction.label,
        "Undetermined (cooldown active, 12s remaining)"
    );
}
