//! In-memory engine implementation for tests and host prototyping.

use petmem_core::error::{PetmemError, Result};
use petmem_core::types::{
    MemoryCategory, MemoryRecord, NeurogenesisCounters, NeurogenesisThresholds, NeuronType,
};

use crate::engine::PetEngine;

/// A [`PetEngine`] backed by plain vectors, with write-failure injection.
///
/// Records every write call so tests can assert the exactly-once
/// interaction contract.
#[derive(Debug, Clone)]
pub struct MockEngine {
    /// Ephemeral memory pool.
    pub short_term: Vec<MemoryRecord>,
    /// Durable memory pool.
    pub long_term: Vec<MemoryRecord>,
    /// Neurogenesis accumulators.
    pub counters: NeurogenesisCounters,
    /// Neurogenesis thresholds.
    pub thresholds: NeurogenesisThresholds,
    /// Seconds of cooldown remaining.
    pub cooldown_remaining: f64,
    /// Whether neurogenesis is enabled.
    pub enabled: bool,
    /// Last-created neuron type.
    pub last_created: Option<NeuronType>,
    /// When set, every write call fails.
    pub fail_writes: bool,
    /// Log of `(category, key, delta)` importance updates.
    pub importance_updates: Vec<(MemoryCategory, String, i64)>,
    /// Log of `(category, key)` long-term transfers.
    pub transfers: Vec<(MemoryCategory, String)>,
}

impl Default for MockEngine {
    fn default() -> Self {
        Self {
            short_term: Vec::new(),
            long_term: Vec::new(),
            counters: NeurogenesisCounters::default(),
            thresholds: NeurogenesisThresholds::new(3.0, 5.0, 5.0),
            cooldown_remaining: 0.0,
            enabled: true,
            last_created: None,
            fail_writes: false,
            importance_updates: Vec::new(),
            transfers: Vec::new(),
        }
    }
}

impl MockEngine {
    fn engine_error(operation: &str, category: &MemoryCategory, key: &str) -> PetmemError {
        PetmemError::Engine {
            operation: operation.to_string(),
            category: category.tag().to_string(),
            key: key.to_string(),
            message: "injected failure".to_string(),
        }
    }
}

impl PetEngine for MockEngine {
    fn short_term_memories(&self) -> Vec<MemoryRecord> {
        self.short_term.clone()
    }

    fn long_term_memories(&self) -> Vec<MemoryRecord> {
        self.long_term.clone()
    }

    fn update_memory_importance(
        &mut self,
        category: &MemoryCategory,
        key: &str,
        delta: i64,
    ) -> Result<()> {
        if self.fail_writes {
            return Err(Self::engine_error("update_memory_importance", category, key));
        }
        self.importance_updates
            .push((category.clone(), key.to_string(), delta));
        for record in &mut self.short_term {
            if record.category == *category && record.key == key {
                record.importance += delta;
            }
        }
        Ok(())
    }

    fn transfer_to_long_term(&mut self, category: &MemoryCategory, key: &str) -> Result<()> {
        if self.fail_writes {
            return Err(Self::engine_error("transfer_to_long_term", category, key));
        }
        self.transfers.push((category.clone(), key.to_string()));
        if let Some(record) = self
            .short_term
            .iter()
            .find(|r| r.category == *category && r.key == key)
        {
            self.long_term.push(record.clone());
        }
        Ok(())
    }

    fn neurogenesis_counters(&self) -> NeurogenesisCounters {
        self.counters
    }

    fn neurogenesis_thresholds(&self) -> NeurogenesisThresholds {
        self.thresholds
    }

    fn neurogenesis_cooldown_remaining(&self) -> f64 {
        self.cooldown_remaining
    }

    fn neurogenesis_enabled(&self) -> bool {
        self.enabled
    }

    fn last_created_neuron_type(&self) -> Option<NeuronType> {
        self.last_created
    }
}
