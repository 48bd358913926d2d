//! The external pet-engine contract.
//!
//! The simulator's behavioral engine (memory manager, neurogenesis
//! managers) lives outside this workspace. Hosts adapt it once, at this
//! boundary, instead of probing attributes ad hoc at every display site.
//! Everything the decision layer consumes comes through this trait.

use petmem_core::error::Result;
use petmem_core::types::{
    MemoryCategory, MemoryRecord, NeurogenesisCounters, NeurogenesisThresholds, NeuronType,
};

/// Narrow interface over the external engine.
///
/// Read methods are snapshots: they must return the engine's current state
/// without mutating it. The two write methods mutate the external memory
/// store; callers on a display-refresh path are expected to log failures
/// and continue rather than abort the refresh (see [`crate::interact`]).
pub trait PetEngine {
    /// Current contents of the ephemeral (short-term) memory pool.
    fn short_term_memories(&self) -> Vec<MemoryRecord>;

    /// Current contents of the durable (long-term) memory pool.
    fn long_term_memories(&self) -> Vec<MemoryRecord>;

    /// Adjust a record's importance by `delta` in the external store.
    ///
    /// # Errors
    /// Returns an engine error if the record cannot be mutated.
    fn update_memory_importance(
        &mut self,
        category: &MemoryCategory,
        key: &str,
        delta: i64,
    ) -> Result<()>;

    /// Copy a short-term record into long-term storage.
    ///
    /// Must be invoked only after a positive promotion decision, and at
    /// most once per interaction event.
    ///
    /// # Errors
    /// Returns an engine error if the transfer fails.
    fn transfer_to_long_term(&mut self, category: &MemoryCategory, key: &str) -> Result<()>;

    /// Current values of the neurogenesis accumulators. Counters the engine
    /// has not started tracking are reported as 0.
    fn neurogenesis_counters(&self) -> NeurogenesisCounters;

    /// Configured neurogenesis thresholds. Unconfigured thresholds are
    /// `None`, never 0.
    fn neurogenesis_thresholds(&self) -> NeurogenesisThresholds;

    /// Seconds of neurogenesis cooldown remaining; 0 when inactive.
    fn neurogenesis_cooldown_remaining(&self) -> f64;

    /// Whether neurogenesis is enabled in the engine configuration.
    fn neurogenesis_enabled(&self) -> bool;

    /// The type of the most recently created neuron, if any.
    fn last_created_neuron_type(&self) -> Option<NeuronType>;
}
