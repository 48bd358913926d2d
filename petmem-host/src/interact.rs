//! The single side-effecting entry point: record interaction.
//!
//! When a user clicks a displayed record, the host must (1) increment that
//! record's importance by exactly 1 in the external store, then (2) evaluate
//! the promotion policy against the incremented record, and if it passes,
//! invoke the external promote-to-long-term operation exactly once. No other
//! code path increments importance.

use tracing::warn;

use petmem_core::config::PromotionConfig;
use petmem_core::error::Result;
use petmem_core::salience::should_promote;
use petmem_core::types::MemoryRecord;

use crate::engine::PetEngine;

/// What an interaction did to the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteractionOutcome {
    /// Importance after the increment.
    pub new_importance: i64,
    /// Whether the record was promoted to long-term storage.
    pub promoted: bool,
}

/// Handle a user interaction with a displayed record.
///
/// Write failures propagate to the caller — this function does not suppress
/// them. Display-refresh callers that want the log-and-continue policy use
/// [`on_record_interacted_logged`] instead.
///
/// # Errors
/// Returns the engine error if the importance update or the transfer fails.
/// A failed importance update leaves the record unpromoted; a failed
/// transfer leaves the increment in place.
pub fn on_record_interacted<E: PetEngine>(
    engine: &mut E,
    record: &MemoryRecord,
    config: &PromotionConfig,
) -> Result<InteractionOutcome> {
    engine.update_memory_importance(&record.category, &record.key, 1)?;

    // Promotion is evaluated against the incremented record, not the stale
    // snapshot the user clicked on.
    let mut updated = record.clone();
    updated.importance += 1;

    let promoted = should_promote(&updated, config);
    if promoted {
        engine.transfer_to_long_term(&record.category, &record.key)?;
    }

    Ok(InteractionOutcome {
        new_importance: updated.importance,
        promoted,
    })
}

/// Log-and-continue wrapper for the display-refresh path.
///
/// A failed write must not abort rendering the rest of the list, so the
/// error is logged at `warn` level and swallowed. Returns `None` when the
/// interaction failed.
pub fn on_record_interacted_logged<E: PetEngine>(
    engine: &mut E,
    record: &MemoryRecord,
    config: &PromotionConfig,
) -> Option<InteractionOutcome> {
    match on_record_interacted(engine, record, config) {
        Ok(outcome) => Some(outcome),
        Err(error) => {
            warn!(
                category = %record.category,
                key = %record.key,
                %error,
                "record interaction failed; continuing refresh"
            );
            None
        }
    }
}
