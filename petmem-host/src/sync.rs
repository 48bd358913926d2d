//! Serialized engine access for multi-threaded hosts.
//!
//! The interaction side effect must not run concurrently for the same
//! record. A single-threaded UI dispatch loop satisfies that trivially; a
//! multi-threaded host routes all engine access through [`SharedEngine`],
//! which serializes it behind one lock.

use std::sync::Arc;

use parking_lot::Mutex;

use petmem_core::config::{PetmemConfig, PromotionConfig};
use petmem_core::error::Result;
use petmem_core::types::MemoryRecord;

use crate::engine::PetEngine;
use crate::interact::{self, InteractionOutcome};
use crate::refresh::{self, RefreshSnapshot};

/// Clone-able handle to an engine shared across threads.
pub struct SharedEngine<E> {
    inner: Arc<Mutex<E>>,
}

impl<E> Clone for SharedEngine<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<E: PetEngine> SharedEngine<E> {
    /// Wrap an engine for shared access.
    #[must_use]
    pub fn new(engine: E) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    /// Run a closure with exclusive engine access.
    pub fn with<R>(&self, f: impl FnOnce(&mut E) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut guard)
    }

    /// Build a display snapshot under the lock.
    #[must_use]
    pub fn refresh(&self, config: &PetmemConfig) -> RefreshSnapshot {
        self.with(|engine| refresh::refresh(engine, config))
    }

    /// Handle a record interaction under the lock.
    ///
    /// # Errors
    /// Propagates engine write failures, like
    /// [`interact::on_record_interacted`].
    pub fn interact(
        &self,
        record: &MemoryRecord,
        config: &PromotionConfig,
    ) -> Result<InteractionOutcome> {
        self.with(|engine| interact::on_record_interacted(engine, record, config))
    }
}
