//! # petmem-host — host integration for the petmem decision layer
//!
//! This crate sits between a display host (the tab/dialog layer of the pet
//! simulator) and the external behavioral engine. The host never talks to
//! the engine directly for memory display:
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 Display host                  │
//! │   poll timer ──▶ refresh() ──▶ RefreshSnapshot│
//! │   user click ──▶ on_record_interacted()       │
//! └───────────────────────┬──────────────────────┘
//!                         │  PetEngine trait
//!                         ▼
//! ┌──────────────────────────────────────────────┐
//! │        External engine (memory manager,       │
//! │        neurogenesis managers — out of scope)  │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `engine` — the narrow engine contract ([`engine::PetEngine`])
//! - `refresh` — polling path building immutable display snapshots
//! - `interact` — the single side-effecting entry point (importance bump,
//!   at-most-once promotion), with a log-and-continue wrapper
//! - `sync` — lock-backed engine handle for multi-threaded hosts
//! - `testing` — in-memory engine for tests and prototyping

#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod engine;
pub mod interact;
pub mod refresh;
pub mod sync;
pub mod testing;

pub use engine::PetEngine;
pub use interact::{InteractionOutcome, on_record_interacted, on_record_interacted_logged};
pub use refresh::{MemoryRow, RefreshSnapshot, refresh};
pub use sync::SharedEngine;
