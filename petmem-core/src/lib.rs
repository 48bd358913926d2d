//! # petmem Core Library
//!
//! Host-agnostic decision layer for a digital-pet simulator's memory
//! inspection views. Two small, pure decision modules:
//!
//! - **Memory salience** ([`salience`]) — which ephemeral memory records are
//!   worth surfacing, what valence color they render with, and which
//!   qualify for promotion from short-term to long-term storage.
//! - **Neurogenesis prediction** ([`predictor`]) — given the engine's
//!   novelty/stress/reward accumulators and thresholds, a best-effort
//!   forecast of the next neuron type, with repeat-avoidance tie-breaking.
//!
//! Both modules are synchronous, stateless, and total over malformed input:
//! a single bad record off the engine never breaks a display refresh, and
//! unavailable thresholds surface as an explicit "unavailable" result
//! instead of a silently defaulted number.

#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod predictor;
pub mod salience;
pub mod types;

pub use config::PetmemConfig;
pub use error::PetmemError;
pub use types::*;
