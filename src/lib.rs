//! Transync - per-locale translation catalogs
//!
//! Transync keeps one translation collection per locale in an object store and
//! reconciles it with the default translations shipped by the application and its
//! vendor packages. Manual edits survive reconciliation; new default keys are picked up.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and wiring of the manager
//! - `core`: Data model, harvesting, merging, persistence, CSV interchange and lookup
//! - `error`: Error kinds reported by the core
//! - `logging`: Tracing subscriber setup

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;

pub use error::{Error, Result};
