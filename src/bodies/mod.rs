//! Body registry module
//!
//! This module loads the planetary system description and validates it into
//! the read-only [`BodyRegistry`] resource that drives the simulation.

pub mod config;
pub mod registry;

pub use config::{SystemSource, load_system};
pub use registry::{Body, BodyRegistry};
