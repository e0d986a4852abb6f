//! Shared types and models for the AgroSense crop advisor
//!
//! This crate contains the pieces used by both the backend and the browser
//! (via WASM): the domain model, weather simulation, prompt rendering,
//! form validation and report layout.

pub mod models;
pub mod prompt;
pub mod report;
pub mod simulation;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
