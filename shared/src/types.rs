//! Common types used across the application

use thiserror::Error;

/// Errors raised when parsing domain values from text
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("Unknown soil type: {0}")]
    UnknownSoilType(String),

    #[error("Unknown yield classification: {0}")]
    UnknownYield(String),
}

/// Application views, in page-flow order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Landing,
    Input,
    Dashboard,
    Contact,
}

impl View {
    /// Client-side route path of the view
    pub fn path(&self) -> &'static str {
        match self {
            View::Landing => "/",
            View::Input => "/input",
            View::Dashboard => "/dashboard",
            View::Contact => "/contact",
        }
    }
}
