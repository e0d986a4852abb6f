//! HTTP handlers for the AgroSense views

pub mod analysis;
pub mod contact;
pub mod dashboard;
pub mod health;
pub mod landing;

pub use analysis::*;
pub use contact::*;
pub use dashboard::*;
pub use health::*;
pub use landing::*;
