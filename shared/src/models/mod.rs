//! Domain models for the AgroSense crop advisor

mod analysis;
mod recommendation;
mod soil;
mod weather;

pub use analysis::*;
pub use recommendation::*;
pub use soil::*;
pub use weather::*;
