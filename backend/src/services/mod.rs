//! Business logic services for the AgroSense server

pub mod analysis;
pub mod contact;
pub mod dashboard;
pub mod recommendation;
pub mod reporting;
pub mod session;
pub mod weather;

pub use analysis::AnalysisService;
pub use contact::ContactService;
pub use recommendation::RecommendationService;
pub use reporting::ReportingService;
pub use session::{AnalysisPhase, SessionContext};
pub use weather::WeatherService;
