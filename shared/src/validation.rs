//! Form validation for the input and contact views
//!
//! These checks mirror the hints shown on the forms (pH range, required
//! location). The recommendation service itself accepts any sample.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::models::{SoilSample, SoilType, WeatherSample};

pub const PH_MIN: f64 = 0.0;
pub const PH_MAX: f64 = 14.0;

/// Soil parameters as submitted from the input form
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SoilInputForm {
    #[validate(range(min = 0.0, max = 14.0, message = "pH must be between 0 and 14"))]
    pub ph: f64,
    #[validate(range(min = 0.0, message = "Nitrogen cannot be negative"))]
    pub nitrogen: f64,
    #[validate(range(min = 0.0, message = "Phosphorus cannot be negative"))]
    pub phosphorus: f64,
    #[validate(range(min = 0.0, message = "Potassium cannot be negative"))]
    pub potassium: f64,
    #[serde(default)]
    pub soil_type: SoilType,
    #[validate(custom = "validate_not_blank")]
    pub location: String,
}

impl Default for SoilInputForm {
    /// Values pre-filled on the input view
    fn default() -> Self {
        Self {
            ph: 6.5,
            nitrogen: 100.0,
            phosphorus: 40.0,
            potassium: 150.0,
            soil_type: SoilType::Loamy,
            location: String::new(),
        }
    }
}

impl SoilInputForm {
    /// Validate the form and produce the sample handed to the recommendation service
    pub fn into_sample(self) -> Result<SoilSample, ValidationErrors> {
        self.validate()?;
        Ok(SoilSample {
            ph: self.ph,
            nitrogen: self.nitrogen,
            phosphorus: self.phosphorus,
            potassium: self.potassium,
            soil_type: self.soil_type,
            location: self.location.trim().to_string(),
        })
    }
}

/// Full analysis submission: soil form plus an optional weather sample
///
/// When `weather` is absent the caller falls back to the session's
/// current weather draft.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    pub soil: SoilInputForm,
    #[serde(default)]
    pub weather: Option<WeatherSample>,
}

/// Contact form submission
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ContactForm {
    #[validate(custom = "validate_not_blank")]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, max = 5000, message = "Message must be 1-5000 characters"))]
    pub message: String,
}

/// Single field failure, flattened for display
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("This field is required".into());
        return Err(err);
    }
    Ok(())
}

/// Flatten validator output into field/message pairs, sorted by field name
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut out: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| FieldError {
                field: field.to_string(),
                message: e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field)),
            })
        })
        .collect();
    out.sort_by(|a, b| a.field.cmp(&b.field));
    out
}

/// Whether a pH value is inside the range offered by the form
pub fn is_valid_ph(ph: f64) -> bool {
    (PH_MIN..=PH_MAX).contains(&ph)
}
