//! Soil sample models

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::types::ModelError;

/// User-entered soil parameters for one analysis request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SoilSample {
    /// Soil pH (0-14)
    pub ph: f64,
    /// Nitrogen concentration in mg/kg
    pub nitrogen: f64,
    /// Phosphorus concentration in mg/kg
    pub phosphorus: f64,
    /// Potassium concentration in mg/kg
    pub potassium: f64,
    pub soil_type: SoilType,
    /// Farm location or region label
    pub location: String,
}

/// Soil texture classes offered on the input form
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum SoilType {
    Clay,
    Sandy,
    #[default]
    Loamy,
    Red,
    Black,
}

impl SoilType {
    pub const ALL: [SoilType; 5] = [
        SoilType::Clay,
        SoilType::Sandy,
        SoilType::Loamy,
        SoilType::Red,
        SoilType::Black,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SoilType::Clay => "Clay",
            SoilType::Sandy => "Sandy",
            SoilType::Loamy => "Loamy",
            SoilType::Red => "Red",
            SoilType::Black => "Black",
        }
    }
}

impl std::fmt::Display for SoilType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SoilType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SoilType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ModelError::UnknownSoilType(s.to_string()))
    }
}
