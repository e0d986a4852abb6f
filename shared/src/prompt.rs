//! Prompt construction for crop recommendation requests
//!
//! Rendering is pure: the same soil and weather samples always produce the
//! same instruction text, and every input field appears in it.

use crate::models::{SoilSample, WeatherSample};

/// Number of ranked recommendations requested from the model
pub const RECOMMENDATION_COUNT: usize = 5;

/// Role instruction sent alongside every prompt
pub const SYSTEM_INSTRUCTION: &str = "Act as an expert agronomist and AI farming assistant.";

/// Render the natural-language instruction for a soil/weather pair
pub fn build_prompt(soil: &SoilSample, weather: &WeatherSample) -> String {
    format!(
        concat!(
            "Analyze the following soil and weather conditions to suggest the best crops to grow.\n",
            "\n",
            "Soil Parameters:\n",
            "- pH: {ph}\n",
            "- Nitrogen (N): {n} mg/kg\n",
            "- Phosphorus (P): {p} mg/kg\n",
            "- Potassium (K): {k} mg/kg\n",
            "- Soil Type: {soil_type}\n",
            "- Location/Region Context: {location}\n",
            "\n",
            "Weather Conditions:\n",
            "- Temperature: {temp}°C\n",
            "- Humidity: {humidity}%\n",
            "- Rainfall Prediction: {rain}mm\n",
            "- Condition: {condition}\n",
            "- Source: {source}\n",
            "\n",
            "Based on this data, provide top {count} crop recommendations.\n",
            "Be realistic about yield and fertilizer needs.\n",
        ),
        ph = soil.ph,
        n = soil.nitrogen,
        p = soil.phosphorus,
        k = soil.potassium,
        soil_type = soil.soil_type,
        location = soil.location,
        temp = weather.temperature,
        humidity = weather.humidity,
        rain = weather.rainfall,
        condition = weather.description,
        source = if weather.is_simulated { "simulated" } else { "measured" },
        count = RECOMMENDATION_COUNT,
    )
}
