//! Landing view

use axum::Json;
use serde::Serialize;
use shared::View;

#[derive(Serialize)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
}

#[derive(Serialize)]
pub struct LandingResponse {
    pub name: &'static str,
    pub tagline: &'static str,
    pub features: Vec<Feature>,
    pub navigation: Vec<NavLink>,
}

pub async fn landing() -> Json<LandingResponse> {
    Json(LandingResponse {
        name: "AgroSense",
        tagline: "AI-powered crop recommendations from your soil and weather data",
        features: vec![
            Feature {
                title: "Weather Integration",
                description: "Weather conditions are factored into every recommendation.",
            },
            Feature {
                title: "Soil Health Analysis",
                description: "Feedback on NPK levels and pH balance to optimize fertilizer usage.",
            },
            Feature {
                title: "Yield Prediction",
                description: "Expected yield categories and market suitability for each crop.",
            },
        ],
        navigation: [
            ("Home", View::Landing),
            ("Analyze Soil", View::Input),
            ("Dashboard", View::Dashboard),
            ("Contact", View::Contact),
        ]
        .into_iter()
        .map(|(label, view)| NavLink {
            label,
            path: view.path(),
        })
        .collect(),
    })
}
