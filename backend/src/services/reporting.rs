//! Reporting service for analysis export
//! Provides the paginated text report and a CSV of the recommendation table

use chrono::{DateTime, Utc};
use shared::report::{render_report, report_file_name, Report};
use shared::AnalysisResult;

use crate::error::{AppError, AppResult};

/// Reporting service
#[derive(Clone)]
pub struct ReportingService {
    lines_per_page: usize,
}

/// CSV export of the recommendation table
#[derive(Debug)]
pub struct CsvExport {
    pub file_name: String,
    pub body: String,
}

impl ReportingService {
    pub fn new(lines_per_page: usize) -> Self {
        Self { lines_per_page }
    }

    /// Paginated text report
    pub fn text_report(&self, result: &AnalysisResult, generated_at: DateTime<Utc>) -> Report {
        let report = render_report(result, generated_at, self.lines_per_page);
        tracing::info!(
            result_id = %result.id,
            pages = report.page_count(),
            "Rendered analysis report"
        );
        report
    }

    /// One row per recommendation, in rank order
    pub fn csv_report(
        &self,
        result: &AnalysisResult,
        generated_at: DateTime<Utc>,
    ) -> AppResult<CsvExport> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        writer
            .write_record([
                "Rank",
                "Crop",
                "Suitability Score",
                "Expected Yield",
                "Fertilizer Advice",
                "Profit Estimate",
                "Rotation Advice",
                "Location",
                "Soil Type",
            ])
            .map_err(|e| AppError::Internal(format!("CSV write failed: {}", e)))?;

        for (i, rec) in result.recommendations.iter().enumerate() {
            writer
                .write_record([
                    (i + 1).to_string(),
                    rec.crop.clone(),
                    rec.suitability_score.to_string(),
                    rec.expected_yield.to_string(),
                    rec.fertilizer_advice.clone(),
                    rec.profit_estimator.clone(),
                    rec.rotation_advice.clone(),
                    result.soil_data.location.clone(),
                    result.soil_data.soil_type.to_string(),
                ])
                .map_err(|e| AppError::Internal(format!("CSV write failed: {}", e)))?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| AppError::Internal(format!("CSV flush failed: {}", e)))?;
        let body = String::from_utf8(bytes)
            .map_err(|e| AppError::Internal(format!("CSV encoding failed: {}", e)))?;

        Ok(CsvExport {
            file_name: report_file_name(generated_at, "csv"),
            body,
        })
    }
}
