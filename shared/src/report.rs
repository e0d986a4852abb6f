//! Printable crop analysis report
//!
//! Lays out the weather, soil and recommendation tables of an
//! [`AnalysisResult`] as fixed-width text, split into pages that each carry
//! the branding footer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::AnalysisResult;

pub const REPORT_TITLE: &str = "AgroSense Crop Analysis Report";
pub const REPORT_FOOTER: &str = "Powered by AgroSense AI";

/// Lines per page used when no override is configured
pub const DEFAULT_LINES_PER_PAGE: usize = 60;

/// Smallest page that still fits a table header, a row and the footer
const MIN_LINES_PER_PAGE: usize = 12;

/// Advice cells wrap at this width
const ADVICE_WIDTH: usize = 48;

/// Form feed between pages
const PAGE_BREAK: char = '\u{0C}';

/// Rendered report, ready for download
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub file_name: String,
    pub pages: Vec<String>,
}

impl Report {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Whole document with pages separated by form feeds
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for (i, page) in self.pages.iter().enumerate() {
            if i > 0 {
                out.push(PAGE_BREAK);
            }
            out.push_str(page);
        }
        out
    }
}

/// Download file name for a report generated at `generated_at`
pub fn report_file_name(generated_at: DateTime<Utc>, extension: &str) -> String {
    format!(
        "AgroSense_Report_{}.{}",
        generated_at.timestamp_millis(),
        extension
    )
}

/// Render the report for a complete analysis result
pub fn render_report(
    result: &AnalysisResult,
    generated_at: DateTime<Utc>,
    lines_per_page: usize,
) -> Report {
    let soil = &result.soil_data;
    let weather = &result.weather_data;

    let mut body = vec![
        REPORT_TITLE.to_string(),
        "=".repeat(REPORT_TITLE.len()),
        String::new(),
        format!("Generated on: {}", generated_at.format("%Y-%m-%d")),
        format!("Location: {}", soil.location),
        String::new(),
        "Weather Conditions".to_string(),
    ];

    body.extend(render_table(
        &["Temperature", "Humidity", "Rainfall", "Condition"],
        &[vec![
            format!("{}°C", weather.temperature),
            format!("{}%", weather.humidity),
            format!("{}mm", weather.rainfall),
            weather.description.clone(),
        ]],
        &[],
    ));

    body.push(String::new());
    body.push("Soil Parameters".to_string());
    body.extend(render_table(
        &["Parameter", "Value", "Type"],
        &[
            vec!["Soil Type".into(), soil.soil_type.to_string(), "-".into()],
            vec!["pH Level".into(), soil.ph.to_string(), "-".into()],
            vec!["Nitrogen (N)".into(), soil.nitrogen.to_string(), "mg/kg".into()],
            vec!["Phosphorus (P)".into(), soil.phosphorus.to_string(), "mg/kg".into()],
            vec!["Potassium (K)".into(), soil.potassium.to_string(), "mg/kg".into()],
        ],
        &[],
    ));

    body.push(String::new());
    body.push("Top Recommendations".to_string());
    let rows: Vec<Vec<String>> = result
        .recommendations
        .iter()
        .map(|rec| {
            vec![
                rec.crop.clone(),
                format!("{}%", rec.suitability_score),
                rec.expected_yield.to_string(),
                rec.fertilizer_advice.clone(),
            ]
        })
        .collect();
    body.extend(render_table(
        &["Crop", "Score", "Yield", "Advice"],
        &rows,
        &[(3, ADVICE_WIDTH)],
    ));

    if !result.analysis_summary.is_empty() {
        body.push(String::new());
        body.push("Summary".to_string());
        body.extend(wrap(&result.analysis_summary, 72));
    }

    Report {
        file_name: report_file_name(generated_at, "txt"),
        pages: paginate(body, lines_per_page),
    }
}

/// Split body lines into pages, each ending with the footer
fn paginate(body: Vec<String>, lines_per_page: usize) -> Vec<String> {
    let lines_per_page = lines_per_page.max(MIN_LINES_PER_PAGE);
    // blank separator + footer
    let content_lines = lines_per_page - 2;

    let chunks: Vec<&[String]> = body.chunks(content_lines).collect();
    let total = chunks.len().max(1);

    let mut pages = Vec::with_capacity(total);
    for (i, chunk) in chunks.iter().enumerate() {
        let mut page = chunk.join("\n");
        page.push_str("\n\n");
        page.push_str(&format!("{}    Page {} of {}\n", REPORT_FOOTER, i + 1, total));
        pages.push(page);
    }
    if pages.is_empty() {
        pages.push(format!("\n{}    Page 1 of 1\n", REPORT_FOOTER));
    }
    pages
}

/// Render a bordered table. `wrap_columns` caps the width of specific columns.
fn render_table(headers: &[&str], rows: &[Vec<String>], wrap_columns: &[(usize, usize)]) -> Vec<String> {
    let cap = |col: usize| {
        wrap_columns
            .iter()
            .find(|(c, _)| *c == col)
            .map(|(_, w)| *w)
    };

    // Each row becomes a list of wrapped cells
    let wrapped: Vec<Vec<Vec<String>>> = rows
        .iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .map(|(col, cell)| match cap(col) {
                    Some(width) => wrap(cell, width),
                    None => vec![cell.clone()],
                })
                .collect()
        })
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &wrapped {
        for (col, lines) in row.iter().enumerate() {
            for line in lines {
                if let Some(w) = widths.get_mut(col) {
                    *w = (*w).max(line.chars().count());
                }
            }
        }
    }

    let border = format!(
        "+{}+",
        widths
            .iter()
            .map(|w| "-".repeat(w + 2))
            .collect::<Vec<_>>()
            .join("+")
    );
    let format_line = |cells: Vec<&str>| {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, w)| format!(" {}{} ", cell, " ".repeat(w - cell.chars().count())))
            .collect();
        format!("|{}|", padded.join("|"))
    };

    let mut out = vec![border.clone(), format_line(headers.to_vec()), border.clone()];
    for row in &wrapped {
        let height = row.iter().map(Vec::len).max().unwrap_or(1);
        for i in 0..height {
            let cells: Vec<&str> = (0..widths.len())
                .map(|col| {
                    row.get(col)
                        .and_then(|lines| lines.get(i))
                        .map(String::as_str)
                        .unwrap_or("")
                })
                .collect();
            out.push(format_line(cells));
        }
    }
    out.push(border);
    out
}

/// Greedy word wrap; words longer than `width` are split
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word: String = word.to_string();
        while word.chars().count() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let head: String = word.chars().take(width).collect();
            word = word.chars().skip(width).collect();
            lines.push(head);
        }
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}
