//! Output formatting and persistence for prediction reports.
//!
//! Supports pretty-printing, JSON serialization, and CSV append.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use crate::simulator::session::PredictionReport;
use crate::simulator::tier::ComplianceTier;
use csv::WriterBuilder;
use std::fs::OpenOptions;
use std::path::Path;

/// One CSV row per simulated prediction.
#[derive(Debug, Serialize)]
pub struct PredictionRecord {
    pub timestamp: DateTime<Utc>,
    pub subject_id: String,
    pub subject_code: String,
    pub overrides: usize,
    pub predicted_percentage: Option<f64>,
    pub tier: Option<ComplianceTier>,
}

impl PredictionRecord {
    pub fn from_report(report: &PredictionReport) -> Self {
        PredictionRecord {
            timestamp: Utc::now(),
            subject_id: report.subject_id.clone(),
            subject_code: report.subject_code.clone(),
            overrides: report.overrides.len(),
            predicted_percentage: report.predicted_percentage,
            tier: report.tier,
        }
    }
}

/// Logs a report using Rust's debug pretty-print format.
pub fn print_pretty(report: &PredictionReport) {
    debug!("{:#?}", report);
}

/// Logs a report as pretty-printed JSON.
pub fn print_json(report: &PredictionReport) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// Appends a [`PredictionRecord`] as a row to a CSV file.
///
/// Creates the file with headers if it does not already exist.
pub fn append_record(path: &str, record: &PredictionRecord) -> Result<()> {
    let file_exists = Path::new(path).exists();
    debug!(path, file_exists, "Appending CSV record");

    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists) // IMPORTANT when appending
        .from_writer(file);

    writer.serialize(record)?;
    writer.flush()?;

    Ok(())
}
