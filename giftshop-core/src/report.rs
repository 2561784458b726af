use crate::rules::RuleKind;
use crate::types::*;
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// The schema version stamped on every JSON report.
/// Bump this when the output shape changes.
pub const SCHEMA_VERSION: &str = "1.0.0";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown output format '{0}', expected 'text' or 'json'")]
pub struct UnknownFormat(pub String);

impl FromStr for OutputFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}

/// The serialization-ready report. Carries a schema version so consumers can
/// detect shape changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportDocument {
    pub schema_version: String,
    pub generated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub report: ScanReport,
}

impl ScanReport {
    /// The two-line puzzle answer, one line per rule.
    pub fn to_text(&self) -> String {
        RuleKind::ALL
            .iter()
            .map(|rule| {
                format!(
                    "Part {}: sum of invalid IDs is {}\n",
                    rule.part(),
                    self.totals.get(*rule)
                )
            })
            .collect()
    }

    pub fn to_document(&self) -> ReportDocument {
        ReportDocument {
            schema_version: SCHEMA_VERSION.to_string(),
            generated_at: Utc::now(),
            report: self.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_document())?)
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.to_text()),
            OutputFormat::Json => self.to_json(),
        }
    }
}
