use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::assessment::SiteInfo;
use crate::scoring::AssessmentResult;

/// Rubric version implemented by this crate.
pub const FIRECLIME_VERSION: &str = "3.1";

pub const METHODOLOGY: &str = "Southwest FireCLIME Vulnerability Assessment";

/// The exported results document. Field names and order are part of the
/// interchange format and must not change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub timestamp: DateTime<Utc>,
    pub site_name: String,
    pub assessor: String,
    pub fireclime_version: String,
    pub results: AssessmentResult,
    pub methodology: String,
    pub overall_vulnerability: f64,
    pub risk_level: String,
}

/// Assemble the export document from a computed result.
pub fn build_export(
    site: &SiteInfo,
    result: AssessmentResult,
    timestamp: DateTime<Utc>,
) -> ExportDocument {
    let overall_vulnerability = result.vulnerability.final_vulnerability;
    let risk_level = result.risk.label.clone();
    ExportDocument {
        timestamp,
        site_name: site.name.clone(),
        assessor: site.assessor.clone(),
        fireclime_version: FIRECLIME_VERSION.to_string(),
        results: result,
        methodology: METHODOLOGY.to_string(),
        overall_vulnerability,
        risk_level,
    }
}

/// Build the export file name: `fireclime-va-results-<site>-<date>.json`,
/// with whitespace runs in the site name collapsed to single dashes.
pub fn export_file_name(site_name: &str, timestamp: DateTime<Utc>) -> String {
    let dashed = site_name.split_whitespace().collect::<Vec<_>>().join("-");
    format!(
        "fireclime-va-results-{}-{}.json",
        dashed,
        timestamp.format("%Y-%m-%d")
    )
}

/// Resolve the output path inside `out_dir`.
pub fn export_path(out_dir: &Path, document: &ExportDocument) -> PathBuf {
    out_dir.join(export_file_name(&document.site_name, document.timestamp))
}

/// Write the document as pretty JSON atomically: a failed write leaves any
/// existing file untouched.
pub fn save_export(path: &Path, document: &ExportDocument) -> Result<()> {
    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, document)
        .context("Failed to serialize assessment results")?;

    file.commit()
        .with_context(|| format!("Failed to save results to {}", path.display()))?;

    Ok(())
}
