use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::input::AssessmentInput;

/// Load an assessment snapshot from a YAML file.
///
/// # Errors
///
/// Returns an error if:
/// - The file does not exist
/// - The file cannot be read
/// - The YAML cannot be parsed
pub fn load_assessment(path: &Path) -> Result<AssessmentInput> {
    if !path.exists() {
        anyhow::bail!(
            "Assessment file not found at {}. Run `fireclime-va init` to create a starter file.",
            path.display()
        );
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read assessment file at {}", path.display()))?;

    let input: AssessmentInput = serde_saphyr::from_str(&content).with_context(|| {
        format!(
            "Failed to parse assessment: invalid YAML in {}",
            path.display()
        )
    })?;

    Ok(input)
}
