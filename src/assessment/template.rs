use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Starter assessment file written by `fireclime-va init`. Every field is
/// optional; blank answers score neutrally.
pub const TEMPLATE: &str = r#"# FireCLIME Vulnerability Assessment
#
# Fill in what you know; anything left blank contributes neutrally.
# Directions are relative to the Desired Future Condition (DFC).

site:
  name: ""
  assessor: ""

# Expected climate-driven change per fire-regime component.
#   expected_change: increase | decrease | no-change
#   relation_to_dfc: further | closer | within
exposure:
  size: {}
  frequency: {}
  severity: {}
  area: {}

# Intrinsic sensitivity questionnaire (yes / no).
sensitivity:
  # Reverse-scored: "no" indicates sensitivity.
  within_historical_range:
  # Is each fire-regime component currently departed from DFC?
  departed:
    size:
    frequency:
    severity:
    area:
  slow_post_fire_recovery:
  keystone_species_at_risk:
  erosion_prone_soils:
  invasive_species_present:
  limited_seed_sources:
  moisture_stressed:
  uncharacteristic_fuel_loads:
  fragmented_landscape:

# Response matrix: for each fire-regime component, how each ecosystem and
# fuel component is expected to respond (further | closer | no-change).
responses:
  size: {}
  frequency: {}
  severity: {}
  area: {}

# Up to three treatment scenarios. Effectiveness scores are 0-5 per
# component; fire-regime scores count toward the raw total only.
treatments: []
"#;

/// Write the starter assessment file. Refuses to overwrite an existing file.
pub fn write_template(path: &Path) -> Result<()> {
    if path.exists() {
        anyhow::bail!(
            "Refusing to overwrite existing file at {}",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create directory at {}", parent.display())
            })?;
        }
    }

    fs::write(path, TEMPLATE)
        .with_context(|| format!("Failed to write template to {}", path.display()))?;

    Ok(())
}
