//! Standardization factors from the FireCLIME rubric calibration workbook.
//!
//! These are fixed configuration constants. They are close to, but not the
//! same as, what recomputing 10/component-count would give; the rubric's
//! published values are authoritative and must not be re-derived.

/// Scales a fire component's 5-entry ecosystem response sum to -10..+10.
pub const ECOSYSTEM_FACTOR: f64 = 0.5;

/// Scales a fire component's 3-entry fuel response sum to -10..+10.
pub const FUEL_FACTOR: f64 = 0.8334;

/// Scales a fire component's combined 8-entry response sum to -10..+10.
pub const FIRE_TOTAL_FACTOR: f64 = 0.31223;

/// Scales an individual ecosystem/fuel component's 4-row total to -10..+10.
pub const COMPONENT_FACTOR: f64 = 2.5;

/// Scales a treatment plan's ecosystem+fuel effectiveness sum for the
/// vulnerability adjustment.
pub const TREATMENT_FACTOR: f64 = 0.25;

/// Scales impact plus intrinsic sensitivity into the final vulnerability.
pub const VULNERABILITY_FACTOR: f64 = 0.22;
