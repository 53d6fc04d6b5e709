pub mod constants;
pub mod engine;
pub mod exposure;
pub mod impact;
pub mod responses;
pub mod risk;
pub mod sensitivity;
pub mod treatment;

pub use engine::{assess, AssessmentResult, VulnerabilityScores};
pub use exposure::exposure_scores;
pub use impact::{ImpactBreakdown, ImpactScores};
pub use responses::{ComponentResponses, FireResponseScores};
pub use risk::{classify, RiskLevel, RiskRating};
pub use sensitivity::{intrinsic_sensitivity, SensitivityScore};
pub use treatment::{treatment_effects, TreatmentEffect};
