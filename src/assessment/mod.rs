pub mod components;
pub mod input;
pub mod loader;
pub mod template;
pub mod validation;

pub use components::{
    EcosystemComponent, FireComponent, FireRegime, FuelComponent, TargetComponent, TargetSet,
};
pub use input::{
    AssessmentInput, DfcRelation, ExpectedChange, ExposureAnswer, ResponseDirection,
    ResponseMatrix, SensitivityAnswers, SiteInfo, TreatmentPlan, YesNo,
};
pub use loader::load_assessment;
pub use template::write_template;
pub use validation::validate_input;
