use serde::{Deserialize, Serialize};

use super::components::{FireRegime, TargetSet};

/// Expected direction of change in a fire-regime component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExpectedChange {
    Increase,
    Decrease,
    NoChange,
}

/// Where the expected change would leave the component relative to the
/// Desired Future Condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DfcRelation {
    Further,
    Closer,
    Within,
}

/// How an ecosystem or fuel component is expected to move relative to DFC in
/// response to a fire-regime change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResponseDirection {
    Further,
    Closer,
    NoChange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum YesNo {
    Yes,
    No,
}

/// Exposure answers for one fire-regime component. Both fields stay unset
/// until the assessor answers them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExposureAnswer {
    pub expected_change: Option<ExpectedChange>,
    pub relation_to_dfc: Option<DfcRelation>,
}

/// The intrinsic-sensitivity questionnaire: 13 yes/no questions. One fixed
/// question is reverse-scored, four are drawn from per-fire-component
/// departure from DFC, and eight are regular.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SensitivityAnswers {
    /// Reverse-scored: answering "no" counts toward sensitivity.
    pub within_historical_range: Option<YesNo>,

    /// Is each fire-regime component currently departed from DFC?
    pub departed: FireRegime<Option<YesNo>>,

    pub slow_post_fire_recovery: Option<YesNo>,
    pub keystone_species_at_risk: Option<YesNo>,
    pub erosion_prone_soils: Option<YesNo>,
    pub invasive_species_present: Option<YesNo>,
    pub limited_seed_sources: Option<YesNo>,
    pub moisture_stressed: Option<YesNo>,
    pub uncharacteristic_fuel_loads: Option<YesNo>,
    pub fragmented_landscape: Option<YesNo>,
}

impl SensitivityAnswers {
    /// The eight regular (non-reverse, non-departure) questions in order.
    pub fn regular(&self) -> [Option<YesNo>; 8] {
        [
            self.slow_post_fire_recovery,
            self.keystone_species_at_risk,
            self.erosion_prone_soils,
            self.invasive_species_present,
            self.limited_seed_sources,
            self.moisture_stressed,
            self.uncharacteristic_fuel_loads,
            self.fragmented_landscape,
        ]
    }
}

/// The 4x8 response matrix: for each fire-regime component, the expected
/// response of every ecosystem and fuel component.
pub type ResponseMatrix = FireRegime<TargetSet<Option<ResponseDirection>>>;

/// One candidate management treatment, scored 0-5 for its effectiveness on
/// every fire-regime, ecosystem, and fuel component (15 scores).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreatmentPlan {
    pub name: Option<String>,
    pub fire: FireRegime<Option<u8>>,
    pub components: TargetSet<Option<u8>>,
}

impl TreatmentPlan {
    /// True if any effectiveness score has been entered, zero or not.
    pub fn is_answered(&self) -> bool {
        self.fire.iter().any(|(_, v)| v.is_some())
            || self.components.iter().any(|(_, v)| v.is_some())
    }
}

/// Site metadata from the prework section; carried through to the export
/// document and file name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfo {
    pub name: String,
    pub assessor: String,
}

/// A complete, immutable-per-call snapshot of assessor answers. Every field
/// may be unanswered; unanswered inputs contribute neutrally to every score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssessmentInput {
    pub site: SiteInfo,
    pub exposure: FireRegime<ExposureAnswer>,
    pub sensitivity: SensitivityAnswers,
    pub responses: ResponseMatrix,
    /// Up to three independently evaluated treatment scenarios.
    pub treatments: Vec<TreatmentPlan>,
}
