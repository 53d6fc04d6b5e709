use serde::{Deserialize, Serialize};

/// The five ordered vulnerability bands. Thresholds are closed above:
/// a score of exactly 7 is Very High, exactly 4 is High, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiskLevel {
    VeryHigh,
    High,
    Moderate,
    Low,
    VeryLow,
}

impl RiskLevel {
    /// Classify a final vulnerability score, first matching band wins.
    pub fn classify(vulnerability: f64) -> RiskLevel {
        if vulnerability >= 7.0 {
            RiskLevel::VeryHigh
        } else if vulnerability >= 4.0 {
            RiskLevel::High
        } else if vulnerability >= 1.0 {
            RiskLevel::Moderate
        } else if vulnerability >= -2.0 {
            RiskLevel::Low
        } else {
            RiskLevel::VeryLow
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::VeryHigh => "Very High Vulnerability",
            RiskLevel::High => "High Vulnerability",
            RiskLevel::Moderate => "Moderate Vulnerability",
            RiskLevel::Low => "Low Vulnerability",
            RiskLevel::VeryLow => "Very Low Vulnerability",
        }
    }

    pub fn recommendation(&self) -> &'static str {
        match self {
            RiskLevel::VeryHigh => {
                "Very high vulnerability detected. Immediate and intensive management \
                 interventions recommended. Consider comprehensive adaptive management \
                 strategies and frequent monitoring."
            }
            RiskLevel::High => {
                "High vulnerability requires proactive management. Implement targeted \
                 treatments addressing key vulnerability drivers. Focus on components \
                 with highest impact scores."
            }
            RiskLevel::Moderate => {
                "Moderate vulnerability suggests monitoring and selective management. \
                 Consider preventive treatments and continue regular assessment. Good \
                 opportunity for adaptive management."
            }
            RiskLevel::Low => {
                "Low vulnerability indicates good resilience. Maintain current management \
                 practices and continue monitoring. System appears well-adapted to \
                 fire-climate interactions."
            }
            RiskLevel::VeryLow => {
                "Very low vulnerability indicates excellent resilience. System is \
                 well-adapted to fire-climate interactions. Continue current management \
                 and monitoring protocols."
            }
        }
    }

    pub fn findings(&self) -> &'static [&'static str] {
        match self {
            RiskLevel::VeryHigh => &[
                "Very high vulnerability to fire-climate interactions",
                "Multiple risk factors exceed thresholds",
                "Priority candidate for adaptive management",
            ],
            RiskLevel::High => &[
                "High vulnerability requires management attention",
                "Several components show concerning response patterns",
                "Good candidate for preventive treatments",
            ],
            RiskLevel::Moderate => &[
                "Moderate vulnerability with manageable risk levels",
                "Some components show sensitivity to fire-climate interactions",
                "Continue monitoring and consider preventive measures",
            ],
            RiskLevel::Low => &[
                "Low vulnerability - system shows resilience",
                "Most components adapt well to expected changes",
                "Maintain existing management regime",
            ],
            RiskLevel::VeryLow => &[
                "Excellent resilience to fire-climate interactions",
                "System well-adapted to expected conditions",
                "Continue successful management practices",
            ],
        }
    }
}

/// Qualitative reading of a final vulnerability score, ready for display and
/// export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskRating {
    pub level: RiskLevel,
    pub label: String,
    pub recommendation: String,
    pub findings: Vec<String>,
}

pub fn classify(vulnerability: f64) -> RiskRating {
    let level = RiskLevel::classify(vulnerability);
    RiskRating {
        level,
        label: level.label().to_string(),
        recommendation: level.recommendation().to_string(),
        findings: level.findings().iter().map(|f| f.to_string()).collect(),
    }
}
