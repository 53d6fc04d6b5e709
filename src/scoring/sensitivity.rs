use serde::{Deserialize, Serialize};

use crate::assessment::{SensitivityAnswers, YesNo};

/// Intrinsic sensitivity of the site, standardized to a 0-10 scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensitivityScore {
    /// Questions whose answer indicated sensitivity.
    pub raw_count: u32,
    /// Answered questions only; blanks are excluded from the denominator.
    pub total_questions: u32,
    pub proportion: f64,
    pub standardized_score: f64,
}

/// Score the 13-question intrinsic sensitivity questionnaire.
///
/// The reverse question counts toward sensitivity on "no"; the four
/// departure questions and eight regular questions count on "yes".
pub fn intrinsic_sensitivity(answers: &SensitivityAnswers) -> SensitivityScore {
    let mut raw_count = 0u32;
    let mut total_questions = 0u32;

    let mut tally = |answer: Option<YesNo>, sensitive_on: YesNo| {
        if let Some(answer) = answer {
            total_questions += 1;
            if answer == sensitive_on {
                raw_count += 1;
            }
        }
    };

    tally(answers.within_historical_range, YesNo::No);
    for (_, departed) in answers.departed.iter() {
        tally(*departed, YesNo::Yes);
    }
    for answer in answers.regular() {
        tally(answer, YesNo::Yes);
    }

    let proportion = if total_questions > 0 {
        f64::from(raw_count) / f64::from(total_questions)
    } else {
        0.0
    };

    SensitivityScore {
        raw_count,
        total_questions,
        proportion,
        standardized_score: proportion * 10.0,
    }
}
