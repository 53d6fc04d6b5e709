use super::input::{AssessmentInput, TreatmentPlan};

/// Highest effectiveness score a treatment slider can hold.
pub const MAX_EFFECTIVENESS: u8 = 5;

/// Maximum number of treatment scenarios evaluated per assessment.
pub const MAX_TREATMENTS: usize = 3;

/// Validate an assessment snapshot before scoring.
/// Returns all validation errors at once (not just the first).
///
/// Unanswered fields are always valid; only out-of-range values and excess
/// treatment plans are rejected.
pub fn validate_input(input: &AssessmentInput) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if input.treatments.len() > MAX_TREATMENTS {
        errors.push(format!(
            "treatments: at most {} plans are evaluated, got {}",
            MAX_TREATMENTS,
            input.treatments.len()
        ));
    }

    for (i, plan) in input.treatments.iter().enumerate() {
        validate_plan(i, plan, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_plan(index: usize, plan: &TreatmentPlan, errors: &mut Vec<String>) {
    for (component, score) in plan.fire.iter() {
        if let Some(score) = score {
            if *score > MAX_EFFECTIVENESS {
                errors.push(format!(
                    "treatments[{}].fire.{}: effectiveness must be 0-{}, got {}",
                    index,
                    component.display_name(),
                    MAX_EFFECTIVENESS,
                    score
                ));
            }
        }
    }

    for (component, score) in plan.components.iter() {
        if let Some(score) = score {
            if *score > MAX_EFFECTIVENESS {
                errors.push(format!(
                    "treatments[{}].components.{}: effectiveness must be 0-{}, got {}",
                    index,
                    component.display_name(),
                    MAX_EFFECTIVENESS,
                    score
                ));
            }
        }
    }
}
