use serde::{Deserialize, Serialize};

use super::constants::VULNERABILITY_FACTOR;
use super::exposure::exposure_scores;
use super::impact::{impact_scores, ImpactBreakdown};
use super::responses::{component_responses, ComponentResponses};
use super::risk::{classify, RiskRating};
use super::sensitivity::{intrinsic_sensitivity, SensitivityScore};
use super::treatment::{treatment_effects, TreatmentEffect};
use crate::assessment::{AssessmentInput, FireRegime};

/// Vulnerability before and after treatment adjustment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VulnerabilityScores {
    pub before_treatment: f64,
    /// One adjusted score per supplied treatment plan, in input order.
    pub by_treatment: Vec<f64>,
    /// Index of the plan behind the final score, when any plan was scored.
    pub best_treatment: Option<usize>,
    pub final_vulnerability: f64,
}

/// Every intermediate and final score of one assessment, sufficient for
/// display without recomputation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    pub exposure: FireRegime<i8>,
    pub sensitivity: SensitivityScore,
    pub responses: ComponentResponses,
    pub impact: ImpactBreakdown,
    pub treatments: Vec<TreatmentEffect>,
    pub vulnerability: VulnerabilityScores,
    pub risk: RiskRating,
}

/// Run the full scoring pipeline over one input snapshot.
///
/// Pure and total: the result is a function of the input alone, rebuilt from
/// scratch on every call, and no input combination can fail. The stages run
/// strictly in sequence, each reading only raw input and prior outputs.
pub fn assess(input: &AssessmentInput) -> AssessmentResult {
    let exposure = exposure_scores(&input.exposure);
    let sensitivity = intrinsic_sensitivity(&input.sensitivity);
    let responses = component_responses(&input.responses);
    let impact = impact_scores(&exposure, &input.responses, &responses);
    let treatments = treatment_effects(&input.treatments);
    let vulnerability = aggregate_vulnerability(impact.overall, &sensitivity, &treatments);
    let risk = classify(vulnerability.final_vulnerability);

    AssessmentResult {
        exposure,
        sensitivity,
        responses,
        impact,
        treatments,
        vulnerability,
        risk,
    }
}

/// Combine impact, intrinsic sensitivity, and the best treatment offset.
///
/// When any plan has a nonzero effectiveness total, the lowest adjusted
/// vulnerability across the supplied plans wins; otherwise the untreated
/// score stands. Scores are not clamped.
fn aggregate_vulnerability(
    overall_impact: f64,
    sensitivity: &SensitivityScore,
    treatments: &[TreatmentEffect],
) -> VulnerabilityScores {
    let before_treatment =
        (overall_impact + sensitivity.standardized_score) * VULNERABILITY_FACTOR;

    let by_treatment: Vec<f64> = treatments
        .iter()
        .map(|effect| before_treatment - effect.standardized_total)
        .collect();

    let any_active = treatments.iter().any(|effect| effect.is_active());
    let best_treatment = if any_active {
        by_treatment
            .iter()
            .enumerate()
            .min_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, _)| i)
    } else {
        None
    };

    let final_vulnerability = match best_treatment {
        Some(i) => by_treatment[i],
        None => before_treatment,
    };

    VulnerabilityScores {
        before_treatment,
        by_treatment,
        best_treatment,
        final_vulnerability,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::{
        DfcRelation, ExpectedChange, ExposureAnswer, ResponseDirection, TargetComponent,
        TreatmentPlan, YesNo,
    };
    use crate::scoring::risk::RiskLevel;

    fn approx(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
    }

    /// Every exposure further-from-DFC, every response adverse, every
    /// sensitivity question answered as sensitive.
    fn worst_case_input() -> AssessmentInput {
        let mut input = AssessmentInput::default();

        input.exposure = input.exposure.map(|_, _| ExposureAnswer {
            expected_change: Some(ExpectedChange::Increase),
            relation_to_dfc: Some(DfcRelation::Further),
        });

        input.sensitivity.within_historical_range = Some(YesNo::No);
        input.sensitivity.departed = input.sensitivity.departed.map(|_, _| Some(YesNo::Yes));
        input.sensitivity.slow_post_fire_recovery = Some(YesNo::Yes);
        input.sensitivity.keystone_species_at_risk = Some(YesNo::Yes);
        input.sensitivity.erosion_prone_soils = Some(YesNo::Yes);
        input.sensitivity.invasive_species_present = Some(YesNo::Yes);
        input.sensitivity.limited_seed_sources = Some(YesNo::Yes);
        input.sensitivity.moisture_stressed = Some(YesNo::Yes);
        input.sensitivity.uncharacteristic_fuel_loads = Some(YesNo::Yes);
        input.sensitivity.fragmented_landscape = Some(YesNo::Yes);

        input.responses = input.responses.map(|_, _| {
            let mut row = crate::assessment::TargetSet::default();
            for &target in &TargetComponent::ALL {
                *row.get_mut(target) = Some(ResponseDirection::Further);
            }
            row
        });

        input
    }

    #[test]
    fn test_empty_input_scores_neutral() {
        let result = assess(&AssessmentInput::default());
        assert_eq!(result.impact.overall, 0.0);
        assert_eq!(result.vulnerability.before_treatment, 0.0);
        assert_eq!(result.vulnerability.final_vulnerability, 0.0);
        assert_eq!(result.risk.level, RiskLevel::Low);
    }

    #[test]
    fn test_worked_example_untreated() {
        let result = assess(&worst_case_input());

        for (_, scores) in result.responses.by_fire.iter() {
            assert_eq!(scores.ecosystem_sum, 5);
            assert_eq!(scores.fuel_sum, 3);
            assert_eq!(scores.ecosystem_standardized, 2.5);
            approx(scores.fuel_standardized, 2.5002);
            approx(scores.total_standardized, 2.49784);
        }

        approx(result.impact.overall, 9.99136);
        assert_eq!(result.sensitivity.standardized_score, 10.0);
        approx(result.vulnerability.before_treatment, 4.3980992);
        approx(result.vulnerability.final_vulnerability, 4.3980992);
        assert_eq!(result.vulnerability.best_treatment, None);
        assert_eq!(result.risk.label, "High Vulnerability");
    }

    #[test]
    fn test_all_zero_plans_leave_vulnerability_untreated() {
        let mut input = worst_case_input();
        input.treatments = vec![TreatmentPlan::default(); 3];

        let result = assess(&input);
        assert_eq!(result.vulnerability.by_treatment.len(), 3);
        assert_eq!(result.vulnerability.best_treatment, None);
        assert_eq!(
            result.vulnerability.final_vulnerability,
            result.vulnerability.before_treatment
        );
    }

    #[test]
    fn test_single_active_plan_wins() {
        let mut input = worst_case_input();
        let mut plan = TreatmentPlan::default();
        plan.components.loading = Some(4);
        input.treatments = vec![TreatmentPlan::default(), plan];

        let result = assess(&input);
        assert_eq!(result.vulnerability.best_treatment, Some(1));
        approx(
            result.vulnerability.final_vulnerability,
            result.vulnerability.before_treatment - 1.0,
        );
    }

    #[test]
    fn test_best_of_multiple_plans_is_minimum() {
        let mut input = worst_case_input();

        let mut weak = TreatmentPlan::default();
        weak.components.loading = Some(2);
        let mut strong = TreatmentPlan::default();
        strong.components.survivorship = Some(5);
        strong.components.loading = Some(5);
        let mut middling = TreatmentPlan::default();
        middling.components.vertical = Some(4);

        input.treatments = vec![weak, strong, middling];
        let result = assess(&input);

        assert_eq!(result.vulnerability.best_treatment, Some(1));
        let expected: f64 = result
            .vulnerability
            .by_treatment
            .iter()
            .copied()
            .fold(f64::INFINITY, f64::min);
        assert_eq!(result.vulnerability.final_vulnerability, expected);
    }

    #[test]
    fn test_fire_only_plan_is_active_but_offsets_nothing() {
        let mut input = worst_case_input();
        let mut plan = TreatmentPlan::default();
        plan.fire = plan.fire.map(|_, _| Some(5));
        input.treatments = vec![plan];

        let result = assess(&input);
        // The plan counts as entered, so selection runs, but its
        // standardized total is zero.
        assert_eq!(result.vulnerability.best_treatment, Some(0));
        assert_eq!(
            result.vulnerability.final_vulnerability,
            result.vulnerability.before_treatment
        );
    }

    #[test]
    fn test_no_clamping_below_range() {
        let mut input = AssessmentInput::default();
        let mut plan = TreatmentPlan::default();
        plan.components = plan.components.map(|_, _| Some(5));
        input.treatments = vec![plan];

        let result = assess(&input);
        // 0 - 40*0.25 = -10; earlier rubric versions clamped here.
        assert_eq!(result.vulnerability.final_vulnerability, -10.0);
        assert_eq!(result.risk.level, RiskLevel::VeryLow);
    }

    #[test]
    fn test_result_recomputed_from_scratch() {
        let mut input = worst_case_input();
        let full = assess(&input);

        input.exposure = FireRegime::default();
        let cleared = assess(&input);

        assert_eq!(cleared.impact.overall, 0.0);
        assert_ne!(full.impact.overall, cleared.impact.overall);
        // Sensitivity is exposure-independent and carries over.
        assert_eq!(full.sensitivity, cleared.sensitivity);
    }
}
