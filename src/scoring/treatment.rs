use serde::{Deserialize, Serialize};

use super::constants::TREATMENT_FACTOR;
use crate::assessment::{TargetComponent, TreatmentPlan};

/// Summed effectiveness of one treatment scenario.
///
/// Fire-regime effectiveness counts toward the raw total only; the
/// standardized total that offsets vulnerability is built from ecosystem and
/// fuel effectiveness alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreatmentEffect {
    pub name: Option<String>,
    pub total_fire: u32,
    pub total_fuel: u32,
    pub total_ecosystem: u32,
    pub total: u32,
    pub standardized_total: f64,
}

impl TreatmentEffect {
    /// True if any effectiveness was entered for this plan.
    pub fn is_active(&self) -> bool {
        self.total > 0
    }
}

/// Score every supplied treatment plan independently.
pub fn treatment_effects(plans: &[TreatmentPlan]) -> Vec<TreatmentEffect> {
    plans.iter().map(score_plan).collect()
}

fn score_plan(plan: &TreatmentPlan) -> TreatmentEffect {
    let total_fire: u32 = plan
        .fire
        .iter()
        .map(|(_, score)| u32::from(score.unwrap_or(0)))
        .sum();

    let mut total_ecosystem = 0u32;
    let mut total_fuel = 0u32;
    for (target, score) in plan.components.iter() {
        let score = u32::from(score.unwrap_or(0));
        match target {
            TargetComponent::Ecosystem(_) => total_ecosystem += score,
            TargetComponent::Fuel(_) => total_fuel += score,
        }
    }

    TreatmentEffect {
        name: plan.name.clone(),
        total_fire,
        total_fuel,
        total_ecosystem,
        total: total_fire + total_fuel + total_ecosystem,
        standardized_total: f64::from(total_ecosystem + total_fuel) * TREATMENT_FACTOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_plan_scores_zero() {
        let effect = score_plan(&TreatmentPlan::default());
        assert_eq!(effect.total, 0);
        assert_eq!(effect.standardized_total, 0.0);
        assert!(!effect.is_active());
    }

    #[test]
    fn test_totals_split_by_component_kind() {
        let mut plan = TreatmentPlan {
            name: Some("Prescribed burn".to_string()),
            ..Default::default()
        };
        plan.fire.severity = Some(3);
        plan.fire.frequency = Some(2);
        plan.components.survivorship = Some(4);
        plan.components.composition = Some(1);
        plan.components.loading = Some(5);

        let effect = score_plan(&plan);
        assert_eq!(effect.name.as_deref(), Some("Prescribed burn"));
        assert_eq!(effect.total_fire, 5);
        assert_eq!(effect.total_ecosystem, 5);
        assert_eq!(effect.total_fuel, 5);
        assert_eq!(effect.total, 15);
        assert_eq!(effect.standardized_total, 10.0 * 0.25);
    }

    #[test]
    fn test_standardized_total_ignores_fire_scores() {
        let mut plan = TreatmentPlan::default();
        plan.components.loading = Some(4);
        let baseline = score_plan(&plan);

        // Maxing out every fire slider must not move the standardized total.
        plan.fire = plan.fire.map(|_, _| Some(5));
        let with_fire = score_plan(&plan);

        assert_eq!(with_fire.standardized_total, baseline.standardized_total);
        assert_eq!(with_fire.total, baseline.total + 20);
    }

    #[test]
    fn test_plans_scored_independently() {
        let mut first = TreatmentPlan::default();
        first.components.loading = Some(2);
        let second = TreatmentPlan::default();

        let effects = treatment_effects(&[first, second]);
        assert_eq!(effects.len(), 2);
        assert!(effects[0].is_active());
        assert!(!effects[1].is_active());
    }
}
