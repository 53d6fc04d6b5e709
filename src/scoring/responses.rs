use serde::{Deserialize, Serialize};

use super::constants::{COMPONENT_FACTOR, ECOSYSTEM_FACTOR, FIRE_TOTAL_FACTOR, FUEL_FACTOR};
use crate::assessment::{
    EcosystemComponent, FireRegime, FuelComponent, ResponseDirection, ResponseMatrix,
    TargetComponent, TargetSet,
};

/// Raw and standardized response sums for one fire-regime component.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FireResponseScores {
    pub ecosystem_sum: i32,
    pub fuel_sum: i32,
    pub ecosystem_standardized: f64,
    pub fuel_standardized: f64,
    pub total_standardized: f64,
}

/// Component sensitivity derived from the 4x8 response matrix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentResponses {
    pub by_fire: FireRegime<FireResponseScores>,
    /// Per ecosystem/fuel component, the 4-row total standardized to -10..+10.
    pub by_component: TargetSet<f64>,
}

/// Score a single matrix entry: further from DFC is adverse.
pub fn direction_score(direction: Option<ResponseDirection>) -> i32 {
    match direction {
        Some(ResponseDirection::Further) => 1,
        Some(ResponseDirection::Closer) => -1,
        Some(ResponseDirection::NoChange) | None => 0,
    }
}

/// Sum and standardize the response matrix, per fire-regime component and
/// per individual ecosystem/fuel component.
pub fn component_responses(matrix: &ResponseMatrix) -> ComponentResponses {
    let by_fire = matrix.map(|_, row| score_row(row));

    let mut by_component = TargetSet::<f64>::default();
    for &target in &TargetComponent::ALL {
        let raw: i32 = matrix
            .iter()
            .map(|(_, row)| direction_score(*row.get(target)))
            .sum();
        *by_component.get_mut(target) = f64::from(raw) * COMPONENT_FACTOR;
    }

    ComponentResponses {
        by_fire,
        by_component,
    }
}

fn score_row(row: &TargetSet<Option<ResponseDirection>>) -> FireResponseScores {
    let ecosystem_sum: i32 = EcosystemComponent::ALL
        .iter()
        .map(|&c| direction_score(*row.ecosystem(c)))
        .sum();
    let fuel_sum: i32 = FuelComponent::ALL
        .iter()
        .map(|&c| direction_score(*row.fuel(c)))
        .sum();

    FireResponseScores {
        ecosystem_sum,
        fuel_sum,
        ecosystem_standardized: f64::from(ecosystem_sum) * ECOSYSTEM_FACTOR,
        fuel_standardized: f64::from(fuel_sum) * FUEL_FACTOR,
        total_standardized: f64::from(ecosystem_sum + fuel_sum) * FIRE_TOTAL_FACTOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::FireComponent;

    fn all_further_row() -> TargetSet<Option<ResponseDirection>> {
        let mut row = TargetSet::default();
        for &target in &TargetComponent::ALL {
            *row.get_mut(target) = Some(ResponseDirection::Further);
        }
        row
    }

    #[test]
    fn test_direction_scores() {
        assert_eq!(direction_score(Some(ResponseDirection::Further)), 1);
        assert_eq!(direction_score(Some(ResponseDirection::Closer)), -1);
        assert_eq!(direction_score(Some(ResponseDirection::NoChange)), 0);
        assert_eq!(direction_score(None), 0);
    }

    #[test]
    fn test_all_further_sums_and_standardization() {
        let matrix = ResponseMatrix::default().map(|_, _| all_further_row());
        let responses = component_responses(&matrix);

        for (_, scores) in responses.by_fire.iter() {
            assert_eq!(scores.ecosystem_sum, 5);
            assert_eq!(scores.fuel_sum, 3);
            assert_eq!(scores.ecosystem_standardized, 2.5);
            assert_eq!(scores.fuel_standardized, 3.0 * 0.8334);
            assert_eq!(scores.total_standardized, 8.0 * 0.31223);
        }

        // Each column sums to 4 (one per fire row), standardized by 2.5.
        for (_, standardized) in responses.by_component.iter() {
            assert_eq!(*standardized, 10.0);
        }
    }

    #[test]
    fn test_mixed_row() {
        let mut matrix = ResponseMatrix::default();
        let row = matrix.get_mut(FireComponent::Frequency);
        row.survivorship = Some(ResponseDirection::Further);
        row.recruitment = Some(ResponseDirection::Closer);
        row.loading = Some(ResponseDirection::Further);
        row.vertical = Some(ResponseDirection::Closer);

        let responses = component_responses(&matrix);
        let scores = responses.by_fire.get(FireComponent::Frequency);
        assert_eq!(scores.ecosystem_sum, 0);
        assert_eq!(scores.fuel_sum, 0);
        assert_eq!(scores.ecosystem_standardized, 0.0);
        assert_eq!(scores.total_standardized, 0.0);

        // Unfilled rows stay at zero.
        assert_eq!(*responses.by_fire.get(FireComponent::Size), FireResponseScores::default());
    }

    #[test]
    fn test_by_component_accumulates_across_fire_rows() {
        let mut matrix = ResponseMatrix::default();
        matrix.size.erosion = Some(ResponseDirection::Further);
        matrix.severity.erosion = Some(ResponseDirection::Further);
        matrix.area.erosion = Some(ResponseDirection::Closer);

        let responses = component_responses(&matrix);
        // 1 + 1 - 1 = 1, times 2.5.
        assert_eq!(responses.by_component.erosion, 2.5);
        assert_eq!(responses.by_component.loading, 0.0);
    }
}
