use serde::{Deserialize, Serialize};

use super::constants::COMPONENT_FACTOR;
use super::responses::{direction_score, ComponentResponses};
use crate::assessment::{FireRegime, ResponseMatrix, TargetComponent, TargetSet};

/// Impact of one fire-regime component on the system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactScores {
    pub ecosystem: f64,
    pub fuel: f64,
    pub total: f64,
}

/// Exposure-gated impact, per fire-regime component and in aggregate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactBreakdown {
    pub by_fire: FireRegime<ImpactScores>,
    pub by_component: TargetSet<f64>,
    pub overall: f64,
}

/// Combine exposure with component sensitivity.
///
/// Impact registers only where the exposure score is +1 (a directional
/// change moving the fire regime further from DFC). Any other exposure
/// forces that fire component's impact to exactly zero, whatever the
/// response matrix says.
pub fn impact_scores(
    exposure: &FireRegime<i8>,
    matrix: &ResponseMatrix,
    responses: &ComponentResponses,
) -> ImpactBreakdown {
    let by_fire = responses.by_fire.map(|component, scores| {
        let exposure = *exposure.get(component);
        if exposure == 1 {
            // Exposure is 1 here; the multiplication is kept explicit.
            let exposure = f64::from(exposure);
            ImpactScores {
                ecosystem: exposure * scores.ecosystem_standardized,
                fuel: exposure * scores.fuel_standardized,
                total: exposure * scores.total_standardized,
            }
        } else {
            ImpactScores::default()
        }
    });

    let mut by_component = TargetSet::<f64>::default();
    for &target in &TargetComponent::ALL {
        let raw: i32 = matrix
            .iter()
            .filter(|(component, _)| *exposure.get(*component) == 1)
            .map(|(component, row)| {
                i32::from(*exposure.get(component)) * direction_score(*row.get(target))
            })
            .sum();
        *by_component.get_mut(target) = f64::from(raw) * COMPONENT_FACTOR;
    }

    let overall = by_fire.iter().map(|(_, impact)| impact.total).sum();

    ImpactBreakdown {
        by_fire,
        by_component,
        overall,
    }
}
