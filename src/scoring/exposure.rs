use crate::assessment::{DfcRelation, ExpectedChange, ExposureAnswer, FireRegime};

/// Score exposure for every fire-regime component.
///
/// +1: a directional change is expected and it moves the component further
///     from DFC.
/// -1: no change is expected and the component sits closer to or within DFC.
///  0: everything else, including any unanswered field.
pub fn exposure_scores(exposure: &FireRegime<ExposureAnswer>) -> FireRegime<i8> {
    exposure.map(|_, answer| score_answer(answer))
}

fn score_answer(answer: &ExposureAnswer) -> i8 {
    let (change, relation) = match (answer.expected_change, answer.relation_to_dfc) {
        (Some(change), Some(relation)) => (change, relation),
        _ => return 0,
    };

    let has_change = change != ExpectedChange::NoChange;
    if has_change && relation == DfcRelation::Further {
        1
    } else if !has_change && matches!(relation, DfcRelation::Closer | DfcRelation::Within) {
        -1
    } else {
        0
    }
}
