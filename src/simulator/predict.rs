use crate::error::{GradeError, Result};
use crate::simulator::types::{Component, Overrides, Subject};
use crate::simulator::utility::weighted_percentage;

/// The score used for a component: its override when one is present,
/// otherwise the recorded score.
pub fn effective_score(component: &Component, overrides: &Overrides) -> f64 {
    overrides.get(&component.name).unwrap_or(component.scored)
}

/// Predicts the overall percentage for `subject` with `overrides` applied.
///
/// Each component contributes `effective / total * weight`; the sum is
/// normalized by the weight actually present. Overrides are not clamped, so
/// scores outside `[0, total]` yield fractions outside `[0, 1]`.
///
/// # Errors
///
/// Returns [`GradeError::NoWeightedData`] when the weights sum to zero.
pub fn predict(subject: &Subject, overrides: &Overrides) -> Result<f64> {
    weighted_percentage(
        subject
            .components
            .iter()
            .map(|c| (effective_score(c, overrides) / c.total, c.weight)),
    )
    .ok_or_else(|| GradeError::NoWeightedData {
        subject: subject.name.clone(),
    })
}

/// Solves for the score on `component` that makes [`predict`] land on
/// `target`, holding every other effective score fixed.
///
/// The result is not clamped: a value above the component's total means the
/// target is out of reach, a negative one means it is already secured.
pub fn score_needed(
    subject: &Subject,
    overrides: &Overrides,
    component: &str,
    target: f64,
) -> Result<f64> {
    let comp = subject
        .component(component)
        .ok_or_else(|| GradeError::UnknownComponent {
            subject: subject.name.clone(),
            component: component.to_string(),
        })?;

    let weight_sum: f64 = subject.components.iter().map(|c| c.weight).sum();
    if weight_sum == 0.0 {
        return Err(GradeError::NoWeightedData {
            subject: subject.name.clone(),
        });
    }
    if comp.weight == 0.0 {
        return Err(GradeError::ZeroWeight {
            subject: subject.name.clone(),
            component: component.to_string(),
        });
    }

    let others: f64 = subject
        .components
        .iter()
        .filter(|c| c.name != comp.name)
        .map(|c| effective_score(c, overrides) / c.total * c.weight)
        .sum();

    Ok((target / 100.0 * weight_sum - others) * comp.total / comp.weight)
}
