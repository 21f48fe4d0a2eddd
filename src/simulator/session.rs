//! What-if simulation state for one subject selection.

use serde::Serialize;
use tracing::debug;

use crate::error::{GradeError, Result};
use crate::simulator::predict::{effective_score, predict, score_needed};
use crate::simulator::tier::{
    ComplianceTier, ThresholdCheck, classify, tactical_insight, threshold_checklist,
};
use crate::simulator::types::{Overrides, Subject};

const NO_DATA_INSIGHT: &str = "No weighted components yet. Add graded work to see a prediction.";

/// Owns the subject list, the current selection and its overrides.
///
/// Overrides never outlive a selection: every call to [`select`](Self::select)
/// starts from an empty map.
#[derive(Debug)]
pub struct SimulationSession {
    subjects: Vec<Subject>,
    selected: usize,
    overrides: Overrides,
}

/// Everything the presentation layer renders for the selected subject.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionReport {
    pub subject_id: String,
    pub subject_code: String,
    pub subject_name: String,
    pub overrides: Overrides,
    pub predicted_percentage: Option<f64>,
    pub tier: Option<ComplianceTier>,
    pub thresholds: Vec<ThresholdCheck>,
    pub insight: &'static str,
}

impl SimulationSession {
    pub fn new(subjects: Vec<Subject>) -> Result<Self> {
        if subjects.is_empty() {
            return Err(GradeError::NoSubjects);
        }
        Ok(Self {
            subjects,
            selected: 0,
            overrides: Overrides::new(),
        })
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    pub fn selected(&self) -> &Subject {
        &self.subjects[self.selected]
    }

    pub fn overrides(&self) -> &Overrides {
        &self.overrides
    }

    /// Selects a subject by id, code or name and discards all overrides.
    pub fn select(&mut self, key: &str) -> Result<&Subject> {
        let idx = self
            .subjects
            .iter()
            .position(|s| s.matches(key))
            .ok_or_else(|| GradeError::UnknownSubject(key.to_string()))?;

        self.selected = idx;
        self.overrides.clear();
        debug!(subject = %self.subjects[idx].name, "Subject selected");
        Ok(&self.subjects[idx])
    }

    /// Records a hypothetical score for a pending component of the selection.
    pub fn set_override(&mut self, component: &str, score: f64) -> Result<()> {
        let subject = &self.subjects[self.selected];
        let comp = subject
            .component(component)
            .ok_or_else(|| GradeError::UnknownComponent {
                subject: subject.name.clone(),
                component: component.to_string(),
            })?;

        if !comp.pending {
            return Err(GradeError::NotPending {
                subject: subject.name.clone(),
                component: component.to_string(),
            });
        }

        if !score.is_finite() || !(score / comp.total * comp.weight).is_finite() {
            return Err(GradeError::InvalidOverride {
                subject: subject.name.clone(),
                component: component.to_string(),
                score,
            });
        }

        debug!(component, score, "Override set");
        self.overrides.set(component, score);
        Ok(())
    }

    pub fn clear_override(&mut self, component: &str) -> Option<f64> {
        self.overrides.remove(component)
    }

    pub fn reset(&mut self) {
        self.overrides.clear();
    }

    pub fn effective_score(&self, component: &str) -> Option<f64> {
        self.selected()
            .component(component)
            .map(|c| effective_score(c, &self.overrides))
    }

    pub fn prediction(&self) -> Result<f64> {
        predict(self.selected(), &self.overrides)
    }

    pub fn tier(&self) -> Result<ComplianceTier> {
        self.prediction().map(classify)
    }

    pub fn score_needed(&self, component: &str, target: f64) -> Result<f64> {
        score_needed(self.selected(), &self.overrides, component, target)
    }

    /// Builds the rendered view. A subject without weighted data yields an
    /// empty report instead of an error.
    pub fn report(&self) -> Result<PredictionReport> {
        let subject = self.selected();

        let predicted = match self.prediction() {
            Ok(p) => Some(p),
            Err(GradeError::NoWeightedData { .. }) => None,
            Err(e) => return Err(e),
        };

        Ok(PredictionReport {
            subject_id: subject.id.clone(),
            subject_code: subject.code.clone(),
            subject_name: subject.name.clone(),
            overrides: self.overrides.clone(),
            predicted_percentage: predicted,
            tier: predicted.map(classify),
            thresholds: predicted.map(threshold_checklist).unwrap_or_default(),
            insight: predicted.map(tactical_insight).unwrap_or(NO_DATA_INSIGHT),
        })
    }
}
