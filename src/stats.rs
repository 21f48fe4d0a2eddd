use serde::Serialize;

use crate::planner::Task;
use crate::simulator::tier::{ComplianceTier, classify};
use crate::simulator::types::Subject;
use crate::simulator::utility::{mean, round2, weighted_percentage};

/// Weighted percentage over graded (non-pending) components only.
/// Returns `None` when no graded component carries weight.
pub fn current_marks(subject: &Subject) -> Option<f64> {
    weighted_percentage(
        subject
            .components
            .iter()
            .filter(|c| !c.pending)
            .map(|c| (c.scored / c.total, c.weight)),
    )
}

#[derive(Debug, Clone, Serialize)]
pub struct SubjectSummary {
    pub id: String,
    pub code: String,
    pub name: String,
    pub components: usize,
    pub pending: usize,
    pub current_marks: Option<f64>,
    pub status: Option<ComplianceTier>,
}

impl SubjectSummary {
    pub fn from_subject(subject: &Subject) -> Self {
        let marks = current_marks(subject);
        SubjectSummary {
            id: subject.id.clone(),
            code: subject.code.clone(),
            name: subject.name.clone(),
            components: subject.components.len(),
            pending: subject.pending_components().count(),
            current_marks: marks,
            status: marks.map(classify),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct UserStats {
    pub total_subjects: usize,
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub average_compliance: f64,
}

impl UserStats {
    pub fn collect(subjects: &[Subject], tasks: &[Task]) -> Self {
        let marks: Vec<f64> = subjects.iter().filter_map(current_marks).collect();

        UserStats {
            total_subjects: subjects.len(),
            total_tasks: tasks.len(),
            completed_tasks: tasks.iter().filter(|t| t.completed).count(),
            average_compliance: round2(mean(&marks)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::builtin::{builtin_subjects, builtin_tasks};
    use crate::simulator::types::Component;
    use chrono::Utc;

    #[test]
    fn test_current_marks_ignores_pending() {
        let subjects = builtin_subjects();
        let ds = &subjects[0];
        let expected = (13.5 + 28.0 / 30.0 * 20.0 + 19.2) / 65.0 * 100.0;
        assert!((current_marks(ds).unwrap() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_current_marks_all_pending() {
        let subject = Subject {
            id: "n".to_string(),
            name: "New".to_string(),
            code: "NW1".to_string(),
            components: vec![Component::pending("Final", 100.0, 100.0)],
        };
        assert_eq!(current_marks(&subject), None);
        let summary = SubjectSummary::from_subject(&subject);
        assert_eq!(summary.status, None);
        assert_eq!(summary.pending, 1);
    }

    #[test]
    fn test_user_stats_with_empty_input() {
        assert_eq!(UserStats::collect(&[], &[]), UserStats::default());
    }

    #[test]
    fn test_user_stats_counts() {
        let stats = UserStats::collect(&builtin_subjects(), &builtin_tasks(Utc::now()));
        assert_eq!(stats.total_subjects, 3);
        assert_eq!(stats.total_tasks, 4);
        assert_eq!(stats.completed_tasks, 1);
        assert!(stats.average_compliance > 0.0 && stats.average_compliance <= 100.0);
    }
}
