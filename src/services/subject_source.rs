//! Trait for providers of subject and task reference data.

use anyhow::Result;
use chrono::{DateTime, Utc};

use crate::planner::Task;
use crate::simulator::types::Subject;

/// Abstraction over a subject data provider (bundled data, a JSON file, ...).
///
/// Implementations must only return subjects that passed
/// [`Subject::validate`].
pub trait SubjectSource {
    /// Returns all subjects in display order.
    fn list_subjects(&self) -> Result<Vec<Subject>>;

    /// Returns the study tasks, with due dates relative to `now`.
    fn list_tasks(&self, now: DateTime<Utc>) -> Result<Vec<Task>>;
}
