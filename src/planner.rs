//! Study planner task list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{GradeError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub subject: String,
    pub due_date: DateTime<Utc>,
    pub priority: Priority,
    /// 0 to 100.
    pub urgency: u8,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Whole days until the due date; negative once overdue.
    pub fn days_until_due(&self, now: DateTime<Utc>) -> i64 {
        (self.due_date - now).num_days()
    }
}

/// Orders tasks incomplete-first, then by descending urgency. Ties keep
/// their original order.
pub fn sort_tasks(tasks: &mut [Task]) {
    tasks.sort_by(|a, b| {
        a.completed
            .cmp(&b.completed)
            .then_with(|| b.urgency.cmp(&a.urgency))
    });
}

/// Flips the completion flag of the task with `id` and returns the new state.
pub fn toggle(tasks: &mut [Task], id: &str) -> Result<bool> {
    let task = tasks
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or_else(|| GradeError::UnknownTask(id.to_string()))?;
    task.completed = !task.completed;
    Ok(task.completed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn task(id: &str, urgency: u8, completed: bool) -> Task {
        Task {
            id: id.to_string(),
            title: format!("Task {id}"),
            subject: "Data Structures".to_string(),
            due_date: Utc::now(),
            priority: Priority::Medium,
            urgency,
            completed,
        }
    }

    fn ids(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_sort_incomplete_first_then_urgency() {
        let mut tasks = vec![
            task("done-high", 99, true),
            task("low", 45, false),
            task("high", 95, false),
            task("done-low", 10, true),
            task("mid", 78, false),
        ];
        sort_tasks(&mut tasks);
        assert_eq!(ids(&tasks), vec!["high", "mid", "low", "done-high", "done-low"]);
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let mut tasks = vec![task("a", 50, false), task("b", 50, false), task("c", 50, false)];
        sort_tasks(&mut tasks);
        assert_eq!(ids(&tasks), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_toggle() {
        let mut tasks = vec![task("a", 50, false)];
        assert!(toggle(&mut tasks, "a").unwrap());
        assert!(!toggle(&mut tasks, "a").unwrap());
        assert!(matches!(toggle(&mut tasks, "zz"), Err(GradeError::UnknownTask(_))));
    }

    #[test]
    fn test_days_until_due() {
        let now = Utc::now();
        let mut t = task("a", 50, false);
        t.due_date = now + Duration::days(5);
        assert_eq!(t.days_until_due(now), 5);
        t.due_date = now - Duration::days(2);
        assert_eq!(t.days_until_due(now), -2);
    }

    #[test]
    fn test_priority_serde_form() {
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"high\"");
    }
}
