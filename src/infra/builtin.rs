use anyhow::Result;
use chrono::{DateTime, Duration, Utc};

use crate::planner::{Priority, Task};
use crate::services::SubjectSource;
use crate::simulator::types::{Component, Subject};

/// Serves the bundled demo subjects and study tasks.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinCatalog;

impl SubjectSource for BuiltinCatalog {
    fn list_subjects(&self) -> Result<Vec<Subject>> {
        let subjects = builtin_subjects();
        for s in &subjects {
            s.validate()?;
        }
        Ok(subjects)
    }

    fn list_tasks(&self, now: DateTime<Utc>) -> Result<Vec<Task>> {
        Ok(builtin_tasks(now))
    }
}

fn subject(id: &str, name: &str, code: &str, components: Vec<Component>) -> Subject {
    Subject {
        id: id.to_string(),
        name: name.to_string(),
        code: code.to_string(),
        components,
    }
}

pub fn builtin_subjects() -> Vec<Subject> {
    vec![
        subject(
            "1",
            "Data Structures",
            "CS301",
            vec![
                Component::graded("Quiz 1", 18.0, 20.0, 15.0),
                Component::graded("Assignment 1", 28.0, 30.0, 20.0),
                Component::graded("Mid Term", 32.0, 50.0, 30.0),
                Component::pending("Quiz 2", 20.0, 15.0),
                Component::pending("Final Exam", 80.0, 20.0),
            ],
        ),
        subject(
            "2",
            "Machine Learning",
            "CS402",
            vec![
                Component::graded("Assignment 1", 22.0, 25.0, 20.0),
                Component::graded("Project Phase 1", 35.0, 40.0, 30.0),
                Component::graded("Quiz 1", 15.0, 20.0, 15.0),
                Component::pending("Project Phase 2", 40.0, 25.0),
                Component::pending("Final Exam", 75.0, 10.0),
            ],
        ),
        subject(
            "3",
            "Database Systems",
            "CS303",
            vec![
                Component::graded("Lab Work", 48.0, 50.0, 25.0),
                Component::graded("Mid Term", 40.0, 50.0, 30.0),
                Component::pending("Project", 50.0, 30.0),
                Component::pending("Final Exam", 50.0, 15.0),
            ],
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn task(
    now: DateTime<Utc>,
    id: &str,
    title: &str,
    subject: &str,
    due_in_days: i64,
    priority: Priority,
    urgency: u8,
    completed: bool,
) -> Task {
    Task {
        id: id.to_string(),
        title: title.to_string(),
        subject: subject.to_string(),
        due_date: now + Duration::days(due_in_days),
        priority,
        urgency,
        completed,
    }
}

pub fn builtin_tasks(now: DateTime<Utc>) -> Vec<Task> {
    vec![
        task(now, "1", "Complete ML Assignment 2", "Machine Learning", 2, Priority::High, 95, false),
        task(now, "2", "Study for DS Quiz 2", "Data Structures", 5, Priority::Medium, 78, false),
        task(now, "3", "Database Project Phase 1", "Database Systems", 7, Priority::High, 85, false),
        task(now, "4", "Review Backpropagation", "Machine Learning", 1, Priority::Low, 45, true),
    ]
}
