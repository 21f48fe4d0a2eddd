//! Domain error type for subject data and grade simulation.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GradeError {
    #[error("invalid component '{component}' in subject '{subject}': {reason}")]
    InvalidComponent {
        subject: String,
        component: String,
        reason: String,
    },

    #[error("duplicate component '{component}' in subject '{subject}'")]
    DuplicateComponent { subject: String, component: String },

    /// Every component of the subject carries zero weight, so no percentage exists.
    #[error("subject '{subject}' has no weighted components")]
    NoWeightedData { subject: String },

    #[error("component '{component}' has zero weight in subject '{subject}'")]
    ZeroWeight { subject: String, component: String },

    #[error("unknown subject: {0}")]
    UnknownSubject(String),

    #[error("unknown component '{component}' in subject '{subject}'")]
    UnknownComponent { subject: String, component: String },

    #[error("component '{component}' in subject '{subject}' is already graded")]
    NotPending { subject: String, component: String },

    #[error("override for '{component}' in subject '{subject}' must be finite, got {score}")]
    InvalidOverride {
        subject: String,
        component: String,
        score: f64,
    },

    #[error("unknown task: {0}")]
    UnknownTask(String),

    #[error("no subjects available")]
    NoSubjects,

    #[error("subject data parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GradeError>;
