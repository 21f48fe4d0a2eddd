//! What-if grade prediction.
//!
//! This module computes a subject's predicted percentage from its weighted
//! components and any hypothetical scores, classifies the result into a
//! compliance tier, and keeps the per-selection override state.

pub mod predict;
pub mod session;
pub mod tier;
pub mod types;
pub mod utility;

pub use predict::{effective_score, predict, score_needed};
pub use session::{PredictionReport, SimulationSession};
pub use tier::{ComplianceTier, classify};
pub use types::{Component, Overrides, Subject};
