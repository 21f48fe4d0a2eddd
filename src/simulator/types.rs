//! Data types used by the grade simulator.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use crate::error::{GradeError, Result};

/// A single graded item (quiz, assignment, exam) within a subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub name: String,
    pub scored: f64,
    pub total: f64,
    pub weight: f64,
    #[serde(default)]
    pub pending: bool,
}

impl Component {
    pub fn graded(name: &str, scored: f64, total: f64, weight: f64) -> Self {
        Self {
            name: name.to_string(),
            scored,
            total,
            weight,
            pending: false,
        }
    }

    pub fn pending(name: &str, total: f64, weight: f64) -> Self {
        Self {
            name: name.to_string(),
            scored: 0.0,
            total,
            weight,
            pending: true,
        }
    }
}

/// A course and its ordered list of components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    pub id: String,
    pub name: String,
    pub code: String,
    pub components: Vec<Component>,
}

impl Subject {
    /// Checks the load-time invariants: `total > 0`, `weight >= 0`, finite
    /// scores, finite running sums of weights and weighted scores, and unique
    /// component names.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        let mut weight_sum = 0.0;
        let mut weighted_sum = 0.0;

        for c in &self.components {
            weight_sum += c.weight;
            weighted_sum += c.scored / c.total * c.weight;

            let reason = if !c.total.is_finite() || c.total <= 0.0 {
                Some(format!("total must be positive, got {}", c.total))
            } else if !c.weight.is_finite() || c.weight < 0.0 {
                Some(format!("weight must be non-negative, got {}", c.weight))
            } else if !c.scored.is_finite() {
                Some(format!("scored must be finite, got {}", c.scored))
            } else if !weight_sum.is_finite() {
                Some("subject weights overflow".to_string())
            } else if !weighted_sum.is_finite() {
                Some("subject weighted scores overflow".to_string())
            } else {
                None
            };

            if let Some(reason) = reason {
                return Err(GradeError::InvalidComponent {
                    subject: self.name.clone(),
                    component: c.name.clone(),
                    reason,
                });
            }

            if !seen.insert(c.name.as_str()) {
                return Err(GradeError::DuplicateComponent {
                    subject: self.name.clone(),
                    component: c.name.clone(),
                });
            }
        }

        Ok(())
    }

    pub fn component(&self, name: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.name == name)
    }

    /// Matches on id, code, or case-insensitive name.
    pub fn matches(&self, key: &str) -> bool {
        self.id == key || self.code.eq_ignore_ascii_case(key) || self.name.eq_ignore_ascii_case(key)
    }

    pub fn pending_components(&self) -> impl Iterator<Item = &Component> {
        self.components.iter().filter(|c| c.pending)
    }
}

/// Hypothetical scores keyed by component name, iterated in name order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Overrides(BTreeMap<String, f64>);

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.get(name).copied()
    }

    pub fn set(&mut self, name: &str, score: f64) {
        self.0.insert(name.to_string(), score);
    }

    pub fn remove(&mut self, name: &str) -> Option<f64> {
        self.0.remove(name)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for Overrides {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
