use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::infra::builtin::builtin_tasks;
use crate::parser::parse_subjects;
use crate::planner::Task;
use crate::services::SubjectSource;
use crate::simulator::types::Subject;

/// Reads subjects from a JSON array on disk:
/// ```json
/// [
///   { "id": "1", "name": "Data Structures", "code": "CS301",
///     "components": [ { "name": "Quiz 1", "scored": 18, "total": 20, "weight": 15 } ] }
/// ]
/// ```
/// Tasks come from the bundled set.
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl SubjectSource for JsonFileCatalog {
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    fn list_subjects(&self) -> Result<Vec<Subject>> {
        let bytes = std::fs::read(&self.path)
            .with_context(|| format!("failed to read subject file '{}'", self.path.display()))?;
        let subjects = parse_subjects(&bytes)
            .with_context(|| format!("invalid subject file '{}'", self.path.display()))?;
        info!(count = subjects.len(), "Subjects loaded");
        Ok(subjects)
    }

    fn list_tasks(&self, now: DateTime<Utc>) -> Result<Vec<Task>> {
        Ok(builtin_tasks(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    fn temp_path(name: &str) -> PathBuf {
        env::temp_dir().join(format!("{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_load_subjects_from_file() {
        let path = temp_path("tactical_grade_subjects_ok.json");
        fs::write(
            &path,
            r#"[{"id":"9","name":"Networks","code":"CS350",
                "components":[{"name":"Lab","scored":8,"total":10,"weight":100}]}]"#,
        )
        .unwrap();

        let subjects = JsonFileCatalog::new(&path).list_subjects().unwrap();
        assert_eq!(subjects.len(), 1);
        assert_eq!(subjects[0].name, "Networks");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let path = temp_path("tactical_grade_subjects_missing.json");
        let _ = fs::remove_file(&path);
        assert!(JsonFileCatalog::new(&path).list_subjects().is_err());
    }

    #[test]
    fn test_invalid_component_rejected_at_load() {
        let path = temp_path("tactical_grade_subjects_bad.json");
        fs::write(
            &path,
            r#"[{"id":"9","name":"Networks","code":"CS350",
                "components":[{"name":"Lab","scored":8,"total":10,"weight":-5}]}]"#,
        )
        .unwrap();

        let err = JsonFileCatalog::new(&path).list_subjects().unwrap_err();
        assert!(format!("{err:#}").contains("weight must be non-negative"));

        fs::remove_file(&path).unwrap();
    }
}
