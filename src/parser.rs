//! JSON parser for subject data.

use crate::error::Result;
use crate::simulator::types::Subject;

/// Decodes a JSON array of subjects and validates every component.
///
/// # Errors
///
/// Returns [`GradeError::Parse`](crate::error::GradeError::Parse) for malformed
/// JSON and the validation error of the first offending subject otherwise.
pub fn parse_subjects(bytes: &[u8]) -> Result<Vec<Subject>> {
    let subjects: Vec<Subject> = serde_json::from_slice(bytes)?;
    for subject in &subjects {
        subject.validate()?;
    }
    Ok(subjects)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GradeError;

    #[test]
    fn test_parse_empty_array() {
        let subjects = parse_subjects(b"[]").unwrap();
        assert!(subjects.is_empty());
    }

    #[test]
    fn test_parse_invalid_bytes() {
        let result = parse_subjects(&[0xFF, 0xFE, 0x00, 0x01]);
        assert!(matches!(result, Err(GradeError::Parse(_))));
    }

    #[test]
    fn test_parse_valid_minimal_subject() {
        let json = br#"[{
            "id": "7", "name": "Compilers", "code": "CS410",
            "components": [
                { "name": "Lab", "scored": 9, "total": 10, "weight": 40 },
                { "name": "Final", "scored": 0, "total": 100, "weight": 60, "pending": true }
            ]
        }]"#;
        let subjects = parse_subjects(json).unwrap();

        assert_eq!(subjects.len(), 1);
        assert_eq!(subjects[0].code, "CS410");
        assert!(subjects[0].components[1].pending);
        assert!(!subjects[0].components[0].pending);
    }

    #[test]
    fn test_parse_rejects_zero_total_at_load() {
        let json = br#"[{
            "id": "7", "name": "Compilers", "code": "CS410",
            "components": [{ "name": "Lab", "scored": 0, "total": 0, "weight": 40 }]
        }]"#;
        assert!(matches!(
            parse_subjects(json),
            Err(GradeError::InvalidComponent { .. })
        ));
    }
}
