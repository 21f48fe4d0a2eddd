use serde::{Deserialize, Serialize};
use std::fmt;

/// Compliance tier derived from a predicted percentage.
///
/// Variants are declared in ascending rank so the derived `Ord` follows it.
///
/// | Range   | Tier      |
/// |---------|-----------|
/// | >= 90   | Excellent |
/// | >= 85   | OnTrack   |
/// | >= 75   | AtRisk    |
/// | < 75    | Critical  |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComplianceTier {
    Critical,
    AtRisk,
    OnTrack,
    Excellent,
}

impl ComplianceTier {
    pub fn label(self) -> &'static str {
        match self {
            ComplianceTier::Excellent => "Excellent",
            ComplianceTier::OnTrack => "On Track",
            ComplianceTier::AtRisk => "At Risk",
            ComplianceTier::Critical => "Critical",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            ComplianceTier::Excellent => "excellent",
            ComplianceTier::OnTrack => "on-track",
            ComplianceTier::AtRisk => "at-risk",
            ComplianceTier::Critical => "critical",
        }
    }
}

impl fmt::Display for ComplianceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classifies a percentage. Boundaries are inclusive; NaN lands in `Critical`.
pub fn classify(p: f64) -> ComplianceTier {
    match p {
        p if p >= 90.0 => ComplianceTier::Excellent,
        p if p >= 85.0 => ComplianceTier::OnTrack,
        p if p >= 75.0 => ComplianceTier::AtRisk,
        _ => ComplianceTier::Critical,
    }
}

/// One row of the threshold checklist shown beside a prediction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThresholdCheck {
    pub threshold: f64,
    pub label: &'static str,
    pub reached: bool,
}

static THRESHOLDS: &[(f64, &str)] = &[(90.0, "Excellent"), (85.0, "On Track"), (75.0, "Minimum")];

pub fn threshold_checklist(p: f64) -> Vec<ThresholdCheck> {
    THRESHOLDS
        .iter()
        .map(|&(threshold, label)| ThresholdCheck {
            threshold,
            label,
            reached: p >= threshold,
        })
        .collect()
}

pub fn tactical_insight(p: f64) -> &'static str {
    match p {
        p if p >= 90.0 => {
            "Excellent trajectory! Maintain current performance to secure top grades."
        }
        p if p >= 85.0 => {
            "On track for strong performance. Push pending assessments to reach 90%+."
        }
        _ => "Critical: Focus on high-weight pending assessments to improve compliance.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify(100.0), ComplianceTier::Excellent);
        assert_eq!(classify(90.0), ComplianceTier::Excellent);
        assert_eq!(classify(89.999), ComplianceTier::OnTrack);
        assert_eq!(classify(85.0), ComplianceTier::OnTrack);
        assert_eq!(classify(84.999), ComplianceTier::AtRisk);
        assert_eq!(classify(75.0), ComplianceTier::AtRisk);
        assert_eq!(classify(74.999), ComplianceTier::Critical);
        assert_eq!(classify(0.0), ComplianceTier::Critical);
    }

    #[test]
    fn test_classify_outside_percentage_range() {
        assert_eq!(classify(-20.0), ComplianceTier::Critical);
        assert_eq!(classify(140.0), ComplianceTier::Excellent);
        assert_eq!(classify(f64::NAN), ComplianceTier::Critical);
    }

    #[test]
    fn test_classify_is_monotonic() {
        let mut last = classify(-10.0);
        let mut p = -10.0;
        while p <= 110.0 {
            let tier = classify(p);
            assert!(tier >= last, "tier dropped at {p}");
            last = tier;
            p += 0.25;
        }
    }

    #[test]
    fn test_slug_matches_serde_form() {
        for tier in [
            ComplianceTier::Excellent,
            ComplianceTier::OnTrack,
            ComplianceTier::AtRisk,
            ComplianceTier::Critical,
        ] {
            let json = serde_json::to_string(&tier).unwrap();
            assert_eq!(json, format!("\"{}\"", tier.slug()));
        }
    }

    #[test]
    fn test_threshold_checklist() {
        let checks = threshold_checklist(86.0);
        let reached: Vec<_> = checks.iter().map(|c| (c.label, c.reached)).collect();
        assert_eq!(
            reached,
            vec![("Excellent", false), ("On Track", true), ("Minimum", true)]
        );
    }

    #[test]
    fn test_tactical_insight_bands() {
        assert!(tactical_insight(95.0).starts_with("Excellent"));
        assert!(tactical_insight(87.0).starts_with("On track"));
        assert!(tactical_insight(80.0).starts_with("Critical"));
    }
}
