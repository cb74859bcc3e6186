//! # Rule-Based Recommendations
//!
//! A short, fixed action list keyed on whether overall compliance meets
//! the target. Below target, the first recommendation quotes the gap in
//! whole percentage points (truncated, never rounded up).

/// Default compliance target (95%).
pub const DEFAULT_TARGET: f64 = 0.95;

/// Gap to target in whole percentage points, truncated toward zero.
pub fn gap_points(overall: f64, target: f64) -> i64 {
    (target * 100.0 - overall * 100.0) as i64
}

/// Recommendations for an overall compliance fraction against a target.
pub fn recommendations(overall: f64, target: f64) -> Vec<String> {
    if overall < target {
        let gap = gap_points(overall, target);
        vec![
            format!("Add EPR prompts / ward board reminders to close ~{gap}% gap."),
            "Include a mandatory field in the form; add 5-minute huddle teaching.".to_string(),
            "Schedule a re-audit next month to confirm improvement.".to_string(),
        ]
    } else {
        vec!["Maintain gains via induction teaching and monthly spot checks.".to_string()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_target_yields_three_actions_with_gap() {
        let recs = recommendations(0.80, DEFAULT_TARGET);
        assert_eq!(recs.len(), 3);
        assert_eq!(
            recs[0],
            "Add EPR prompts / ward board reminders to close ~15% gap."
        );
        assert!(recs[1].starts_with("Include a mandatory field"));
        assert!(recs[2].starts_with("Schedule a re-audit"));
    }

    #[test]
    fn gap_is_truncated_not_rounded() {
        // 95 - 80.9 = 14.1 -> 14; 95 - 80.1 = 14.9 -> 14.
        assert_eq!(gap_points(0.809, DEFAULT_TARGET), 14);
        assert_eq!(gap_points(0.801, DEFAULT_TARGET), 14);
    }

    #[test]
    fn zero_compliance_gap_is_full_target() {
        let recs = recommendations(0.0, DEFAULT_TARGET);
        assert!(recs[0].contains("~95% gap"));
    }

    #[test]
    fn tiny_shortfall_reports_zero_gap() {
        let recs = recommendations(0.945, DEFAULT_TARGET);
        assert_eq!(recs.len(), 3);
        assert!(recs[0].contains("~0% gap"));
    }

    #[test]
    fn at_or_above_target_yields_maintenance_action() {
        for overall in [0.95, 0.99, 1.0] {
            let recs = recommendations(overall, DEFAULT_TARGET);
            assert_eq!(
                recs,
                vec!["Maintain gains via induction teaching and monthly spot checks."]
            );
        }
    }

    #[test]
    fn custom_target_moves_the_threshold() {
        assert_eq!(recommendations(0.85, 0.80).len(), 1);
        let recs = recommendations(0.85, 0.90);
        assert!(recs[0].contains("~5% gap"));
    }
}
