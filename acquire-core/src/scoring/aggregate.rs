// mod imports
use crate::model::evaluation::Scores;
use crate::model::rubric::RubricItem;

use super::rating::{HIGH_THRESHOLD, MEDIUM_THRESHOLD};

pub const LOW_RISK_RECOMMENDATION: &str = "Low Risk — Proceed with standard onboarding";
pub const MEDIUM_RISK_RECOMMENDATION: &str = "Medium Risk — Proceed with enhanced monitoring";
pub const HIGH_RISK_RECOMMENDATION: &str = "High Risk — Escalate to compliance review";

/// Arithmetic mean of the item scores, un-rounded. Empty input is `0`,
/// not an error.
pub fn average(items: &[RubricItem]) -> f64 {
    if items.is_empty() {
        return 0.0;
    }
    items.iter().map(|item| item.score).sum::<f64>() / items.len() as f64
}

/// Blend the two group averages into the final score.
pub fn final_score(your_avg: f64, general_avg: f64) -> f64 {
    (your_avg + general_avg) / 2.0
}

/// Round to the one decimal of precision carried by persisted scores.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Recommendation text for a final score. The thresholds are the same
/// band boundaries used by the classifier.
pub fn recommendation(final_score: f64) -> &'static str {
    if final_score >= HIGH_THRESHOLD {
        LOW_RISK_RECOMMENDATION
    } else if final_score >= MEDIUM_THRESHOLD {
        MEDIUM_RISK_RECOMMENDATION
    } else {
        HIGH_RISK_RECOMMENDATION
    }
}

/// Assemble the persisted score block from the two rubric groups,
/// applying the one-decimal rounding at this boundary.
pub fn score_rubric(your: &[RubricItem], general: &[RubricItem]) -> Scores {
    let your_policy_avg = round1(average(your));
    let general_policy_avg = round1(average(general));
    let blended = round1(final_score(your_policy_avg, general_policy_avg));
    Scores {
        your_policy_avg,
        general_policy_avg,
        final_score: blended,
        recommendation: recommendation(blended).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(score: f64) -> RubricItem {
        RubricItem {
            category: "Test".to_string(),
            rating: "Adequate".to_string(),
            score,
            sources: Vec::new(),
            policy_grounding: None,
        }
    }

    #[test]
    fn test_average_empty_is_zero() {
        assert_eq!(average(&[]), 0.0);
    }

    #[test]
    fn test_average() {
        assert_eq!(average(&[item(6.0), item(8.0)]), 7.0);
    }

    #[test]
    fn test_final_score() {
        assert_eq!(final_score(7.0, 9.0), 8.0);
    }

    #[test]
    fn test_round1() {
        assert_eq!(round1(7.25), 7.3);
        assert_eq!(round1(7.04), 7.0);
        assert_eq!(round1(0.0), 0.0);
    }

    #[test]
    fn test_recommendation_bands() {
        assert!(recommendation(8.0).contains("Low Risk"));
        assert!(recommendation(7.5).contains("Low Risk"));
        assert!(recommendation(6.0).contains("Medium Risk"));
        assert!(recommendation(3.0).contains("Escalate"));
    }

    #[test]
    fn test_score_rubric_invariant() {
        let scores = score_rubric(&[item(6.0), item(8.0)], &[item(9.0)]);
        assert_eq!(scores.your_policy_avg, 7.0);
        assert_eq!(scores.general_policy_avg, 9.0);
        assert_eq!(scores.final_score, 8.0);
        assert_eq!(scores.recommendation, LOW_RISK_RECOMMENDATION);
    }

    #[test]
    fn test_score_rubric_empty_fallback() {
        let scores = score_rubric(&[], &[]);
        assert_eq!(scores.final_score, 0.0);
        assert_eq!(scores.recommendation, HIGH_RISK_RECOMMENDATION);
    }
}
