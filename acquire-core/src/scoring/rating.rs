// General imports
use serde::{Deserialize, Serialize};

/// Band boundary shared by the classifier and the recommendation text.
pub const HIGH_THRESHOLD: f64 = 7.5;
/// Lower band boundary, see [`HIGH_THRESHOLD`].
pub const MEDIUM_THRESHOLD: f64 = 5.0;

/// Discretization of a 0-10 score for filtering, sorting and display.
///
/// `Pending` stands in for an absent score while an evaluation is still
/// in flight.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RiskBand {
    High,
    Medium,
    Low,
    Pending,
}

impl RiskBand {
    pub fn as_str(&self) -> &str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::Pending => "Pending",
        }
    }

    /// Fixed sort ordinal used by the score columns of the company table.
    pub fn ordinal(&self) -> u8 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
            Self::Pending => 0,
        }
    }

    /// Inverse of [`RiskBand::as_str`], used to decode filter selections.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "High" => Some(Self::High),
            "Medium" => Some(Self::Medium),
            "Low" => Some(Self::Low),
            "Pending" => Some(Self::Pending),
            _ => None,
        }
    }

    /// Display color token for band chips.
    ///
    /// A high band means low risk, hence the success token.
    pub fn color_token(&self) -> &str {
        match self {
            Self::High => "success",
            Self::Medium => "warning",
            Self::Low => "primary",
            Self::Pending => "muted",
        }
    }
}

/// Map a score to its band. Boundaries are closed on the lower side:
/// `7.5` is `High` and `5.0` is `Medium`.
pub fn classify(score: f64) -> RiskBand {
    if score >= HIGH_THRESHOLD {
        RiskBand::High
    } else if score >= MEDIUM_THRESHOLD {
        RiskBand::Medium
    } else {
        RiskBand::Low
    }
}

/// [`classify`], with `Pending` for evaluations that have no score yet.
pub fn classify_or_pending(score: Option<f64>) -> RiskBand {
    match score {
        Some(s) => classify(s),
        None => RiskBand::Pending,
    }
}

/// Finer-grained four-band color token used for per-item score emphasis
/// in the detail view. Distinct from the three-band classifier above;
/// both gradations are in active use.
pub fn score_color(score: f64) -> &'static str {
    if score >= 8.5 {
        "success"
    } else if score >= 7.5 {
        "secondary"
    } else if score >= 6.5 {
        "warning"
    } else {
        "primary"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify(7.5), RiskBand::High);
        assert_eq!(classify(7.4999), RiskBand::Medium);
        assert_eq!(classify(5.0), RiskBand::Medium);
        assert_eq!(classify(4.9999), RiskBand::Low);
        assert_eq!(classify(0.0), RiskBand::Low);
        assert_eq!(classify(10.0), RiskBand::High);
    }

    #[test]
    fn test_classify_or_pending() {
        assert_eq!(classify_or_pending(Some(8.0)), RiskBand::High);
        assert_eq!(classify_or_pending(None), RiskBand::Pending);
    }

    #[test]
    fn test_ordinals() {
        assert_eq!(RiskBand::High.ordinal(), 3);
        assert_eq!(RiskBand::Medium.ordinal(), 2);
        assert_eq!(RiskBand::Low.ordinal(), 1);
        assert_eq!(RiskBand::Pending.ordinal(), 0);
    }

    #[test]
    fn test_parse_round_trip() {
        for band in [
            RiskBand::High,
            RiskBand::Medium,
            RiskBand::Low,
            RiskBand::Pending,
        ] {
            assert_eq!(RiskBand::parse(band.as_str()), Some(band));
        }
        assert_eq!(RiskBand::parse("all"), None);
    }

    #[test]
    fn test_score_color_bands() {
        assert_eq!(score_color(9.0), "success");
        assert_eq!(score_color(8.5), "success");
        assert_eq!(score_color(8.0), "secondary");
        assert_eq!(score_color(7.0), "warning");
        assert_eq!(score_color(6.0), "primary");
    }
}
