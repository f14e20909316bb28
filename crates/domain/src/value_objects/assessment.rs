//! Hybrid risk assessment
//!
//! Blends the ML classifier's scam probability with the rule layer:
//! `confidence = min(floor(probability * 70 + rule_score), 100)`. The ML
//! term contributes at most 70 points, so rule hits are what push a
//! borderline message over the labeling thresholds.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::learning_cards::learning_cards_for;
use super::triggers::{TriggerCategory, TriggerLexicon};

/// Weight of the classifier probability in the hybrid score
pub const ML_WEIGHT: f64 = 70.0;

/// Confidence at or above which a message is labeled a high risk scam
pub const HIGH_RISK_THRESHOLD: u8 = 70;

/// Confidence at or above which a message is labeled moderate risk
pub const MODERATE_RISK_THRESHOLD: u8 = 40;

/// Risk bands for an analyzed message, serialized as the user-facing labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLabel {
    #[serde(rename = "High Risk Scam")]
    HighRiskScam,
    #[serde(rename = "Moderate Risk")]
    ModerateRisk,
    #[serde(rename = "Likely Safe")]
    LikelySafe,
}

impl RiskLabel {
    pub fn from_confidence(confidence: u8) -> Self {
        if confidence >= HIGH_RISK_THRESHOLD {
            Self::HighRiskScam
        } else if confidence >= MODERATE_RISK_THRESHOLD {
            Self::ModerateRisk
        } else {
            Self::LikelySafe
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::HighRiskScam => "High Risk Scam",
            Self::ModerateRisk => "Moderate Risk",
            Self::LikelySafe => "Likely Safe",
        }
    }
}

impl fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Full verdict for one analyzed message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScamAssessment {
    pub label: RiskLabel,
    /// Hybrid score clamped to 0..=100
    pub confidence: u8,
    /// Classifier probability, rounded to two decimals for display
    pub ml_probability: f64,
    pub triggers: Vec<TriggerCategory>,
    pub learning_cards: Vec<String>,
}

impl ScamAssessment {
    /// Score a message given the classifier's scam probability.
    ///
    /// The probability is expected in `0.0..=1.0`; the saturating float
    /// cast keeps the result in range even for out-of-band input.
    pub fn evaluate(message: &str, ml_probability: f64, lexicon: &TriggerLexicon) -> Self {
        let scan = lexicon.scan(message);
        let raw = ml_probability * ML_WEIGHT + f64::from(scan.rule_score);
        let confidence = (raw.floor() as u32).min(100) as u8;
        let learning_cards = learning_cards_for(&scan.triggers);

        Self {
            label: RiskLabel::from_confidence(confidence),
            confidence,
            ml_probability: (ml_probability * 100.0).round() / 100.0,
            triggers: scan.triggers,
            learning_cards,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> TriggerLexicon {
        TriggerLexicon::default()
    }

    #[test]
    fn test_clean_message_with_zero_probability() {
        let assessment = ScamAssessment::evaluate("See you at lunch?", 0.0, &lexicon());
        assert_eq!(assessment.confidence, 0);
        assert_eq!(assessment.label, RiskLabel::LikelySafe);
        assert!(assessment.triggers.is_empty());
        assert!(assessment.learning_cards.is_empty());
    }

    #[test]
    fn test_link_urgency_authority_vector() {
        let message = "Verify your bank KYC immediately at http://kyc-update.in";
        let assessment = ScamAssessment::evaluate(message, 0.9, &lexicon());
        // 0.9 * 70 = 63, plus 15 + 10 + 10 from the rule layer
        assert_eq!(assessment.confidence, 98);
        assert_eq!(assessment.label, RiskLabel::HighRiskScam);
        assert_eq!(
            assessment.triggers,
            vec![
                TriggerCategory::SuspiciousLink,
                TriggerCategory::UrgencyManipulation,
                TriggerCategory::AuthorityImpersonation,
            ]
        );
    }

    #[test]
    fn test_confidence_saturates_at_one_hundred() {
        let message = "URGENT: bank account suspended, verify now at http://secure-verify.in";
        let assessment = ScamAssessment::evaluate(message, 0.9, &lexicon());
        assert_eq!(assessment.confidence, 100);
        assert_eq!(assessment.label, RiskLabel::HighRiskScam);
    }

    #[test]
    fn test_floor_keeps_pure_ml_below_high_risk() {
        // 0.999 * 70 = 69.93 floors to 69, one point short of high risk
        let assessment = ScamAssessment::evaluate("hello there", 0.999, &lexicon());
        assert_eq!(assessment.confidence, 69);
        assert_eq!(assessment.label, RiskLabel::ModerateRisk);
    }

    #[test]
    fn test_moderate_boundary_is_inclusive() {
        // Four keyword categories with no link and no ML signal land on 40
        let message = "urgent bank notice: account suspended, prize inside";
        let assessment = ScamAssessment::evaluate(message, 0.0, &lexicon());
        assert_eq!(assessment.confidence, 40);
        assert_eq!(assessment.label, RiskLabel::ModerateRisk);
    }

    #[test]
    fn test_below_moderate_is_likely_safe() {
        let assessment = ScamAssessment::evaluate("you won the office quiz", 0.1, &lexicon());
        // 7 + 10 = 17
        assert_eq!(assessment.confidence, 17);
        assert_eq!(assessment.label, RiskLabel::LikelySafe);
    }

    #[test]
    fn test_out_of_band_probability_stays_in_range() {
        let assessment = ScamAssessment::evaluate("hello", -0.5, &lexicon());
        assert_eq!(assessment.confidence, 0);
        assert_eq!(assessment.label, RiskLabel::LikelySafe);

        let assessment = ScamAssessment::evaluate("hello", 5.0, &lexicon());
        assert_eq!(assessment.confidence, 100);
        assert_eq!(assessment.label, RiskLabel::HighRiskScam);
    }

    #[test]
    fn test_ml_probability_rounded_to_two_decimals() {
        let assessment = ScamAssessment::evaluate("hello", 0.8765, &lexicon());
        assert_eq!(assessment.ml_probability, 0.88);
    }

    #[test]
    fn test_learning_cards_mirror_triggers() {
        let message = "Claim your lottery reward at https://claim-prize.in";
        let assessment = ScamAssessment::evaluate(message, 0.5, &lexicon());
        assert_eq!(assessment.learning_cards.len(), assessment.triggers.len());
        assert!(assessment
            .learning_cards
            .iter()
            .all(|card| !card.is_empty()));
    }

    #[test]
    fn test_label_thresholds() {
        assert_eq!(RiskLabel::from_confidence(100), RiskLabel::HighRiskScam);
        assert_eq!(RiskLabel::from_confidence(70), RiskLabel::HighRiskScam);
        assert_eq!(RiskLabel::from_confidence(69), RiskLabel::ModerateRisk);
        assert_eq!(RiskLabel::from_confidence(40), RiskLabel::ModerateRisk);
        assert_eq!(RiskLabel::from_confidence(39), RiskLabel::LikelySafe);
        assert_eq!(RiskLabel::from_confidence(0), RiskLabel::LikelySafe);
    }

    #[test]
    fn test_label_serializes_to_display_string() {
        let json = serde_json::to_value(RiskLabel::HighRiskScam).unwrap();
        assert_eq!(json, serde_json::json!("High Risk Scam"));
    }

    #[test]
    fn test_assessment_serializes_with_camel_case_keys() {
        let assessment = ScamAssessment::evaluate("hello", 0.25, &lexicon());
        let json = serde_json::to_value(&assessment).unwrap();
        assert_eq!(json["confidence"], 17);
        assert_eq!(json["mlProbability"], 0.25);
        assert_eq!(json["label"], "Likely Safe");
        assert!(json["triggers"].as_array().unwrap().is_empty());
        assert!(json["learningCards"].as_array().unwrap().is_empty());
    }
}
