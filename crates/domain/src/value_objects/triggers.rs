//! Psychological trigger detection
//!
//! A fixed keyword lexicon scores raw message text for the manipulation
//! patterns scam messages lean on. Matching is lowercase substring
//! containment, which keeps the domain free of a regex dependency and
//! handles multi-word phrases like "income tax" the same way as single
//! keywords.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Points awarded when a message embeds an http(s) link
pub const LINK_SCORE: u8 = 15;

/// Points awarded per keyword category with at least one hit
pub const KEYWORD_SCORE: u8 = 10;

/// Manipulation patterns the rule layer can detect.
///
/// Serialized under the human-readable names shown to end users, which
/// double as the wire form in analysis responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriggerCategory {
    #[serde(rename = "Suspicious Link")]
    SuspiciousLink,
    #[serde(rename = "Urgency Manipulation")]
    UrgencyManipulation,
    #[serde(rename = "Authority Impersonation")]
    AuthorityImpersonation,
    #[serde(rename = "Fear Tactic")]
    FearTactic,
    #[serde(rename = "Reward Lure")]
    RewardLure,
}

impl TriggerCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::SuspiciousLink => "Suspicious Link",
            Self::UrgencyManipulation => "Urgency Manipulation",
            Self::AuthorityImpersonation => "Authority Impersonation",
            Self::FearTactic => "Fear Tactic",
            Self::RewardLure => "Reward Lure",
        }
    }
}

impl fmt::Display for TriggerCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Keyword lists backing the rule layer.
///
/// Built once at startup and shared read-only across requests. Each
/// category contributes [`KEYWORD_SCORE`] at most once per message no
/// matter how many of its keywords appear.
#[derive(Debug, Clone)]
pub struct TriggerLexicon {
    urgency: Vec<String>,
    authority: Vec<String>,
    fear: Vec<String>,
    reward: Vec<String>,
}

impl TriggerLexicon {
    pub fn new(
        urgency: Vec<String>,
        authority: Vec<String>,
        fear: Vec<String>,
        reward: Vec<String>,
    ) -> Self {
        Self {
            urgency,
            authority,
            fear,
            reward,
        }
    }

    /// Scan a message and return the rule score plus detected triggers.
    ///
    /// The link check runs first, then the keyword categories in fixed
    /// order, so trigger lists come out in a stable order for equal input.
    pub fn scan(&self, message: &str) -> TriggerScan {
        let msg = message.to_lowercase();
        let mut rule_score = 0u8;
        let mut triggers = Vec::new();

        if msg.contains("http://") || msg.contains("https://") {
            rule_score += LINK_SCORE;
            triggers.push(TriggerCategory::SuspiciousLink);
        }

        let keyword_groups = [
            (&self.urgency, TriggerCategory::UrgencyManipulation),
            (&self.authority, TriggerCategory::AuthorityImpersonation),
            (&self.fear, TriggerCategory::FearTactic),
            (&self.reward, TriggerCategory::RewardLure),
        ];
        for (words, category) in keyword_groups {
            if words.iter().any(|word| msg.contains(word.as_str())) {
                rule_score += KEYWORD_SCORE;
                triggers.push(category);
            }
        }

        TriggerScan {
            rule_score,
            triggers,
        }
    }
}

impl Default for TriggerLexicon {
    /// The stock lexicon tuned for Indian phishing and vishing text
    fn default() -> Self {
        Self::new(
            owned(&["urgent", "immediately", "now", "expire", "limited"]),
            owned(&["bank", "rbi", "income tax", "police", "govt"]),
            owned(&["blocked", "suspended", "penalty", "legal action"]),
            owned(&["won", "reward", "cashback", "lottery", "prize"]),
        )
    }
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|word| word.to_string()).collect()
}

/// Outcome of scanning one message against the lexicon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerScan {
    pub rule_score: u8,
    pub triggers: Vec<TriggerCategory>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_message_scores_zero() {
        let scan = TriggerLexicon::default().scan("See you at lunch tomorrow?");
        assert_eq!(scan.rule_score, 0);
        assert!(scan.triggers.is_empty());
    }

    #[test]
    fn test_http_link_scores_fifteen() {
        let scan = TriggerLexicon::default().scan("visit http://example.in for details");
        assert_eq!(scan.rule_score, LINK_SCORE);
        assert_eq!(scan.triggers, vec![TriggerCategory::SuspiciousLink]);
    }

    #[test]
    fn test_https_link_detected_case_insensitively() {
        let scan = TriggerLexicon::default().scan("Visit HTTPS://Example.in");
        assert_eq!(scan.rule_score, LINK_SCORE);
        assert_eq!(scan.triggers, vec![TriggerCategory::SuspiciousLink]);
    }

    #[test]
    fn test_bare_domain_is_not_a_link() {
        let scan = TriggerLexicon::default().scan("visit example.in for details");
        assert_eq!(scan.rule_score, 0);
    }

    #[test]
    fn test_each_keyword_category_scores_ten() {
        let lexicon = TriggerLexicon::default();
        let cases = [
            ("this is URGENT", TriggerCategory::UrgencyManipulation),
            ("call from your bank", TriggerCategory::AuthorityImpersonation),
            ("account suspended", TriggerCategory::FearTactic),
            ("you won a prize", TriggerCategory::RewardLure),
        ];
        for (message, expected) in cases {
            let scan = lexicon.scan(message);
            assert_eq!(scan.rule_score, KEYWORD_SCORE, "message: {message}");
            assert!(scan.triggers.contains(&expected), "message: {message}");
        }
    }

    #[test]
    fn test_category_counted_once_despite_multiple_hits() {
        let scan = TriggerLexicon::default().scan("urgent, act immediately, offer expires now");
        assert_eq!(scan.rule_score, KEYWORD_SCORE);
        assert_eq!(scan.triggers, vec![TriggerCategory::UrgencyManipulation]);
    }

    #[test]
    fn test_multi_word_phrase_matches() {
        let scan = TriggerLexicon::default().scan("notice from the income tax department");
        assert_eq!(scan.triggers, vec![TriggerCategory::AuthorityImpersonation]);
    }

    #[test]
    fn test_keywords_match_inside_larger_words() {
        // Substring containment is intentional, "renowned" carries "now"
        let scan = TriggerLexicon::default().scan("a renowned artist");
        assert_eq!(scan.triggers, vec![TriggerCategory::UrgencyManipulation]);
    }

    #[test]
    fn test_link_reported_before_keyword_categories() {
        let scan = TriggerLexicon::default()
            .scan("Account suspended! Verify now at http://verify-kyc.in or face penalty");
        assert_eq!(
            scan.triggers,
            vec![
                TriggerCategory::SuspiciousLink,
                TriggerCategory::UrgencyManipulation,
                TriggerCategory::FearTactic,
            ]
        );
        assert_eq!(scan.rule_score, LINK_SCORE + 2 * KEYWORD_SCORE);
    }

    #[test]
    fn test_classic_suspension_text_hits_four_categories() {
        // "suspended" is on the fear list, so this lands on 45 rather
        // than the 35 a three-category reading would give
        let scan = TriggerLexicon::default()
            .scan("URGENT: Your bank account will be suspended! Verify now at http://x.in");
        assert_eq!(scan.rule_score, 45);
        assert_eq!(
            scan.triggers,
            vec![
                TriggerCategory::SuspiciousLink,
                TriggerCategory::UrgencyManipulation,
                TriggerCategory::AuthorityImpersonation,
                TriggerCategory::FearTactic,
            ]
        );
    }

    #[test]
    fn test_all_categories_cap_at_fifty_five() {
        let scan = TriggerLexicon::default().scan(
            "URGENT: bank account blocked, claim your lottery reward at https://claim.in",
        );
        assert_eq!(scan.rule_score, 55);
        assert_eq!(scan.triggers.len(), 5);
    }

    #[test]
    fn test_custom_lexicon_overrides_stock_words() {
        let lexicon = TriggerLexicon::new(
            vec!["jaldi".to_string()],
            vec![],
            vec![],
            vec![],
        );
        let scan = lexicon.scan("jaldi karo");
        assert_eq!(scan.triggers, vec![TriggerCategory::UrgencyManipulation]);
        assert_eq!(TriggerLexicon::default().scan("jaldi karo").rule_score, 0);
    }

    #[test]
    fn test_category_serializes_to_display_name() {
        let json = serde_json::to_value(TriggerCategory::SuspiciousLink)
            .expect("serialization should succeed");
        assert_eq!(json, serde_json::json!("Suspicious Link"));

        let back: TriggerCategory = serde_json::from_value(json)
            .expect("deserialization should succeed");
        assert_eq!(back, TriggerCategory::SuspiciousLink);
    }

    #[test]
    fn test_display_matches_wire_name() {
        assert_eq!(
            TriggerCategory::AuthorityImpersonation.to_string(),
            "Authority Impersonation"
        );
    }
}
