//! Scam scenario templates and the pool they are drawn from
//!
//! Templates carry placeholder tokens (`{phone}`, `{link}`, `{amount}`,
//! `{last4}`) that are resolved with injected randomness when a scenario
//! is dealt to a player, so the same template reads differently across
//! sessions while its answer key stays fixed.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Red flags a player can raise against a scenario.
///
/// Declaration order doubles as the fixed priority used when picking a
/// dominant weakness out of tied counts.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum FlagCategory {
    Urgency,
    Authority,
    Reward,
    Link,
}

impl FlagCategory {
    pub const ALL: [FlagCategory; 4] = [
        FlagCategory::Urgency,
        FlagCategory::Authority,
        FlagCategory::Reward,
        FlagCategory::Link,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Urgency => "urgency",
            Self::Authority => "authority",
            Self::Reward => "reward",
            Self::Link => "link",
        }
    }
}

impl fmt::Display for FlagCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FlagCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "urgency" => Ok(Self::Urgency),
            "authority" => Ok(Self::Authority),
            "reward" => Ok(Self::Reward),
            "link" => Ok(Self::Link),
            other => Err(DomainError::parse(format!(
                "Unknown flag category: {other}"
            ))),
        }
    }
}

/// What the player decides to do with the message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseAction {
    /// Check through an official channel before acting
    Verify,
    /// Discard the message outright
    Ignore,
}

impl ResponseAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Verify => "verify",
            Self::Ignore => "ignore",
        }
    }
}

impl fmt::Display for ResponseAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ResponseAction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "verify" => Ok(Self::Verify),
            "ignore" => Ok(Self::Ignore),
            other => Err(DomainError::parse(format!("Unknown action: {other}"))),
        }
    }
}

const PHONE_PLACEHOLDER: &str = "{phone}";
const LINK_PLACEHOLDER: &str = "{link}";
const AMOUNT_PLACEHOLDER: &str = "{amount}";
const LAST4_PLACEHOLDER: &str = "{last4}";

/// Domain stems substituted into `{link}` placeholders
pub const LINK_STEMS: [&str; 7] = [
    "secure-pay",
    "bank-kyc-update",
    "rewardz-claim",
    "quick-verif",
    "parcel-track-in",
    "upi-refunds",
    "prize4you",
];

/// One authored scam message with its answer key
#[derive(Debug, Clone)]
pub struct ScenarioTemplate {
    text: String,
    correct_flags: BTreeSet<FlagCategory>,
    correct_action: ResponseAction,
}

impl ScenarioTemplate {
    pub fn new(
        text: impl Into<String>,
        correct_flags: impl IntoIterator<Item = FlagCategory>,
        correct_action: ResponseAction,
    ) -> Self {
        Self {
            text: text.into(),
            correct_flags: correct_flags.into_iter().collect(),
            correct_action,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn correct_flags(&self) -> &BTreeSet<FlagCategory> {
        &self.correct_flags
    }

    pub fn correct_action(&self) -> ResponseAction {
        self.correct_action
    }

    /// Resolve every placeholder with fresh random values.
    ///
    /// Placeholders are resolved in a fixed order (phone, link, amount,
    /// last4) and draws only happen for placeholders actually present, so
    /// a seeded generator reproduces the same scenario text.
    pub fn instantiate<R: Rng>(&self, rng: &mut R) -> GeneratedScenario {
        let mut text = self.text.clone();

        if text.contains(PHONE_PLACEHOLDER) {
            let digits = rng.gen_range(1_000_000_000u64..=9_999_999_999);
            text = text.replace(PHONE_PLACEHOLDER, &format!("+91{digits}"));
        }
        if text.contains(LINK_PLACEHOLDER) {
            let stem = LINK_STEMS[rng.gen_range(0..LINK_STEMS.len())];
            text = text.replace(LINK_PLACEHOLDER, &format!("http://{stem}.in"));
        }
        if text.contains(AMOUNT_PLACEHOLDER) {
            let amount = rng.gen_range(1_200u32..=95_000);
            text = text.replace(AMOUNT_PLACEHOLDER, &amount.to_string());
        }
        if text.contains(LAST4_PLACEHOLDER) {
            let last4 = rng.gen_range(1_000u16..=9_999);
            text = text.replace(LAST4_PLACEHOLDER, &last4.to_string());
        }

        GeneratedScenario {
            text,
            correct_flags: self.correct_flags.clone(),
            correct_action: self.correct_action,
        }
    }
}

/// A dealt scenario with placeholders resolved, kept on the session so
/// the answer key is scored against exactly what the player saw
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedScenario {
    text: String,
    correct_flags: BTreeSet<FlagCategory>,
    correct_action: ResponseAction,
}

impl GeneratedScenario {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn correct_flags(&self) -> &BTreeSet<FlagCategory> {
        &self.correct_flags
    }

    pub fn correct_action(&self) -> ResponseAction {
        self.correct_action
    }
}

/// The set of templates a game draws from.
///
/// Immutable once built. Construction rejects an empty set, so the
/// picking methods can rely on at least one template existing.
#[derive(Debug, Clone)]
pub struct ScenarioPool {
    templates: Vec<ScenarioTemplate>,
}

impl ScenarioPool {
    pub fn new(templates: Vec<ScenarioTemplate>) -> Result<Self, DomainError> {
        if templates.is_empty() {
            return Err(DomainError::EmptyScenarioPool);
        }
        Ok(Self { templates })
    }

    /// The stock pool of Indian SMS and call scams shipped with the game
    pub fn builtin() -> Self {
        use FlagCategory::{Authority, Link, Reward, Urgency};
        use ResponseAction::{Ignore, Verify};

        let templates = vec![
            ScenarioTemplate::new(
                "Dear customer, your SBI account will be blocked today. \
                 Complete KYC immediately at {link} to avoid suspension.",
                [Urgency, Authority, Link],
                Verify,
            ),
            ScenarioTemplate::new(
                "Congratulations! Your mobile number won Rs {amount} in the \
                 KBC lucky draw. Claim now at {link}.",
                [Urgency, Reward, Link],
                Ignore,
            ),
            ScenarioTemplate::new(
                "Electricity bill overdue. Power will be disconnected tonight. \
                 Call officer {phone} immediately to keep supply on.",
                [Urgency, Authority],
                Verify,
            ),
            ScenarioTemplate::new(
                "Your debit card ending {last4} has been blocked by the bank. \
                 Reactivate at {link}.",
                [Authority, Link],
                Verify,
            ),
            ScenarioTemplate::new(
                "You have received Rs {amount} cashback from your wallet \
                 provider! Click {link} to add it to your balance.",
                [Reward, Link],
                Ignore,
            ),
            ScenarioTemplate::new(
                "Income Tax Department: refund of Rs {amount} approved. \
                 Verify your bank account at {link} to receive it.",
                [Authority, Reward, Link],
                Verify,
            ),
            ScenarioTemplate::new(
                "India Post: your parcel is held at customs. Pay Rs {amount} \
                 duty today or it will be returned. Helpline {phone}.",
                [Urgency, Authority],
                Ignore,
            ),
            ScenarioTemplate::new(
                "Cyber Police notice: your Aadhaar is linked to illegal \
                 activity. Call {phone} right now to avoid arrest.",
                [Urgency, Authority],
                Ignore,
            ),
            ScenarioTemplate::new(
                "Earn Rs {amount} per week working from home. Limited seats! \
                 Register today at {link}.",
                [Urgency, Reward, Link],
                Ignore,
            ),
            ScenarioTemplate::new(
                "Hi, I transferred Rs {amount} to your UPI by mistake. \
                 Please return it now to {phone}, it's urgent.",
                [Urgency],
                Verify,
            ),
        ];

        Self { templates }
    }

    pub fn templates(&self) -> &[ScenarioTemplate] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Draw one template uniformly from the whole pool
    pub fn pick_uniform<R: Rng>(&self, rng: &mut R) -> &ScenarioTemplate {
        &self.templates[rng.gen_range(0..self.templates.len())]
    }

    /// Draw one template whose answer key contains the given flag.
    ///
    /// Falls back to the whole pool when no template carries the flag.
    pub fn pick_for_flag<R: Rng>(&self, flag: FlagCategory, rng: &mut R) -> &ScenarioTemplate {
        let matching: Vec<&ScenarioTemplate> = self
            .templates
            .iter()
            .filter(|template| template.correct_flags.contains(&flag))
            .collect();

        if matching.is_empty() {
            self.pick_uniform(rng)
        } else {
            matching[rng.gen_range(0..matching.len())]
        }
    }
}
