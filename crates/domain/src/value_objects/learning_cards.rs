//! Educational one-liners attached to analysis results
//!
//! Each detected trigger maps to one card telling the user what the
//! pattern looks like and what to do instead. Cards come back in the
//! same order as the triggers that produced them.

use super::triggers::TriggerCategory;

/// The card text for a single trigger category
pub fn learning_card(trigger: TriggerCategory) -> &'static str {
    match trigger {
        TriggerCategory::SuspiciousLink => {
            "Real institutions never ask you to click unfamiliar links. \
             Type the official website address yourself."
        }
        TriggerCategory::UrgencyManipulation => {
            "Scammers rush you so you act before you think. \
             A genuine deadline survives a ten-minute pause."
        }
        TriggerCategory::AuthorityImpersonation => {
            "Banks, RBI, and government offices never demand action over chat. \
             Call the official helpline to confirm."
        }
        TriggerCategory::FearTactic => {
            "Threats of blocking, penalties, or legal action are pressure tactics. \
             Real notices arrive in writing."
        }
        TriggerCategory::RewardLure => {
            "You cannot win a lottery you never entered. \
             Unexpected prizes are bait for your money or credentials."
        }
    }
}

/// Cards for every trigger found in a message, in detection order
pub fn learning_cards_for(triggers: &[TriggerCategory]) -> Vec<String> {
    triggers
        .iter()
        .map(|trigger| learning_card(*trigger).to_string())
        .collect()
}
