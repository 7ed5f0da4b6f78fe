//! Keyword-matched support assistant.
//!
//! Replies come from an explicit ordered rule table: case-insensitive
//! substring matching, evaluated top to bottom, first match wins, with
//! a default fallback. The precedence of the table is part of the
//! contract: "open ... account" outranks "loan" even when both occur.

/// How a rule's keywords must appear in the (lowercased) message
enum Trigger {
    /// Every keyword must be present
    All(&'static [&'static str]),
    /// At least one keyword must be present
    Any(&'static [&'static str]),
}

impl Trigger {
    fn matches(&self, message: &str) -> bool {
        match self {
            Trigger::All(keywords) => keywords.iter().all(|kw| message.contains(kw)),
            Trigger::Any(keywords) => keywords.iter().any(|kw| message.contains(kw)),
        }
    }
}

struct Rule {
    trigger: Trigger,
    reply: &'static str,
}

const RULES: &[Rule] = &[
    Rule {
        trigger: Trigger::All(&["open", "account"]),
        reply: "Sure! To open a foreign bank account, please complete your KYC first in the FinLink dashboard. You can find the KYC section in the main menu.",
    },
    Rule {
        trigger: Trigger::Any(&["loan"]),
        reply: "Your loan application is currently under review. We'll notify you via push notification and email as soon as it's approved. You can check the Loan page for detailed status.",
    },
    Rule {
        trigger: Trigger::Any(&["withdraw"]),
        reply: "Withdrawals to your linked account are typically processed within 24 business hours after verification. You can initiate a withdrawal from the Dashboard.",
    },
    Rule {
        trigger: Trigger::Any(&["convert", "currency"]),
        reply: "Currency conversion is done at the real-time forex rate, which you can view in the Wallet section. A small conversion fee applies.",
    },
    Rule {
        trigger: Trigger::Any(&["transaction", "history"]),
        reply: "You can view your full transaction history by navigating to the 'Transactions' page from the main menu. You can also filter by date and type.",
    },
    Rule {
        trigger: Trigger::Any(&["kyc"]),
        reply: "To complete KYC, please go to the KYC page and upload a clear picture of your Aadhaar/Passport and PAN card. You will also need to complete a quick facial verification step.",
    },
    Rule {
        trigger: Trigger::Any(&["human", "agent", "support"]),
        reply: "I'm connecting you with a human support representative now. Please wait a moment.",
    },
];

const DEFAULT_REPLY: &str = "I didn't quite catch that. Could you please rephrase? You can also try one of the suggestions below or ask to speak with a human support rep.";

/// Resolves the reply for a free-text message. Always yields a reply;
/// unmatched input falls through to the default.
pub fn reply_for(message: &str) -> &'static str {
    let normalized = message.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.trigger.matches(&normalized))
        .map(|rule| rule.reply)
        .unwrap_or(DEFAULT_REPLY)
}
