//! Conversation policy for the help-desk agent
//!
//! The call script and pricing rules are business policy interpreted by the
//! external language model, not program logic. They live here as data so the
//! price points are pinned down in one place and covered by tests; nothing
//! in this crate re-validates a quoted price against the table.

use std::fmt::Write as _;

/// The four supported issue categories with their fixed service fees
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueCategory {
    WifiDown,
    EmailLogin,
    SlowPerformance,
    Printer,
}

impl IssueCategory {
    /// All categories, in the order they are quoted to callers
    pub const ALL: [Self; 4] = [
        Self::WifiDown,
        Self::EmailLogin,
        Self::SlowPerformance,
        Self::Printer,
    ];

    /// Fixed fee in US dollars
    #[must_use]
    pub const fn price_usd(self) -> u32 {
        match self {
            Self::WifiDown => 20,
            Self::EmailLogin => 15,
            Self::SlowPerformance => 25,
            Self::Printer => 10,
        }
    }

    /// Spoken-style label used when quoting the fee
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::WifiDown => "Wi-Fi not working",
            Self::EmailLogin => "Email login issues (password reset)",
            Self::SlowPerformance => "Slow laptop performance (CPU change)",
            Self::Printer => "Printer problems (power plug change)",
        }
    }
}

/// Render the pricing rules section of the agent instructions
#[must_use]
pub fn pricing_rules() -> String {
    let mut out = String::new();
    for category in IssueCategory::ALL {
        let _ = writeln!(out, "- {}: ${}", category.label(), category.price_usd());
    }
    out
}

/// System instructions handed verbatim to the external language model
///
/// This is the entire "logic layer" of the conversation: greeting, the
/// mandatory collection order, pricing, and when to call the
/// `create_ticket` / `edit_ticket` tools. The model enforces it; this crate
/// only serves it.
#[must_use]
pub fn agent_instructions() -> String {
    format!(
        "\
You are a professional, efficient IT Help Desk Voice Assistant. Your goal is \
to help users report IT issues and create a support ticket through natural \
conversation.

### CALL FLOW:
1. GREET: Start by welcoming the caller to the IT Help Desk.
2. COLLECT DETAILS: You MUST collect Name, Email, Phone, and Physical Address.
3. UNDERSTAND ISSUE: Ask for a description of the IT problem.
4. QUOTE PRICE: Once the issue is identified, state the specific fee from the \
PRICING RULES below.
5. CONFIRM: Review all details with the user. If they need to change \
something, use the 'edit_ticket' tool.
6. CREATE: Once they say \"Yes\" to the final details and price, use the \
'create_ticket' tool.
7. FINISH: Provide the confirmation number and tell them a confirmation \
email has been sent.

### PRICING RULES (MANDATORY):
{pricing}
### OPERATIONAL GUIDELINES:
- BE CONCISE: Use short, spoken-word friendly sentences. Avoid long lists to \
keep latency low.
- BE FLEXIBLE: If the user says \"Wait, my address is actually 20 Main St,\" \
immediately use 'edit_ticket' to update it.
- HANDLING INTERRUPTIONS: If the user speaks while you are talking, stop and \
listen.
- NO HALLUCINATIONS: If an issue is not in the list above, tell them you can \
only handle those four specific types of problems.
- CONFIRMATION: Do not create the ticket until the user explicitly agrees to \
the service fee.
",
        pricing = pricing_rules()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_table_values() {
        assert_eq!(IssueCategory::WifiDown.price_usd(), 20);
        assert_eq!(IssueCategory::EmailLogin.price_usd(), 15);
        assert_eq!(IssueCategory::SlowPerformance.price_usd(), 25);
        assert_eq!(IssueCategory::Printer.price_usd(), 10);
    }

    #[test]
    fn test_pricing_rules_contains_all_price_points() {
        let rules = pricing_rules();
        assert!(rules.contains("Wi-Fi not working: $20"));
        assert!(rules.contains("Email login issues (password reset): $15"));
        assert!(rules.contains("Slow laptop performance (CPU change): $25"));
        assert!(rules.contains("Printer problems (power plug change): $10"));
    }

    #[test]
    fn test_instructions_reference_both_tools() {
        let instructions = agent_instructions();
        assert!(instructions.contains("'create_ticket'"));
        assert!(instructions.contains("'edit_ticket'"));
        // The full price table is embedded
        for category in IssueCategory::ALL {
            assert!(instructions.contains(category.label()));
        }
    }
}
