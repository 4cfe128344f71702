//! Test utilities for helpdesk-agent
//!
//! Common fixtures shared by unit tests across the crate.

#![cfg(test)]

use crate::core::NewTicket;

/// A complete, valid set of ticket fields with the given confirmation number
pub fn sample_ticket_fields(confirmation: &str) -> NewTicket {
    NewTicket {
        customer_name: "Jane Doe".to_string(),
        customer_email: "jane@example.com".to_string(),
        customer_phone: "555-1234".to_string(),
        customer_address: "1 Elm St".to_string(),
        issue_description: "Wi-Fi not working".to_string(),
        quoted_price: 20.0,
        confirmation_number: confirmation.to_string(),
    }
}
