use super::{Status, Ticket, TicketId};
use chrono::{DateTime, Utc};

/// Builder for creating Ticket instances
///
/// Used by the stores and by tests; defaults match the creation path
/// (status `Confirmed`, `created_at` now).
#[derive(Default)]
pub struct TicketBuilder {
    id: Option<TicketId>,
    customer_name: Option<String>,
    customer_email: Option<String>,
    customer_phone: Option<String>,
    customer_address: Option<String>,
    issue_description: Option<String>,
    quoted_price: Option<f64>,
    confirmation_number: Option<String>,
    status: Option<Status>,
    created_at: Option<DateTime<Utc>>,
}

impl TicketBuilder {
    /// Create a new ticket builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ticket ID
    #[must_use]
    pub const fn id(mut self, id: TicketId) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the customer name
    #[must_use]
    pub fn customer_name(mut self, name: impl Into<String>) -> Self {
        self.customer_name = Some(name.into());
        self
    }

    /// Set the customer email address
    #[must_use]
    pub fn customer_email(mut self, email: impl Into<String>) -> Self {
        self.customer_email = Some(email.into());
        self
    }

    /// Set the customer phone number
    #[must_use]
    pub fn customer_phone(mut self, phone: impl Into<String>) -> Self {
        self.customer_phone = Some(phone.into());
        self
    }

    /// Set the customer service address
    #[must_use]
    pub fn customer_address(mut self, address: impl Into<String>) -> Self {
        self.customer_address = Some(address.into());
        self
    }

    /// Set the issue description
    #[must_use]
    pub fn issue_description(mut self, issue: impl Into<String>) -> Self {
        self.issue_description = Some(issue.into());
        self
    }

    /// Set the quoted price
    #[must_use]
    pub const fn quoted_price(mut self, price: f64) -> Self {
        self.quoted_price = Some(price);
        self
    }

    /// Set the confirmation number
    #[must_use]
    pub fn confirmation_number(mut self, number: impl Into<String>) -> Self {
        self.confirmation_number = Some(number.into());
        self
    }

    /// Set the status
    #[must_use]
    pub const fn status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Set `created_at` timestamp
    #[must_use]
    pub const fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Build the ticket
    #[must_use]
    pub fn build(self) -> Ticket {
        Ticket {
            id: self.id.unwrap_or_default(),
            customer_name: self.customer_name.unwrap_or_default(),
            customer_email: self.customer_email.unwrap_or_default(),
            customer_phone: self.customer_phone.unwrap_or_default(),
            customer_address: self.customer_address.unwrap_or_default(),
            issue_description: self.issue_description.unwrap_or_default(),
            quoted_price: self.quoted_price.unwrap_or_default(),
            confirmation_number: self.confirmation_number.unwrap_or_default(),
            status: self.status.unwrap_or(Status::Confirmed),
            created_at: self.created_at.unwrap_or_else(Utc::now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_builder() {
        let ticket = TicketBuilder::new()
            .customer_name("Jane Doe")
            .customer_email("jane@example.com")
            .customer_phone("555-1234")
            .customer_address("1 Elm St")
            .issue_description("Wi-Fi not working")
            .quoted_price(20.0)
            .confirmation_number("4821")
            .build();

        assert_eq!(ticket.customer_name, "Jane Doe");
        assert_eq!(ticket.customer_email, "jane@example.com");
        assert_eq!(ticket.confirmation_number, "4821");
        assert_eq!(ticket.quoted_price, 20.0);
        assert_eq!(ticket.status, Status::Confirmed);
    }

    #[test]
    fn test_ticket_builder_draft_status_is_opt_in() {
        let ticket = TicketBuilder::new().status(Status::Draft).build();
        assert_eq!(ticket.status, Status::Draft);
    }
}
