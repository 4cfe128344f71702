//! In-memory ticket store
//!
//! Backs the test suite and `serve --memory`. Tickets live in insertion
//! order, so a colliding confirmation number resolves to the earliest
//! created ticket, matching the SQLite implementation.

use super::{TicketStore, UpdateOutcome, log_confirmation_email};
use crate::core::{NewTicket, Ticket, TicketBuilder, TicketField, TicketId};
use crate::error::{HelpdeskError, Result};
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::error;

/// Shared in-memory store
#[derive(Default)]
pub struct MemoryStore {
    tickets: Mutex<Vec<Ticket>>,
    offline: AtomicBool,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate a lost backing store
    ///
    /// While offline, `create` fails and `update_field` reports
    /// [`UpdateOutcome::StoreError`]. Used to exercise the degraded paths.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn is_offline(&self) -> bool {
        self.offline.load(Ordering::SeqCst)
    }

    fn connection_lost() -> HelpdeskError {
        HelpdeskError::Database(sqlx::Error::PoolClosed)
    }
}

#[async_trait]
impl TicketStore for MemoryStore {
    async fn create(&self, fields: NewTicket) -> Result<TicketId> {
        if self.is_offline() {
            return Err(Self::connection_lost());
        }

        let ticket = TicketBuilder::new()
            .customer_name(fields.customer_name)
            .customer_email(fields.customer_email)
            .customer_phone(fields.customer_phone)
            .customer_address(fields.customer_address)
            .issue_description(fields.issue_description)
            .quoted_price(fields.quoted_price)
            .confirmation_number(fields.confirmation_number)
            .build();
        let id = ticket.id.clone();

        log_confirmation_email(&ticket);
        self.tickets.lock().expect("store lock poisoned").push(ticket);
        Ok(id)
    }

    async fn update_field(
        &self,
        confirmation: &str,
        field: TicketField,
        value: &str,
    ) -> UpdateOutcome {
        if self.is_offline() {
            error!(
                %confirmation,
                field = %field,
                "ticket update failed: store offline"
            );
            return UpdateOutcome::StoreError;
        }

        let mut tickets = self.tickets.lock().expect("store lock poisoned");
        match tickets
            .iter_mut()
            .find(|t| t.confirmation_number == confirmation)
        {
            Some(ticket) => {
                field.apply(ticket, value);
                UpdateOutcome::Modified
            },
            None => UpdateOutcome::NotFound,
        }
    }

    async fn find_by_confirmation(&self, confirmation: &str) -> Result<Option<Ticket>> {
        let tickets = self.tickets.lock().expect("store lock poisoned");
        Ok(tickets
            .iter()
            .find(|t| t.confirmation_number == confirmation)
            .cloned())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.tickets.lock().expect("store lock poisoned").len())
    }

    async fn close(&self) -> Result<()> {
        Ok(())
    }
}
