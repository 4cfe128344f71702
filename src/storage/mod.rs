//! Ticket persistence layer
//!
//! The store is always passed around as an explicit handle
//! (`Arc<dyn TicketStore>`) rather than process-global state, so tests and
//! the `--memory` serve mode can substitute implementations freely.
//!
//! Failure semantics are two-tier: connecting is fatal and propagates, while
//! a failed field update degrades to [`UpdateOutcome::StoreError`] so the
//! conversation can continue. The store keeps the real cause in the logs.

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::core::{NewTicket, Ticket, TicketField, TicketId};
use crate::error::Result;
use async_trait::async_trait;
use tracing::info;

/// Result of a single-field ticket update
///
/// `NotFound` and `StoreError` are deliberately collapsed to "not modified"
/// at the tool boundary, but are kept distinct here for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Exactly one record was modified
    Modified,
    /// No record matches the confirmation number
    NotFound,
    /// The backing store failed; the error was logged and swallowed
    StoreError,
}

impl UpdateOutcome {
    /// Whether any record was modified
    #[must_use]
    pub const fn modified(self) -> bool {
        matches!(self, Self::Modified)
    }
}

/// Storage interface for ticket records
///
/// One logical collection, two writes: insert at creation time and a
/// merge-style single-field update keyed by confirmation number. The reads
/// exist for verification and diagnostics; they are not part of the tool
/// surface.
#[async_trait]
pub trait TicketStore: Send + Sync {
    /// Persist a new ticket as confirmed, stamped with the current time.
    ///
    /// Returns the internally assigned id. Also triggers the (simulated)
    /// confirmation email to the customer. No uniqueness is enforced on the
    /// confirmation number.
    async fn create(&self, fields: NewTicket) -> Result<TicketId>;

    /// Update a single editable field on the ticket matching the
    /// confirmation number.
    ///
    /// When the number matches several tickets, the earliest-created one is
    /// updated. Backing-store failures are swallowed into
    /// [`UpdateOutcome::StoreError`]; nothing is retried.
    async fn update_field(
        &self,
        confirmation: &str,
        field: TicketField,
        value: &str,
    ) -> UpdateOutcome;

    /// Look up the earliest-created ticket with this confirmation number
    async fn find_by_confirmation(&self, confirmation: &str) -> Result<Option<Ticket>>;

    /// Number of tickets in the store
    async fn count(&self) -> Result<usize>;

    /// Release the store connection; called once at process end
    async fn close(&self) -> Result<()>;
}

/// Log the simulated confirmation email for a freshly created ticket
///
/// Real dispatch (SendGrid etc.) is an external concern; the record of the
/// notification is the log event.
pub(crate) fn log_confirmation_email(ticket: &Ticket) {
    info!(
        confirmation = %ticket.confirmation_number,
        email = %ticket.customer_email,
        "simulated email: sending ticket confirmation"
    );
}
