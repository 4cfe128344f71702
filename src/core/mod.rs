//! Core ticket domain model
//!
//! This module defines the single persisted entity, the `Ticket`, together
//! with its identifier, lifecycle status, the closed set of editable fields,
//! and the helpers used at intake time: confirmation-number generation and
//! the basic email format check.

mod builders;

pub use builders::TicketBuilder;

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Internal ticket identifier
///
/// Assigned by the store on creation and never exposed to the conversation
/// layer; callers always address tickets by confirmation number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketId(Uuid);

impl TicketId {
    /// Generate a new random ticket ID
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a ticket ID from its string form
    pub fn parse_str(s: &str) -> Result<Self, uuid::Error> {
        Uuid::parse_str(s).map(Self)
    }
}

impl Default for TicketId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ticket lifecycle status
///
/// `Draft` exists in the data model but no current code path produces it;
/// every ticket is written as `Confirmed` at creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Draft,
    Confirmed,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Draft => write!(f, "draft"),
            Self::Confirmed => write!(f, "confirmed"),
        }
    }
}

impl FromStr for Status {
    type Err = crate::error::HelpdeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "confirmed" => Ok(Self::Confirmed),
            other => Err(crate::error::HelpdeskError::corrupt(format!(
                "unknown status '{other}'"
            ))),
        }
    }
}

/// An IT support ticket as persisted in the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    /// Internal identifier, never spoken to the caller
    pub id: TicketId,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub customer_address: String,
    pub issue_description: String,
    pub quoted_price: f64,
    /// 4-digit numeric string, the sole external lookup key.
    /// Assigned exactly once at creation and immutable thereafter.
    pub confirmation_number: String,
    pub status: Status,
    pub created_at: DateTime<Utc>,
}

/// Fields supplied by the caller when creating a ticket
///
/// The store fills in the id, status, and creation timestamp; the
/// confirmation number is generated by the tool layer before the call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTicket {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub customer_address: String,
    pub issue_description: String,
    pub quoted_price: f64,
    pub confirmation_number: String,
}

/// The closed set of ticket fields that may be corrected mid-conversation
///
/// Email, price, confirmation number, status, and the creation timestamp are
/// never update targets. Keeping this as an enum (rather than a free-form
/// field name) means an update can only ever touch one of these four columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicketField {
    #[serde(rename = "customerName")]
    CustomerName,
    #[serde(rename = "customerPhone")]
    CustomerPhone,
    #[serde(rename = "customerAddress")]
    CustomerAddress,
    #[serde(rename = "issueDescription")]
    IssueDescription,
}

impl TicketField {
    /// All editable fields, in schema order
    pub const ALL: [Self; 4] = [
        Self::CustomerName,
        Self::CustomerPhone,
        Self::CustomerAddress,
        Self::IssueDescription,
    ];

    /// Wire name as it appears in the tool contract
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CustomerName => "customerName",
            Self::CustomerPhone => "customerPhone",
            Self::CustomerAddress => "customerAddress",
            Self::IssueDescription => "issueDescription",
        }
    }

    /// Column name in the tickets table
    #[must_use]
    pub(crate) const fn column(self) -> &'static str {
        match self {
            Self::CustomerName => "customer_name",
            Self::CustomerPhone => "customer_phone",
            Self::CustomerAddress => "customer_address",
            Self::IssueDescription => "issue_description",
        }
    }

    /// Apply this field's new value to a ticket in place
    pub(crate) fn apply(self, ticket: &mut Ticket, value: &str) {
        let slot = match self {
            Self::CustomerName => &mut ticket.customer_name,
            Self::CustomerPhone => &mut ticket.customer_phone,
            Self::CustomerAddress => &mut ticket.customer_address,
            Self::IssueDescription => &mut ticket.issue_description,
        };
        *slot = value.to_string();
    }
}

impl fmt::Display for TicketField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketField {
    type Err = crate::error::HelpdeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| crate::error::HelpdeskError::InvalidField(s.to_string()))
    }
}

/// Generate a confirmation number as a random 4-digit numeric string
///
/// Uniform over [1000, 9999]. No uniqueness is enforced anywhere, so two
/// tickets can end up with the same number; the store resolves a colliding
/// lookup to the earliest-created match.
#[must_use]
pub fn generate_confirmation_number() -> String {
    rand::rng().random_range(1000..=9999).to_string()
}

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid")
});

/// Basic email address format check
///
/// Matches the loose shape `local@domain.tld` with no whitespace. This is a
/// format gate for tool arguments, not a deliverability check.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}
