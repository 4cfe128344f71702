//! SQLite-backed ticket store
//!
//! One `tickets` table, schema created on connect. The confirmation number
//! column carries no UNIQUE constraint: collisions from the 4-digit
//! generator are representable, and a colliding update targets the
//! earliest-created row (lowest rowid).

use super::{TicketStore, UpdateOutcome, log_confirmation_email};
use crate::core::{NewTicket, Status, Ticket, TicketBuilder, TicketField, TicketId};
use crate::error::{HelpdeskError, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use tracing::{error, info};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS tickets (
    id                  TEXT PRIMARY KEY,
    customer_name       TEXT NOT NULL,
    customer_email      TEXT NOT NULL,
    customer_phone      TEXT NOT NULL,
    customer_address    TEXT NOT NULL,
    issue_description   TEXT NOT NULL,
    quoted_price        REAL NOT NULL,
    confirmation_number TEXT NOT NULL,
    status              TEXT NOT NULL,
    created_at          TEXT NOT NULL
)";

/// Ticket store backed by a SQLite database
pub struct SqliteStore {
    pool: SqlitePool,
}

/// Raw row shape; converted into [`Ticket`] after fetching
#[derive(sqlx::FromRow)]
struct TicketRow {
    id: String,
    customer_name: String,
    customer_email: String,
    customer_phone: String,
    customer_address: String,
    issue_description: String,
    quoted_price: f64,
    confirmation_number: String,
    status: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<TicketRow> for Ticket {
    type Error = HelpdeskError;

    fn try_from(row: TicketRow) -> Result<Self> {
        let id = TicketId::parse_str(&row.id).map_err(HelpdeskError::corrupt)?;
        let status = Status::from_str(&row.status)?;
        Ok(TicketBuilder::new()
            .id(id)
            .customer_name(row.customer_name)
            .customer_email(row.customer_email)
            .customer_phone(row.customer_phone)
            .customer_address(row.customer_address)
            .issue_description(row.issue_description)
            .quoted_price(row.quoted_price)
            .confirmation_number(row.confirmation_number)
            .status(status)
            .created_at(row.created_at)
            .build())
    }
}

impl SqliteStore {
    /// Connect to the database and ensure the tickets table exists
    ///
    /// Failure here is fatal to the process: the agent cannot take calls
    /// without persistence, so the error propagates out of startup.
    pub async fn connect(url: &str) -> Result<Self> {
        info!(%url, "connecting to ticket database");

        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.ensure_schema().await?;
        info!("ticket database connected");
        Ok(store)
    }

    async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(SCHEMA).execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl TicketStore for SqliteStore {
    async fn create(&self, fields: NewTicket) -> Result<TicketId> {
        let ticket = TicketBuilder::new()
            .customer_name(fields.customer_name)
            .customer_email(fields.customer_email)
            .customer_phone(fields.customer_phone)
            .customer_address(fields.customer_address)
            .issue_description(fields.issue_description)
            .quoted_price(fields.quoted_price)
            .confirmation_number(fields.confirmation_number)
            .build();

        sqlx::query(
            "INSERT INTO tickets (
                id, customer_name, customer_email, customer_phone,
                customer_address, issue_description, quoted_price,
                confirmation_number, status, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        )
        .bind(ticket.id.to_string())
        .bind(&ticket.customer_name)
        .bind(&ticket.customer_email)
        .bind(&ticket.customer_phone)
        .bind(&ticket.customer_address)
        .bind(&ticket.issue_description)
        .bind(ticket.quoted_price)
        .bind(&ticket.confirmation_number)
        .bind(ticket.status.to_string())
        .bind(ticket.created_at)
        .execute(&self.pool)
        .await?;

        log_confirmation_email(&ticket);
        Ok(ticket.id)
    }

    async fn update_field(
        &self,
        confirmation: &str,
        field: TicketField,
        value: &str,
    ) -> UpdateOutcome {
        // Column name comes from the closed TicketField enum, never from
        // caller input. The subquery pins a colliding confirmation number to
        // the earliest-created row.
        let sql = format!(
            "UPDATE tickets SET {column} = ?1
             WHERE rowid = (
                 SELECT MIN(rowid) FROM tickets WHERE confirmation_number = ?2
             )",
            column = field.column()
        );

        let result = sqlx::query(&sql)
            .bind(value)
            .bind(confirmation)
            .execute(&self.pool)
            .await;

        match result {
            Ok(done) if done.rows_affected() > 0 => UpdateOutcome::Modified,
            Ok(_) => UpdateOutcome::NotFound,
            Err(e) => {
                error!(
                    %confirmation,
                    field = %field,
                    error = %e,
                    "ticket update failed"
                );
                UpdateOutcome::StoreError
            },
        }
    }

    async fn find_by_confirmation(&self, confirmation: &str) -> Result<Option<Ticket>> {
        let row: Option<TicketRow> = sqlx::query_as(
            "SELECT id, customer_name, customer_email, customer_phone,
                    customer_address, issue_description, quoted_price,
                    confirmation_number, status, created_at
             FROM tickets
             WHERE confirmation_number = ?1
             ORDER BY rowid
             LIMIT 1",
        )
        .bind(confirmation)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Ticket::try_from).transpose()
    }

    async fn count(&self) -> Result<usize> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tickets")
            .fetch_one(&self.pool)
            .await?;
        Ok(usize::try_from(count).unwrap_or(0))
    }

    async fn close(&self) -> Result<()> {
        self.pool.close().await;
        Ok(())
    }
}
