//! End-to-end tests for the ticket tool handlers
//!
//! Exercises the tool contract the language model sees: argument
//! validation, the spoken result strings, and the deliberately soft
//! failure phrases.

use helpdesk_agent::core::Status;
use helpdesk_agent::mcp::handlers::tickets::{handle_create_ticket, handle_edit_ticket};
use helpdesk_agent::storage::{MemoryStore, TicketStore};
use rmcp::model::CallToolResult;
use serde_json::json;

/// Collect the text content of a tool result
fn result_text(result: &CallToolResult) -> String {
    result
        .content
        .iter()
        .filter_map(|c| c.as_text().map(|t| t.text.clone()))
        .collect()
}

fn create_args() -> serde_json::Value {
    json!({
        "name": "Jane Doe",
        "email": "jane@example.com",
        "phone": "555-1234",
        "address": "1 Elm St",
        "issue": "Wi-Fi not working",
        "price": 20
    })
}

#[tokio::test]
async fn test_create_ticket_persists_and_speaks_confirmation() {
    let store = MemoryStore::new();

    let result = handle_create_ticket(&store, create_args()).await;
    assert_eq!(result.is_error, Some(false));

    let text = result_text(&result);
    assert!(text.contains("Ticket successfully created"));

    // The spoken confirmation number is 4 digits
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    assert_eq!(digits.len(), 4);

    // Exactly one record exists with the quoted price and confirmed status
    assert_eq!(store.count().await.unwrap(), 1);
    let ticket = store
        .find_by_confirmation(&digits)
        .await
        .unwrap()
        .expect("spoken confirmation number should match the stored ticket");
    assert_eq!(ticket.quoted_price, 20.0);
    assert_eq!(ticket.status, Status::Confirmed);
    assert_eq!(ticket.customer_name, "Jane Doe");
}

#[tokio::test]
async fn test_create_ticket_rejects_malformed_email_before_store_call() {
    let store = MemoryStore::new();

    let mut args = create_args();
    args["email"] = json!("not-an-email");

    let result = handle_create_ticket(&store, args).await;
    assert_eq!(result.is_error, Some(true));
    assert!(result_text(&result).contains("Invalid email address"));

    // No record was created
    assert_eq!(store.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_create_ticket_rejects_missing_fields() {
    let store = MemoryStore::new();

    let result = handle_create_ticket(&store, json!({"name": "Jane Doe"})).await;
    assert_eq!(result.is_error, Some(true));
    assert_eq!(store.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_create_ticket_store_failure_becomes_apology() {
    let store = MemoryStore::new();
    store.set_offline(true);

    let result = handle_create_ticket(&store, create_args()).await;

    // The conversational layer never sees a hard failure
    assert_eq!(result.is_error, Some(false));
    assert!(result_text(&result).contains("I encountered an error while saving the ticket"));
}

#[tokio::test]
async fn test_edit_ticket_updates_address() {
    let store = MemoryStore::new();
    handle_create_ticket(&store, create_args()).await;
    let confirmation = store_confirmation(&store).await;

    let result = handle_edit_ticket(
        &store,
        json!({
            "confirmationNumber": confirmation,
            "field": "customerAddress",
            "newValue": "20 Main St"
        }),
    )
    .await;

    let text = result_text(&result);
    assert!(text.contains("customerAddress"));
    assert!(text.contains("20 Main St"));

    let ticket = store
        .find_by_confirmation(&confirmation)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(ticket.customer_address, "20 Main St");
}

#[tokio::test]
async fn test_edit_ticket_unknown_number_gets_noted_phrase() {
    let store = MemoryStore::new();

    let result = handle_edit_ticket(
        &store,
        json!({
            "confirmationNumber": "0000",
            "field": "customerName",
            "newValue": "John Doe"
        }),
    )
    .await;

    // Soft phrase, successful result, nothing stored
    assert_eq!(result.is_error, Some(false));
    let text = result_text(&result);
    assert!(text.contains("couldn't find a ticket"));
    assert!(text.contains("noted the change to John Doe"));
    assert_eq!(store.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_edit_ticket_store_failure_is_indistinguishable_from_not_found() {
    let store = MemoryStore::new();
    handle_create_ticket(&store, create_args()).await;
    let confirmation = store_confirmation(&store).await;
    store.set_offline(true);

    let result = handle_edit_ticket(
        &store,
        json!({
            "confirmationNumber": confirmation,
            "field": "customerPhone",
            "newValue": "555-0000"
        }),
    )
    .await;

    assert_eq!(result.is_error, Some(false));
    assert!(result_text(&result).contains("noted the change to 555-0000"));

    // The spoken claim does not match the stored state
    store.set_offline(false);
    let ticket = store
        .find_by_confirmation(&confirmation)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(ticket.customer_phone, "555-1234");
}

#[tokio::test]
async fn test_edit_ticket_rejects_uneditable_fields() {
    let store = MemoryStore::new();
    handle_create_ticket(&store, create_args()).await;
    let confirmation = store_confirmation(&store).await;

    for field in ["customerEmail", "quotedPrice", "confirmationNumber", "status"] {
        let result = handle_edit_ticket(
            &store,
            json!({
                "confirmationNumber": confirmation,
                "field": field,
                "newValue": "anything"
            }),
        )
        .await;
        assert_eq!(result.is_error, Some(true), "{field} must not be editable");
    }
}

/// Fish the generated confirmation number back out of the store
async fn store_confirmation(store: &MemoryStore) -> String {
    for n in 1000..=9999 {
        let confirmation = n.to_string();
        if store
            .find_by_confirmation(&confirmation)
            .await
            .unwrap()
            .is_some()
        {
            return confirmation;
        }
    }
    panic!("no ticket found in store");
}
