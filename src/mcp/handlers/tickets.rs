//! Ticket intake tool handlers
//!
//! The two tools the language model may call during a support call:
//! `create_ticket` once the caller has confirmed every detail and the fee,
//! and `edit_ticket` for mid-conversation corrections. Argument validation
//! happens here, before any store call; persistence failures are spoken
//! away rather than surfaced.

use crate::core::{NewTicket, TicketField, generate_confirmation_number, is_valid_email};
use crate::error::HelpdeskError;
use crate::mcp::handlers::common::{error_result, success_result};
use crate::mcp::handlers::schema_helper::create_tool;
use crate::storage::{TicketStore, UpdateOutcome};
use rmcp::model::{CallToolResult, Tool};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, error, warn};

/// Register the ticket tools
#[must_use]
pub fn register_tools() -> Vec<Tool> {
    vec![
        create_tool(
            "create_ticket",
            "Creates a new IT support ticket in the database once all user details are confirmed.",
            json!({
                "type": "object",
                "properties": {
                    "name": {
                        "type": "string",
                        "description": "Full name of the customer"
                    },
                    "email": {
                        "type": "string",
                        "format": "email",
                        "description": "Email address of the customer"
                    },
                    "phone": {
                        "type": "string",
                        "description": "Phone number of the customer"
                    },
                    "address": {
                        "type": "string",
                        "description": "Physical address for the service"
                    },
                    "issue": {
                        "type": "string",
                        "description": "Description of the IT problem"
                    },
                    "price": {
                        "type": "number",
                        "description": "The quoted price based on the issue type"
                    }
                },
                "required": ["name", "email", "phone", "address", "issue", "price"]
            }),
        ),
        create_tool(
            "edit_ticket",
            "Updates a specific detail of the ticket (name, phone, address, or issue) if the user provides a correction.",
            json!({
                "type": "object",
                "properties": {
                    "confirmationNumber": {
                        "type": "string",
                        "description": "The confirmation number provided during the draft phase"
                    },
                    "field": {
                        "type": "string",
                        "enum": ["customerName", "customerPhone", "customerAddress", "issueDescription"],
                        "description": "Which ticket detail to change"
                    },
                    "newValue": {
                        "type": "string",
                        "description": "The new, corrected value provided by the user"
                    }
                },
                "required": ["confirmationNumber", "field", "newValue"]
            }),
        ),
    ]
}

/// Arguments for the `create_ticket` tool
#[derive(Debug, Deserialize)]
struct CreateTicketArgs {
    name: String,
    email: String,
    phone: String,
    address: String,
    issue: String,
    price: f64,
}

/// Arguments for the `edit_ticket` tool
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EditTicketArgs {
    confirmation_number: String,
    field: TicketField,
    new_value: String,
}

/// Handle the `create_ticket` tool call
///
/// Generates the 4-digit confirmation number and persists the ticket. On a
/// store failure the generated number is discarded and the caller hears an
/// apology instead of an error.
pub async fn handle_create_ticket(store: &dyn TicketStore, args: Value) -> CallToolResult {
    let args: CreateTicketArgs = match serde_json::from_value(args) {
        Ok(args) => args,
        Err(e) => return error_result(HelpdeskError::InvalidArguments(e)),
    };

    if !is_valid_email(&args.email) {
        return error_result(HelpdeskError::InvalidEmail(args.email));
    }

    let confirmation_number = generate_confirmation_number();

    let fields = NewTicket {
        customer_name: args.name,
        customer_email: args.email,
        customer_phone: args.phone,
        customer_address: args.address,
        issue_description: args.issue,
        quoted_price: args.price,
        confirmation_number: confirmation_number.clone(),
    };

    match store.create(fields).await {
        Ok(id) => {
            debug!(ticket_id = %id, confirmation = %confirmation_number, "ticket created");
            success_result(format!(
                "Ticket successfully created. Confirmation number is {confirmation_number}."
            ))
        },
        Err(e) => {
            error!(error = %e, "ticket creation failed");
            success_result("I encountered an error while saving the ticket. Please try again.")
        },
    }
}

/// Handle the `edit_ticket` tool call
///
/// "Not found" and "store failed" are indistinguishable to the caller; both
/// get the softer "noted" phrase so the conversation keeps flowing. The real
/// outcome stays in the logs.
pub async fn handle_edit_ticket(store: &dyn TicketStore, args: Value) -> CallToolResult {
    let args: EditTicketArgs = match serde_json::from_value(args) {
        Ok(args) => args,
        Err(e) => return error_result(HelpdeskError::InvalidArguments(e)),
    };

    let outcome = store
        .update_field(&args.confirmation_number, args.field, &args.new_value)
        .await;

    match outcome {
        UpdateOutcome::Modified => success_result(format!(
            "I have successfully updated the {} to {}.",
            args.field, args.new_value
        )),
        UpdateOutcome::NotFound | UpdateOutcome::StoreError => {
            warn!(
                confirmation = %args.confirmation_number,
                field = %args.field,
                ?outcome,
                "ticket edit did not persist"
            );
            success_result(format!(
                "I couldn't find a ticket with that number, but I have noted the change to {} for our confirmation.",
                args.new_value
            ))
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_tools_exposes_exactly_two_tools() {
        let tools = register_tools();
        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert_eq!(names, vec!["create_ticket", "edit_ticket"]);
    }

    #[test]
    fn test_create_ticket_schema_requires_all_six_fields() {
        let tools = register_tools();
        let required = tools[0].input_schema["required"].as_array().unwrap();
        assert_eq!(required.len(), 6);
        for field in ["name", "email", "phone", "address", "issue", "price"] {
            assert!(required.iter().any(|v| v == field), "missing {field}");
        }
    }

    #[test]
    fn test_edit_ticket_schema_constrains_field_names() {
        let tools = register_tools();
        let field_enum = tools[1].input_schema["properties"]["field"]["enum"]
            .as_array()
            .unwrap();
        assert_eq!(field_enum.len(), 4);
        // Email, price, and status must not be editable
        assert!(!field_enum.iter().any(|v| v == "customerEmail"));
        assert!(!field_enum.iter().any(|v| v == "quotedPrice"));
        assert!(!field_enum.iter().any(|v| v == "status"));
    }

    #[test]
    fn test_edit_args_parse_wire_names() {
        let args: EditTicketArgs = serde_json::from_value(json!({
            "confirmationNumber": "1234",
            "field": "customerAddress",
            "newValue": "20 Main St"
        }))
        .unwrap();
        assert_eq!(args.confirmation_number, "1234");
        assert_eq!(args.field, TicketField::CustomerAddress);
        assert_eq!(args.new_value, "20 Main St");
    }

    #[test]
    fn test_edit_args_reject_uneditable_field() {
        let result = serde_json::from_value::<EditTicketArgs>(json!({
            "confirmationNumber": "1234",
            "field": "customerEmail",
            "newValue": "other@example.com"
        }));
        assert!(result.is_err());
    }
}
