//! Helper functions for creating MCP tool schemas

use serde_json::{Map, Value, json};
use std::borrow::Cow;
use std::sync::Arc;

use rmcp::model::Tool;

/// Convert a JSON value to a Map for use as tool schema
#[must_use]
pub fn json_to_schema(value: Value) -> Map<String, Value> {
    if let Value::Object(map) = value {
        map
    } else {
        let mut map = Map::new();
        map.insert("type".to_string(), json!("object"));
        map.insert("properties".to_string(), Value::Object(Map::new()));
        map
    }
}

/// Create a basic MCP tool with the given parameters
#[must_use]
pub fn create_tool(name: &'static str, description: &'static str, schema: Value) -> Tool {
    Tool {
        name: Cow::Borrowed(name),
        description: Some(Cow::Borrowed(description)),
        input_schema: Arc::new(json_to_schema(schema)),
        title: None,
        output_schema: None,
        icons: None,
        annotations: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_to_schema_passes_objects_through() {
        let schema = json_to_schema(json!({
            "type": "object",
            "properties": {"name": {"type": "string"}}
        }));
        assert_eq!(schema["type"], "object");
        assert!(schema["properties"].get("name").is_some());
    }

    #[test]
    fn test_json_to_schema_defaults_non_objects() {
        let schema = json_to_schema(json!("not an object"));
        assert_eq!(schema["type"], "object");
    }
}
