// SPDX-License-Identifier: MPL-2.0
//! JSON-RPC 2.0 and MCP wire types for the stdio transport.
//!
//! Requests arrive one per line on stdin; responses leave one per line on
//! stdout. Anything that is not valid JSON-RPC gets an error response with
//! a null id, never a crash.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Protocol revision implemented by this server.
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// Name of the single tool exposed to the agent runtime.
pub const TOOL_NAME: &str = "collect_feedback";

// JSON-RPC error codes
pub const PARSE_ERROR: i64 = -32700;
pub const METHOD_NOT_FOUND: i64 = -32601;
pub const INVALID_PARAMS: i64 = -32602;
pub const INTERNAL_ERROR: i64 = -32603;

/// An incoming JSON-RPC request or notification.
#[derive(Debug, Deserialize)]
pub struct Request {
    #[allow(dead_code)]
    pub jsonrpc: String,
    /// Absent for notifications, which expect no response.
    #[serde(default)]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Value,
}

impl Request {
    pub fn is_notification(&self) -> bool {
        self.id.is_none()
    }
}

/// An outgoing JSON-RPC response.
#[derive(Debug, Serialize)]
pub struct Response {
    pub jsonrpc: &'static str,
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
}

#[derive(Debug, Serialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}

impl Response {
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn failure(id: Value, code: i64, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: None,
            error: Some(RpcError {
                code,
                message: message.into(),
            }),
        }
    }
}

/// One item of a tool call's content array.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Content {
    Text {
        text: String,
    },
    Image {
        data: String,
        #[serde(rename = "mimeType")]
        mime_type: String,
    },
}

impl Content {
    pub fn text(text: impl Into<String>) -> Self {
        Content::Text { text: text.into() }
    }

    pub fn png(base64_data: String) -> Self {
        Content::Image {
            data: base64_data,
            mime_type: "image/png".to_string(),
        }
    }
}

/// Result payload of a `tools/call` response.
#[derive(Debug, Serialize)]
pub struct CallToolResult {
    pub content: Vec<Content>,
    #[serde(rename = "isError", skip_serializing_if = "std::ops::Not::not")]
    pub is_error: bool,
}

impl CallToolResult {
    pub fn ok(content: Vec<Content>) -> Self {
        Self {
            content,
            is_error: false,
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            content: vec![Content::text(message)],
            is_error: true,
        }
    }

    pub fn into_value(self) -> Value {
        serde_json::to_value(self).unwrap_or_else(|_| json!({"content": []}))
    }
}

/// Payload for the `initialize` response.
pub fn initialize_result() -> Value {
    json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": {}
        },
        "serverInfo": {
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
        }
    })
}

/// Payload for the `tools/list` response.
pub fn tool_list() -> Value {
    json!({
        "tools": [{
            "name": TOOL_NAME,
            "description": "Open a feedback dialog where the user can enter \
                            text and attach images, and return the collected \
                            feedback.",
            "inputSchema": {
                "type": "object",
                "properties": {},
                "required": []
            }
        }]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_parses_with_and_without_id() {
        let call: Request = serde_json::from_str(
            r#"{"jsonrpc":"2.0","id":1,"method":"tools/list","params":{}}"#,
        )
        .expect("parse call");
        assert!(!call.is_notification());
        assert_eq!(call.method, "tools/list");

        let note: Request = serde_json::from_str(
            r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
        )
        .expect("parse notification");
        assert!(note.is_notification());
    }

    #[test]
    fn success_response_omits_error_field() {
        let response = Response::success(json!(7), json!({"ok": true}));
        let line = serde_json::to_string(&response).expect("serialize");
        assert!(line.contains("\"result\""));
        assert!(!line.contains("\"error\""));
        assert!(line.contains("\"id\":7"));
    }

    #[test]
    fn failure_response_carries_code_and_message() {
        let response = Response::failure(Value::Null, METHOD_NOT_FOUND, "no such method");
        let line = serde_json::to_string(&response).expect("serialize");
        assert!(line.contains("-32601"));
        assert!(line.contains("no such method"));
        assert!(!line.contains("\"result\""));
    }

    #[test]
    fn text_content_serializes_with_type_tag() {
        let content = Content::text("hello");
        let value = serde_json::to_value(&content).expect("serialize");
        assert_eq!(value["type"], "text");
        assert_eq!(value["text"], "hello");
    }

    #[test]
    fn image_content_uses_png_mime_type() {
        let content = Content::png("QUJD".to_string());
        let value = serde_json::to_value(&content).expect("serialize");
        assert_eq!(value["type"], "image");
        assert_eq!(value["mimeType"], "image/png");
        assert_eq!(value["data"], "QUJD");
    }

    #[test]
    fn ok_result_omits_is_error_flag() {
        let result = CallToolResult::ok(vec![Content::text("fine")]);
        let value = result.into_value();
        assert!(value.get("isError").is_none());
    }

    #[test]
    fn error_result_sets_is_error_flag() {
        let result = CallToolResult::error("User cancelled".to_string());
        let value = result.into_value();
        assert_eq!(value["isError"], true);
        assert_eq!(value["content"][0]["text"], "User cancelled");
    }

    #[test]
    fn initialize_result_pins_protocol_version() {
        let value = initialize_result();
        assert_eq!(value["protocolVersion"], PROTOCOL_VERSION);
        assert_eq!(value["serverInfo"]["name"], env!("CARGO_PKG_NAME"));
    }

    #[test]
    fn tool_list_exposes_exactly_one_tool() {
        let value = tool_list();
        let tools = value["tools"].as_array().expect("tools array");
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0]["name"], TOOL_NAME);
        assert_eq!(tools[0]["inputSchema"]["type"], "object");
    }
}
