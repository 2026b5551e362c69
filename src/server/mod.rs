// SPDX-License-Identifier: MPL-2.0
//! MCP server speaking JSON-RPC 2.0 over stdio.
//!
//! stdout is the wire: exactly one JSON response per line, nothing else.
//! All diagnostics go to stderr. A malformed request produces an error
//! response; it never takes the server down.

mod dialog_runner;
pub mod protocol;

use crate::config::{self, Config};
use crate::error::Result;
use crate::feedback::{CancelReason, FeedbackResult};
use crate::i18n::fluent::I18n;
use protocol::{
    CallToolResult, Content, Request, Response, INVALID_PARAMS, METHOD_NOT_FOUND, PARSE_ERROR,
    TOOL_NAME,
};
use serde_json::Value;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

pub struct Server {
    config: Config,
    i18n: I18n,
    lang: Option<String>,
}

impl Server {
    pub fn new(lang: Option<String>) -> Self {
        let (config, config_warning) = config::load();
        if config_warning.is_some() {
            eprintln!("[mcp-feedback] settings file could not be read, using defaults");
        }
        let i18n = I18n::new(lang.clone(), &config);
        Self { config, i18n, lang }
    }

    /// Serves requests from stdin until EOF.
    pub async fn run(&self) -> Result<()> {
        let stdin = tokio::io::stdin();
        let mut lines = BufReader::new(stdin).lines();
        let mut stdout = tokio::io::stdout();

        eprintln!(
            "[mcp-feedback] server v{} listening on stdio",
            env!("CARGO_PKG_VERSION")
        );

        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            if let Some(response) = self.handle_line(&line).await {
                let mut payload = serde_json::to_string(&response)?;
                payload.push('\n');
                stdout.write_all(payload.as_bytes()).await?;
                stdout.flush().await?;
            }
        }

        eprintln!("[mcp-feedback] stdin closed, shutting down");
        Ok(())
    }

    /// Handles one wire line. Notifications produce no response.
    async fn handle_line(&self, line: &str) -> Option<Response> {
        let request: Request = match serde_json::from_str(line) {
            Ok(request) => request,
            Err(e) => {
                return Some(Response::failure(
                    Value::Null,
                    PARSE_ERROR,
                    format!("parse error: {e}"),
                ));
            }
        };

        if request.is_notification() {
            return None;
        }
        let id = request.id.clone().unwrap_or(Value::Null);

        let response = match request.method.as_str() {
            "initialize" => Response::success(id, protocol::initialize_result()),
            "tools/list" => Response::success(id, protocol::tool_list()),
            "tools/call" => self.handle_tool_call(id, &request.params).await,
            other => Response::failure(
                id,
                METHOD_NOT_FOUND,
                format!("unknown method: {other}"),
            ),
        };
        Some(response)
    }

    async fn handle_tool_call(&self, id: Value, params: &Value) -> Response {
        let Some(name) = params.get("name").and_then(Value::as_str) else {
            return Response::failure(id, INVALID_PARAMS, "missing tool name");
        };
        if name != TOOL_NAME {
            return Response::failure(id, INVALID_PARAMS, format!("unknown tool: {name}"));
        }

        // The schema takes no arguments, but a work summary passed by the
        // agent is shown to the user as context when present.
        let prompt = params
            .pointer("/arguments/work_summary")
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string);

        let timeout_secs = self.config.effective_timeout_secs();
        eprintln!("[mcp-feedback] opening feedback dialog (timeout {timeout_secs}s)");

        let outcome =
            dialog_runner::run_dialog(prompt.as_deref(), self.lang.as_deref(), timeout_secs)
                .await;

        let call_result = match outcome {
            Ok(result) => self.into_call_result(result),
            Err(e) => {
                eprintln!("[mcp-feedback] dialog failed: {e}");
                CallToolResult::error(format!("feedback dialog failed: {e}"))
            }
        };
        Response::success(id, call_result.into_value())
    }

    /// Converts a dialog outcome into the MCP content array.
    fn into_call_result(&self, result: FeedbackResult) -> CallToolResult {
        if result.cancelled {
            let message = match &result.reason {
                Some(CancelReason::TimedOut { seconds }) => self
                    .i18n
                    .tr_with_args("result-timeout", &[("seconds", &seconds.to_string())]),
                _ => self.i18n.tr("result-cancelled"),
            };
            eprintln!("[mcp-feedback] no feedback collected: {message}");
            return CallToolResult::error(message);
        }

        let mut content = Vec::new();
        if let Some(text) = result.text.as_deref() {
            content.push(Content::text(
                self.i18n.tr_with_args("result-text-prefix", &[("text", text)]),
            ));
        }
        for data in dialog_runner::encode_and_clean_images(&result) {
            content.push(Content::png(data));
        }

        eprintln!(
            "[mcp-feedback] collected feedback: {} content item(s)",
            content.len()
        );
        CallToolResult::ok(content)
    }
}
