// SPDX-License-Identifier: MPL-2.0
//! `mcp_feedback` is a local feedback-collection dialog exposed as an MCP tool.
//!
//! An external agent runtime calls the `collect_feedback` tool over stdio
//! JSON-RPC; a dark-themed Iced window opens for the human, who can type
//! multi-line text and attach images from disk or the clipboard. The composed
//! content flows back to the caller as text and base64 PNG items.

pub mod config;
pub mod error;
pub mod feedback;
pub mod i18n;
pub mod image_handler;
pub mod paths;
pub mod server;
pub mod ui;
