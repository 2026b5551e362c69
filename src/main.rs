// SPDX-License-Identifier: MPL-2.0
//! Binary entry point.
//!
//! Without flags this runs the MCP server on stdio. With `--dialog` it runs
//! the feedback window once, prints the result as one JSON line on stdout,
//! and exits; the server spawns it that way per tool call.

use mcp_feedback::feedback::FeedbackResult;
use mcp_feedback::paths;
use mcp_feedback::server::Server;
use mcp_feedback::ui::dialog::{self, Flags};
use std::process::ExitCode;
use std::sync::{Arc, Mutex};

fn main() -> ExitCode {
    let mut args = pico_args::Arguments::from_env();

    let config_dir: Option<String> = args.opt_value_from_str("--config-dir").unwrap_or(None);
    paths::init_cli_overrides(config_dir);

    let lang: Option<String> = args.opt_value_from_str("--lang").unwrap_or(None);

    if args.contains("--dialog") {
        let prompt: Option<String> = args.opt_value_from_str("--prompt").unwrap_or(None);
        run_dialog(lang, prompt)
    } else {
        run_server(lang)
    }
}

/// Dialog mode: one window, one JSON line on stdout.
fn run_dialog(lang: Option<String>, prompt: Option<String>) -> ExitCode {
    let result_slot: dialog::SharedResult = Arc::new(Mutex::new(None));
    let flags = Flags {
        lang,
        prompt,
        result_slot: Arc::clone(&result_slot),
    };

    if let Err(e) = dialog::run(flags) {
        eprintln!("[mcp-feedback] dialog error: {e}");
        return ExitCode::FAILURE;
    }

    // A slot left empty means the window went away without a decision
    let result = result_slot
        .lock()
        .ok()
        .and_then(|mut slot| slot.take())
        .unwrap_or_else(FeedbackResult::cancelled);

    match serde_json::to_string(&result) {
        Ok(line) => {
            println!("{line}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("[mcp-feedback] failed to serialize result: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Server mode: JSON-RPC over stdio until stdin closes.
fn run_server(lang: Option<String>) -> ExitCode {
    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("[mcp-feedback] failed to start async runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    let server = Server::new(lang);
    match runtime.block_on(server.run()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[mcp-feedback] server error: {e}");
            ExitCode::FAILURE
        }
    }
}
