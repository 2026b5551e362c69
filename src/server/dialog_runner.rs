// SPDX-License-Identifier: MPL-2.0
//! Spawns the dialog subprocess and converts its outcome for the wire.
//!
//! The dialog is this same executable run with `--dialog`. It prints one
//! JSON line to stdout and exits; everything else it writes goes to stderr,
//! which is inherited so diagnostics reach the host's log.

use crate::config;
use crate::error::{Error, Result};
use crate::feedback::FeedbackResult;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::AsyncReadExt;
use tokio::process::Command;

/// Extra seconds granted beyond the dialog's own countdown before the
/// subprocess is killed. The dialog normally times itself out first; this
/// guard only fires if it hangs.
const KILL_GRACE_SECS: u64 = 15;

/// Runs the feedback dialog once and returns its parsed result.
pub async fn run_dialog(
    prompt: Option<&str>,
    lang: Option<&str>,
    timeout_secs: u64,
) -> Result<FeedbackResult> {
    let exe = std::env::current_exe()?;

    let mut command = Command::new(exe);
    command
        .arg("--dialog")
        .env(config::ENV_DIALOG_TIMEOUT, timeout_secs.to_string())
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit());
    if let Some(prompt) = prompt {
        command.arg("--prompt").arg(prompt);
    }
    if let Some(lang) = lang {
        command.arg("--lang").arg(lang);
    }

    let mut child = command
        .spawn()
        .map_err(|e| Error::Dialog(format!("failed to spawn dialog: {e}")))?;

    let mut stdout = child
        .stdout
        .take()
        .ok_or_else(|| Error::Dialog("dialog stdout was not captured".to_string()))?;

    let guard = Duration::from_secs(timeout_secs.saturating_add(KILL_GRACE_SECS));
    let mut output = String::new();
    let read = tokio::time::timeout(guard, stdout.read_to_string(&mut output)).await;

    match read {
        Ok(read_result) => {
            read_result?;
            let status = child.wait().await?;
            if !status.success() && output.trim().is_empty() {
                return Err(Error::Dialog(format!(
                    "dialog exited with status {status}"
                )));
            }
            parse_result_line(&output, timeout_secs)
        }
        Err(_elapsed) => {
            eprintln!("[mcp-feedback] dialog unresponsive after {guard:?}, killing");
            let _ = child.kill().await;
            let _ = child.wait().await;
            Ok(FeedbackResult::timed_out(timeout_secs))
        }
    }
}

/// Parses the last non-empty stdout line as a `FeedbackResult`.
///
/// An empty stdout means the window was closed by the window manager before
/// anything was written; that counts as a cancellation.
fn parse_result_line(output: &str, _timeout_secs: u64) -> Result<FeedbackResult> {
    let line = output.lines().rev().find(|line| !line.trim().is_empty());
    match line {
        Some(line) => {
            let result: FeedbackResult = serde_json::from_str(line.trim())
                .map_err(|e| Error::Dialog(format!("invalid dialog output: {e}")))?;
            Ok(result)
        }
        None => Ok(FeedbackResult::cancelled()),
    }
}

/// Reads each staged PNG, base64-encodes it, and deletes the staging files.
///
/// Order follows the gallery order in the result. The staging directory is
/// removed afterwards so no feedback data outlives the call.
pub fn encode_and_clean_images(result: &FeedbackResult) -> Vec<String> {
    let mut encoded = Vec::with_capacity(result.images.len());

    for image in &result.images {
        match std::fs::read(&image.path) {
            Ok(bytes) => encoded.push(BASE64.encode(bytes)),
            Err(e) => {
                eprintln!(
                    "[mcp-feedback] skipping unreadable staged image {}: {e}",
                    image.path.display()
                );
            }
        }
    }

    cleanup_staging(result);
    encoded
}

fn cleanup_staging(result: &FeedbackResult) {
    let mut dirs: Vec<&Path> = Vec::new();
    for image in &result.images {
        let _ = std::fs::remove_file(&image.path);
        if let Some(parent) = image.path.parent() {
            if !dirs.contains(&parent) {
                dirs.push(parent);
            }
        }
    }
    for dir in dirs {
        // Only removes the directory if the dialog left nothing else in it
        let _ = std::fs::remove_dir(dir);
    }
}
