// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application.

// ==========================================================================
// Dialog Defaults
// ==========================================================================

/// Default dialog timeout in seconds (10 minutes).
pub const DEFAULT_TIMEOUT_SECS: u64 = 600;

/// Minimum allowed dialog timeout.
pub const MIN_TIMEOUT_SECS: u64 = 10;

/// Maximum allowed dialog timeout (2 hours).
pub const MAX_TIMEOUT_SECS: u64 = 7200;

/// Default dialog window width in logical pixels.
pub const DEFAULT_WINDOW_WIDTH: u32 = 550;

/// Default dialog window height in logical pixels.
pub const DEFAULT_WINDOW_HEIGHT: u32 = 580;

/// Minimum dialog window width.
pub const MIN_WINDOW_WIDTH: u32 = 500;

/// Minimum dialog window height.
pub const MIN_WINDOW_HEIGHT: u32 = 550;

// ==========================================================================
// Image Limits
// ==========================================================================

/// Maximum number of image attachments per feedback submission.
pub const DEFAULT_MAX_IMAGE_COUNT: usize = 10;

/// Maximum image file size in megabytes.
pub const DEFAULT_MAX_FILE_SIZE_MB: u64 = 10;

/// Maximum image width or height in pixels.
pub const DEFAULT_MAX_DIMENSION: u32 = 4096;

// ==========================================================================
// Text Limits
// ==========================================================================

/// Maximum text feedback length in characters.
pub const MAX_TEXT_CHARS: usize = 10_000;

const _: () = {
    assert!(MIN_TIMEOUT_SECS < DEFAULT_TIMEOUT_SECS);
    assert!(DEFAULT_TIMEOUT_SECS < MAX_TIMEOUT_SECS);
    assert!(MIN_WINDOW_WIDTH <= DEFAULT_WINDOW_WIDTH);
    assert!(MIN_WINDOW_HEIGHT <= DEFAULT_WINDOW_HEIGHT);
    assert!(DEFAULT_MAX_IMAGE_COUNT > 0);
};
