// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for all UI components.

pub mod button;
pub mod container;
pub mod text_editor;

pub use button::{primary as button_primary, secondary as button_secondary};
