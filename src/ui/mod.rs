// SPDX-License-Identifier: MPL-2.0
//! User interface: the feedback dialog window and its styling layers.

pub mod design_tokens;
pub mod dialog;
pub mod styles;
pub mod theming;
