//! Reusable UI components.
//!
//! DESIGN
//! ======
//! Components render page state passed in as signals and report user
//! actions through callbacks; they own no form or network logic.

pub mod analysis_demo;
pub mod field_input;
pub mod notice_toast;
