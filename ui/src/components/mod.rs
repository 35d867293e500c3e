//! User Interface Components
//!
//! Reusable Dioxus components for a schema-driven registry panel:
//!
//! - **inputs**: one form control per field kind (text, email, select)
//! - **forms**: the record form bound to the editor draft
//! - **display**: the record table with per-row actions
//!
//! Components receive the editor signal plus a `dispatch` handler and never
//! mutate the editor directly.

pub mod display;
pub mod forms;
pub mod inputs;
