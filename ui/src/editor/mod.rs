//! Record List Editor
//!
//! Generic create/update/delete state for a homogeneous list of records
//! described by a [`RecordSchema`](crate::schema::RecordSchema).
//!
//! The editor owns the record list and the single active draft. Every
//! operation is a synchronous transform of that state; missing identifiers
//! and declined confirmations are reported as outcomes, never as errors.
//!
//! # Usage
//!
//! ```rust
//! use ui::editor::{EditOutcome, RecordListEditor};
//! use ui::schema::RecordSchema;
//!
//! let mut editor = RecordListEditor::new(RecordSchema::clients().unwrap());
//! editor.update_field("name", "Ana");
//! let EditOutcome::Created(id) = editor.submit() else { unreachable!() };
//!
//! // Removal asks the host first
//! editor.remove(id, &|_: &str| true);
//! assert!(editor.is_empty());
//! ```

pub mod confirm;
pub mod state;
pub mod types;

pub use confirm::*;
pub use state::RecordListEditor;
pub use types::*;
