// Core types for the record editor - no dioxus imports needed here
use std::collections::BTreeMap;
use std::fmt;

use uuid::Uuid;

use crate::schema::RecordSchema;

/// Identifier of a record within one editor's list
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Draw a fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for RecordId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Field values keyed by field name
pub type FieldValues = BTreeMap<String, String>;

fn empty_values(schema: &RecordSchema) -> FieldValues {
    schema
        .fields
        .iter()
        .map(|field| (field.name.clone(), String::new()))
        .collect()
}

/// A committed entry in the list
#[derive(Clone, PartialEq, Debug)]
pub struct Record {
    pub id: RecordId,
    pub values: FieldValues,
}

impl Record {
    /// Value of a field, empty when the record has none
    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or_default()
    }
}

/// In-progress form state. `id == None` means create mode.
#[derive(Clone, PartialEq, Debug)]
pub struct Draft {
    pub id: Option<RecordId>,
    pub values: FieldValues,
}

impl Draft {
    /// Blank draft in create mode with every schema field present
    pub fn empty(schema: &RecordSchema) -> Self {
        Self {
            id: None,
            values: empty_values(schema),
        }
    }

    /// Draft editing an existing record
    pub fn from_record(record: &Record) -> Self {
        Self {
            id: Some(record.id),
            values: record.values.clone(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.id.is_some()
    }

    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or_default()
    }
}

// Action enum for state mutations
#[derive(Clone, Debug, PartialEq)]
pub enum EditorAction {
    UpdateField { name: String, value: String },
    ResetDraft,
    Submit,
    BeginEdit(RecordId),
    Remove(RecordId),
}

/// What an editor operation did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditOutcome {
    FieldUpdated,
    /// Field name is not part of the schema; draft unchanged
    FieldIgnored,
    DraftReset,
    Created(RecordId),
    Updated(RecordId),
    EditStarted(RecordId),
    Removed(RecordId),
    RemovalDeclined(RecordId),
    NotFound(RecordId),
}

impl EditOutcome {
    /// True when the record list itself changed
    pub fn changed_records(&self) -> bool {
        matches!(
            self,
            EditOutcome::Created(_) | EditOutcome::Updated(_) | EditOutcome::Removed(_)
        )
    }
}
