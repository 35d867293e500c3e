// Schema data types - no dioxus imports needed here
use serde::{Deserialize, Serialize};

/// How a field is edited in the form
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Email,
    /// Closed set of values; `prompt` is the empty leading option
    Select { prompt: String, options: Vec<String> },
}

impl FieldKind {
    /// HTML input type for non-select fields
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Email => "email",
            FieldKind::Select { .. } => "text",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: String,
    pub label: String,
    /// Table header; falls back to `label`
    #[serde(default)]
    pub column: Option<String>,
    #[serde(default)]
    pub placeholder: String,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub fn column_label(&self) -> &str {
        self.column.as_deref().unwrap_or(&self.label)
    }
}

/// Text shown around the form and table of one registry panel
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PanelLabels {
    pub title: String,
    pub subtitle: String,
    pub add: String,
    pub update: String,
    pub cancel: String,
    pub edit: String,
    pub remove: String,
    pub actions: String,
    pub empty: String,
    pub confirm_remove: String,
}

impl Default for PanelLabels {
    fn default() -> Self {
        Self {
            title: "Records".to_string(),
            subtitle: String::new(),
            add: "Add".to_string(),
            update: "Update".to_string(),
            cancel: "Cancel".to_string(),
            edit: "Edit".to_string(),
            remove: "Remove".to_string(),
            actions: "Actions".to_string(),
            empty: "No records yet".to_string(),
            confirm_remove: "Are you sure you want to remove this record?".to_string(),
        }
    }
}

/// Field layout and labels for one registry
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RecordSchema {
    /// Short key used in log lines and CSS classes, e.g. `clients`
    pub entity: String,
    #[serde(default)]
    pub labels: PanelLabels,
    pub fields: Vec<FieldSpec>,
}
