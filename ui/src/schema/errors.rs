use thiserror::Error;

/// A single problem found while validating a schema
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SchemaError {
    #[error("Schema {entity} declares no fields")]
    NoFields { entity: String },

    #[error("Field at position {position} has a blank name")]
    BlankFieldName { position: usize },

    #[error("Duplicate field name: {name}")]
    DuplicateField { name: String },

    #[error("Field name is reserved for the record identifier: {name}")]
    ReservedFieldName { name: String },

    #[error("Select field has no options: {name}")]
    EmptySelect { name: String },
}

/// Failure to turn a schema definition into a usable `RecordSchema`
#[derive(Debug, Error)]
pub enum SchemaLoadError {
    #[error("Schema definition is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Schema definition is invalid: {}", summarize(.0))]
    Invalid(Vec<SchemaError>),
}

fn summarize(errors: &[SchemaError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
