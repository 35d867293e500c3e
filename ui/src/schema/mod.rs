//! Record Schemas
//!
//! A schema describes one registry: the ordered form fields a record carries
//! and the labels the panel shows around them.
//!
//! - **types**: `RecordSchema`, `FieldSpec`, `FieldKind`, `PanelLabels`
//! - **errors**: problems reported while loading or validating a schema
//! - **presets**: the built-in client and supplier registries
//!
//! Schemas are plain data and carry no dioxus types, so the editor logic can
//! be tested on the host target.

mod errors;
mod presets;
mod types;

pub use errors::*;
pub use types::*;

/// Field name reserved for the record identifier
pub const RESERVED_ID_FIELD: &str = "id";

impl RecordSchema {
    /// Parse a schema definition and validate it.
    pub fn from_json(source: &str) -> Result<Self, SchemaLoadError> {
        let schema: RecordSchema = serde_json::from_str(source)?;
        schema.validate().map_err(SchemaLoadError::Invalid)?;
        Ok(schema)
    }

    /// Collect every problem with the schema instead of stopping at the first.
    pub fn validate(&self) -> Result<(), Vec<SchemaError>> {
        let mut errors = Vec::new();

        if self.fields.is_empty() {
            errors.push(SchemaError::NoFields {
                entity: self.entity.clone(),
            });
        }

        let mut seen: Vec<&str> = Vec::with_capacity(self.fields.len());
        for (position, field) in self.fields.iter().enumerate() {
            let name = field.name.trim();

            if name.is_empty() {
                errors.push(SchemaError::BlankFieldName { position });
                continue;
            }

            if name == RESERVED_ID_FIELD {
                errors.push(SchemaError::ReservedFieldName {
                    name: name.to_string(),
                });
            }

            if seen.contains(&name) {
                errors.push(SchemaError::DuplicateField {
                    name: name.to_string(),
                });
            } else {
                seen.push(name);
            }

            if let FieldKind::Select { options, .. } = &field.kind {
                if options.is_empty() {
                    errors.push(SchemaError::EmptySelect {
                        name: name.to_string(),
                    });
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Look up a field definition by name
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Number of table columns, including the trailing actions column
    pub fn column_count(&self) -> usize {
        self.fields.len() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_field(name: &str) -> FieldSpec {
        FieldSpec {
            name: name.to_string(),
            label: name.to_uppercase(),
            column: None,
            placeholder: String::new(),
            kind: FieldKind::Text,
        }
    }

    fn schema_with(fields: Vec<FieldSpec>) -> RecordSchema {
        RecordSchema {
            entity: "widgets".to_string(),
            labels: PanelLabels::default(),
            fields,
        }
    }

    #[test]
    fn test_valid_schema_passes() {
        let schema = schema_with(vec![text_field("name"), text_field("email")]);
        assert!(schema.validate().is_ok());
        assert_eq!(schema.column_count(), 3);
        assert!(schema.has_field("email"));
        assert!(!schema.has_field("phone"));
    }

    #[test]
    fn test_empty_schema_rejected() {
        let errors = schema_with(Vec::new()).validate().unwrap_err();
        assert_eq!(
            errors,
            vec![SchemaError::NoFields {
                entity: "widgets".to_string()
            }]
        );
    }

    #[test]
    fn test_every_problem_is_reported() {
        let mut select = text_field("category");
        select.kind = FieldKind::Select {
            prompt: "pick one".to_string(),
            options: Vec::new(),
        };

        let schema = schema_with(vec![
            text_field("name"),
            text_field("name"),
            text_field("id"),
            text_field("  "),
            select,
        ]);

        let errors = schema.validate().unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&SchemaError::DuplicateField {
            name: "name".to_string()
        }));
        assert!(errors.contains(&SchemaError::ReservedFieldName {
            name: "id".to_string()
        }));
        assert!(errors.contains(&SchemaError::BlankFieldName { position: 3 }));
        assert!(errors.contains(&SchemaError::EmptySelect {
            name: "category".to_string()
        }));
    }

    #[test]
    fn test_from_json_reports_parse_errors() {
        let result = RecordSchema::from_json("{ not json");
        assert!(matches!(result, Err(SchemaLoadError::Parse(_))));
    }

    #[test]
    fn test_from_json_reports_invalid_schema() {
        let source = r#"{
            "entity": "empty",
            "labels": {},
            "fields": []
        }"#;

        match RecordSchema::from_json(source) {
            Err(SchemaLoadError::Invalid(errors)) => assert_eq!(errors.len(), 1),
            other => panic!("expected invalid schema, got {:?}", other),
        }
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let source = r#"{
            "entity": "notes",
            "fields": [
                { "name": "title", "label": "Title", "kind": { "type": "text" } }
            ]
        }"#;

        let schema = RecordSchema::from_json(source).unwrap();
        assert_eq!(schema.labels, PanelLabels::default());
        assert_eq!(schema.fields[0].column_label(), "Title");
        assert_eq!(schema.fields[0].placeholder, "");
    }
}
