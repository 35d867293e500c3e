use super::{RecordSchema, SchemaLoadError};

const CLIENTS_SCHEMA: &str = include_str!("../../assets/schemas/clients.json");
const SUPPLIERS_SCHEMA: &str = include_str!("../../assets/schemas/suppliers.json");

impl RecordSchema {
    /// Client registry: name, type, document, email, phone
    pub fn clients() -> Result<Self, SchemaLoadError> {
        Self::from_json(CLIENTS_SCHEMA)
    }

    /// Supplier registry: name, social, category, cnpj, email, phone
    pub fn suppliers() -> Result<Self, SchemaLoadError> {
        Self::from_json(SUPPLIERS_SCHEMA)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldKind;

    fn field_names(schema: &RecordSchema) -> Vec<&str> {
        schema.fields.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn test_clients_preset() {
        let schema = RecordSchema::clients().unwrap();
        assert_eq!(schema.entity, "clients");
        assert_eq!(
            field_names(&schema),
            vec!["name", "type", "document", "email", "phone"]
        );

        match &schema.field("type").unwrap().kind {
            FieldKind::Select { options, .. } => {
                assert_eq!(options, &["pessoa fisica", "pessoa juridica"])
            }
            other => panic!("type should be a select, got {:?}", other),
        }
        assert_eq!(schema.field("email").unwrap().kind, FieldKind::Email);
    }

    #[test]
    fn test_suppliers_preset() {
        let schema = RecordSchema::suppliers().unwrap();
        assert_eq!(schema.entity, "suppliers");
        assert_eq!(
            field_names(&schema),
            vec!["name", "social", "category", "cnpj", "email", "phone"]
        );

        match &schema.field("category").unwrap().kind {
            FieldKind::Select { options, .. } => assert_eq!(options.len(), 5),
            other => panic!("category should be a select, got {:?}", other),
        }
        assert_eq!(schema.column_count(), 7);
    }
}
