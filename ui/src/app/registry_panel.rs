use crate::{console_debug, console_error, console_info};
use dioxus::prelude::*;

use crate::components::display::RecordTable;
use crate::components::forms::RecordForm;
use crate::editor::{BrowserConfirm, EditOutcome, EditorAction, RecordListEditor};
use crate::schema::{RecordSchema, SchemaLoadError};

const REGISTRY_CSS: Asset = asset!("/assets/styling/registry.css");

#[derive(Props, PartialEq, Clone)]
pub struct RegistryPanelProps {
    pub schema: RecordSchema,
}

/// Form and table over one in-memory record list
#[component]
pub fn RegistryPanel(props: RegistryPanelProps) -> Element {
    let entity = props.schema.entity.clone();
    let title = props.schema.labels.title.clone();
    let subtitle = props.schema.labels.subtitle.clone();

    // The list lives only as long as the panel is mounted
    let initial_schema = props.schema;
    let mut state = use_signal(move || RecordListEditor::new(initial_schema));

    // In-place reduction keeps the signal identity stable for subscribers
    let log_entity = entity.clone();
    let dispatch = EventHandler::new(move |action: EditorAction| {
        let outcome = state.with_mut(|editor| editor.reduce_in_place(action, &BrowserConfirm));
        log_outcome(&log_entity, outcome);
    });

    rsx! {
        document::Link { rel: "stylesheet", href: REGISTRY_CSS }

        div {
            class: "card crud crud--{entity}",

            h2 {
                class: "crud__title",
                "{title}"
            }
            if !subtitle.is_empty() {
                p {
                    class: "crud__subtitle",
                    "{subtitle}"
                }
            }

            RecordForm {
                state: state,
                dispatch: dispatch
            }

            RecordTable {
                state: state,
                dispatch: dispatch
            }
        }
    }
}

fn log_outcome(entity: &str, outcome: EditOutcome) {
    match outcome {
        EditOutcome::FieldUpdated | EditOutcome::DraftReset => {}
        EditOutcome::RemovalDeclined(id) => {
            console_info!("[Registry:{}] Removal of {} declined", entity, id);
        }
        other => {
            console_debug!("[Registry:{}] {:?}", entity, other);
        }
    }
}

fn load_preset(
    entity: &str,
    load: fn() -> Result<RecordSchema, SchemaLoadError>,
) -> Result<RecordSchema, String> {
    load().map_err(|err| {
        console_error!("[Registry:{}] Failed to load schema: {}", entity, err);
        err.to_string()
    })
}

/// Renders a panel for a schema preset, or the reason it could not load
fn render_preset(preset: Result<RecordSchema, String>) -> Element {
    match preset {
        Ok(schema) => rsx! {
            RegistryPanel { schema: schema }
        },
        Err(message) => rsx! {
            div {
                class: "card crud crud--error",
                "⚠ {message}"
            }
        },
    }
}

#[component]
pub fn ClientsPanel() -> Element {
    let preset = use_hook(|| load_preset("clients", RecordSchema::clients));
    render_preset(preset)
}

#[component]
pub fn SuppliersPanel() -> Element {
    let preset = use_hook(|| load_preset("suppliers", RecordSchema::suppliers));
    render_preset(preset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SchemaError;

    fn broken() -> Result<RecordSchema, SchemaLoadError> {
        Err(SchemaLoadError::Invalid(vec![SchemaError::NoFields {
            entity: "broken".to_string(),
        }]))
    }

    #[test]
    fn test_load_preset_passes_valid_schema() {
        let schema = load_preset("clients", RecordSchema::clients).unwrap();
        assert_eq!(schema.entity, "clients");
    }

    #[test]
    fn test_load_preset_reports_error_message() {
        let message = load_preset("broken", broken).unwrap_err();
        assert_eq!(
            message,
            "Schema definition is invalid: Schema broken declares no fields"
        );
    }
}
