use dioxus::prelude::*;

use crate::components::inputs::SchemaInput;
use crate::editor::{EditorAction, RecordListEditor};
use crate::schema::FieldSpec;

/// Fields per form row
const FIELDS_PER_ROW: usize = 2;

#[derive(Props, PartialEq, Clone)]
pub struct RecordFormProps {
    pub state: Signal<RecordListEditor>,
    pub dispatch: EventHandler<EditorAction>,
}

#[component]
pub fn RecordForm(props: RecordFormProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;

    let editor = state.read();
    let rows: Vec<Vec<(FieldSpec, String)>> = editor
        .schema()
        .fields
        .chunks(FIELDS_PER_ROW)
        .map(|row| {
            row.iter()
                .map(|field| (field.clone(), editor.draft().value(&field.name).to_string()))
                .collect()
        })
        .collect();
    let submit_label = editor.submit_label().to_string();
    let cancel_label = editor.schema().labels.cancel.clone();
    let form_class = if editor.is_editing() {
        "crud__form editing"
    } else {
        "crud__form"
    };
    drop(editor);

    rsx! {
        form {
            class: "{form_class}",
            onsubmit: move |evt| {
                evt.prevent_default();
                dispatch.call(EditorAction::Submit);
            },

            for row in rows {
                div {
                    class: "form-row",
                    for (field, value) in row {
                        FormField {
                            field: field,
                            value: value,
                            dispatch: dispatch
                        }
                    }
                }
            }

            div {
                class: "actions",
                button {
                    r#type: "submit",
                    class: "btn btn-primary",
                    "{submit_label}"
                }
                button {
                    r#type: "button",
                    class: "btn btn-ghost",
                    onclick: move |_| dispatch.call(EditorAction::ResetDraft),
                    "{cancel_label}"
                }
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
struct FormFieldProps {
    field: FieldSpec,
    value: String,
    dispatch: EventHandler<EditorAction>,
}

#[component]
fn FormField(props: FormFieldProps) -> Element {
    let dispatch = props.dispatch;
    let name = props.field.name.clone();
    let label = props.field.label.clone();

    rsx! {
        div {
            class: "form-field",
            label {
                class: "label",
                "{label}"
            }
            SchemaInput {
                field: props.field,
                value: props.value,
                on_change: move |value: String| {
                    dispatch.call(EditorAction::UpdateField {
                        name: name.clone(),
                        value,
                    });
                }
            }
        }
    }
}
