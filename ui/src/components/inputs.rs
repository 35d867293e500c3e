//! Form controls driven by a field's schema kind

use crate::schema::{FieldKind, FieldSpec};
use crate::utils::capitalize_first;
use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct SchemaInputProps {
    pub field: FieldSpec,
    pub value: String,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn SchemaInput(props: SchemaInputProps) -> Element {
    let on_change = props.on_change;
    let name = props.field.name;
    let value = props.value;

    match props.field.kind {
        FieldKind::Select { prompt, options } => {
            let choices: Vec<(String, String)> = options
                .into_iter()
                .map(|opt| {
                    let caption = capitalize_first(&opt);
                    (opt, caption)
                })
                .collect();

            rsx! {
                select {
                    class: "select",
                    name: "{name}",
                    value: "{value}",
                    onchange: move |evt| on_change.call(evt.value()),
                    option {
                        value: "",
                        selected: value.is_empty(),
                        "{prompt}"
                    }
                    for (opt, caption) in choices {
                        option {
                            value: "{opt}",
                            selected: opt == value,
                            "{caption}"
                        }
                    }
                }
            }
        }
        kind => rsx! {
            input {
                class: "input",
                r#type: "{kind.input_type()}",
                name: "{name}",
                value: "{value}",
                placeholder: "{props.field.placeholder}",
                oninput: move |evt| on_change.call(evt.value())
            }
        },
    }
}
