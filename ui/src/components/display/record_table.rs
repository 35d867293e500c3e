use dioxus::prelude::*;

use crate::editor::{EditorAction, RecordId, RecordListEditor};

#[derive(Props, PartialEq, Clone)]
pub struct RecordTableProps {
    pub state: Signal<RecordListEditor>,
    pub dispatch: EventHandler<EditorAction>,
}

#[component]
pub fn RecordTable(props: RecordTableProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;

    let editor = state.read();
    let schema = editor.schema();
    let headers: Vec<String> = schema
        .fields
        .iter()
        .map(|field| field.column_label().to_string())
        .collect();
    let rows: Vec<(RecordId, Vec<String>)> = editor
        .records()
        .iter()
        .map(|record| {
            let cells = schema
                .fields
                .iter()
                .map(|field| record.value(&field.name).to_string())
                .collect();
            (record.id, cells)
        })
        .collect();
    let editing = editor.draft().id;
    let labels = schema.labels.clone();
    let column_count = schema.column_count();
    drop(editor);

    rsx! {
        table {
            class: "table",
            thead {
                tr {
                    for header in headers {
                        th { class: "th", "{header}" }
                    }
                    th { class: "th", "{labels.actions}" }
                }
            }
            tbody {
                if rows.is_empty() {
                    tr {
                        td {
                            class: "td empty",
                            colspan: "{column_count}",
                            "{labels.empty}"
                        }
                    }
                } else {
                    for (id, cells) in rows {
                        tr {
                            key: "{id}",
                            class: if editing == Some(id) { "row editing" } else { "row" },
                            for cell in cells {
                                td { class: "td", "{cell}" }
                            }
                            td {
                                class: "td",
                                div {
                                    class: "row-actions",
                                    button {
                                        r#type: "button",
                                        class: "btn btn-small",
                                        onclick: move |_| dispatch.call(EditorAction::BeginEdit(id)),
                                        "{labels.edit}"
                                    }
                                    button {
                                        r#type: "button",
                                        class: "btn btn-small btn-danger",
                                        onclick: move |_| dispatch.call(EditorAction::Remove(id)),
                                        "{labels.remove}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
