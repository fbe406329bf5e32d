// Dioxus imports
use dioxus::prelude::*;

// mod imports
use acquire_core::registry::documents::SEED_ID_PREFIX;

use super::documents_state::{
    sync_add_document_state, sync_remove_document_state, AddDocumentState, RemoveDocumentState,
    DOCUMENTS, DOCUMENTS_ERROR,
};
use super::svg_icons::{delete_icon_svg, upload_icon_svg};

/// Render a byte count the way file pickers do.
pub fn format_size(bytes: u64) -> String {
    if bytes >= 1_048_576 {
        format!("{:.1} MB", bytes as f64 / 1_048_576.0)
    } else if bytes >= 1_024 {
        format!("{:.1} KB", bytes as f64 / 1_024.0)
    } else {
        format!("{bytes} B")
    }
}

/// View of the stored policy documents with upload and remove.
#[component]
pub fn documents_modal() -> Element {
    // intialize state and coroutines
    use_coroutine(sync_add_document_state);
    use_coroutine(sync_remove_document_state);

    let documents = use_memo(move || DOCUMENTS.read().list());

    rsx! {
        div {
            class: "dashboard_list",
            h2 { "Policy documents" }

            div {
                class: "dropdown_form",
                label {
                    class: "upload_button",
                    svg { dangerous_inner_html: upload_icon_svg() }
                    "Upload document"
                    input {
                        r#type: "file",
                        accept: ".pdf,.txt,.md",
                        onchange: move |evt| async move {
                            let add_document = use_coroutine_handle::<AddDocumentState>();
                            if let Some(file_engine) = evt.files() {
                                for file_name in file_engine.files() {
                                    if let Some(bytes) = file_engine.read_file(&file_name).await {
                                        add_document.send(AddDocumentState {
                                            name: file_name.clone(),
                                            bytes,
                                        });
                                    }
                                }
                            }
                        },
                    }
                }
            }

            if DOCUMENTS_ERROR.read().is_some() {
                p {
                    class: "error",
                    "{DOCUMENTS_ERROR.read().clone().unwrap_or_default()}"
                }
            }

            div {
                style: "overflow-x:auto;overflow-y:auto;",
                class: "output_table",
                table {
                    id: "output_table_documents",
                    tr {
                        th { "Name" },
                        th { "Size" },
                        th { "Uploaded" },
                        th { "" }
                    },
                    {documents().iter().map(|document| {
                        let key = document.id.clone();
                        let id = document.id.clone();
                        let seeded = document.id.starts_with(SEED_ID_PREFIX);
                        rsx! {
                            tr {
                                key: "{key}",
                                td { "{document.name}" },
                                td { "{format_size(document.size)}" },
                                td { "{document.uploaded_at}" },
                                td {
                                    if !seeded {
                                        button {
                                            class: "delete_button",
                                            onclick: move |_| {
                                                let remove_document = use_coroutine_handle::<RemoveDocumentState>();
                                                remove_document.send(RemoveDocumentState { id: id.clone() });
                                            },
                                            svg { dangerous_inner_html: delete_icon_svg() }
                                        }
                                    }
                                }
                            }
                        }
                    })}
                }
            }
        }
    }
}
