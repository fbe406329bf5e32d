// Dioxus imports
use dioxus::prelude::*;

// mod imports
use acquire_core::workflow::submission::{DocumentChoice, SubmissionPhase};

use super::documents_state::DOCUMENTS;
use super::evaluation_state::{
    sync_submission_state, SubmitEvaluationState, SUBMISSION,
};
use super::svg_icons::upload_icon_svg;

const INDUSTRIES: [&str; 8] = [
    "Technology",
    "Financial Services",
    "Healthcare",
    "Manufacturing",
    "Energy",
    "Retail",
    "Logistics",
    "Other",
];

/// Form for submitting a new company evaluation against a stored or
/// freshly uploaded policy document.
#[component]
pub fn company_form_modal() -> Element {
    // intialize state and coroutines
    use_coroutine(sync_submission_state);

    // Form signals
    #[allow(clippy::redundant_closure)]
    let mut company_name = use_signal(|| String::new());
    #[allow(clippy::redundant_closure)]
    let mut website = use_signal(|| String::new());
    let mut industry = use_signal(|| "Other".to_string());
    #[allow(clippy::redundant_closure)]
    let mut additional_info = use_signal(|| String::new());
    #[allow(clippy::redundant_closure)]
    let mut stored_document = use_signal(|| String::new());
    let mut uploaded_file: Signal<Option<(String, Vec<u8>)>> = use_signal(|| None);

    let documents = use_memo(move || DOCUMENTS.read().list());
    let phase = use_memo(move || SUBMISSION.read().clone());
    let in_flight = matches!(
        phase(),
        SubmissionPhase::Validating | SubmissionPhase::Uploading | SubmissionPhase::Scoring
    );

    rsx! {
        div {
            class: "dashboard_list",
            h2 { "New evaluation" }
            form {
                div {
                    class: "container",
                    label { "Company name" }
                    input {
                        r#type: "text",
                        placeholder: "company name",
                        value: "{company_name}",
                        oninput: move |evt| company_name.set(evt.value()),
                    }
                    label { "Website" }
                    input {
                        r#type: "url",
                        placeholder: "https://",
                        value: "{website}",
                        oninput: move |evt| website.set(evt.value()),
                    }
                    label { "Industry" }
                    select {
                        onchange: move |evt| industry.set(evt.value()),
                        {INDUSTRIES.iter().map(|name| rsx! {
                            option { value: "{name}", selected: *name == industry(), "{name}" }
                        })}
                    }
                    label { "Additional information" }
                    textarea {
                        placeholder: "anything the evaluation should take into account",
                        value: "{additional_info}",
                        oninput: move |evt| additional_info.set(evt.value()),
                    }
                    label { "Policy document" }
                    select {
                        onchange: move |evt| {
                            let value = evt.value();
                            stored_document.set(if value == "none" { String::new() } else { value });
                        },
                        option { value: "none", "Select a stored document" }
                        {documents().iter().map(|document| rsx! {
                            option { value: "{document.id}", "{document.name}" }
                        })}
                    }
                    {match DOCUMENTS.read().get(&stored_document()) {
                        Some(document) => rsx! {
                            p { class: "status", "Evaluating against {document.name}" }
                        },
                        None => rsx! {},
                    }}
                    label { "Or upload a new policy file" }
                    input {
                        r#type: "file",
                        accept: ".pdf,.txt,.md",
                        onchange: move |evt| async move {
                            if let Some(file_engine) = evt.files() {
                                for file_name in file_engine.files() {
                                    if let Some(bytes) = file_engine.read_file(&file_name).await {
                                        uploaded_file.set(Some((file_name.clone(), bytes)));
                                    }
                                }
                            }
                        },
                    }
                }
            }
            button {
                id: "submit_evaluation",
                disabled: in_flight,
                // This must be outside the form or it will be refreshed on each submit
                onclick: move |_| {
                    let submit = use_coroutine_handle::<SubmitEvaluationState>();
                    // an upload beats a stored selection
                    let document = match uploaded_file() {
                        Some((file_name, bytes)) => Some(DocumentChoice::Upload { file_name, bytes }),
                        None if !stored_document().is_empty() => Some(DocumentChoice::Stored {
                            document_id: stored_document(),
                        }),
                        None => None,
                    };
                    submit.send(SubmitEvaluationState {
                        company_name: company_name(),
                        website: website(),
                        industry: industry(),
                        additional_info: additional_info(),
                        document,
                    });
                },
                svg { dangerous_inner_html: upload_icon_svg() }
                "Run evaluation"
            }
            {match phase() {
                SubmissionPhase::Idle => rsx! {},
                SubmissionPhase::Failed { .. } => rsx! {
                    p { class: "error", "{phase().message()}" }
                },
                SubmissionPhase::Succeeded { .. } => rsx! {
                    p { class: "status", "{phase().message()} Open the dashboard to review it." }
                },
                _ => rsx! {
                    p { class: "status", "{phase().message()}" }
                },
            }}
        }
    }
}
