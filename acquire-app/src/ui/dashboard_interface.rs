// Dioxus imports
use dioxus::prelude::*;

// mod imports
use acquire_core::scoring::rating::RiskBand;
use acquire_core::view::pipeline::{project, CompanyRow, SortColumn, SortDirection};

use super::backend::CONNECTED;
use super::dashboard_state::{
    sync_evaluations_state, RefreshEvaluationsState, EVALUATIONS, QUERY, SELECTED_EVALUATION,
};
use super::svg_icons::{refresh_icon_svg, search_icon_svg};

/// Arrow suffix for the column header currently sorted on.
pub fn sort_marker(column: SortColumn) -> &'static str {
    match QUERY.read().sort {
        Some((active, SortDirection::Descending)) if active == column => " ▼",
        Some((active, SortDirection::Ascending)) if active == column => " ▲",
        _ => "",
    }
}

/// Distinct industries among the listed evaluations, for the filter
/// dropdown.
pub fn industries_shown() -> Vec<String> {
    let mut industries = EVALUATIONS
        .read()
        .list()
        .iter()
        .map(|record| {
            if record.company_info.industry.is_empty() {
                "Other".to_string()
            } else {
                record.company_info.industry.clone()
            }
        })
        .collect::<Vec<_>>();
    industries.sort();
    industries.dedup();
    industries
}

const BAND_OPTIONS: [&str; 4] = ["High", "Medium", "Low", "Pending"];

/// The company list: search, per-column filters, sortable score columns
/// and one row per evaluation.
#[component]
pub fn dashboard_view() -> Element {
    // intialize state and coroutines
    use_coroutine(sync_evaluations_state);
    let refresh = use_coroutine_handle::<RefreshEvaluationsState>();

    // initial fetch when backed by the external service
    use_future(move || async move {
        if CONNECTED {
            refresh.send(RefreshEvaluationsState {});
        }
    });

    // `rows` will update itself whenever the registry or the query change
    let rows: Memo<Vec<CompanyRow>> =
        use_memo(move || project(&EVALUATIONS.read().list(), &QUERY.read()));
    let industries = use_memo(industries_shown);

    rsx! {
        div {
            class: "dashboard_list",

            // Search companies
            div {
                class: "dropdown_form",
                form {
                    id: "company_search_form",
                    input {
                        r#type: "text",
                        placeholder: "search companies",
                        value: "{QUERY.read().search_text}",
                        oninput: move |evt| QUERY.write().search_text = evt.value(),
                    },
                },
                svg { class: "form_icon", dangerous_inner_html: search_icon_svg() },
                button {
                    id: "refresh_evaluations",
                    onclick: move |_| refresh.send(RefreshEvaluationsState {}),
                    svg { dangerous_inner_html: refresh_icon_svg() },
                }
            }

            if EVALUATIONS.read().loading() {
                p { class: "status", "Refreshing evaluations..." }
            }
            if EVALUATIONS.read().error().is_some() {
                p {
                    class: "error",
                    "{EVALUATIONS.read().error().unwrap_or_default()}"
                }
            }

            // Filters
            div {
                class: "dropdown_form",
                select {
                    id: "rubric_band_filter",
                    onchange: move |evt| QUERY.write().filters.rubric_band = RiskBand::parse(&evt.value()),
                    option { value: "all", "Rubric score: all" }
                    {BAND_OPTIONS.iter().map(|band| rsx! {
                        option { value: "{band}", "{band}" }
                    })}
                },
                select {
                    id: "our_score_band_filter",
                    onchange: move |evt| QUERY.write().filters.our_score_band = RiskBand::parse(&evt.value()),
                    option { value: "all", "Our score: all" }
                    {BAND_OPTIONS.iter().map(|band| rsx! {
                        option { value: "{band}", "{band}" }
                    })}
                },
                select {
                    id: "final_band_filter",
                    onchange: move |evt| QUERY.write().filters.final_score_band = RiskBand::parse(&evt.value()),
                    option { value: "all", "Final score: all" }
                    {BAND_OPTIONS.iter().map(|band| rsx! {
                        option { value: "{band}", "{band}" }
                    })}
                },
                select {
                    id: "industry_filter",
                    onchange: move |evt| {
                        let value = evt.value();
                        QUERY.write().filters.industry =
                            if value == "all" { None } else { Some(value) };
                    },
                    option { value: "all", "Industry: all" }
                    {industries().iter().map(|industry| rsx! {
                        option { value: "{industry}", "{industry}" }
                    })}
                }
            }

            // Company table
            div {
                style: "overflow-x:auto;overflow-y:auto;",
                class: "output_table",
                table {
                    id: "output_table_companies",
                    tr {
                        th { "Company" },
                        th { "Industry" },
                        th {
                            class: "sortable",
                            onclick: move |_| QUERY.write().toggle_sort(SortColumn::RubricScore),
                            "Rubric score{sort_marker(SortColumn::RubricScore)}"
                        },
                        th {
                            class: "sortable",
                            onclick: move |_| QUERY.write().toggle_sort(SortColumn::OurScore),
                            "Our score{sort_marker(SortColumn::OurScore)}"
                        },
                        th {
                            class: "sortable",
                            onclick: move |_| QUERY.write().toggle_sort(SortColumn::FinalScore),
                            "Final score{sort_marker(SortColumn::FinalScore)}"
                        },
                        th {
                            class: "sortable",
                            onclick: move |_| QUERY.write().toggle_sort(SortColumn::LastUpdated),
                            "Last updated{sort_marker(SortColumn::LastUpdated)}"
                        }
                    },
                    {rows().iter().map(|row| {
                        let key = row.id.clone();
                        let id = row.id.clone();
                        rsx! {
                            tr {
                                key: "{key}",
                                class: "company_row",
                                onclick: move |_| *SELECTED_EVALUATION.write() = Some(id.clone()),
                                td { "{row.company}" },
                                td { "{row.industry}" },
                                td { span { class: "chip {row.rubric_score.color_token()}", "{row.rubric_score.as_str()}" } },
                                td { span { class: "chip {row.our_score.color_token()}", "{row.our_score.as_str()}" } },
                                td { span { class: "chip {row.final_score.color_token()}", "{row.final_score.as_str()}" } },
                                td { "{row.last_updated}" }
                            }
                        }
                    })}
                }
            }

            if rows().is_empty() {
                p { class: "status", "No companies match the current search and filters." }
            }
        }
    }
}
