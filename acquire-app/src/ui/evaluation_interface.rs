// Dioxus imports
use dioxus::prelude::*;

// mod imports
use acquire_core::model::evaluation::Scores;
use acquire_core::model::rubric::RubricItem;
use acquire_core::scoring::rating::{classify, score_color};

use super::dashboard_state::{EVALUATIONS, SELECTED_EVALUATION};
use super::evaluation_state::{PreviewState, PREVIEW};
use super::source_preview_interface::source_preview_modal;
use super::svg_icons::{back_icon_svg, open_icon_svg};

/// Full evaluation detail: aggregate scores, recommendation and the
/// scored rubric for both concern groups.
#[component]
pub fn evaluation_detail_view() -> Element {
    let record = use_memo(move || {
        SELECTED_EVALUATION
            .read()
            .as_ref()
            .and_then(|id| EVALUATIONS.read().get(id).ok())
    });

    let Some(record) = record() else {
        return rsx! {
            div {
                class: "dashboard_list",
                button {
                    class: "back_button",
                    onclick: move |_| *SELECTED_EVALUATION.write() = None,
                    svg { dangerous_inner_html: back_icon_svg() }
                }
                p { class: "status", "Evaluation not found." }
            }
        };
    };
    let industry = if record.company_info.industry.is_empty() {
        "Other".to_string()
    } else {
        record.company_info.industry.clone()
    };
    let website = record.company_info.website.clone();
    let scores = record.scores().cloned();
    let rubric_results = record.result().map(|r| r.rubric_results.clone());

    rsx! {
        div {
            class: "dashboard_list",
            button {
                class: "back_button",
                onclick: move |_| *SELECTED_EVALUATION.write() = None,
                svg { dangerous_inner_html: back_icon_svg() }
            }

            div {
                class: "detail_header",
                h1 { "{record.company_name}" }
                h3 { "{industry}" }
                if !website.is_empty() {
                    a {
                        href: "{website}",
                        target: "_blank",
                        "{website}"
                        svg { dangerous_inner_html: open_icon_svg() }
                    }
                }
            }

            {match scores {
                Some(scores) => rsx! { scores_summary { scores } },
                None => rsx! { p { class: "status", "Scores pending..." } },
            }}

            {match rubric_results {
                Some(results) => rsx! {
                    rubric_group {
                        title: "Your policy concerns".to_string(),
                        items: results.your_policy_concerns,
                    }
                    rubric_group {
                        title: "General policy concerns".to_string(),
                        items: results.general_policy_concerns,
                    }
                },
                None => rsx! {},
            }}

            source_preview_modal {}
        }
    }
}

#[component]
fn scores_summary(scores: Scores) -> Element {
    let rubric_band = classify(scores.your_policy_avg);
    let our_band = classify(scores.general_policy_avg);
    let final_band = classify(scores.final_score);
    rsx! {
        div {
            class: "scores_summary",
            div {
                class: "score_card",
                h3 { "Rubric score" }
                span { class: "chip {rubric_band.color_token()}", {format!("{:.1}", scores.your_policy_avg)} }
            }
            div {
                class: "score_card",
                h3 { "Our score" }
                span { class: "chip {our_band.color_token()}", {format!("{:.1}", scores.general_policy_avg)} }
            }
            div {
                class: "score_card",
                h3 { "Final score" }
                span { class: "chip {final_band.color_token()}", {format!("{:.1}", scores.final_score)} }
            }
            p { class: "recommendation", "{scores.recommendation}" }
        }
    }
}

#[component]
fn rubric_group(title: String, items: Vec<RubricItem>) -> Element {
    rsx! {
        div {
            class: "rubric_group",
            h2 { "{title}" }
            {items.iter().map(|item| {
                let grounding = item.policy_grounding.clone();
                rsx! {
                    div {
                        class: "rubric_item",
                        div {
                            class: "rubric_item_header",
                            h3 { "{item.category}" }
                            span { class: "score {score_color(item.score)}", {format!("{:.1}", item.score)} }
                        }
                        p { "{item.rating}" }
                        div {
                            class: "source_chips",
                            {item.sources.iter().map(|source| {
                                let preview = PreviewState {
                                    source: source.clone(),
                                    grounding: grounding.clone(),
                                };
                                rsx! {
                                    button {
                                        class: "source_chip",
                                        onclick: move |_| *PREVIEW.write() = Some(preview.clone()),
                                        "{source.name}"
                                    }
                                }
                            })}
                        }
                    }
                }
            })}
        }
    }
}
