// Dioxus imports
use dioxus::prelude::*;

// mod imports
use acquire_core::model::rubric::{ExtendedContext, PolicyGrounding};
use acquire_core::view::highlight::{quote_highlight, segment, Segment};

use super::evaluation_state::PREVIEW;
use super::svg_icons::open_icon_svg;

fn segment_views(segments: Vec<Segment>) -> Element {
    rsx! {
        {segments.iter().map(|seg| {
            if seg.highlighted {
                rsx! { mark { "{seg.text}" } }
            } else {
                rsx! { span { "{seg.text}" } }
            }
        })}
    }
}

/// Overlay showing a cited source excerpt with its highlighted spans,
/// plus the policy citation that grounds the rating.
#[component]
pub fn source_preview_modal() -> Element {
    let Some(preview) = PREVIEW.read().clone() else {
        return rsx! {};
    };
    let source = preview.source;
    let excerpt = segment(&source.excerpt_text, &source.highlights);

    rsx! {
        div {
            class: "preview_overlay",
            div {
                class: "preview_modal",
                button {
                    class: "close_button",
                    onclick: move |_| *PREVIEW.write() = None,
                    "✕"
                }
                h2 { "{source.name}" }
                h3 { "{source.publisher} · {source.published_date}" }
                a {
                    href: "{source.url}",
                    target: "_blank",
                    "Open source"
                    svg { dangerous_inner_html: open_icon_svg() }
                }
                div {
                    class: "excerpt",
                    {segment_views(excerpt)}
                }
                {match preview.grounding {
                    Some(grounding) => rsx! { grounding_view { grounding } },
                    None => rsx! {},
                }}
            }
        }
    }
}

#[component]
fn grounding_view(grounding: PolicyGrounding) -> Element {
    let page = grounding
        .page_number
        .map(|n| format!(" · page {n}"))
        .unwrap_or_default();
    rsx! {
        div {
            class: "grounding",
            h3 { "Policy grounding" }
            h4 { "{grounding.document_name}{page}" }
            blockquote { "{grounding.quote}" }
            {match grounding.extended_context.clone() {
                Some(context) => rsx! {
                    extended_context_view { context, quote: grounding.quote.clone() }
                },
                None => rsx! {
                    div {
                        class: "excerpt",
                        {segment_views(segment(&grounding.context, &quote_highlight(&grounding.context, &grounding.quote)))}
                    }
                },
            }}
        }
    }
}

#[component]
fn extended_context_view(context: ExtendedContext, quote: String) -> Element {
    rsx! {
        div {
            class: "extended_context",
            {context.pages.iter().enumerate().map(|(index, page)| {
                // only the cited page carries the quote highlight
                let highlights = if index == context.highlight_page_index {
                    quote_highlight(&page.content, &quote)
                } else {
                    Vec::new()
                };
                let segments = segment(&page.content, &highlights);
                rsx! {
                    div {
                        class: "policy_page",
                        h4 { "Page {page.page_number}" }
                        div {
                            class: "excerpt",
                            {segment_views(segments)}
                        }
                    }
                }
            })}
        }
    }
}
