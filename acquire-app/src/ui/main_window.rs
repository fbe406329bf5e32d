// Dioxus imports
use dioxus::prelude::*;

// mod imports
use super::company_interface::company_form_modal;
use super::dashboard_interface::dashboard_view;
use super::dashboard_state::SELECTED_EVALUATION;
use super::documents_interface::documents_modal;
use super::evaluation_interface::evaluation_detail_view;
use super::svg_icons::{add_icon_svg, dashboard_icon_svg, document_icon_svg};

#[component]
pub fn title() -> Element {
    rsx! {
        h1 { "Acquire risk evaluation" }
    }
}

pub enum HeaderMenu {
    Dashboard,
    NewEvaluation,
    Documents,
}

impl HeaderMenu {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::NewEvaluation => "New evaluation",
            Self::Documents => "Documents",
        }
    }
}

#[component]
pub fn main_window() -> Element {
    let mut header_menu: Signal<HeaderMenu> = use_signal(|| HeaderMenu::Dashboard);

    rsx! {
        main {
            id: "dashboard_main",
            header {
                div {
                    class: "nav",
                    button {
                        onclick: move |_| async move {
                            header_menu.set(HeaderMenu::Dashboard);
                        },
                        svg { dangerous_inner_html: dashboard_icon_svg() }
                    }
                    button {
                        onclick: move |_| async move {
                            header_menu.set(HeaderMenu::NewEvaluation);
                        },
                        svg { dangerous_inner_html: add_icon_svg() }
                    }
                    button {
                        onclick: move |_| async move {
                            header_menu.set(HeaderMenu::Documents);
                        },
                        svg { dangerous_inner_html: document_icon_svg() }
                    }
                }
                div {
                    class: "logo",
                    h1 { id: "logo1", "ac" }
                    h1 { id: "logo2", "QUIRE" }
                }
            }

            // each view is its own component type
            if header_menu.read().as_str() == "Dashboard" {
                if SELECTED_EVALUATION.read().is_some() {
                    evaluation_detail_view {},
                } else {
                    dashboard_view {},
                }
            } else if header_menu.read().as_str() == "New evaluation" {
                company_form_modal {},
            } else if header_menu.read().as_str() == "Documents" {
                documents_modal {},
            }
        }
    }
}
