pub mod main_window;
pub mod svg_icons;

pub mod backend;

pub mod company_interface;
pub mod dashboard_interface;
pub mod documents_interface;
pub mod evaluation_interface;
pub mod source_preview_interface;

pub mod dashboard_state;
pub mod documents_state;
pub mod evaluation_state;
