pub mod error_banner;
pub mod pagination_controls;
pub mod status_tabs;
