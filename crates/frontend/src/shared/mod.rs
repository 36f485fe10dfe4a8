pub mod api_utils;
pub mod components;
pub mod config;
pub mod i18n;
pub mod theme;
