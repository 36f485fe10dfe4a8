pub mod data_mode;
pub mod error;
pub mod i18n;
pub mod list_cache;
pub mod paging;
