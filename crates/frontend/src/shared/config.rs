//! Session configuration flags.

use contracts::shared::data_mode::DataMode;
use once_cell::sync::OnceCell;

const MOCK_FLAG_KEY: &str = "use-mock-data";

static DATA_MODE: OnceCell<DataMode> = OnceCell::new();

/// The data-source mode for this session. Resolved once on first use and
/// cached for the rest of the session; toggling the flag requires a reload.
pub fn data_mode() -> DataMode {
    *DATA_MODE.get_or_init(resolve_data_mode)
}

fn resolve_data_mode() -> DataMode {
    if mock_flag_set() {
        DataMode::ForceMock
    } else if cfg!(debug_assertions) {
        DataMode::DevFallback
    } else {
        DataMode::Strict
    }
}

/// `localStorage["use-mock-data"] == "true"` forces the canned datasets.
fn mock_flag_set() -> bool {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(MOCK_FLAG_KEY).ok().flatten())
        .map(|value| value == "true")
        .unwrap_or(false)
}
