use leptos::prelude::*;
use web_sys::window;

/// Top-level pages of the console. One is active at a time; the active key
/// is mirrored into the URL query string so a reload lands on the same
/// page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    FiliationFiles,
    TherapistsData,
    LegalGuardiansData,
    TherapyPlanning,
    Settings,
}

impl Page {
    pub fn key(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::FiliationFiles => "patients-filiation-files",
            Page::TherapistsData => "therapists-data",
            Page::LegalGuardiansData => "legal-guardians-data",
            Page::TherapyPlanning => "therapy-planning",
            Page::Settings => "settings",
        }
    }

    pub fn from_key(key: &str) -> Option<Page> {
        Page::all().into_iter().find(|p| p.key() == key)
    }

    /// Translation key inside the "nav" namespace.
    pub fn nav_key(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::FiliationFiles => "filiation-files",
            Page::TherapistsData => "therapists-data",
            Page::LegalGuardiansData => "legal-guardians-data",
            Page::TherapyPlanning => "therapy-planning",
            Page::Settings => "settings",
        }
    }

    pub fn all() -> [Page; 6] {
        [
            Page::Dashboard,
            Page::FiliationFiles,
            Page::TherapistsData,
            Page::LegalGuardiansData,
            Page::TherapyPlanning,
            Page::Settings,
        ]
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Page>,
    pub sidebar_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(page_from_url().unwrap_or(Page::Dashboard)),
            sidebar_open: RwSignal::new(true),
        }
    }

    pub fn navigate(&self, page: Page) {
        self.active.set(page);
        sync_url(page);
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_open.update(|open| *open = !*open);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context")
}

fn page_from_url() -> Option<Page> {
    let search = window().and_then(|w| w.location().search().ok())?;
    search
        .trim_start_matches('?')
        .split('&')
        .find_map(|pair| pair.strip_prefix("page="))
        .and_then(Page::from_key)
}

fn sync_url(page: Page) {
    let Some(w) = window() else { return };
    let new_url = format!("?page={}", page.key());
    let current = w.location().search().unwrap_or_default();
    // Only touch history when the URL actually changed.
    if current != new_url {
        if let Ok(history) = w.history() {
            let _ = history.replace_state_with_url(
                &wasm_bindgen::JsValue::NULL,
                "",
                Some(&new_url),
            );
        }
    }
}
