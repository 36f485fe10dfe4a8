//! Reactive wrapper around the session-wide translation store.
//!
//! The pure store lives in `contracts::shared::i18n`; this service puts it
//! behind a Leptos signal so `t` lookups re-render when a namespace bundle
//! lands, and owns the bundle fetches.

use contracts::shared::error::FetchError;
use contracts::shared::i18n::{Dictionary, TranslationStore};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

pub const DEFAULT_NAMESPACE: &str = "common";
pub const SUPPORTED_LOCALES: [&str; 2] = ["en", "es"];
const DEFAULT_LOCALE: &str = "en";
const LOCALE_STORAGE_KEY: &str = "app-locale";

#[derive(Clone, Copy)]
pub struct I18nService {
    store: RwSignal<TranslationStore>,
}

impl I18nService {
    pub fn new() -> Self {
        let service = Self {
            store: RwSignal::new(TranslationStore::new(load_saved_locale())),
        };
        service.load_chunk(DEFAULT_NAMESPACE);
        service
    }

    /// Synchronous, total lookup. Tracked, so views re-render once the
    /// namespace resolves.
    pub fn t(&self, namespace: &str, key: &str) -> String {
        self.store.with(|s| s.translate(namespace, key))
    }

    pub fn locale(&self) -> String {
        self.store.with(|s| s.locale().to_string())
    }

    /// Switch locale: every loaded namespace is dropped and the default
    /// one reloads under the new locale.
    pub fn set_locale(&self, locale: &str) {
        self.store.update(|s| s.set_locale(locale));
        save_locale(locale);
        self.load_chunk(DEFAULT_NAMESPACE);
    }

    /// Fire-and-forget namespace load. No-op when the namespace is already
    /// loading or loaded for the current locale; a failed load only logs
    /// and leaves the sentinel text in place.
    pub fn load_chunk(&self, namespace: &str) {
        let must_fetch = self
            .store
            .try_update(|s| s.begin_load(namespace))
            .unwrap_or(false);
        if !must_fetch {
            return;
        }

        let store = self.store;
        let namespace = namespace.to_string();
        let locale = self.store.with_untracked(|s| s.locale().to_string());
        spawn_local(async move {
            let url = format!("/locales/{}/{}.json", locale, namespace);
            let result = crate::shared::api_utils::get_json(&url).await.and_then(|raw| {
                serde_json::from_value::<Dictionary>(raw)
                    .map_err(|e| FetchError::Decode(e.to_string()))
            });
            match result {
                Ok(dict) => store.update(|s| s.commit_chunk(&namespace, &locale, dict)),
                Err(e) => {
                    log::error!("failed to load translation chunk {}/{}: {}", locale, namespace, e);
                    store.update(|s| s.fail_chunk(&namespace, &locale));
                }
            }
        });
    }
}

pub fn use_i18n() -> I18nService {
    use_context::<I18nService>().expect("I18nService not found in context")
}

fn load_saved_locale() -> String {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(LOCALE_STORAGE_KEY).ok().flatten())
        .filter(|saved| SUPPORTED_LOCALES.contains(&saved.as_str()))
        .unwrap_or_else(|| DEFAULT_LOCALE.to_string())
}

fn save_locale(locale: &str) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(LOCALE_STORAGE_KEY, locale);
    }
}
