//! Namespaced translation dictionary store.
//!
//! One store lives for the whole application session. Namespaces load
//! lazily per locale; lookups are total and degrade to visible sentinel
//! strings instead of throwing, so missing translations surface during
//! manual testing rather than crashing a view. Three sentinels are
//! deliberately distinguishable: namespace never loaded, load in flight,
//! and key absent from a loaded namespace.

use std::collections::HashMap;

pub type Dictionary = HashMap<String, String>;

#[derive(Debug, Clone, PartialEq)]
enum ChunkState {
    Loading,
    Loaded(Dictionary),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TranslationStore {
    locale: String,
    chunks: HashMap<String, ChunkState>,
}

impl TranslationStore {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            chunks: HashMap::new(),
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Total lookup. Never panics and never returns an empty string for
    /// missing data.
    pub fn translate(&self, namespace: &str, key: &str) -> String {
        match self.chunks.get(namespace) {
            None => format!("[Missing Namespace: {namespace}]"),
            Some(ChunkState::Loading) => format!("[Loading: {key}]"),
            Some(ChunkState::Loaded(dict)) => match dict.get(key) {
                Some(text) => text.clone(),
                None => format!("[Missing Key: {namespace}.{key}]"),
            },
        }
    }

    /// Mark a namespace as loading. Returns `true` when the caller must
    /// actually issue the fetch; `false` means the namespace is already
    /// loading or loaded, de-duplicating overlapping requests.
    pub fn begin_load(&mut self, namespace: &str) -> bool {
        if self.chunks.contains_key(namespace) {
            return false;
        }
        self.chunks
            .insert(namespace.to_string(), ChunkState::Loading);
        true
    }

    /// Commit a fetched dictionary. The locale captured when the load
    /// started is re-checked here: a bundle that raced with a locale
    /// switch is dropped instead of mixing locales.
    pub fn commit_chunk(&mut self, namespace: &str, locale_at_start: &str, dict: Dictionary) {
        if self.locale != locale_at_start {
            return;
        }
        self.chunks
            .insert(namespace.to_string(), ChunkState::Loaded(dict));
    }

    /// Clear the loading mark after a failed fetch so a later `begin_load`
    /// can retry. Loaded dictionaries are left alone.
    pub fn fail_chunk(&mut self, namespace: &str, locale_at_start: &str) {
        if self.locale != locale_at_start {
            return;
        }
        if matches!(self.chunks.get(namespace), Some(ChunkState::Loading)) {
            self.chunks.remove(namespace);
        }
    }

    /// Switch locale and drop every loaded chunk. No partial carryover:
    /// all namespaces reload from scratch under the new locale.
    pub fn set_locale(&mut self, locale: impl Into<String>) {
        self.locale = locale.into();
        self.chunks.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict(pairs: &[(&str, &str)]) -> Dictionary {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn sentinels_track_the_load_lifecycle() {
        let mut store = TranslationStore::new("en");
        assert_eq!(
            store.translate("patients", "table-header"),
            "[Missing Namespace: patients]"
        );

        assert!(store.begin_load("patients"));
        assert_eq!(
            store.translate("patients", "table-header"),
            "[Loading: table-header]"
        );

        store.commit_chunk("patients", "en", dict(&[("other-key", "Other")]));
        assert_eq!(
            store.translate("patients", "table-header"),
            "[Missing Key: patients.table-header]"
        );

        let mut store = TranslationStore::new("en");
        store.begin_load("patients");
        store.commit_chunk("patients", "en", dict(&[("table-header", "Patients")]));
        assert_eq!(store.translate("patients", "table-header"), "Patients");
    }

    #[test]
    fn overlapping_loads_fetch_once() {
        let mut store = TranslationStore::new("en");
        assert!(store.begin_load("nav"));
        assert!(!store.begin_load("nav"));
        store.commit_chunk("nav", "en", dict(&[]));
        assert!(!store.begin_load("nav"));
    }

    #[test]
    fn failed_load_allows_retry() {
        let mut store = TranslationStore::new("en");
        assert!(store.begin_load("nav"));
        store.fail_chunk("nav", "en");
        assert_eq!(store.translate("nav", "home"), "[Missing Namespace: nav]");
        assert!(store.begin_load("nav"));
    }

    #[test]
    fn locale_switch_resets_every_chunk() {
        let mut store = TranslationStore::new("es");
        store.begin_load("common");
        store.commit_chunk("common", "es", dict(&[("save", "Guardar")]));
        assert_eq!(store.translate("common", "save"), "Guardar");

        store.set_locale("en");
        // No silent reuse of the Spanish strings.
        assert_eq!(
            store.translate("common", "save"),
            "[Missing Namespace: common]"
        );
        store.begin_load("common");
        store.commit_chunk("common", "en", dict(&[("save", "Save")]));
        assert_eq!(store.translate("common", "save"), "Save");
    }

    #[test]
    fn stale_locale_commit_is_dropped() {
        let mut store = TranslationStore::new("es");
        store.begin_load("common");
        store.set_locale("en");
        // Bundle fetched for "es" resolves after the switch.
        store.commit_chunk("common", "es", dict(&[("save", "Guardar")]));
        assert_eq!(
            store.translate("common", "save"),
            "[Missing Namespace: common]"
        );
    }
}
