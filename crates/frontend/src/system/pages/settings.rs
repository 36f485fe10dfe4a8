use leptos::prelude::*;

use crate::shared::i18n::{use_i18n, SUPPORTED_LOCALES};
use crate::shared::theme::use_theme;

const SETTINGS_NAMESPACE: &str = "settings";

/// Configuration and settings: interface language and theme. Switching
/// the locale drops every loaded translation chunk and reloads them under
/// the new locale.
#[component]
pub fn SettingsPage() -> impl IntoView {
    let i18n = use_i18n();
    let theme = use_theme();
    i18n.load_chunk(SETTINGS_NAMESPACE);

    view! {
        <div class="page">
            <div class="header">
                <h1 class="header__title">{move || i18n.t(SETTINGS_NAMESPACE, "title")}</h1>
            </div>
            <p class="page__intro">{move || i18n.t(SETTINGS_NAMESPACE, "intro")}</p>

            <div class="settings__row">
                <label class="form__label">{move || i18n.t(SETTINGS_NAMESPACE, "language")}</label>
                <select
                    on:change=move |ev| i18n.set_locale(&event_target_value(&ev))
                    prop:value=move || i18n.locale()
                >
                    {SUPPORTED_LOCALES
                        .iter()
                        .map(|&locale| {
                            view! {
                                <option value={locale} selected=move || i18n.locale() == locale>
                                    {locale}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            <div class="settings__row">
                <label class="form__label">{move || i18n.t(SETTINGS_NAMESPACE, "dark-theme")}</label>
                <input
                    type="checkbox"
                    prop:checked=move || theme.is_dark()
                    on:change=move |_| theme.toggle()
                />
            </div>
        </div>
    }
}
