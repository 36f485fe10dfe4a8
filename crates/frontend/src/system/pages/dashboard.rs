use leptos::prelude::*;

use crate::shared::i18n::use_i18n;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div class="page">
            <div class="header">
                <h1 class="header__title">{move || i18n.t("common", "welcome-title")}</h1>
            </div>
            <p class="page__intro">{move || i18n.t("common", "welcome-text")}</p>
        </div>
    }
}
