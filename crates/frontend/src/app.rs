use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::i18n::I18nService;
use crate::shared::theme::ThemeService;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Session-lifetime services, provided once from the shell root.
    provide_context(AppGlobalContext::new());
    provide_context(I18nService::new());
    provide_context(ThemeService::new());

    view! {
        <AppRoutes />
    }
}
