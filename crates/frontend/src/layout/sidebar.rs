use leptos::prelude::*;

use crate::layout::global_context::{use_app_context, Page};
use crate::shared::i18n::use_i18n;

const NAV_NAMESPACE: &str = "nav";

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();
    let i18n = use_i18n();
    i18n.load_chunk(NAV_NAMESPACE);

    view! {
        <nav class="sidebar">
            <div class="sidebar__title">{move || i18n.t(NAV_NAMESPACE, "app-title")}</div>
            <ul class="sidebar__items">
                {Page::all()
                    .into_iter()
                    .map(|page| {
                        view! {
                            <li>
                                <button
                                    class="sidebar__item"
                                    class:sidebar__item--active=move || ctx.active.get() == page
                                    on:click=move |_| ctx.navigate(page)
                                >
                                    {move || i18n.t(NAV_NAMESPACE, page.nav_key())}
                                </button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
