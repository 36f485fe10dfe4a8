pub mod global_context;
pub mod sidebar;

use leptos::prelude::*;

use crate::layout::global_context::use_app_context;
use crate::layout::sidebar::Sidebar;

/// Application shell: left navigation plus the centered page area.
#[component]
pub fn Shell<C>(center: C) -> impl IntoView
where
    C: Fn() -> AnyView + Send + Sync + 'static,
{
    let ctx = use_app_context();

    view! {
        <div class="shell">
            <Show when=move || ctx.sidebar_open.get()>
                <aside class="shell__left">
                    <Sidebar />
                </aside>
            </Show>
            <main class="shell__center">
                <button
                    class="shell__sidebar-toggle"
                    on:click=move |_| ctx.toggle_sidebar()
                >
                    {move || if ctx.sidebar_open.get() { "◀" } else { "▶" }}
                </button>
                {move || center()}
            </main>
        </div>
    }
}
