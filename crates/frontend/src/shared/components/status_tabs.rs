use contracts::domain::patient::PatientStatus;
use leptos::prelude::*;

use crate::shared::i18n::use_i18n;

/// Status filter tabs for the patient lists. Each tab maps to one status
/// value; switching tabs changes the active list filter.
#[component]
pub fn StatusTabs(
    #[prop(into)] active: Signal<PatientStatus>,
    on_change: Callback<PatientStatus>,
    /// i18n namespace carrying the "tab-active"/"tab-inactive"/
    /// "tab-archived" labels.
    namespace: &'static str,
) -> impl IntoView {
    let i18n = use_i18n();

    let label_key = |status: PatientStatus| match status {
        PatientStatus::Active => "tab-active",
        PatientStatus::Inactive => "tab-inactive",
        PatientStatus::Archived => "tab-archived",
    };

    view! {
        <div class="status-tabs">
            {PatientStatus::all()
                .into_iter()
                .map(|status| {
                    view! {
                        <button
                            class="status-tabs__tab"
                            class:status-tabs__tab--active=move || active.get() == status
                            on:click=move |_| on_change.run(status)
                        >
                            {move || i18n.t(namespace, label_key(status))}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
