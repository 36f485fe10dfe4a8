use contracts::domain::therapy_plan::TherapyPlan;
use contracts::shared::list_cache::ListCache;
use contracts::shared::paging::{PageQuery, DEFAULT_PAGE_SIZE};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::therapy_plans::api;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::i18n::use_i18n;

const THERAPY_NAMESPACE: &str = "therapy";

/// Server-paged therapy plan list backed by the same merge cache as the
/// profile lists.
#[component]
pub fn TherapyPlansList(
    #[prop(into)] refresh_tick: Signal<u32>,
    on_create: Callback<()>,
) -> impl IntoView {
    let i18n = use_i18n();
    i18n.load_chunk(THERAPY_NAMESPACE);

    let (cache, set_cache) = signal(ListCache::<TherapyPlan>::new());
    let (page, set_page) = signal(1u32);
    let (page_size, set_page_size) = signal(DEFAULT_PAGE_SIZE);
    let (max_page, set_max_page) = signal(1u32);
    let (total, set_total) = signal(0u64);
    let (error, set_error) = signal(None::<String>);

    Effect::new(move |_| {
        refresh_tick.get();
        let query = PageQuery::new(page.get(), page_size.get());
        spawn_local(async move {
            match api::fetch_therapy_plans(&query).await {
                Ok(resp) => {
                    set_cache.set(cache.get_untracked().merged(&resp.items));
                    set_total.set(resp.total_results);
                    set_max_page.set(resp.max_page);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    });

    // Plans carry no status discriminant; the view is the whole cache
    // sorted by newest first and sliced to the page.
    let visible = Memo::new(move |_| {
        let query = PageQuery::new(page.get(), page_size.get());
        cache
            .get()
            .derive_view(|_| true, |p| format!("{:020}", i64::MAX - p.id), &query)
    });

    view! {
        <div class="page">
            <div class="header">
                <h1 class="header__title">{move || i18n.t(THERAPY_NAMESPACE, "table-header")}</h1>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| on_create.run(())>
                        {move || i18n.t(THERAPY_NAMESPACE, "new-plan")}
                    </button>
                </div>
            </div>

            <ErrorBanner error=error />

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{move || i18n.t(THERAPY_NAMESPACE, "col-id")}</th>
                            <th class="table__header-cell">{move || i18n.t(THERAPY_NAMESPACE, "col-description")}</th>
                            <th class="table__header-cell">{move || i18n.t(THERAPY_NAMESPACE, "col-goals")}</th>
                            <th class="table__header-cell">{move || i18n.t(THERAPY_NAMESPACE, "col-therapist")}</th>
                            <th class="table__header-cell">{move || i18n.t(THERAPY_NAMESPACE, "col-sessions")}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || visible.get().into_iter().map(|plan| {
                            let sessions = plan
                                .schedule
                                .iter()
                                .map(|s| s.day_of_week.as_str())
                                .collect::<Vec<_>>()
                                .join(", ");
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{plan.id}</td>
                                    <td class="table__cell">{plan.description}</td>
                                    <td class="table__cell">{plan.goals}</td>
                                    <td class="table__cell">{plan.assigned_therapist_id}</td>
                                    <td class="table__cell">{sessions}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            <PaginationControls
                current_page=page
                total_pages=max_page
                total_count=total
                page_size=page_size
                on_page_change=Callback::new(move |p| set_page.set(p))
                on_page_size_change=Callback::new(move |size| {
                    set_page_size.set(contracts::shared::paging::sanitize_page_size(size));
                    set_page.set(1);
                })
            />
        </div>
    }
}
