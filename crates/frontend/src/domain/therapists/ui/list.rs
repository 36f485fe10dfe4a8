use contracts::domain::therapist::TherapistProfile;
use contracts::shared::list_cache::ListCache;
use contracts::shared::paging::{max_page, PageQuery, DEFAULT_PAGE_SIZE};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::therapists::api;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::i18n::use_i18n;

const THERAPISTS_NAMESPACE: &str = "therapists";

/// Therapists data list. The upstream envelope is unpaged, so paging here
/// is purely client-side over the merged cache.
#[component]
pub fn TherapistsDataPage() -> impl IntoView {
    let i18n = use_i18n();
    i18n.load_chunk(THERAPISTS_NAMESPACE);

    let (cache, set_cache) = signal(ListCache::<TherapistProfile>::new());
    let (page, set_page) = signal(1u32);
    let (page_size, set_page_size) = signal(DEFAULT_PAGE_SIZE);
    let (error, set_error) = signal(None::<String>);

    let fetch = move || {
        spawn_local(async move {
            match api::fetch_therapists().await {
                Ok(resp) => {
                    set_cache.set(cache.get_untracked().merged(&resp.items));
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };
    fetch();

    let visible = Memo::new(move |_| {
        let query = PageQuery::new(page.get(), page_size.get());
        cache
            .get()
            .derive_view(|_| true, |t| t.display_name(), &query)
    });
    let total = Memo::new(move |_| cache.get().len() as u64);
    let total_pages = Memo::new(move |_| max_page(total.get(), page_size.get()));

    view! {
        <div class="page">
            <div class="header">
                <h1 class="header__title">{move || i18n.t(THERAPISTS_NAMESPACE, "table-header")}</h1>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {move || i18n.t("common", "refresh")}
                    </button>
                </div>
            </div>

            <ErrorBanner error=error />

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{move || i18n.t(THERAPISTS_NAMESPACE, "col-name")}</th>
                            <th class="table__header-cell">{move || i18n.t(THERAPISTS_NAMESPACE, "col-document")}</th>
                            <th class="table__header-cell">{move || i18n.t(THERAPISTS_NAMESPACE, "col-phone")}</th>
                            <th class="table__header-cell">{move || i18n.t(THERAPISTS_NAMESPACE, "col-email")}</th>
                            <th class="table__header-cell">{move || i18n.t(THERAPISTS_NAMESPACE, "col-specialty")}</th>
                            <th class="table__header-cell">{move || i18n.t(THERAPISTS_NAMESPACE, "col-address")}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || visible.get().into_iter().map(|therapist| {
                            let name = therapist.display_name();
                            let document = format!(
                                "{} {}",
                                therapist.document_type.as_str(),
                                therapist.identity_document_number
                            );
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{name}</td>
                                    <td class="table__cell">{document}</td>
                                    <td class="table__cell">{therapist.phone}</td>
                                    <td class="table__cell">{therapist.email}</td>
                                    <td class="table__cell">{therapist.specialty_name}</td>
                                    <td class="table__cell">{therapist.attention_place_address}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            <PaginationControls
                current_page=page
                total_pages=total_pages
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
