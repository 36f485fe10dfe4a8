use contracts::domain::patient::{PatientStatus, PatientSummary};
use contracts::shared::list_cache::ListCache;
use contracts::shared::paging::{PageQuery, DEFAULT_PAGE_SIZE};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::patients::api;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::status_tabs::StatusTabs;
use crate::shared::i18n::use_i18n;

const PATIENTS_NAMESPACE: &str = "patients";

/// Patients filiation files: the status-tabbed, paginated summary list.
///
/// Every query change triggers a fetch whose items merge into the local
/// id-keyed cache; the table renders a pure filtered/sorted/sliced view of
/// that cache. In-flight requests are never cancelled — a stale response
/// merging late is harmless because the merge is keyed by id.
#[component]
pub fn FiliationFilesPage() -> impl IntoView {
    let i18n = use_i18n();
    i18n.load_chunk(PATIENTS_NAMESPACE);

    let (cache, set_cache) = signal(ListCache::<PatientSummary>::new());
    let (status, set_status) = signal(PatientStatus::Active);
    let (page, set_page) = signal(1u32);
    let (page_size, set_page_size) = signal(DEFAULT_PAGE_SIZE);
    let (max_page, set_max_page) = signal(1u32);
    let (coincidences, set_coincidences) = signal(0u64);
    let (error, set_error) = signal(None::<String>);

    // Any search-filter change queries the backend; the response merges
    // into the cache (last fetch wins per id).
    Effect::new(move |_| {
        let query = PageQuery::new(page.get(), page_size.get()).with_status(status.get().as_str());
        spawn_local(async move {
            match api::fetch_patients_page(&query).await {
                Ok(resp) => {
                    set_cache.set(cache.get_untracked().merged(&resp.items));
                    set_coincidences.set(resp.total_results);
                    set_max_page.set(resp.max_page);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    });

    // Pure view derivation: filter by the active tab, sort by name, slice
    // to the current page.
    let visible = Memo::new(move |_| {
        let active_status = status.get();
        let query = PageQuery::new(page.get(), page_size.get());
        cache.get().derive_view(
            move |p| p.status == active_status,
            |p| p.name.clone(),
            &query,
        )
    });

    let on_tab_change = Callback::new(move |next: PatientStatus| {
        set_status.set(next);
        set_page.set(1);
    });

    view! {
        <div class="page">
            <div class="header">
                <h1 class="header__title">{move || i18n.t(PATIENTS_NAMESPACE, "table-header")}</h1>
            </div>

            <StatusTabs active=status on_change=on_tab_change namespace=PATIENTS_NAMESPACE />

            <ErrorBanner error=error />

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{move || i18n.t(PATIENTS_NAMESPACE, "col-name")}</th>
                            <th class="table__header-cell">{move || i18n.t(PATIENTS_NAMESPACE, "col-document")}</th>
                            <th class="table__header-cell">{move || i18n.t(PATIENTS_NAMESPACE, "col-guardian")}</th>
                            <th class="table__header-cell">{move || i18n.t(PATIENTS_NAMESPACE, "col-guardian-phone")}</th>
                            <th class="table__header-cell">{move || i18n.t(PATIENTS_NAMESPACE, "col-assessment-date")}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || visible.get().into_iter().map(|patient| {
                            let document = format!(
                                "{} {}",
                                patient.document_type.as_str(),
                                patient.document_number
                            );
                            let assessment = patient
                                .initial_assessment_date
                                .format("%Y-%m-%d %H:%M")
                                .to_string();
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{patient.name}</td>
                                    <td class="table__cell">{document}</td>
                                    <td class="table__cell">{patient.legal_guardian_name}</td>
                                    <td class="table__cell">{patient.legal_guardian_phone}</td>
                                    <td class="table__cell">{assessment}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            <PaginationControls
                current_page=page
                total_pages=max_page
                total_count=coincidences
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
