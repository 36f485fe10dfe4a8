use leptos::prelude::*;

use crate::domain::legal_guardians::ui::list::LegalGuardiansDataPage;
use crate::domain::patients::ui::list::FiliationFilesPage;
use crate::domain::therapists::ui::list::TherapistsDataPage;
use crate::domain::therapy_plans::ui::TherapyPlanningPage;
use crate::layout::global_context::{use_app_context, Page};
use crate::layout::Shell;
use crate::system::pages::dashboard::DashboardPage;
use crate::system::pages::settings::SettingsPage;

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <Shell center=move || match ctx.active.get() {
            Page::Dashboard => view! { <DashboardPage /> }.into_any(),
            Page::FiliationFiles => view! { <FiliationFilesPage /> }.into_any(),
            Page::TherapistsData => view! { <TherapistsDataPage /> }.into_any(),
            Page::LegalGuardiansData => view! { <LegalGuardiansDataPage /> }.into_any(),
            Page::TherapyPlanning => view! { <TherapyPlanningPage /> }.into_any(),
            Page::Settings => view! { <SettingsPage /> }.into_any(),
        } />
    }
}
