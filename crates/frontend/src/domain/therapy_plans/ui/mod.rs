pub mod list;
pub mod register;

use leptos::prelude::*;

use crate::domain::therapy_plans::ui::list::TherapyPlansList;
use crate::domain::therapy_plans::ui::register::TherapyPlanForm;

/// Therapy planning page: the paged plan list, with the creation form
/// shown in place of it while a new plan is being drafted.
#[component]
pub fn TherapyPlanningPage() -> impl IntoView {
    let (show_form, set_show_form) = signal(false);
    // Bumped after every successful save so the list refetches.
    let (refresh_tick, set_refresh_tick) = signal(0u32);

    view! {
        <Show
            when=move || show_form.get()
            fallback=move || view! {
                <TherapyPlansList
                    refresh_tick=refresh_tick
                    on_create=Callback::new(move |_: ()| set_show_form.set(true))
                />
            }
        >
            <TherapyPlanForm
                on_saved=Callback::new(move |_: ()| {
                    set_show_form.set(false);
                    set_refresh_tick.update(|t| *t += 1);
                })
                on_cancel=Callback::new(move |_: ()| set_show_form.set(false))
            />
        </Show>
    }
}
