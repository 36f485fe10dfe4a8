use chrono::NaiveDateTime;
use contracts::domain::therapy_plan::{DayOfWeek, ScheduleEntry, TherapyPlanDraft};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::therapy_plans::api;
use crate::shared::i18n::use_i18n;

const THERAPY_NAMESPACE: &str = "therapy";
const DATETIME_LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// One editable schedule row before it is parsed into a `ScheduleEntry`.
#[derive(Clone, Debug)]
struct ScheduleRow {
    day: DayOfWeek,
    start: String,
    end: String,
}

impl Default for ScheduleRow {
    fn default() -> Self {
        Self {
            day: DayOfWeek::Monday,
            start: String::new(),
            end: String::new(),
        }
    }
}

fn parse_schedule(rows: &[ScheduleRow]) -> Result<Vec<ScheduleEntry>, String> {
    rows.iter()
        .map(|row| {
            let start = NaiveDateTime::parse_from_str(&row.start, DATETIME_LOCAL_FORMAT)
                .map_err(|_| format!("invalid start time: {}", row.start))?;
            let end = NaiveDateTime::parse_from_str(&row.end, DATETIME_LOCAL_FORMAT)
                .map_err(|_| format!("invalid end time: {}", row.end))?;
            if end <= start {
                return Err("session end must be after its start".to_string());
            }
            Ok(ScheduleEntry {
                day_of_week: row.day,
                start_time: start.and_utc(),
                end_time: end.and_utc(),
            })
        })
        .collect()
}

/// Creation form for a therapy plan. Posts the draft through the proxy;
/// the upstream assigns the id.
#[component]
pub fn TherapyPlanForm(on_saved: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let i18n = use_i18n();
    i18n.load_chunk(THERAPY_NAMESPACE);

    let (assessment_id, set_assessment_id) = signal(String::new());
    let (therapist_id, set_therapist_id) = signal(String::new());
    let (responsible_id, set_responsible_id) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (goals, set_goals) = signal(String::new());
    let rows = RwSignal::new(vec![ScheduleRow::default()]);
    let (error, set_error) = signal(None::<String>);
    let (saving, set_saving) = signal(false);

    let build_draft = move || -> Result<TherapyPlanDraft, String> {
        let parse_id = |value: String, field: &str| -> Result<i64, String> {
            value
                .trim()
                .parse::<i64>()
                .map_err(|_| format!("{} must be a number", field))
        };
        let schedule = parse_schedule(&rows.get_untracked())?;
        if schedule.is_empty() {
            return Err("at least one session is required".to_string());
        }
        Ok(TherapyPlanDraft {
            assessment_id: parse_id(assessment_id.get_untracked(), "assessment id")?,
            assigned_therapist_id: parse_id(therapist_id.get_untracked(), "therapist id")?,
            description: description.get_untracked().trim().to_string(),
            goals: goals.get_untracked().trim().to_string(),
            legal_responsible_id: parse_id(responsible_id.get_untracked(), "legal responsible id")?,
            schedule,
        })
    };

    let handle_save = move |_| {
        let draft = match build_draft() {
            Ok(draft) => draft,
            Err(message) => {
                set_error.set(Some(message));
                return;
            }
        };
        set_saving.set(true);
        spawn_local(async move {
            match api::create_therapy_plan(&draft).await {
                Ok(()) => {
                    set_saving.set(false);
                    on_saved.run(());
                }
                Err(e) => {
                    set_saving.set(false);
                    set_error.set(Some(e.to_string()));
                }
            }
        });
    };

    let add_row = move |_| rows.update(|r| r.push(ScheduleRow::default()));
    let remove_row = move |index: usize| {
        rows.update(|r| {
            if r.len() > 1 {
                r.remove(index);
            }
        })
    };

    view! {
        <div class="page">
            <div class="header">
                <h1 class="header__title">{move || i18n.t(THERAPY_NAMESPACE, "form-header")}</h1>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="form">
                <label class="form__label">{move || i18n.t(THERAPY_NAMESPACE, "field-assessment")}</label>
                <input
                    class="form__input"
                    prop:value=move || assessment_id.get()
                    on:input=move |ev| set_assessment_id.set(event_target_value(&ev))
                />

                <label class="form__label">{move || i18n.t(THERAPY_NAMESPACE, "field-therapist")}</label>
                <input
                    class="form__input"
                    prop:value=move || therapist_id.get()
                    on:input=move |ev| set_therapist_id.set(event_target_value(&ev))
                />

                <label class="form__label">{move || i18n.t(THERAPY_NAMESPACE, "field-responsible")}</label>
                <input
                    class="form__input"
                    prop:value=move || responsible_id.get()
                    on:input=move |ev| set_responsible_id.set(event_target_value(&ev))
                />

                <label class="form__label">{move || i18n.t(THERAPY_NAMESPACE, "field-description")}</label>
                <textarea
                    class="form__input"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                />

                <label class="form__label">{move || i18n.t(THERAPY_NAMESPACE, "field-goals")}</label>
                <textarea
                    class="form__input"
                    prop:value=move || goals.get()
                    on:input=move |ev| set_goals.set(event_target_value(&ev))
                />

                <h2 class="form__section">{move || i18n.t(THERAPY_NAMESPACE, "field-schedule")}</h2>
                {move || rows.get().into_iter().enumerate().map(|(index, row)| {
                    view! {
                        <div class="form__schedule-row">
                            <select
                                on:change=move |ev| {
                                    let value = event_target_value(&ev);
                                    rows.update(|r| {
                                        if let Some(row) = r.get_mut(index) {
                                            if let Some(day) = DayOfWeek::all()
                                                .into_iter()
                                                .find(|d| d.as_str() == value)
                                            {
                                                row.day = day;
                                            }
                                        }
                                    });
                                }
                            >
                                {DayOfWeek::all().into_iter().map(|day| {
                                    let selected = day == row.day;
                                    view! {
                                        <option value={day.as_str()} selected=selected>
                                            {day.as_str()}
                                        </option>
                                    }
                                }).collect_view()}
                            </select>
                            <input
                                type="datetime-local"
                                prop:value=row.start.clone()
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    rows.update(|r| {
                                        if let Some(row) = r.get_mut(index) {
                                            row.start = value.clone();
                                        }
                                    });
                                }
                            />
                            <input
                                type="datetime-local"
                                prop:value=row.end.clone()
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    rows.update(|r| {
                                        if let Some(row) = r.get_mut(index) {
                                            row.end = value.clone();
                                        }
                                    });
                                }
                            />
                            <button class="button button--secondary" on:click=move |_| remove_row(index)>
                                {"−"}
                            </button>
                        </div>
                    }
                }).collect_view()}
                <button class="button button--secondary" on:click=add_row>
                    {move || i18n.t(THERAPY_NAMESPACE, "add-session")}
                </button>

                <div class="form__actions">
                    <button
                        class="button button--primary"
                        disabled=move || saving.get()
                        on:click=handle_save
                    >
                        {move || i18n.t("common", "save")}
                    </button>
                    <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                        {move || i18n.t("common", "cancel")}
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_rows_parse_into_utc_entries() {
        let rows = vec![ScheduleRow {
            day: DayOfWeek::Wednesday,
            start: "2025-12-22T20:30".into(),
            end: "2025-12-22T21:30".into(),
        }];
        let entries = parse_schedule(&rows).unwrap();
        assert_eq!(entries[0].day_of_week, DayOfWeek::Wednesday);
        assert_eq!(entries[0].start_time.to_rfc3339(), "2025-12-22T20:30:00+00:00");
    }

    #[test]
    fn inverted_session_times_are_rejected() {
        let rows = vec![ScheduleRow {
            day: DayOfWeek::Monday,
            start: "2025-12-22T21:30".into(),
            end: "2025-12-22T20:30".into(),
        }];
        assert!(parse_schedule(&rows).is_err());
    }
}
