//! Canned therapy plans for mock mode and dev fallback.
//!
//! The generator is deterministic (everything derives from the plan id),
//! so the same query always yields the same page.

use chrono::{TimeZone, Utc};
use contracts::domain::therapy_plan::{DayOfWeek, ScheduleEntry, TherapyPlan};
use contracts::shared::paging::{max_page, PagedResponse, PageQuery};

const MOCK_PLAN_COUNT: i64 = 100;

const SESSION_DAYS: [DayOfWeek; 4] = [
    DayOfWeek::Monday,
    DayOfWeek::Wednesday,
    DayOfWeek::Friday,
    DayOfWeek::Saturday,
];

/// Paginated slice of the canned plan set, newest plans first.
pub fn therapy_plans_page(query: &PageQuery) -> PagedResponse<TherapyPlan> {
    let total = MOCK_PLAN_COUNT as u64;
    let total_pages = max_page(total, query.page_size);
    let page = query.clone().clamped(total_pages).page;
    let size = query.page_size as i64;

    let start = (page as i64 - 1) * size;
    let items: Vec<TherapyPlan> = (1..=MOCK_PLAN_COUNT)
        .rev()
        .skip(start as usize)
        .take(size as usize)
        .map(mock_plan)
        .collect();

    PagedResponse {
        total_results: total,
        current_page: page,
        max_page: total_pages,
        items,
    }
}

fn mock_plan(id: i64) -> TherapyPlan {
    let patient_name = match id {
        1 => "Camila Alejandra Fernández Romero".to_string(),
        2 => "Diego Alejandro Pérez Martín".to_string(),
        3 => "Isabella Sofía Castro Mendoza".to_string(),
        _ => format!("{}", id),
    };

    TherapyPlan {
        id,
        patient_id: 50 + id,
        assessment_id: 100 + id,
        assigned_therapist_id: (id % 10) + 1,
        description: format!("Plan de rehabilitación para {}", patient_name),
        goals: format!(
            "Meta: Mejorar la funcionalidad en {}% en las próximas 8 semanas.",
            id
        ),
        legal_responsible_id: (id % 4) + 1,
        schedule: mock_schedule(id),
    }
}

fn mock_schedule(id: i64) -> Vec<ScheduleEntry> {
    let sessions = (id % 2) + 1;
    (0..sessions)
        .map(|i| {
            let day = SESSION_DAYS[((id + i) % SESSION_DAYS.len() as i64) as usize];
            let hour = (10 + id % 8) as u32;
            let date = 20 + i as u32;
            ScheduleEntry {
                day_of_week: day,
                start_time: Utc
                    .with_ymd_and_hms(2025, 12, date, hour, 0, 0)
                    .single()
                    .unwrap_or_default(),
                end_time: Utc
                    .with_ymd_and_hms(2025, 12, date, hour + 1, 0, 0)
                    .single()
                    .unwrap_or_default(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_are_stable_and_newest_first() {
        let query = PageQuery::new(1, 10);
        let first = therapy_plans_page(&query);
        let again = therapy_plans_page(&query);
        assert_eq!(first, again);
        assert_eq!(first.items[0].id, 100);
        assert_eq!(first.total_results, 100);
        assert_eq!(first.max_page, 10);
    }

    #[test]
    fn out_of_range_page_clamps_to_last() {
        let resp = therapy_plans_page(&PageQuery::new(99, 10));
        assert_eq!(resp.current_page, 10);
        assert_eq!(resp.items.len(), 10);
        assert_eq!(resp.items.last().map(|p| p.id), Some(1));
    }
}
