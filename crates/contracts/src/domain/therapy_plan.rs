use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::list_cache::Keyed;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub fn as_str(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "MONDAY",
            DayOfWeek::Tuesday => "TUESDAY",
            DayOfWeek::Wednesday => "WEDNESDAY",
            DayOfWeek::Thursday => "THURSDAY",
            DayOfWeek::Friday => "FRIDAY",
            DayOfWeek::Saturday => "SATURDAY",
            DayOfWeek::Sunday => "SUNDAY",
        }
    }

    pub fn all() -> [DayOfWeek; 7] {
        [
            DayOfWeek::Monday,
            DayOfWeek::Tuesday,
            DayOfWeek::Wednesday,
            DayOfWeek::Thursday,
            DayOfWeek::Friday,
            DayOfWeek::Saturday,
            DayOfWeek::Sunday,
        ]
    }
}

/// One weekly session slot inside a therapy plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub day_of_week: DayOfWeek,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// Therapy plan aggregate as stored by the upstream plans API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TherapyPlan {
    pub id: i64,
    pub patient_id: i64,
    pub assessment_id: i64,
    pub assigned_therapist_id: i64,
    pub description: String,
    pub goals: String,
    pub legal_responsible_id: i64,
    pub schedule: Vec<ScheduleEntry>,
}

impl Keyed for TherapyPlan {
    fn key(&self) -> i64 {
        self.id
    }
}

/// Payload for creating a new plan. The upstream assigns `id` and derives
/// `patientId` from the referenced assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TherapyPlanDraft {
    pub assessment_id: i64,
    pub assigned_therapist_id: i64,
    pub description: String,
    pub goals: String,
    pub legal_responsible_id: i64,
    pub schedule: Vec<ScheduleEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_entry_round_trips_rfc3339() {
        let raw = r#"{
            "dayOfWeek": "WEDNESDAY",
            "startTime": "2025-12-22T20:30:00Z",
            "endTime": "2025-12-22T21:30:00Z"
        }"#;
        let entry: ScheduleEntry = serde_json::from_str(raw).unwrap();
        assert_eq!(entry.day_of_week, DayOfWeek::Wednesday);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["dayOfWeek"], "WEDNESDAY");
    }

    #[test]
    fn draft_has_no_id_fields() {
        let draft = TherapyPlanDraft {
            assessment_id: 101,
            assigned_therapist_id: 3,
            description: "Plan".into(),
            goals: "Goals".into(),
            legal_responsible_id: 2,
            schedule: vec![],
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert!(json.get("id").is_none());
        assert!(json.get("patientId").is_none());
    }
}
