pub mod common;
pub mod legal_guardian;
pub mod patient;
pub mod therapist;
pub mod therapy_plan;
