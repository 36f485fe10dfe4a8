pub mod legal_guardians;
pub mod patients;
pub mod therapists;
pub mod therapy_plans;
