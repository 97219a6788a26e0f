pub mod agenda;
pub mod onboarding;
pub mod pricing;
pub mod reservation;
pub mod schedule;
