pub mod catalog;
pub mod health;
pub mod live;
pub mod onboarding;
pub mod pricing;
pub mod reservation;
