pub mod catalog;
pub mod clock;
pub mod live;
pub mod onboarding;
pub mod reservation;
pub mod slot;
