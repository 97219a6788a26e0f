use std::env;
use std::str::FromStr;
use tracing::warn;

use crate::domain::services::schedule::MAX_SLOT_DURATION_MIN;

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub log_dir: String,
    pub slot_duration_min: i64,
    pub checkout_path: String,
    pub waiting_list_path: String,
    pub agenda_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            log_dir: "./logs".to_string(),
            slot_duration_min: 18,
            checkout_path: "/checkout/mock".to_string(),
            waiting_list_path: "/waiting-list".to_string(),
            agenda_path: "/agenda".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            port: parse_or("PORT", defaults.port),
            log_dir: env::var("LOG_DIR").unwrap_or(defaults.log_dir),
            slot_duration_min: slot_duration_or(
                parse_or("SLOT_DURATION_MIN", defaults.slot_duration_min),
                defaults.slot_duration_min,
            ),
            checkout_path: env::var("CHECKOUT_PATH").unwrap_or(defaults.checkout_path),
            waiting_list_path: env::var("WAITING_LIST_PATH").unwrap_or(defaults.waiting_list_path),
            agenda_path: env::var("AGENDA_PATH").unwrap_or(defaults.agenda_path),
        }
    }
}

fn parse_or<T: FromStr + Copy + std::fmt::Display>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("{} is not a valid value ({:?}), using {}", key, raw, default);
            default
        }),
        Err(_) => default,
    }
}

fn slot_duration_or(minutes: i64, default: i64) -> i64 {
    if (1..=MAX_SLOT_DURATION_MIN).contains(&minutes) {
        minutes
    } else {
        warn!(
            "SLOT_DURATION_MIN must be between 1 and {} ({} given), using {}",
            MAX_SLOT_DURATION_MIN, minutes, default
        );
        default
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_duration_out_of_range_falls_back() {
        assert_eq!(slot_duration_or(30, 18), 30);
        assert_eq!(slot_duration_or(MAX_SLOT_DURATION_MIN, 18), MAX_SLOT_DURATION_MIN);
        assert_eq!(slot_duration_or(0, 18), 18);
        assert_eq!(slot_duration_or(-1, 18), 18);
        assert_eq!(slot_duration_or(i64::MAX, 18), 18);
    }
}
