use crate::domain::models::live::{LiveEvent, LiveStatus};

/// Filter values meaning "no filter". The storefront labels the option "Todos".
pub const ALL: [&str; 2] = ["all", "todos"];

pub fn is_unfiltered(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || ALL.iter().any(|all| value.eq_ignore_ascii_case(all))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgendaFilter {
    pub category: Option<String>,
    pub status: Option<LiveStatus>,
}

impl AgendaFilter {
    pub fn matches(&self, live: &LiveEvent) -> bool {
        let category_match = self.category.as_ref()
            .is_none_or(|c| live.category.eq_ignore_ascii_case(c));
        let status_match = self.status.is_none_or(|s| live.status == s);
        category_match && status_match
    }
}

pub fn filter_lives<'a>(lives: &'a [LiveEvent], filter: &AgendaFilter) -> Vec<&'a LiveEvent> {
    lives.iter().filter(|live| filter.matches(live)).collect()
}

/// Distinct categories in first-seen order.
pub fn categories(lives: &[LiveEvent]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for live in lives {
        if !seen.contains(&live.category) {
            seen.push(live.category.clone());
        }
    }
    seen
}
