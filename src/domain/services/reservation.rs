use thiserror::Error;
use url::form_urlencoded;

use crate::domain::models::live::LiveStatus;
use crate::domain::models::reservation::ReservationDraft;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationIssue {
    #[error("Select a time slot")]
    SlotMissing,
    #[error("The selected time slot is no longer available")]
    SlotUnavailable,
    #[error("The selected time slot does not exist")]
    UnknownSlot,
    #[error("Select a package")]
    PackageMissing,
    #[error("The selected package does not exist")]
    UnknownPackage,
    #[error("The selected advance option does not exist")]
    UnknownAdvance,
    #[error("Choose your team")]
    TeamMissing,
    #[error("Accept the cancellation policy (12 h)")]
    TermsNotAccepted,
    #[error("This live is full; join the waiting list instead")]
    LiveFull,
}

impl ReservationIssue {
    /// The "nothing selected" issue an unresolved id stands in for.
    fn replaces(self) -> Option<ReservationIssue> {
        match self {
            ReservationIssue::UnknownSlot => Some(ReservationIssue::SlotMissing),
            ReservationIssue::UnknownPackage => Some(ReservationIssue::PackageMissing),
            _ => None,
        }
    }
}

/// Every failed precondition is reported, in display order.
pub fn validate(status: LiveStatus, draft: &ReservationDraft<'_>) -> Result<(), Vec<ReservationIssue>> {
    let mut issues = Vec::new();

    match draft.slot {
        None => issues.push(ReservationIssue::SlotMissing),
        // Slots of a full live are closed; that case is reported as LiveFull.
        Some(slot) if status.allows_slot_selection() && !slot.is_available() => {
            issues.push(ReservationIssue::SlotUnavailable)
        }
        Some(_) => {}
    }
    if draft.package.is_none() {
        issues.push(ReservationIssue::PackageMissing);
    }
    if draft.team.is_none() {
        issues.push(ReservationIssue::TeamMissing);
    }
    if !draft.accepted_terms {
        issues.push(ReservationIssue::TermsNotAccepted);
    }
    if status == LiveStatus::Full {
        issues.push(ReservationIssue::LiveFull);
    }

    if issues.is_empty() { Ok(()) } else { Err(issues) }
}

/// Like [`validate`], for a draft built from ids where some did not resolve.
/// An unknown id takes the place of the matching "missing" issue so the
/// selection is reported once.
pub fn validate_resolved(
    status: LiveStatus,
    draft: &ReservationDraft<'_>,
    unresolved: &[ReservationIssue],
) -> Result<(), Vec<ReservationIssue>> {
    let mut issues = validate(status, draft).err().unwrap_or_default();

    for &issue in unresolved {
        let missing_at = issue.replaces().and_then(|missing| issues.iter().position(|i| *i == missing));
        match missing_at {
            Some(pos) => issues[pos] = issue,
            None => issues.push(issue),
        }
    }

    if issues.is_empty() { Ok(()) } else { Err(issues) }
}

pub fn can_reserve(status: LiveStatus, draft: &ReservationDraft<'_>) -> bool {
    validate(status, draft).is_ok()
}

/// Mock checkout hand-off. Nothing is charged; the URL only carries the selection.
pub fn checkout_url(checkout_path: &str, live_id: &str, draft: &ReservationDraft<'_>) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query.append_pair("liveId", live_id);
    if let Some(slot) = draft.slot {
        query.append_pair("slotId", &slot.id);
    }
    if let Some(package) = draft.package {
        query.append_pair("packageId", &package.id);
    }
    if let Some(advance) = draft.advance {
        query.append_pair("advance", &advance.amount.to_string());
    }
    format!("{}?{}", checkout_path, query.finish())
}

pub fn waiting_list_url(waiting_list_path: &str, live_id: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("liveId", live_id)
        .finish();
    format!("{}?{}", waiting_list_path, query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::catalog::Catalog;
    use crate::domain::models::reservation::{TeamCore, TeamSelection};
    use crate::domain::models::slot::{Slot, SlotStatus};
    use chrono::NaiveTime;

    fn slot() -> Slot {
        Slot::new(
            4,
            NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(20, 18, 0).unwrap(),
        )
    }

    #[test]
    fn test_all_presence_combinations() {
        let catalog = Catalog::standard();
        let slot = slot();
        let team = TeamSelection { team: TeamCore::Coach, delivery: true };

        for mask in 0u8..16 {
            let has_slot = mask & 1 != 0;
            let has_package = mask & 2 != 0;
            let has_team = mask & 4 != 0;
            let accepted = mask & 8 != 0;

            let draft = ReservationDraft {
                slot: has_slot.then_some(&slot),
                team: has_team.then_some(team),
                package: if has_package { catalog.package("basic") } else { None },
                advance: catalog.advance("1h"),
                accepted_terms: accepted,
            };

            let complete = has_slot && has_package && has_team && accepted;
            for status in [LiveStatus::Available, LiveStatus::FewLeft, LiveStatus::Waiting] {
                assert_eq!(can_reserve(status, &draft), complete, "mask {:04b} status {}", mask, status);
            }
            assert!(!can_reserve(LiveStatus::Full, &draft), "mask {:04b} on a full live", mask);

            if let Err(issues) = validate(LiveStatus::Available, &draft) {
                assert_eq!(issues.contains(&ReservationIssue::SlotMissing), !has_slot);
                assert_eq!(issues.contains(&ReservationIssue::PackageMissing), !has_package);
                assert_eq!(issues.contains(&ReservationIssue::TeamMissing), !has_team);
                assert_eq!(issues.contains(&ReservationIssue::TermsNotAccepted), !accepted);
            }
        }
    }

    #[test]
    fn test_empty_draft_reports_everything_at_once() {
        let issues = validate(LiveStatus::Full, &ReservationDraft::default()).unwrap_err();
        assert_eq!(issues, vec![
            ReservationIssue::SlotMissing,
            ReservationIssue::PackageMissing,
            ReservationIssue::TeamMissing,
            ReservationIssue::TermsNotAccepted,
            ReservationIssue::LiveFull,
        ]);
        assert_eq!(issues[0].to_string(), "Select a time slot");
    }

    #[test]
    fn test_taken_slot_reported_with_other_issues() {
        let mut taken = slot();
        taken.status = SlotStatus::Occupied;
        let draft = ReservationDraft { slot: Some(&taken), ..Default::default() };

        let issues = validate(LiveStatus::Available, &draft).unwrap_err();
        assert_eq!(issues, vec![
            ReservationIssue::SlotUnavailable,
            ReservationIssue::PackageMissing,
            ReservationIssue::TeamMissing,
            ReservationIssue::TermsNotAccepted,
        ]);

        // On a full live the closed slot is covered by LiveFull.
        taken.status = SlotStatus::Closed;
        let draft = ReservationDraft { slot: Some(&taken), ..Default::default() };
        let issues = validate(LiveStatus::Full, &draft).unwrap_err();
        assert!(!issues.contains(&ReservationIssue::SlotUnavailable));
        assert!(issues.contains(&ReservationIssue::LiveFull));
    }

    #[test]
    fn test_unknown_ids_replace_missing_issues() {
        let draft = ReservationDraft { accepted_terms: true, ..Default::default() };
        let unresolved = [
            ReservationIssue::UnknownSlot,
            ReservationIssue::UnknownPackage,
            ReservationIssue::UnknownAdvance,
        ];

        let issues = validate_resolved(LiveStatus::Available, &draft, &unresolved).unwrap_err();
        assert_eq!(issues, vec![
            ReservationIssue::UnknownSlot,
            ReservationIssue::UnknownPackage,
            ReservationIssue::TeamMissing,
            ReservationIssue::UnknownAdvance,
        ]);
    }

    #[test]
    fn test_checkout_url_carries_selection() {
        let catalog = Catalog::standard();
        let slot = slot();
        let draft = ReservationDraft {
            slot: Some(&slot),
            team: Some(TeamSelection { team: TeamCore::Seller, delivery: false }),
            package: catalog.package("deluxe"),
            advance: catalog.advance("2h"),
            accepted_terms: true,
        };

        assert_eq!(
            checkout_url("/checkout/mock", "2", &draft),
            "/checkout/mock?liveId=2&slotId=slot-4&packageId=deluxe&advance=450"
        );
    }

    #[test]
    fn test_handoff_urls_encode_ids() {
        assert_eq!(waiting_list_url("/waiting-list", "a b&c"), "/waiting-list?liveId=a+b%26c");
    }
}
