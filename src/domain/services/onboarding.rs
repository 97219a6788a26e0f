use serde::Serialize;
use thiserror::Error;

use crate::domain::models::catalog::Catalog;
use crate::domain::models::onboarding::{OnboardingForm, OnboardingStep};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OnboardingIssue {
    #[error("Fill in every required contact field (brand name, WhatsApp, city)")]
    ContactIncomplete,
    #[error("Select an objective")]
    ObjectiveMissing,
    #[error("Unknown objective '{0}'")]
    UnknownObjective(String),
    #[error("Unknown checklist item '{0}'")]
    UnknownChecklistItem(String),
    #[error("Select a plan")]
    PlanMissing,
    #[error("Unknown plan '{0}'")]
    UnknownPlan(String),
    #[error("You must accept the terms to continue")]
    TermsNotAccepted,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct StepFailure {
    pub step: OnboardingStep,
    pub message: String,
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn validate_step(step: OnboardingStep, form: &OnboardingForm, catalog: &Catalog) -> Result<(), OnboardingIssue> {
    match step {
        OnboardingStep::Contact => {
            if blank(&form.name) || blank(&form.whatsapp) || blank(&form.city) {
                return Err(OnboardingIssue::ContactIncomplete);
            }
        }
        OnboardingStep::Objective => {
            if blank(&form.objective) {
                return Err(OnboardingIssue::ObjectiveMissing);
            }
            if catalog.objective(form.objective.trim()).is_none() {
                return Err(OnboardingIssue::UnknownObjective(form.objective.clone()));
            }
        }
        OnboardingStep::PreSale => {
            if let Some(item) = form.checklist.iter().find(|item| !catalog.checklist.contains(item)) {
                return Err(OnboardingIssue::UnknownChecklistItem(item.clone()));
            }
        }
        OnboardingStep::Plan => {
            if blank(&form.selected_plan) {
                return Err(OnboardingIssue::PlanMissing);
            }
            if catalog.onboarding_plan(form.selected_plan.trim()).is_none() {
                return Err(OnboardingIssue::UnknownPlan(form.selected_plan.clone()));
            }
        }
        OnboardingStep::Confirmations => {
            if !form.accept_delivery || !form.accept_communication {
                return Err(OnboardingIssue::TermsNotAccepted);
            }
        }
    }
    Ok(())
}

pub fn validate_submission(form: &OnboardingForm, catalog: &Catalog) -> Result<(), Vec<StepFailure>> {
    let failures: Vec<StepFailure> = OnboardingStep::ALL
        .into_iter()
        .filter_map(|step| {
            validate_step(step, form, catalog).err().map(|issue| StepFailure {
                step,
                message: issue.to_string(),
            })
        })
        .collect();

    if failures.is_empty() { Ok(()) } else { Err(failures) }
}

pub fn progress_percent(step: OnboardingStep) -> u32 {
    step.number() * 100 / OnboardingStep::total()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_form() -> OnboardingForm {
        OnboardingForm {
            name: "Casa Lumen".into(),
            instagram: "@casalumen".into(),
            whatsapp: "+52 55 1234 5678".into(),
            city: "CDMX".into(),
            objective: "live".into(),
            checklist: vec!["Visible price tags".into()],
            selected_plan: "triple".into(),
            accept_delivery: true,
            accept_communication: true,
        }
    }

    #[test]
    fn test_complete_form_passes() {
        assert_eq!(validate_submission(&complete_form(), &Catalog::standard()), Ok(()));
    }

    #[test]
    fn test_contact_requires_name_whatsapp_city() {
        let catalog = Catalog::standard();
        let mut form = complete_form();
        form.instagram.clear();
        assert!(validate_step(OnboardingStep::Contact, &form, &catalog).is_ok());

        form.city = "  ".into();
        assert_eq!(
            validate_step(OnboardingStep::Contact, &form, &catalog),
            Err(OnboardingIssue::ContactIncomplete)
        );
    }

    #[test]
    fn test_objective_and_plan_must_exist() {
        let catalog = Catalog::standard();
        let mut form = complete_form();
        form.objective = "wholesale".into();
        form.selected_plan = String::new();

        assert_eq!(
            validate_step(OnboardingStep::Objective, &form, &catalog),
            Err(OnboardingIssue::UnknownObjective("wholesale".into()))
        );
        assert_eq!(
            validate_step(OnboardingStep::Plan, &form, &catalog),
            Err(OnboardingIssue::PlanMissing)
        );
    }

    #[test]
    fn test_submission_lists_every_failing_step() {
        let failures = validate_submission(&OnboardingForm::default(), &Catalog::standard()).unwrap_err();
        let steps: Vec<OnboardingStep> = failures.iter().map(|f| f.step).collect();
        // The pre-sale checklist has no required items.
        assert_eq!(steps, vec![
            OnboardingStep::Contact,
            OnboardingStep::Objective,
            OnboardingStep::Plan,
            OnboardingStep::Confirmations,
        ]);
    }

    #[test]
    fn test_progress() {
        assert_eq!(progress_percent(OnboardingStep::Contact), 20);
        assert_eq!(progress_percent(OnboardingStep::Confirmations), 100);
    }
}
