use serde::Serialize;

use crate::domain::models::reservation::TeamCore;

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct PackageOption {
    pub id: String,
    pub name: String,
    pub commission_percent: u32,
    pub description: String,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct AdvancePayment {
    pub id: String,
    pub hours: u32,
    pub amount: u32,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct TeamOption {
    pub id: TeamCore,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Objective {
    pub id: String,
    pub label: String,
    pub description: String,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PlanBilling {
    Monthly,
    Hourly,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct OnboardingPlan {
    pub id: String,
    pub name: String,
    pub price: String,
    pub billing: PlanBilling,
}

/// Immutable reference tables. Built once at bootstrap and looked up by id.
#[derive(Debug, Serialize, Clone)]
pub struct Catalog {
    pub packages: Vec<PackageOption>,
    pub advances: Vec<AdvancePayment>,
    pub teams: Vec<TeamOption>,
    pub objectives: Vec<Objective>,
    pub onboarding_plans: Vec<OnboardingPlan>,
    pub checklist: Vec<String>,
}

impl Catalog {
    pub fn standard() -> Self {
        Self {
            packages: vec![
                package("basic", "Basic", 15, "Slot with the in-house seller team"),
                package("deluxe", "Deluxe", 25, "Advanced analytics, personal coach and standard delivery"),
                package("elite", "Elite", 30, "Full team, premium broadcast and dedicated support"),
            ],
            advances: vec![
                AdvancePayment { id: "1h".into(), hours: 1, amount: 250 },
                AdvancePayment { id: "2h".into(), hours: 2, amount: 450 },
            ],
            teams: vec![
                TeamOption {
                    id: TeamCore::Seller,
                    title: "Seller".into(),
                    description: "We present and sell for you".into(),
                },
                TeamOption {
                    id: TeamCore::Coach,
                    title: "Coach".into(),
                    description: "You present, we coach you on camera".into(),
                },
            ],
            objectives: vec![
                objective("spot", "SPOT/Storage", "Product storage and display"),
                objective("consignment", "Consignment/Advertising", "Consignment sales with promotion"),
                objective("live", "Live at The Box Club", "Live broadcasts for sales"),
                objective("shopping", "ShoppingBOX", "Online sales platform"),
            ],
            onboarding_plans: vec![
                plan("basic", "Basic", "$399", PlanBilling::Monthly),
                plan("standard", "Standard", "$489", PlanBilling::Monthly),
                plan("premium", "Premium", "$689", PlanBilling::Monthly),
                plan("enterprise", "Enterprise", "$999", PlanBilling::Monthly),
                plan("single", "Per hour", "$189/h", PlanBilling::Hourly),
                plan("triple", "3 hours", "$450", PlanBilling::Hourly),
                plan("associated", "3h + Platforms", "$349", PlanBilling::Hourly),
            ],
            checklist: [
                "Garments ironed and wrinkle-free",
                "Complete outfits assembled",
                "Proper lighting for photos",
                "Accessories and add-ons",
                "Visible price tags",
                "Clean products in good condition",
                "Range of sizes available",
                "Brand-representative colors",
            ]
            .iter()
            .map(|item| item.to_string())
            .collect(),
        }
    }

    pub fn package(&self, id: &str) -> Option<&PackageOption> {
        self.packages.iter().find(|p| p.id == id)
    }

    pub fn advance(&self, id: &str) -> Option<&AdvancePayment> {
        self.advances.iter().find(|a| a.id == id)
    }

    pub fn objective(&self, id: &str) -> Option<&Objective> {
        self.objectives.iter().find(|o| o.id == id)
    }

    pub fn onboarding_plan(&self, id: &str) -> Option<&OnboardingPlan> {
        self.onboarding_plans.iter().find(|p| p.id == id)
    }
}

fn package(id: &str, name: &str, commission_percent: u32, description: &str) -> PackageOption {
    PackageOption {
        id: id.into(),
        name: name.into(),
        commission_percent,
        description: description.into(),
    }
}

fn objective(id: &str, label: &str, description: &str) -> Objective {
    Objective { id: id.into(), label: label.into(), description: description.into() }
}

fn plan(id: &str, name: &str, price: &str, billing: PlanBilling) -> OnboardingPlan {
    OnboardingPlan { id: id.into(), name: name.into(), price: price.into(), billing }
}
