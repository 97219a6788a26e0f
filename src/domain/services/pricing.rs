use serde::Serialize;

use crate::domain::models::catalog::{AdvancePayment, PackageOption};

pub const DEFICIT_NOTE: &str =
    "The advance covers the difference; the unused part of the advance is not refunded.";

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Default)]
pub struct Estimate {
    pub computable: bool,
    pub commission: f64,
    pub balance: f64,
    pub is_deficit: bool,
}

/// Reads a user-entered sales figure. Blank, non-numeric, negative or
/// non-finite input means "no estimate yet".
pub fn parse_sales(input: &str) -> Option<f64> {
    let value: f64 = input.trim().parse().ok()?;
    (value.is_finite() && value >= 0.0).then_some(value)
}

pub fn estimate(
    sales: Option<f64>,
    package: Option<&PackageOption>,
    advance: Option<&AdvancePayment>,
) -> Estimate {
    let (Some(sales), Some(package)) = (sales, package) else {
        return Estimate::default();
    };
    if sales <= 0.0 {
        return Estimate::default();
    }

    let commission = sales * (f64::from(package.commission_percent) / 100.0);
    let advance_amount = advance.map(|a| f64::from(a.amount)).unwrap_or(0.0);
    let balance = commission - advance_amount;

    Estimate {
        computable: true,
        commission,
        balance,
        is_deficit: balance < 0.0,
    }
}
