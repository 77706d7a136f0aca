//! Buy-vs-rent comparison over the loan term.

use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::HomeLoanError;
use crate::types::{percent_to_rate, Money, Percent};
use crate::HomeLoanResult;

/// Rent inputs supplied when a comparison is requested.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RentInputs {
    pub monthly_rent: Money,
    /// Yearly rent escalation in percent (5 = 5%).
    pub yearly_increase_percent: Percent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentComparison {
    pub monthly_rent: Money,
    pub yearly_increase_percent: Percent,
    pub term_years: u32,
    pub total_rent_paid: Money,
    /// `total_rent_paid - total_payments`; negative when renting is cheaper.
    pub savings_by_buying: Money,
}

/// Total rent over `term_years`, escalated at each year boundary, compared
/// against the total paid on the loan.
pub fn compare_rent(
    monthly_rent: Money,
    yearly_increase_percent: Percent,
    term_years: u32,
    total_payments: Money,
) -> HomeLoanResult<RentComparison> {
    check_rent_inputs(monthly_rent, yearly_increase_percent)?;

    let overflow = || HomeLoanError::NumericOverflow {
        context: "rent accumulation".into(),
    };
    let growth = Decimal::ONE + percent_to_rate(yearly_increase_percent);

    let mut total_rent_paid = Decimal::ZERO;
    let mut current_rent = monthly_rent;
    for _year in 1..=term_years {
        let yearly = current_rent.checked_mul(dec!(12)).ok_or_else(overflow)?;
        total_rent_paid = total_rent_paid.checked_add(yearly).ok_or_else(overflow)?;
        current_rent = current_rent.checked_mul(growth).ok_or_else(overflow)?;
    }

    let savings_by_buying = total_rent_paid
        .checked_sub(total_payments)
        .ok_or_else(overflow)?;

    Ok(RentComparison {
        monthly_rent,
        yearly_increase_percent,
        term_years,
        total_rent_paid,
        savings_by_buying,
    })
}

fn check_rent_inputs(monthly_rent: Money, yearly_increase_percent: Percent) -> HomeLoanResult<()> {
    if yearly_increase_percent < Decimal::ZERO {
        return Err(HomeLoanError::NegativeRentIncrease {
            percent: yearly_increase_percent,
        });
    }
    if monthly_rent < Decimal::ZERO {
        return Err(HomeLoanError::InvalidInput {
            field: "monthly_rent".into(),
            reason: "Monthly rent cannot be negative".into(),
        });
    }
    Ok(())
}

/// Closed-form total rent: `12 * rent * ((1+g)^n - 1) / g`, or
/// `12 * rent * n` when there is no escalation.
pub fn closed_form_total_rent(
    monthly_rent: Money,
    yearly_increase_percent: Percent,
    term_years: u32,
) -> HomeLoanResult<Money> {
    check_rent_inputs(monthly_rent, yearly_increase_percent)?;

    let overflow = || HomeLoanError::NumericOverflow {
        context: "rent growth factor".into(),
    };
    let yearly = monthly_rent.checked_mul(dec!(12)).ok_or_else(overflow)?;
    let g = percent_to_rate(yearly_increase_percent);
    if g.is_zero() {
        return yearly
            .checked_mul(Decimal::from(term_years))
            .ok_or_else(overflow);
    }
    let growth = (Decimal::ONE + g)
        .checked_powu(u64::from(term_years))
        .ok_or_else(overflow)?
        - Decimal::ONE;
    yearly
        .checked_mul(growth)
        .and_then(|v| v.checked_div(g))
        .ok_or_else(overflow)
}
