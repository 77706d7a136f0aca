use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::amortization::schedule::Schedule;
use crate::error::HomeLoanError;
use crate::types::Money;
use crate::HomeLoanResult;

/// Aggregate repayment figures for a simulated schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    /// Sum of every month's actual payment.
    pub total_payments: Money,
    /// `total_payments - loan_amount`.
    pub total_interest: Money,
}

/// Reduce a schedule to its totals.
///
/// Summed from the entries rather than `payment * n`, so a schedule cut
/// short by prepayments (or ending on a short final payment) is exact.
pub fn aggregate(schedule: &Schedule) -> HomeLoanResult<Totals> {
    let total_payments = schedule
        .entries
        .iter()
        .try_fold(Decimal::ZERO, |acc, e| acc.checked_add(e.payment))
        .ok_or_else(|| HomeLoanError::NumericOverflow {
            context: "total payments".into(),
        })?;

    let total_interest = total_payments
        .checked_sub(schedule.loan_amount)
        .ok_or_else(|| HomeLoanError::NumericOverflow {
            context: "total interest".into(),
        })?;

    Ok(Totals {
        total_payments,
        total_interest,
    })
}
