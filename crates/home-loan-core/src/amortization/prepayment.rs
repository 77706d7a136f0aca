use serde::{Deserialize, Serialize};

use crate::amortization::schedule::{simulate, Schedule, ScheduleRequest};
use crate::amortization::totals::{aggregate, Totals};
use crate::types::Money;
use crate::HomeLoanResult;

/// Effect of prepayments against the same loan repaid on the level payment alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrepaymentImpact {
    pub baseline_months: u32,
    pub actual_months: u32,
    pub months_saved: u32,
    pub baseline_total_payments: Money,
    pub baseline_total_interest: Money,
    pub interest_saved: Money,
}

/// Compare a prepayment schedule against its no-prepayment baseline.
pub fn assess_prepayment(
    request: &ScheduleRequest,
    schedule: &Schedule,
    totals: &Totals,
) -> HomeLoanResult<PrepaymentImpact> {
    let baseline = simulate(&request.without_prepayment())?;
    let baseline_totals = aggregate(&baseline)?;

    let baseline_months = baseline.len() as u32;
    let actual_months = schedule.len() as u32;

    Ok(PrepaymentImpact {
        baseline_months,
        actual_months,
        months_saved: baseline_months.saturating_sub(actual_months),
        interest_saved: baseline_totals.total_interest - totals.total_interest,
        baseline_total_payments: baseline_totals.total_payments,
        baseline_total_interest: baseline_totals.total_interest,
    })
}
