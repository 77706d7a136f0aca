use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::amortization::loan::{LoanParameters, PrepaymentFrequency};
use crate::error::HomeLoanError;
use crate::types::{Money, Rate};
use crate::HomeLoanResult;

/// One month of the amortisation schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// 1-based month index.
    pub month: u32,
    /// Amount actually paid this month (shorter than the level payment on
    /// the final month if the balance clears early).
    pub payment: Money,
    pub principal: Money,
    pub interest: Money,
    /// Outstanding balance after this month, never negative.
    pub remaining_balance: Money,
    /// 1-based loan year, `ceil(month / 12)`.
    pub year: u32,
}

/// Simulated schedule together with the amount it amortises.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    pub loan_amount: Money,
    pub entries: Vec<ScheduleEntry>,
}

impl Schedule {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Balance left after the last simulated month.
    pub fn final_balance(&self) -> Money {
        self.entries
            .last()
            .map(|e| e.remaining_balance)
            .unwrap_or(self.loan_amount)
    }

    /// True if the schedule ended before `num_payments` months.
    pub fn paid_off_early(&self, num_payments: u32) -> bool {
        (self.entries.len() as u64) < u64::from(num_payments)
    }
}

/// Inputs to the month-by-month simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRequest {
    pub loan_amount: Money,
    pub monthly_payment: Money,
    pub monthly_rate: Rate,
    pub num_payments: u32,
    pub prepayment_amount: Money,
    pub prepayment_frequency: PrepaymentFrequency,
}

impl ScheduleRequest {
    /// Build a request from loan parameters and an already computed payment.
    pub fn from_params(params: &LoanParameters, monthly_payment: Money) -> Self {
        ScheduleRequest {
            loan_amount: params.loan_amount(),
            monthly_payment,
            monthly_rate: params.monthly_rate(),
            num_payments: params.number_of_payments(),
            prepayment_amount: params.prepayment_amount,
            prepayment_frequency: params.prepayment_frequency,
        }
    }

    /// Same request with prepayments switched off.
    pub fn without_prepayment(&self) -> Self {
        ScheduleRequest {
            prepayment_amount: Decimal::ZERO,
            ..self.clone()
        }
    }
}

/// Year a month falls in: `ceil(month / 12)`.
pub fn year_of_month(month: u32) -> u32 {
    month.div_ceil(12)
}

/// Simulate the schedule month by month.
///
/// Stops after `num_payments` months, or earlier once prepayments clear the
/// balance. Any arithmetic failure aborts the whole run with the month it
/// occurred in.
pub fn simulate(request: &ScheduleRequest) -> HomeLoanResult<Schedule> {
    let mut entries = Vec::new();
    let mut balance = request.loan_amount;

    for month in 1..=request.num_payments {
        let (entry, closing) = step(request, month, balance)?;
        balance = closing;
        entries.push(entry);

        if balance <= Decimal::ZERO {
            tracing::debug!(month, "balance cleared before end of term");
            break;
        }
    }

    Ok(Schedule {
        loan_amount: request.loan_amount,
        entries,
    })
}

/// Compute one month. Returns the entry and the unclamped closing balance.
fn step(
    request: &ScheduleRequest,
    month: u32,
    balance: Money,
) -> HomeLoanResult<(ScheduleEntry, Money)> {
    let fail = |reason: &str| HomeLoanError::ScheduleComputation {
        month,
        reason: reason.into(),
    };

    let interest = balance
        .checked_mul(request.monthly_rate)
        .ok_or_else(|| fail("interest overflow"))?;

    let mut principal = request
        .monthly_payment
        .checked_sub(interest)
        .ok_or_else(|| fail("principal overflow"))?;

    if prepayment_due(request.prepayment_frequency, month) {
        principal = principal
            .checked_add(request.prepayment_amount)
            .ok_or_else(|| fail("prepayment overflow"))?;
    }

    let mut payment = request.monthly_payment;
    if principal > balance {
        principal = balance;
        payment = principal
            .checked_add(interest)
            .ok_or_else(|| fail("final payment overflow"))?;
    }

    let closing = balance
        .checked_sub(principal)
        .ok_or_else(|| fail("balance overflow"))?;

    let entry = ScheduleEntry {
        month,
        payment,
        principal,
        interest,
        remaining_balance: closing.max(Decimal::ZERO),
        year: year_of_month(month),
    };
    Ok((entry, closing))
}

fn prepayment_due(frequency: PrepaymentFrequency, month: u32) -> bool {
    match frequency {
        PrepaymentFrequency::Yearly => month % 12 == 0,
        PrepaymentFrequency::Monthly => true,
    }
}
