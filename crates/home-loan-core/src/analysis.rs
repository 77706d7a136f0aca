//! End-to-end home loan analysis.
//!
//! Runs the full pipeline for one set of inputs: validate, compute the
//! level payment, simulate the schedule, aggregate it, then derive the
//! optional tax and rent figures. Nothing is carried between calls.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::amortization::loan::LoanParameters;
use crate::amortization::payment::compute_monthly_payment;
use crate::amortization::prepayment::{assess_prepayment, PrepaymentImpact};
use crate::amortization::schedule::{simulate, ScheduleEntry, ScheduleRequest};
use crate::amortization::totals::{aggregate, Totals};
use crate::amortization::validation::ensure_valid;
use crate::amortization::yearly::{summarize_by_year, YearlySummary};
use crate::error::HomeLoanError;
use crate::rent::comparison::{compare_rent, RentComparison, RentInputs};
use crate::tax::deductions::{estimate_tax_benefits, DeductionLimits, TaxBenefitSummary};
use crate::types::{with_metadata, ComputationOutput, Money};
use crate::HomeLoanResult;

/// Annual rate above which a warning is attached to the output.
const HIGH_RATE_WARNING_PERCENT: Decimal = dec!(20);

/// Everything the presentation layer collects for one analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeLoanInput {
    pub loan: LoanParameters,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rent: Option<RentInputs>,
    #[serde(default = "default_true")]
    pub show_tax_benefits: bool,
    #[serde(default = "default_true")]
    pub compare_renting: bool,
    #[serde(default)]
    pub deduction_limits: DeductionLimits,
}

fn default_true() -> bool {
    true
}

/// Upfront and lifetime cost of buying.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostOfOwnership {
    /// Deposit plus processing fees.
    pub upfront_cost: Money,
    /// Upfront cost plus every loan payment.
    pub total_cost: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeLoanOutput {
    pub loan_amount: Money,
    pub monthly_payment: Money,
    pub schedule: Vec<ScheduleEntry>,
    pub totals: Totals,
    pub cost_of_ownership: CostOfOwnership,
    pub yearly_breakdown: Vec<YearlySummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prepayment_impact: Option<PrepaymentImpact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_summary: Option<TaxBenefitSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rent_comparison: Option<RentComparison>,
}

fn cost_of_ownership(loan: &LoanParameters, totals: &Totals) -> HomeLoanResult<CostOfOwnership> {
    let overflow = || HomeLoanError::NumericOverflow {
        context: "cost of ownership".into(),
    };
    let upfront_cost = loan
        .deposit
        .checked_add(loan.processing_fees)
        .ok_or_else(overflow)?;
    let total_cost = upfront_cost
        .checked_add(totals.total_payments)
        .ok_or_else(overflow)?;
    Ok(CostOfOwnership {
        upfront_cost,
        total_cost,
    })
}

/// Run the complete analysis for one set of inputs.
pub fn analyze_home_loan(
    input: &HomeLoanInput,
) -> HomeLoanResult<ComputationOutput<HomeLoanOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();
    let loan = &input.loan;

    ensure_valid(loan)?;
    input.deduction_limits.validate()?;

    if loan.annual_interest_rate_percent > HIGH_RATE_WARNING_PERCENT {
        warnings.push(format!(
            "Interest rate of {}% is unusually high",
            loan.annual_interest_rate_percent
        ));
    }

    let loan_amount = loan.loan_amount();
    let num_payments = loan.number_of_payments();
    let monthly_payment =
        compute_monthly_payment(loan_amount, loan.monthly_rate(), num_payments)?;
    tracing::debug!(%loan_amount, %monthly_payment, num_payments, "computed level payment");

    let request = ScheduleRequest::from_params(loan, monthly_payment);
    let schedule = simulate(&request)?;
    let totals = aggregate(&schedule)?;

    if schedule.paid_off_early(num_payments) {
        warnings.push(format!(
            "Prepayments clear the loan after {} of {} months",
            schedule.len(),
            num_payments
        ));
    }

    let prepayment_impact = if loan.has_prepayment() {
        Some(assess_prepayment(&request, &schedule, &totals)?)
    } else {
        None
    };

    let tax_summary = input
        .show_tax_benefits
        .then(|| estimate_tax_benefits(&schedule, &input.deduction_limits));

    let rent_comparison = if input.compare_renting {
        match &input.rent {
            Some(rent) => Some(compare_rent(
                rent.monthly_rent,
                rent.yearly_increase_percent,
                loan.term_years,
                totals.total_payments,
            )?),
            None => {
                warnings.push("Rent comparison requested but no rent inputs supplied".into());
                None
            }
        }
    } else {
        None
    };

    let cost_of_ownership = cost_of_ownership(loan, &totals)?;

    let output = HomeLoanOutput {
        loan_amount,
        monthly_payment,
        yearly_breakdown: summarize_by_year(&schedule),
        schedule: schedule.entries,
        totals,
        cost_of_ownership,
        prepayment_impact,
        tax_summary,
        rent_comparison,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    tracing::debug!(
        elapsed_us = elapsed,
        months = output.schedule.len(),
        "home loan analysis complete"
    );
    Ok(with_metadata(
        "Fixed-rate amortisation with prepayments",
        input,
        warnings,
        elapsed,
        output,
    ))
}
