use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use home_loan_core::amortization::payment::compute_monthly_payment;
use home_loan_core::amortization::schedule::{simulate, ScheduleRequest};
use home_loan_core::amortization::validation::ensure_valid;
use home_loan_core::tax::deductions::{estimate_tax_benefits, DeductionLimits};

use crate::commands::amortization::LoanArgs;

/// Yearly deduction caps
#[derive(Args)]
pub struct CapArgs {
    /// Yearly cap on deductible interest (default: Section 24, 200000)
    #[arg(long)]
    pub interest_cap: Option<Decimal>,

    /// Yearly cap on deductible principal (default: Section 80C, 150000)
    #[arg(long)]
    pub principal_cap: Option<Decimal>,
}

impl CapArgs {
    pub fn to_limits(&self) -> DeductionLimits {
        let defaults = DeductionLimits::default();
        DeductionLimits {
            interest_cap: self.interest_cap.unwrap_or(defaults.interest_cap),
            principal_cap: self.principal_cap.unwrap_or(defaults.principal_cap),
        }
    }
}

/// Arguments for the yearly tax deduction estimate
#[derive(Args)]
pub struct TaxBenefitArgs {
    #[command(flatten)]
    pub loan: LoanArgs,

    #[command(flatten)]
    pub caps: CapArgs,
}

pub fn run_tax_benefits(args: TaxBenefitArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let input = args.loan.resolve(None, args.caps.to_limits())?;
    let params = &input.loan;
    ensure_valid(params)?;
    input.deduction_limits.validate()?;

    let monthly_payment = compute_monthly_payment(
        params.loan_amount(),
        params.monthly_rate(),
        params.number_of_payments(),
    )?;
    let schedule = simulate(&ScheduleRequest::from_params(params, monthly_payment))?;
    let summary = estimate_tax_benefits(&schedule, &input.deduction_limits);
    Ok(serde_json::to_value(summary)?)
}
