use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use serde_json::{json, Value};

use home_loan_core::amortization::loan::{LoanParameters, PrepaymentFrequency};
use home_loan_core::amortization::payment::{
    compute_monthly_payment, monthly_rate_from_annual_percent,
};
use home_loan_core::amortization::schedule::{simulate, ScheduleRequest};
use home_loan_core::amortization::validation::{ensure_valid, validate};
use home_loan_core::analysis::HomeLoanInput;
use home_loan_core::rent::comparison::RentInputs;
use home_loan_core::tax::deductions::DeductionLimits;

use crate::input;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FrequencyArg {
    Yearly,
    Monthly,
}

impl From<FrequencyArg> for PrepaymentFrequency {
    fn from(arg: FrequencyArg) -> Self {
        match arg {
            FrequencyArg::Yearly => PrepaymentFrequency::Yearly,
            FrequencyArg::Monthly => PrepaymentFrequency::Monthly,
        }
    }
}

/// Loan parameters shared by every loan command
#[derive(Args)]
pub struct LoanArgs {
    /// Path to JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Home value
    #[arg(long, default_value = "10000000")]
    pub home_value: Decimal,

    /// Deposit paid upfront
    #[arg(long, default_value = "4000000", allow_hyphen_values = true)]
    pub deposit: Decimal,

    /// Annual interest rate in percent (e.g. 8.75)
    #[arg(long, default_value = "8.75", allow_hyphen_values = true)]
    pub rate: Decimal,

    /// Loan term in years
    #[arg(long, default_value_t = 20)]
    pub years: u32,

    /// One-off processing fees
    #[arg(long, default_value = "10000", allow_hyphen_values = true)]
    pub processing_fees: Decimal,

    /// Extra principal repaid per prepayment
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub prepayment: Decimal,

    /// How often the prepayment is made
    #[arg(long, value_enum, default_value = "yearly")]
    pub prepayment_frequency: FrequencyArg,
}

impl LoanArgs {
    pub fn to_params(&self) -> LoanParameters {
        LoanParameters {
            home_value: self.home_value,
            deposit: self.deposit,
            annual_interest_rate_percent: self.rate,
            term_years: self.years,
            processing_fees: self.processing_fees,
            prepayment_amount: self.prepayment,
            prepayment_frequency: self.prepayment_frequency.into(),
        }
    }

    /// Full analysis input, from `--input`/stdin if given, otherwise from
    /// these flags plus the supplied extras.
    pub fn resolve(
        &self,
        rent: Option<RentInputs>,
        deduction_limits: DeductionLimits,
    ) -> Result<HomeLoanInput, Box<dyn std::error::Error>> {
        input::resolve_home_loan_input(self.input.as_deref(), || HomeLoanInput {
            loan: self.to_params(),
            rent,
            show_tax_benefits: true,
            compare_renting: true,
            deduction_limits,
        })
    }

    pub fn resolve_loan(&self) -> Result<LoanParameters, Box<dyn std::error::Error>> {
        Ok(self.resolve(None, DeductionLimits::default())?.loan)
    }
}

/// Arguments for the level-payment formula on a raw loan amount
#[derive(Args)]
pub struct PaymentArgs {
    /// Amount borrowed
    #[arg(long)]
    pub loan_amount: Decimal,

    /// Annual interest rate in percent (0 gives straight-line repayment)
    #[arg(long, allow_hyphen_values = true)]
    pub rate: Decimal,

    /// Loan term in years
    #[arg(long)]
    pub years: u32,
}

pub fn run_payment(args: PaymentArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let monthly_rate = monthly_rate_from_annual_percent(args.rate);
    let num_payments = args.years.saturating_mul(12);
    let monthly_payment = compute_monthly_payment(args.loan_amount, monthly_rate, num_payments)?;
    Ok(json!({
        "loan_amount": args.loan_amount,
        "monthly_rate": monthly_rate,
        "num_payments": num_payments,
        "monthly_payment": monthly_payment,
    }))
}

pub fn run_schedule(args: LoanArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let params = args.resolve_loan()?;
    ensure_valid(&params)?;

    let monthly_payment = compute_monthly_payment(
        params.loan_amount(),
        params.monthly_rate(),
        params.number_of_payments(),
    )?;
    let schedule = simulate(&ScheduleRequest::from_params(&params, monthly_payment))?;
    tracing::debug!(months = schedule.len(), "simulated schedule");
    Ok(serde_json::to_value(schedule.entries)?)
}

pub fn run_validate(args: LoanArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let params = args.resolve_loan()?;
    let errors = validate(&params);
    let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    Ok(json!({
        "valid": errors.is_empty(),
        "loan_amount": params.loan_amount(),
        "errors": errors,
        "messages": messages,
    }))
}
