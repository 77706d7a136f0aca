use napi::Result as NapiResult;
use napi_derive::napi;
use serde::Deserialize;

use home_loan_core::amortization::loan::LoanParameters;
use home_loan_core::amortization::payment::compute_monthly_payment;
use home_loan_core::amortization::schedule::{simulate, ScheduleRequest};
use home_loan_core::amortization::validation::{ensure_valid, validate};
use home_loan_core::analysis::{analyze_home_loan, HomeLoanInput};
use home_loan_core::rent::comparison::compare_rent;
use home_loan_core::tax::deductions::{estimate_tax_benefits, DeductionLimits};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

fn simulate_loan(
    params: &LoanParameters,
) -> home_loan_core::HomeLoanResult<home_loan_core::amortization::schedule::Schedule> {
    ensure_valid(params)?;
    let payment = compute_monthly_payment(
        params.loan_amount(),
        params.monthly_rate(),
        params.number_of_payments(),
    )?;
    simulate(&ScheduleRequest::from_params(params, payment))
}

// ---------------------------------------------------------------------------
// Full analysis
// ---------------------------------------------------------------------------

#[napi]
pub fn analyze_home_loan_json(input_json: String) -> NapiResult<String> {
    let input: HomeLoanInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = analyze_home_loan(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Amortisation
// ---------------------------------------------------------------------------

/// Returns `{ "valid": bool, "errors": [...] }` rather than failing, so a
/// form can show every problem at once.
#[napi]
pub fn validate_loan(input_json: String) -> NapiResult<String> {
    let params: LoanParameters = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let errors = validate(&params);
    let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    serde_json::to_string(&serde_json::json!({
        "valid": errors.is_empty(),
        "errors": errors,
        "messages": messages,
    }))
    .map_err(to_napi_error)
}

#[derive(Deserialize)]
struct PaymentRequest {
    loan_amount: rust_decimal::Decimal,
    monthly_rate: rust_decimal::Decimal,
    num_payments: u32,
}

#[napi]
pub fn monthly_payment(input_json: String) -> NapiResult<String> {
    let req: PaymentRequest = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let payment = compute_monthly_payment(req.loan_amount, req.monthly_rate, req.num_payments)
        .map_err(to_napi_error)?;
    serde_json::to_string(&payment).map_err(to_napi_error)
}

#[napi]
pub fn amortization_schedule(input_json: String) -> NapiResult<String> {
    let params: LoanParameters = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let schedule = simulate_loan(&params).map_err(to_napi_error)?;
    serde_json::to_string(&schedule.entries).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Tax and rent
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct TaxRequest {
    loan: LoanParameters,
    #[serde(default)]
    deduction_limits: DeductionLimits,
}

#[napi]
pub fn tax_benefits(input_json: String) -> NapiResult<String> {
    let req: TaxRequest = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    req.deduction_limits.validate().map_err(to_napi_error)?;
    let schedule = simulate_loan(&req.loan).map_err(to_napi_error)?;
    let summary = estimate_tax_benefits(&schedule, &req.deduction_limits);
    serde_json::to_string(&summary).map_err(to_napi_error)
}

#[derive(Deserialize)]
struct RentRequest {
    monthly_rent: rust_decimal::Decimal,
    yearly_increase_percent: rust_decimal::Decimal,
    term_years: u32,
    total_payments: rust_decimal::Decimal,
}

#[napi]
pub fn rent_comparison(input_json: String) -> NapiResult<String> {
    let req: RentRequest = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let result = compare_rent(
        req.monthly_rent,
        req.yearly_increase_percent,
        req.term_years,
        req.total_payments,
    )
    .map_err(to_napi_error)?;
    serde_json::to_string(&result).map_err(to_napi_error)
}
