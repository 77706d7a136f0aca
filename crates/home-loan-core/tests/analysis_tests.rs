use home_loan_core::amortization::loan::{LoanParameters, PrepaymentFrequency};
use home_loan_core::analysis::{analyze_home_loan, HomeLoanInput};
use home_loan_core::rent::comparison::{closed_form_total_rent, RentInputs};
use home_loan_core::tax::deductions::DeductionLimits;
use home_loan_core::{HomeLoanError, ValidationError};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn default_input() -> HomeLoanInput {
    HomeLoanInput {
        loan: LoanParameters {
            home_value: dec!(10_000_000),
            deposit: dec!(4_000_000),
            annual_interest_rate_percent: dec!(8.75),
            term_years: 20,
            processing_fees: dec!(10_000),
            prepayment_amount: Decimal::ZERO,
            prepayment_frequency: PrepaymentFrequency::Yearly,
        },
        rent: Some(RentInputs {
            monthly_rent: dec!(20_000),
            yearly_increase_percent: dec!(5),
        }),
        show_tax_benefits: true,
        compare_renting: true,
        deduction_limits: DeductionLimits::default(),
    }
}

// ===========================================================================
// Full pipeline
// ===========================================================================

#[test]
fn test_default_calculator_inputs() {
    let out = analyze_home_loan(&default_input()).unwrap();
    let r = &out.result;

    assert_eq!(r.loan_amount, dec!(6_000_000));
    assert!((r.monthly_payment - dec!(53_022.64)).abs() < dec!(0.01));
    assert_eq!(r.schedule.len(), 240);
    assert_eq!(r.yearly_breakdown.len(), 20);
    assert_eq!(
        r.totals.total_interest,
        r.totals.total_payments - dec!(6_000_000)
    );
    assert!(r.prepayment_impact.is_none());
    assert!(out.warnings.is_empty());

    // Upfront: deposit + fees
    assert_eq!(r.cost_of_ownership.upfront_cost, dec!(4_010_000));
    assert_eq!(
        r.cost_of_ownership.total_cost,
        dec!(4_010_000) + r.totals.total_payments
    );
}

#[test]
fn test_tax_summary_present_and_capped() {
    let out = analyze_home_loan(&default_input()).unwrap();
    let tax = out.result.tax_summary.as_ref().unwrap();
    assert_eq!(tax.years.len(), 20);

    // Year 1 interest ≈ 520k, well over the 2L cap; principal ≈ 116k, under 1.5L
    let y1 = &tax.years[0];
    assert_eq!(y1.interest_deduction, dec!(200_000));
    assert!(y1.principal_deduction < dec!(150_000));
    assert_eq!(y1.principal_deduction, y1.principal_paid);

    let summed: Decimal = tax.years.iter().map(|y| y.total_deduction).sum();
    assert_eq!(tax.total_tax_savings, summed);
}

#[test]
fn test_rent_comparison_uses_schedule_totals() {
    let out = analyze_home_loan(&default_input()).unwrap();
    let r = &out.result;
    let rent = r.rent_comparison.as_ref().unwrap();

    let closed = closed_form_total_rent(dec!(20_000), dec!(5), 20).unwrap();
    assert!((rent.total_rent_paid - closed).abs() < dec!(0.0001));
    assert_eq!(
        rent.savings_by_buying,
        rent.total_rent_paid - r.totals.total_payments
    );
    // ~7.94M in rent vs ~12.73M in loan payments
    assert!(rent.savings_by_buying < Decimal::ZERO);
}

#[test]
fn test_flags_disable_optional_sections() {
    let mut input = default_input();
    input.show_tax_benefits = false;
    input.compare_renting = false;
    let out = analyze_home_loan(&input).unwrap();
    assert!(out.result.tax_summary.is_none());
    assert!(out.result.rent_comparison.is_none());
}

#[test]
fn test_missing_rent_inputs_warns() {
    let mut input = default_input();
    input.rent = None;
    let out = analyze_home_loan(&input).unwrap();
    assert!(out.result.rent_comparison.is_none());
    assert_eq!(out.warnings.len(), 1);
    assert!(out.warnings[0].contains("no rent inputs"));
}

#[test]
fn test_prepayment_impact_reported() {
    let mut input = default_input();
    input.loan.prepayment_amount = dec!(300_000);
    let out = analyze_home_loan(&input).unwrap();
    let r = &out.result;

    let impact = r.prepayment_impact.as_ref().unwrap();
    assert_eq!(impact.baseline_months, 240);
    assert_eq!(impact.actual_months as usize, r.schedule.len());
    assert!(impact.months_saved > 0);
    assert!(impact.interest_saved > Decimal::ZERO);
    assert_eq!(
        impact.interest_saved,
        impact.baseline_total_interest - r.totals.total_interest
    );
    assert!(out.warnings.iter().any(|w| w.contains("Prepayments clear")));

    let last = r.schedule.last().unwrap();
    assert_eq!(last.remaining_balance, Decimal::ZERO);
}

// ===========================================================================
// Errors
// ===========================================================================

#[test]
fn test_validation_errors_short_circuit() {
    let mut input = default_input();
    input.loan.deposit = dec!(12_000_000);
    input.loan.term_years = 0;
    let err = analyze_home_loan(&input).unwrap_err();
    assert_eq!(
        err.validation_errors(),
        &[
            ValidationError::DepositExceedsValue,
            ValidationError::InvalidTerm,
            ValidationError::NonPositiveLoanAmount,
        ]
    );
}

#[test]
fn test_cost_of_ownership_overflow_is_an_error() {
    let mut input = default_input();
    input.loan.processing_fees = Decimal::MAX;
    assert!(home_loan_core::amortization::validation::validate(&input.loan).is_empty());

    let err = analyze_home_loan(&input).unwrap_err();
    assert!(matches!(err, HomeLoanError::NumericOverflow { .. }));
}

#[test]
fn test_cost_of_ownership_adds_upfront_and_payments() {
    let out = analyze_home_loan(&default_input()).unwrap().result;
    assert_eq!(out.cost_of_ownership.upfront_cost, dec!(4_010_000));
    assert_eq!(
        out.cost_of_ownership.total_cost,
        dec!(4_010_000) + out.totals.total_payments
    );
}

#[test]
fn test_negative_rent_increase_fails_run() {
    let mut input = default_input();
    input.rent = Some(RentInputs {
        monthly_rent: dec!(20_000),
        yearly_increase_percent: dec!(-2),
    });
    let err = analyze_home_loan(&input).unwrap_err();
    assert!(matches!(err, HomeLoanError::NegativeRentIncrease { .. }));
}

#[test]
fn test_negative_rent_increase_ignored_when_not_comparing() {
    let mut input = default_input();
    input.compare_renting = false;
    input.rent = Some(RentInputs {
        monthly_rent: dec!(20_000),
        yearly_increase_percent: dec!(-2),
    });
    assert!(analyze_home_loan(&input).is_ok());
}

#[test]
fn test_high_rate_warning() {
    let mut input = default_input();
    input.loan.annual_interest_rate_percent = dec!(24);
    let out = analyze_home_loan(&input).unwrap();
    assert!(out.warnings.iter().any(|w| w.contains("unusually high")));
}

// ===========================================================================
// Serialization boundary
// ===========================================================================

#[test]
fn test_json_input_defaults() {
    let json = r#"{
        "loan": {
            "home_value": "10000000",
            "deposit": "4000000",
            "annual_interest_rate_percent": "8.75",
            "term_years": 20,
            "prepayment_amount": "100000",
            "prepayment_frequency": "Monthly"
        }
    }"#;
    let input: HomeLoanInput = serde_json::from_str(json).unwrap();
    assert!(input.show_tax_benefits);
    assert!(input.compare_renting);
    assert!(input.rent.is_none());
    assert_eq!(input.deduction_limits, DeductionLimits::default());
    assert_eq!(input.loan.prepayment_frequency, PrepaymentFrequency::Monthly);

    let out = analyze_home_loan(&input).unwrap();
    let value = serde_json::to_value(&out).unwrap();
    assert!(value["result"]["monthly_payment"].is_string());
    assert!(value["result"].get("rent_comparison").is_none());
    assert_eq!(
        value["methodology"],
        "Fixed-rate amortisation with prepayments"
    );
}
