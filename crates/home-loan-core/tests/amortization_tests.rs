use home_loan_core::amortization::loan::{LoanParameters, PrepaymentFrequency};
use home_loan_core::amortization::payment::{compute_monthly_payment, monthly_rate_from_annual_percent};
use home_loan_core::amortization::schedule::{simulate, Schedule, ScheduleRequest};
use home_loan_core::amortization::totals::{aggregate, Totals};
use home_loan_core::amortization::validation::validate;
use home_loan_core::{HomeLoanError, Money, ValidationError};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn reference_params() -> LoanParameters {
    LoanParameters {
        home_value: dec!(10_000_000),
        deposit: dec!(4_000_000),
        annual_interest_rate_percent: dec!(8.75),
        term_years: 20,
        processing_fees: dec!(10_000),
        prepayment_amount: Decimal::ZERO,
        prepayment_frequency: PrepaymentFrequency::Yearly,
    }
}

fn run(params: &LoanParameters) -> (Money, Schedule, Totals) {
    let payment = compute_monthly_payment(
        params.loan_amount(),
        params.monthly_rate(),
        params.number_of_payments(),
    )
    .unwrap();
    let schedule = simulate(&ScheduleRequest::from_params(params, payment)).unwrap();
    let totals = aggregate(&schedule).unwrap();
    (payment, schedule, totals)
}

// ===========================================================================
// Reference loan
// ===========================================================================

#[test]
fn test_reference_loan_end_to_end() {
    let params = reference_params();
    assert!(validate(&params).is_empty());
    assert_eq!(params.loan_amount(), dec!(6_000_000));

    let (payment, schedule, totals) = run(&params);
    assert!(
        (payment - dec!(53_022.64)).abs() < dec!(0.01),
        "Expected payment ~53,022.64, got {payment}"
    );
    assert_eq!(schedule.len(), 240);
    assert_eq!(schedule.entries.last().unwrap().year, 20);
    assert!(schedule.final_balance() < dec!(0.01));

    assert_eq!(totals.total_interest, totals.total_payments - dec!(6_000_000));
    // 53,022.64 * 240 - 6,000,000 ≈ 6,725,434
    assert!((totals.total_interest - dec!(6_725_434.21)).abs() < dec!(1));
}

#[test]
fn test_computed_payment_amortises_to_zero() {
    for (rate, years) in [(dec!(6.5), 30), (dec!(8.75), 20), (dec!(12), 5), (dec!(0.5), 1)] {
        let mut params = reference_params();
        params.annual_interest_rate_percent = rate;
        params.term_years = years;
        let (_, schedule, _) = run(&params);
        assert_eq!(schedule.len() as u32, years * 12);
        assert!(
            schedule.final_balance() < dec!(0.000001),
            "rate {rate}% over {years}y left {}",
            schedule.final_balance()
        );
    }
}

#[test]
fn test_zero_rate_formula() {
    let payment = compute_monthly_payment(dec!(120_000), Decimal::ZERO, 12).unwrap();
    assert_eq!(payment, dec!(10_000));
}

#[test]
fn test_monthly_rate_derivation() {
    assert_eq!(
        monthly_rate_from_annual_percent(dec!(8.75)),
        reference_params().monthly_rate()
    );
}

// ===========================================================================
// Validation
// ===========================================================================

#[test]
fn test_deposit_equals_home_value() {
    let mut params = reference_params();
    params.deposit = params.home_value;
    assert_eq!(validate(&params), vec![ValidationError::NonPositiveLoanAmount]);
}

#[test]
fn test_deposit_exceeds_home_value_reports_both() {
    let mut params = reference_params();
    params.deposit = dec!(11_000_000);
    let errors = validate(&params);
    assert!(errors.contains(&ValidationError::DepositExceedsValue));
    assert!(errors.contains(&ValidationError::NonPositiveLoanAmount));
}

// ===========================================================================
// Prepayments
// ===========================================================================

#[test]
fn test_prepayment_shortens_schedule() {
    let base = run(&reference_params());

    let mut params = reference_params();
    params.prepayment_amount = dec!(200_000);
    let pre = run(&params);

    assert!(pre.1.len() < base.1.len());
    assert!(pre.2.total_interest < base.2.total_interest);
    assert_eq!(pre.1.final_balance(), Decimal::ZERO);
    assert_eq!(pre.2.total_interest, pre.2.total_payments - dec!(6_000_000));
}

#[test]
fn test_schedule_error_carries_month() {
    let request = ScheduleRequest {
        loan_amount: Decimal::MAX,
        monthly_payment: dec!(1),
        monthly_rate: dec!(0.5),
        num_payments: 12,
        prepayment_amount: Decimal::ZERO,
        prepayment_frequency: PrepaymentFrequency::Monthly,
    };
    // Negative principal pushes the month-1 balance past Decimal::MAX
    match simulate(&request) {
        Err(HomeLoanError::ScheduleComputation { month, .. }) => assert_eq!(month, 1),
        other => panic!("expected schedule error, got {other:?}"),
    }
}

// ===========================================================================
// Properties
// ===========================================================================

fn params_strategy() -> impl Strategy<Value = LoanParameters> {
    (
        1_000_000u64..50_000_000,
        0u64..50,
        100u32..1500,
        1u32..31,
        prop_oneof![Just(PrepaymentFrequency::Yearly), Just(PrepaymentFrequency::Monthly)],
    )
        .prop_map(|(home, deposit_pct, rate_bp, years, frequency)| {
            let home_value = Decimal::from(home);
            LoanParameters {
                home_value,
                deposit: home_value * Decimal::from(deposit_pct) / dec!(100),
                annual_interest_rate_percent: Decimal::from(rate_bp) / dec!(100),
                term_years: years,
                processing_fees: Decimal::ZERO,
                prepayment_amount: Decimal::ZERO,
                prepayment_frequency: frequency,
            }
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_no_prepayment_runs_full_term(params in params_strategy()) {
        let (_, schedule, totals) = run(&params);
        prop_assert_eq!(schedule.len() as u32, params.number_of_payments());
        prop_assert!(schedule.final_balance() < dec!(0.01));
        prop_assert_eq!(totals.total_interest, totals.total_payments - params.loan_amount());
    }

    #[test]
    fn prop_more_prepayment_never_costs_more(
        params in params_strategy(),
        small in 0u64..200_000,
        extra in 1_000u64..500_000,
    ) {
        let mut low = params.clone();
        low.prepayment_amount = Decimal::from(small);
        let mut high = params;
        high.prepayment_amount = Decimal::from(small + extra);

        let (_, low_schedule, low_totals) = run(&low);
        let (_, high_schedule, high_totals) = run(&high);

        prop_assert!(high_totals.total_interest <= low_totals.total_interest);
        prop_assert!(high_schedule.len() <= low_schedule.len());
        prop_assert_eq!(
            high_totals.total_interest,
            high_totals.total_payments - high.loan_amount()
        );
    }
}
