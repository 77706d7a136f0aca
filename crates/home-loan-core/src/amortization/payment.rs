use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;

use crate::error::HomeLoanError;
use crate::types::{percent_to_rate, Money, Percent, Rate};
use crate::HomeLoanResult;

/// Monthly rate from an annual percentage: `percent / 100 / 12`.
pub fn monthly_rate_from_annual_percent(annual_percent: Percent) -> Rate {
    percent_to_rate(annual_percent) / dec!(12)
}

/// Level monthly payment that amortises `loan_amount` over `num_payments`.
///
/// Zero rate falls back to straight-line repayment. Otherwise the standard
/// annuity formula `L * r * (1+r)^n / ((1+r)^n - 1)` is evaluated with
/// checked arithmetic, so an unrepresentable result is reported as
/// `NumericOverflow` rather than returned.
pub fn compute_monthly_payment(
    loan_amount: Money,
    monthly_rate: Rate,
    num_payments: u32,
) -> HomeLoanResult<Money> {
    if num_payments == 0 {
        return Err(HomeLoanError::InvalidInput {
            field: "num_payments".into(),
            reason: "Number of payments must be > 0".into(),
        });
    }

    let n = Decimal::from(num_payments);

    if monthly_rate.is_zero() {
        return loan_amount
            .checked_div(n)
            .ok_or_else(|| overflow("straight-line payment"));
    }

    let growth = Decimal::ONE
        .checked_add(monthly_rate)
        .and_then(|base| base.checked_powu(u64::from(num_payments)))
        .ok_or_else(|| overflow("compound factor (1+r)^n"))?;

    let denominator = growth
        .checked_sub(Decimal::ONE)
        .filter(|d| !d.is_zero())
        .ok_or_else(|| overflow("annuity denominator (1+r)^n - 1"))?;

    loan_amount
        .checked_mul(monthly_rate)
        .and_then(|v| v.checked_mul(growth))
        .and_then(|v| v.checked_div(denominator))
        .ok_or_else(|| overflow("annuity payment"))
}

fn overflow(context: &str) -> HomeLoanError {
    HomeLoanError::NumericOverflow {
        context: context.into(),
    }
}
