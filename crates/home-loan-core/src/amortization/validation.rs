use rust_decimal::Decimal;

use crate::amortization::loan::LoanParameters;
use crate::error::{HomeLoanError, ValidationError};
use crate::HomeLoanResult;

/// Check every loan-parameter constraint and return all violations.
///
/// Checks are independent: a deposit above the home value reports both
/// `DepositExceedsValue` and `NonPositiveLoanAmount`.
pub fn validate(params: &LoanParameters) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if params.home_value <= Decimal::ZERO {
        errors.push(ValidationError::InvalidHomeValue);
    }
    if params.deposit < Decimal::ZERO {
        errors.push(ValidationError::NegativeDeposit);
    }
    if params.deposit > params.home_value {
        errors.push(ValidationError::DepositExceedsValue);
    }
    if params.annual_interest_rate_percent <= Decimal::ZERO {
        errors.push(ValidationError::InvalidInterestRate);
    }
    if params.term_years < 1 {
        errors.push(ValidationError::InvalidTerm);
    }
    if params.processing_fees < Decimal::ZERO {
        errors.push(ValidationError::NegativeFees);
    }
    if params.prepayment_amount < Decimal::ZERO {
        errors.push(ValidationError::NegativePrepayment);
    }
    if params.loan_amount() <= Decimal::ZERO {
        errors.push(ValidationError::NonPositiveLoanAmount);
    }

    errors
}

/// Fail with every violated constraint, or succeed if there are none.
pub fn ensure_valid(params: &LoanParameters) -> HomeLoanResult<()> {
    let errors = validate(params);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(HomeLoanError::Validation(errors))
    }
}
