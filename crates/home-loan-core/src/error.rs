use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single violated loan-parameter constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum ValidationError {
    #[error("Home value must be greater than 0")]
    InvalidHomeValue,

    #[error("Deposit cannot be negative")]
    NegativeDeposit,

    #[error("Deposit cannot exceed home value")]
    DepositExceedsValue,

    #[error("Interest rate must be greater than 0")]
    InvalidInterestRate,

    #[error("Loan term must be at least 1 year")]
    InvalidTerm,

    #[error("Processing fees cannot be negative")]
    NegativeFees,

    #[error("Prepayment cannot be negative")]
    NegativePrepayment,

    #[error("Loan amount must be greater than 0; reduce the deposit")]
    NonPositiveLoanAmount,
}

#[derive(Debug, Error)]
pub enum HomeLoanError {
    #[error("Validation failed: {}", join_messages(.0))]
    Validation(Vec<ValidationError>),

    #[error("Numeric overflow in {context}")]
    NumericOverflow { context: String },

    #[error("Schedule computation failed at month {month}: {reason}")]
    ScheduleComputation { month: u32, reason: String },

    #[error("Rent increase percentage cannot be negative (got {percent})")]
    NegativeRentIncrease { percent: Decimal },

    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl HomeLoanError {
    /// The validation errors carried by this error, if any.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            HomeLoanError::Validation(errors) => errors,
            _ => &[],
        }
    }
}

impl From<serde_json::Error> for HomeLoanError {
    fn from(e: serde_json::Error) -> Self {
        HomeLoanError::SerializationError(e.to_string())
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
