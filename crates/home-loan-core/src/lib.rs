//! Fixed-rate home loan amortisation engine.
//!
//! Pure functions over `rust_decimal::Decimal`: validate loan parameters,
//! compute the level monthly payment, simulate the schedule with optional
//! prepayments, and derive totals, yearly tax deductions and a buy-vs-rent
//! comparison. [`analysis::analyze_home_loan`] runs the whole pipeline.

pub mod amortization;
pub mod analysis;
pub mod error;
pub mod rent;
pub mod tax;
pub mod types;

pub use error::{HomeLoanError, ValidationError};
pub use types::*;

/// Standard result type for all home-loan operations
pub type HomeLoanResult<T> = Result<T, HomeLoanError>;
