//! Income-tax deductions available on home loan repayments.

pub mod deductions;
