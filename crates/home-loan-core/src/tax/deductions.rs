//! Yearly tax deductions on a home loan schedule.
//!
//! Interest paid is deductible up to a yearly cap (Section 24, ₹2,00,000)
//! and principal repaid up to a separate yearly cap (Section 80C,
//! ₹1,50,000). Both caps are configurable.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::amortization::schedule::Schedule;
use crate::amortization::yearly::summarize_by_year;
use crate::error::HomeLoanError;
use crate::types::Money;
use crate::HomeLoanResult;

/// Section 24 yearly cap on deductible interest.
pub const SECTION_24_INTEREST_CAP: Decimal = dec!(200_000);

/// Section 80C yearly cap on deductible principal.
pub const SECTION_80C_PRINCIPAL_CAP: Decimal = dec!(150_000);

/// Yearly deduction caps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeductionLimits {
    pub interest_cap: Money,
    pub principal_cap: Money,
}

impl Default for DeductionLimits {
    fn default() -> Self {
        DeductionLimits {
            interest_cap: SECTION_24_INTEREST_CAP,
            principal_cap: SECTION_80C_PRINCIPAL_CAP,
        }
    }
}

impl DeductionLimits {
    pub fn validate(&self) -> HomeLoanResult<()> {
        if self.interest_cap < Decimal::ZERO {
            return Err(HomeLoanError::InvalidInput {
                field: "interest_cap".into(),
                reason: "Interest deduction cap cannot be negative".into(),
            });
        }
        if self.principal_cap < Decimal::ZERO {
            return Err(HomeLoanError::InvalidInput {
                field: "principal_cap".into(),
                reason: "Principal deduction cap cannot be negative".into(),
            });
        }
        Ok(())
    }
}

/// Deductions for one loan year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyTaxSummary {
    pub year: u32,
    pub principal_paid: Money,
    pub interest_paid: Money,
    pub interest_deduction: Money,
    pub principal_deduction: Money,
    pub total_deduction: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxBenefitSummary {
    pub years: Vec<YearlyTaxSummary>,
    /// Sum over all years of interest and principal deductions.
    pub total_tax_savings: Money,
}

/// Estimate yearly deductions from an already simulated schedule.
pub fn estimate_tax_benefits(schedule: &Schedule, limits: &DeductionLimits) -> TaxBenefitSummary {
    let years: Vec<YearlyTaxSummary> = summarize_by_year(schedule)
        .into_iter()
        .map(|y| {
            let interest_deduction = y.interest_paid.min(limits.interest_cap);
            let principal_deduction = y.principal_paid.min(limits.principal_cap);
            YearlyTaxSummary {
                year: y.year,
                principal_paid: y.principal_paid,
                interest_paid: y.interest_paid,
                interest_deduction,
                principal_deduction,
                total_deduction: interest_deduction + principal_deduction,
            }
        })
        .collect();

    let total_tax_savings = years.iter().map(|y| y.total_deduction).sum();

    TaxBenefitSummary {
        years,
        total_tax_savings,
    }
}
