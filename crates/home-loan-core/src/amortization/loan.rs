use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::amortization::payment::monthly_rate_from_annual_percent;
use crate::types::{Money, Percent, Rate};

/// How often the prepayment amount is applied to principal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrepaymentFrequency {
    /// Full amount once every 12th month.
    #[default]
    Yearly,
    /// Full amount every month.
    Monthly,
}

/// Loan parameters as collected from the borrower.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanParameters {
    pub home_value: Money,
    pub deposit: Money,
    /// Annual interest rate in percent (8.75 = 8.75%).
    pub annual_interest_rate_percent: Percent,
    pub term_years: u32,
    #[serde(default)]
    pub processing_fees: Money,
    #[serde(default)]
    pub prepayment_amount: Money,
    #[serde(default)]
    pub prepayment_frequency: PrepaymentFrequency,
}

impl LoanParameters {
    /// Amount borrowed: home value less deposit.
    pub fn loan_amount(&self) -> Money {
        self.home_value.saturating_sub(self.deposit)
    }

    pub fn monthly_rate(&self) -> Rate {
        monthly_rate_from_annual_percent(self.annual_interest_rate_percent)
    }

    pub fn number_of_payments(&self) -> u32 {
        self.term_years.saturating_mul(12)
    }

    pub fn has_prepayment(&self) -> bool {
        self.prepayment_amount > Decimal::ZERO
    }
}
