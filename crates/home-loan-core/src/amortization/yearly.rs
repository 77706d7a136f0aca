use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::amortization::schedule::Schedule;
use crate::types::Money;

/// Repayments grouped into a single loan year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlySummary {
    pub year: u32,
    pub months: u32,
    pub principal_paid: Money,
    pub interest_paid: Money,
    pub total_paid: Money,
    pub closing_balance: Money,
}

/// Group schedule entries by loan year, in year order.
///
/// A final partial year (early payoff) yields a summary with fewer than
/// 12 months.
pub fn summarize_by_year(schedule: &Schedule) -> Vec<YearlySummary> {
    let mut years: Vec<YearlySummary> = Vec::new();

    for entry in &schedule.entries {
        match years.last_mut() {
            Some(current) if current.year == entry.year => {
                current.months += 1;
                current.principal_paid += entry.principal;
                current.interest_paid += entry.interest;
                current.total_paid += entry.payment;
                current.closing_balance = entry.remaining_balance;
            }
            _ => years.push(YearlySummary {
                year: entry.year,
                months: 1,
                principal_paid: entry.principal,
                interest_paid: entry.interest,
                total_paid: entry.payment,
                closing_balance: entry.remaining_balance,
            }),
        }
    }

    years
}

/// Sum of principal repaid across all years.
pub fn total_principal(years: &[YearlySummary]) -> Money {
    years.iter().map(|y| y.principal_paid).sum::<Decimal>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amortization::loan::PrepaymentFrequency;
    use crate::amortization::schedule::{simulate, ScheduleRequest};
    use rust_decimal_macros::dec;

    fn zero_rate_schedule(months: u32, prepayment: Money) -> Schedule {
        simulate(&ScheduleRequest {
            loan_amount: dec!(120_000),
            monthly_payment: dec!(120_000) / Decimal::from(months),
            monthly_rate: Decimal::ZERO,
            num_payments: months,
            prepayment_amount: prepayment,
            prepayment_frequency: PrepaymentFrequency::Yearly,
        })
        .unwrap()
    }

    #[test]
    fn test_groups_full_years() {
        let years = summarize_by_year(&zero_rate_schedule(48, Decimal::ZERO));
        assert_eq!(years.len(), 4);
        for (i, y) in years.iter().enumerate() {
            assert_eq!(y.year, i as u32 + 1);
            assert_eq!(y.months, 12);
            assert_eq!(y.principal_paid, dec!(30_000));
            assert_eq!(y.interest_paid, Decimal::ZERO);
        }
        assert_eq!(years[3].closing_balance, Decimal::ZERO);
        assert_eq!(total_principal(&years), dec!(120_000));
    }

    #[test]
    fn test_partial_final_year() {
        // 120,000 over 10 years at 1,000/month, plus 100,000 at month 12:
        // year 1 repays 112,000, year 2 clears the remaining 8,000 by month 20.
        let years = summarize_by_year(&zero_rate_schedule(120, dec!(100_000)));
        assert_eq!(years.len(), 2);
        assert_eq!(years[0].principal_paid, dec!(112_000));
        assert_eq!(years[1].months, 8);
        assert_eq!(years[1].principal_paid, dec!(8_000));
        assert_eq!(years[1].closing_balance, Decimal::ZERO);
    }
}
