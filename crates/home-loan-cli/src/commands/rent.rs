use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use home_loan_core::rent::comparison::compare_rent;

/// Arguments for a standalone buy-vs-rent comparison
#[derive(Args)]
pub struct RentArgs {
    /// Monthly rent today
    #[arg(long, default_value = "20000", allow_hyphen_values = true)]
    pub rent: Decimal,

    /// Yearly rent increase in percent
    #[arg(long, default_value = "5", allow_hyphen_values = true)]
    pub rent_increase: Decimal,

    /// Comparison horizon in years
    #[arg(long, default_value_t = 20)]
    pub years: u32,

    /// Total paid over the loan, to compare against
    #[arg(long)]
    pub total_payments: Decimal,
}

pub fn run_rent(args: RentArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let result = compare_rent(args.rent, args.rent_increase, args.years, args.total_payments)?;
    Ok(serde_json::to_value(result)?)
}
