use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use home_loan_core::analysis::analyze_home_loan;
use home_loan_core::rent::comparison::RentInputs;

use crate::commands::amortization::LoanArgs;
use crate::commands::tax::CapArgs;

/// Arguments for the full home loan analysis
#[derive(Args)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub loan: LoanArgs,

    #[command(flatten)]
    pub caps: CapArgs,

    /// Monthly rent for the buy-vs-rent comparison
    #[arg(long, default_value = "20000", allow_hyphen_values = true)]
    pub rent: Decimal,

    /// Yearly rent increase in percent
    #[arg(long, default_value = "5", allow_hyphen_values = true)]
    pub rent_increase: Decimal,

    /// Skip the tax benefit estimate
    #[arg(long)]
    pub no_tax_benefits: bool,

    /// Skip the buy-vs-rent comparison
    #[arg(long)]
    pub no_rent_comparison: bool,
}

pub fn run_analyze(args: AnalyzeArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let rent = RentInputs {
        monthly_rent: args.rent,
        yearly_increase_percent: args.rent_increase,
    };
    let mut input = args.loan.resolve(Some(rent), args.caps.to_limits())?;

    // Flags can switch sections off regardless of where the input came from
    if args.no_tax_benefits {
        input.show_tax_benefits = false;
    }
    if args.no_rent_comparison {
        input.compare_renting = false;
    }

    let result = analyze_home_loan(&input)?;
    Ok(serde_json::to_value(result)?)
}
