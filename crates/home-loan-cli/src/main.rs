mod commands;
mod input;
mod log;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::amortization::{LoanArgs, PaymentArgs};
use commands::analysis::AnalyzeArgs;
use commands::rent::RentArgs;
use commands::tax::TaxBenefitArgs;

/// Fixed-rate home loan calculator
#[derive(Parser)]
#[command(
    name = "hlc",
    version,
    about = "Fixed-rate home loan calculator",
    long_about = "A CLI for fixed-rate home loan calculations with decimal precision. \
                  Computes the monthly payment, amortisation schedule with prepayments, \
                  total interest, yearly tax deductions and a buy-vs-rent comparison."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Log engine diagnostics to stderr
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Full analysis: payment, schedule, totals, tax benefits, rent comparison
    Analyze(AnalyzeArgs),
    /// Level monthly payment for a loan amount, rate and term
    Payment(PaymentArgs),
    /// Month-by-month amortisation schedule
    Schedule(LoanArgs),
    /// Check loan parameters and report every violation
    Validate(LoanArgs),
    /// Yearly Section 24 / 80C deduction estimate
    TaxBenefits(TaxBenefitArgs),
    /// Compare total rent paid against total loan payments
    Rent(RentArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();
    log::init_logging(cli.verbose);

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Analyze(args) => commands::analysis::run_analyze(args),
        Commands::Payment(args) => commands::amortization::run_payment(args),
        Commands::Schedule(args) => commands::amortization::run_schedule(args),
        Commands::Validate(args) => commands::amortization::run_validate(args),
        Commands::TaxBenefits(args) => commands::tax::run_tax_benefits(args),
        Commands::Rent(args) => commands::rent::run_rent(args),
        Commands::Version => {
            println!("hlc {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
