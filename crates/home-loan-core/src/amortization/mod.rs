//! Fixed-rate loan amortisation: parameter validation, level payment,
//! month-by-month simulation with prepayments, and reductions over the
//! simulated schedule.

pub mod loan;
pub mod payment;
pub mod prepayment;
pub mod schedule;
pub mod totals;
pub mod validation;
pub mod yearly;
