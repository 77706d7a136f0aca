pub mod amortization;
pub mod analysis;
pub mod rent;
pub mod tax;
