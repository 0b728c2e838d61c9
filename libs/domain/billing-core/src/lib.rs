mod aggregate;
mod rate;

pub use aggregate::{aggregate_bill, filter_provider_transactions, BillTotals, BillableTransaction, ProductLine};
pub use rate::{resolve_rate, Rate, ALL_SCOPE};
