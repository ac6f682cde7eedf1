//! Fee module - monthly totals derived from session lists.

mod aggregator;
mod report;

pub use aggregator::{FeeAggregator, MonthlyFee};
pub use report::MonthlyFeeReport;
