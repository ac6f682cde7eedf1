//! Fee query handlers.

mod get_fee_overview;
mod get_monthly_fee;

pub use get_fee_overview::{GetFeeOverviewHandler, GetFeeOverviewQuery};
pub use get_monthly_fee::{GetMonthlyFeeHandler, GetMonthlyFeeQuery};
