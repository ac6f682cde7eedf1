//! GetFeeOverviewHandler - Query handler for the recent monthly totals.
//!
//! Sums every student's fees for the month containing the reference instant
//! and the months before it. The caller supplies the instant.

use chrono::NaiveDateTime;
use std::sync::Arc;

use crate::config::FeeConfig;
use crate::domain::fee::{FeeAggregator, MonthlyFee};
use crate::domain::foundation::DomainError;
use crate::ports::StudentRepository;

/// Query for the monthly overview.
#[derive(Debug, Clone)]
pub struct GetFeeOverviewQuery {
    /// Any instant inside the newest month to report.
    pub reference: NaiveDateTime,
}

/// Handler for fee overview queries.
pub struct GetFeeOverviewHandler {
    repository: Arc<dyn StudentRepository>,
    months: usize,
}

impl GetFeeOverviewHandler {
    pub fn new(repository: Arc<dyn StudentRepository>, config: &FeeConfig) -> Self {
        Self {
            repository,
            months: config.overview_months as usize,
        }
    }

    /// Totals newest first.
    pub async fn handle(&self, query: GetFeeOverviewQuery) -> Result<Vec<MonthlyFee>, DomainError> {
        let students = self.repository.list().await?;
        let overview = FeeAggregator::monthly_overview(&students, query.reference, self.months);

        tracing::debug!(
            students = students.len(),
            months = overview.len(),
            "Fee overview computed"
        );

        Ok(overview)
    }
}
