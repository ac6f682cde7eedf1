//! GetMonthlyFeeHandler - Query handler for one student's fee in a month.

use std::sync::Arc;

use crate::domain::fee::{FeeAggregator, MonthlyFeeReport};
use crate::domain::foundation::{DomainError, FeeWindow, Month, Year};
use crate::domain::student::{Name, StudentError};
use crate::ports::StudentRepository;

/// Query for the fee a student owes in one calendar month.
#[derive(Debug, Clone)]
pub struct GetMonthlyFeeQuery {
    pub name: String,
    /// 1 to 12.
    pub month: u32,
    pub year: i32,
}

/// Handler for monthly fee queries.
pub struct GetMonthlyFeeHandler {
    repository: Arc<dyn StudentRepository>,
}

impl GetMonthlyFeeHandler {
    pub fn new(repository: Arc<dyn StudentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetMonthlyFeeQuery) -> Result<MonthlyFeeReport, DomainError> {
        let name = Name::new(query.name)?;
        let month = Month::new(query.month)?;
        let year = Year::new(query.year)?;

        let student = self
            .repository
            .find_by_name(&name)
            .await?
            .ok_or_else(|| StudentError::not_found(name.clone()))?;

        let window = FeeWindow::for_month(month, year);
        let fee = FeeAggregator::fee_for_student(&student, &window);

        tracing::debug!(student = %name, window = %window, fee = %fee, "Monthly fee computed");

        Ok(MonthlyFeeReport {
            name,
            month,
            year,
            fee,
        })
    }
}
