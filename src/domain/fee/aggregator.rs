//! Fee aggregation over half-open windows.
//!
//! Pure functions over the current session lists. Each window is evaluated
//! independently; totals are never carried from one month into the next.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{Fee, FeeWindow, Month, Year};
use crate::domain::session::SessionEntry;
use crate::domain::student::Student;

/// Total fee of one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyFee {
    pub fee: Fee,
    pub month: Month,
    pub year: Year,
}

impl fmt::Display for MonthlyFee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: ${}", self.month, self.year, self.fee)
    }
}

/// Sums session fees over a window.
pub struct FeeAggregator;

impl FeeAggregator {
    /// Fee of one entry inside `window`.
    ///
    /// A recurring entry contributes its fee once per occurrence in the window.
    pub fn fee_for_entry(entry: &SessionEntry, window: &FeeWindow) -> Fee {
        entry.fee_within(window)
    }

    /// Fee owed by one student inside `window`.
    pub fn fee_for_student(student: &Student, window: &FeeWindow) -> Fee {
        student
            .sessions()
            .entries()
            .map(|entry| Self::fee_for_entry(entry, window))
            .sum()
    }

    /// Fee owed by every student in `students` inside `window`.
    pub fn fee_for_students<'a, I>(students: I, window: &FeeWindow) -> Fee
    where
        I: IntoIterator<Item = &'a Student>,
    {
        students
            .into_iter()
            .map(|student| Self::fee_for_student(student, window))
            .sum()
    }

    /// Totals for the month containing `reference` and the `months - 1`
    /// months before it, newest first.
    ///
    /// # Edge Cases
    /// - `months == 0`: empty
    /// - Months before year 1 are dropped
    pub fn monthly_overview(
        students: &[Student],
        reference: NaiveDateTime,
        months: usize,
    ) -> Vec<MonthlyFee> {
        std::iter::successors(Some(FeeWindow::containing(reference)), |window| {
            Some(window.previous_month())
        })
        .take(months)
        .map_while(|window| {
            let (month, year) = window.month_and_year()?;
            Some(MonthlyFee {
                fee: Self::fee_for_students(students, &window),
                month,
                year,
            })
        })
        .collect()
    }
}
