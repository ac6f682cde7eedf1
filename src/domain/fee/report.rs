//! User-facing monthly fee report.

use std::fmt;

use crate::domain::foundation::{Fee, Month, Year};
use crate::domain::student::Name;

/// Fee a student owes for one month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyFeeReport {
    pub name: Name,
    pub month: Month,
    pub year: Year,
    pub fee: Fee,
}

impl fmt::Display for MonthlyFeeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Monthly fee for {} on {}, {} is ${}",
            self.name, self.month, self.year, self.fee
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_two_decimal_amount() {
        let report = MonthlyFeeReport {
            name: Name::new("Alice Pauline").unwrap(),
            month: Month::new(2).unwrap(),
            year: Year::new(2021).unwrap(),
            fee: Fee::from_cents(4000),
        };
        assert_eq!(
            report.to_string(),
            "Monthly fee for Alice Pauline on February, 2021 is $40.00"
        );
    }
}
