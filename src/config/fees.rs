//! Fee reporting configuration

use serde::Deserialize;

use super::ValidationError;

/// Longest supported overview, in months.
pub const MAX_OVERVIEW_MONTHS: u32 = 12;

/// Fee reporting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FeeConfig {
    /// Months in the fee overview, the current month included
    #[serde(default = "default_overview_months")]
    pub overview_months: u32,
}

impl Default for FeeConfig {
    fn default() -> Self {
        Self {
            overview_months: default_overview_months(),
        }
    }
}

impl FeeConfig {
    /// Validate the fee configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.overview_months == 0 || self.overview_months > MAX_OVERVIEW_MONTHS {
            return Err(ValidationError::InvalidOverviewMonths {
                max: MAX_OVERVIEW_MONTHS,
                actual: self.overview_months,
            });
        }
        Ok(())
    }
}

fn default_overview_months() -> u32 {
    3
}
