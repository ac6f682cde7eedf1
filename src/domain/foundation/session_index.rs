//! One-based session position as displayed to the user.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Position of a session in a student's list, counting from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct SessionIndex(usize);

impl SessionIndex {
    /// The first session in a list.
    pub const FIRST: Self = Self(1);

    /// Creates an index from a one-based position.
    pub fn from_one_based(position: usize) -> Result<Self, ValidationError> {
        if position == 0 {
            return Err(ValidationError::not_positive("session_index"));
        }
        Ok(Self(position))
    }

    /// Creates an index from a zero-based offset.
    pub fn from_zero_based(offset: usize) -> Self {
        Self(offset + 1)
    }

    /// Returns the one-based position.
    pub fn one_based(&self) -> usize {
        self.0
    }

    /// Returns the zero-based offset into the backing list.
    pub fn zero_based(&self) -> usize {
        self.0 - 1
    }
}

impl TryFrom<usize> for SessionIndex {
    type Error = ValidationError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::from_one_based(value)
    }
}

impl From<SessionIndex> for usize {
    fn from(index: SessionIndex) -> Self {
        index.0
    }
}

impl fmt::Display for SessionIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
