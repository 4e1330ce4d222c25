//! Typed search errors.
//!
//! `SearchError` covers pre-flight configuration failures and fail-fast
//! invariant violations only. "No solution" and "budget exceeded" are not
//! errors — they are normal terminal outcomes, expressed through
//! [`crate::driver::Outcome`].

/// Failure that aborts a search instead of terminating it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The policy cannot admit any search at all (zero budget).
    InvalidPolicy { detail: String },
    /// A successor was generated with a negative step cost. Negative steps
    /// can cycle a best-first search forever, so the driver fails fast with
    /// the offending value rather than looping.
    NegativeStepCost { cost: i64 },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPolicy { detail } => {
                write!(f, "invalid search policy: {detail}")
            }
            Self::NegativeStepCost { cost } => {
                write!(f, "successor generated with negative step cost {cost}")
            }
        }
    }
}

impl std::error::Error for SearchError {}
