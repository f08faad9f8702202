use thiserror::Error;

use crate::core::UsageContext;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("either initial debt or own capital must be given")]
    MissingFinancing,
    #[error("initial debt and own capital are mutually exclusive, give only one")]
    ConflictingFinancing,
    #[error("land value is required when it is not approximated from the purchase price")]
    MissingLandValue,
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
    #[error("positions disagree on usage (expected {expected}): {}", .offending.join(", "))]
    MixedUsage {
        expected: UsageContext,
        offending: Vec<String>,
    },
    #[error("position list has no interest rate position")]
    MissingInterestPosition,
}

impl Error {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
