use thiserror::Error;

use crate::domain::payment::PaymentStatus;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid payment transition from {from:?} to {to:?}")]
    InvalidPaymentTransition { from: PaymentStatus, to: PaymentStatus },
    #[error("domain invariant violation: {0}")]
    InvariantViolation(String),
}

/// Failure at the backend boundary, as reported by a gateway implementation.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GatewayError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("backend rejected the request with status {status}: {message}")]
    Rejected { status: u16, message: String },
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    #[error("draft persistence failure: {0}")]
    Draft(String),
    #[error("configuration failure: {0}")]
    Configuration(String),
}

impl ApplicationError {
    /// Message safe to show on a form. Details stay in the logs; entered
    /// field values are never cleared on failure, so retry is always an
    /// option.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Domain(_) => "The request could not be processed. Check inputs and try again.",
            Self::Gateway(_) => {
                "The service is temporarily unavailable. Please retry shortly."
            }
            Self::Draft(_) | Self::Configuration(_) => "An unexpected internal error occurred.",
        }
    }
}
