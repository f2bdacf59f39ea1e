use thiserror::Error;

use crate::modules::access::core::policy::PolicyError;

#[derive(Debug, Error)]
pub enum InvoicingError {
    #[error("not allowed: {0}")]
    Forbidden(#[from] PolicyError),

    #[error("invalid: {0}")]
    Invalid(&'static str),

    #[error("invoice item not found")]
    NotFound,

    #[error(transparent)]
    Repository(#[from] anyhow::Error),
}
