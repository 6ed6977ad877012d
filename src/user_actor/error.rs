use thiserror::Error;

use super::tax_id::TaxIdError;
use crate::actor_framework::FrameworkError;

/// Rejections surfaced by user registration and update.
///
/// Every failed call reports exactly one of these.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserError {
    #[error("Invalid email")]
    InvalidEmail,
    #[error("Invalid password")]
    InvalidPassword,
    #[error("Invalid super password")]
    InvalidSuperPassword,
    #[error("Email already in use")]
    EmailInUse,
    #[error("Tax id already in use")]
    TaxIdInUse,
    #[error("Invalid tax id: {0}")]
    InvalidTaxId(TaxIdError),
    #[error("User not found: {0}")]
    NotFound(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError<UserError>> for UserError {
    fn from(err: FrameworkError<UserError>) -> Self {
        match err {
            FrameworkError::Entity(e) => e,
            other => UserError::ActorCommunicationError(other.to_string()),
        }
    }
}
