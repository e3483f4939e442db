//! Shared error taxonomy and result type of the storefront actions.

use pushkind_common::repository::errors::RepositoryError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::cart::PriceOverflow;
use crate::forms::FormError;

/// Failures an action can run into before it is converted into an
/// [`ActionResult`].
#[derive(Debug, Error)]
pub enum ActionError {
    #[error("Cart session not found")]
    MissingSession,
    #[error("Product not found")]
    ProductNotFound,
    #[error("Cart not found")]
    CartNotFound,
    #[error("Item not found in cart")]
    ItemNotFound,
    #[error("Not enough stock")]
    InsufficientStock,
    /// Submitted payload failed schema validation.
    #[error("{0}")]
    Form(#[from] FormError),
    /// A unique column already holds the submitted value.
    #[error("{} already exists", capitalize(.field))]
    AlreadyExists { field: &'static str },
    /// Cart amounts no longer fit the decimal range.
    #[error("{0}")]
    Pricing(#[from] PriceOverflow),
    #[error("{0}")]
    Repository(RepositoryError),
}

impl From<RepositoryError> for ActionError {
    fn from(value: RepositoryError) -> Self {
        ActionError::Repository(value)
    }
}

/// Uniform outcome returned to callers of an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResult {
    pub success: bool,
    pub message: String,
}

impl ActionResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }

    /// Convert the outcome of an action, logging failures under `action`.
    pub fn from_outcome(action: &str, outcome: Result<String, ActionError>) -> Self {
        match outcome {
            Ok(message) => Self::success(message),
            Err(err) => {
                log::error!("{action} failed: {err}");
                Self::failure(err.to_string())
            }
        }
    }
}

fn capitalize(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
