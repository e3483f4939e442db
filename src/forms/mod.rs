use std::borrow::Cow;

use thiserror::Error;
use validator::{ValidationError, ValidationErrors};

use crate::domain::money::{is_valid_money, is_within_money_range};

pub mod cart;
pub mod products;
pub mod users;

/// Message attached to every invalid amount.
pub const INVALID_AMOUNT_MESSAGE: &str = "Must be a valid number with up to 2 decimal places";

/// Message attached to amounts above `MAX_MONEY`.
pub const AMOUNT_TOO_LARGE_MESSAGE: &str = "Amount must not exceed 1000000000.00";

/// Result type returned by the form helpers.
pub type FormResult<T> = Result<T, FormError>;

/// Errors that can occur while turning a submitted form into a domain payload.
#[derive(Debug, Error)]
pub enum FormError {
    /// Field-level failures from the `validator` crate, joined into one message.
    #[error("{}", flatten_validation_errors(.0))]
    Validation(#[from] ValidationErrors),
    /// An amount passed validation but could not be parsed.
    #[error("{}", INVALID_AMOUNT_MESSAGE)]
    InvalidAmount,
    /// The password could not be hashed.
    #[error("Failed to hash password: {0}")]
    PasswordHash(String),
}

/// Join every field message into a single sentence list, ordered by field name.
pub fn flatten_validation_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| match &error.message {
                Some(message) => message.to_string(),
                None => format!("{field} is invalid"),
            })
        })
        .collect::<Vec<_>>()
        .join(". ")
}

/// Validator for two-decimal amount strings.
pub fn validate_money(value: &str) -> Result<(), ValidationError> {
    if !is_valid_money(value) {
        return Err(
            ValidationError::new("money").with_message(Cow::Borrowed(INVALID_AMOUNT_MESSAGE))
        );
    }
    if !is_within_money_range(value) {
        return Err(
            ValidationError::new("money_range")
                .with_message(Cow::Borrowed(AMOUNT_TOO_LARGE_MESSAGE)),
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, message = "Name is required"))]
        name: String,
        #[validate(custom(function = "validate_money"))]
        price: String,
    }

    #[test]
    fn flattens_messages_in_field_order() {
        let sample = Sample {
            name: String::new(),
            price: "1.234".to_string(),
        };

        let errors = sample.validate().expect_err("expected validation to fail");

        assert_eq!(
            flatten_validation_errors(&errors),
            format!("Name is required. {INVALID_AMOUNT_MESSAGE}")
        );
    }

    #[test]
    fn accepts_valid_amounts() {
        let sample = Sample {
            name: "Shirt".to_string(),
            price: "59.90".to_string(),
        };

        assert!(sample.validate().is_ok());
    }

    #[test]
    fn rejects_amounts_above_the_cap() {
        let sample = Sample {
            name: "Shirt".to_string(),
            price: "79228162514264337593543950335".to_string(),
        };

        let errors = sample.validate().expect_err("expected validation to fail");

        assert_eq!(flatten_validation_errors(&errors), AMOUNT_TOO_LARGE_MESSAGE);
    }
}
