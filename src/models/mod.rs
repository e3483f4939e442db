use pushkind_common::repository::errors::RepositoryError;
use thiserror::Error;

pub mod cart;
pub mod config;
pub mod product;
pub mod user;

/// Errors raised while converting between database rows and domain types.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A stored JSON column could not be decoded.
    #[error("invalid json in `{column}`: {source}")]
    Json {
        column: &'static str,
        source: serde_json::Error,
    },
    /// A stored amount is not a decimal number.
    #[error("invalid amount in `{column}`: {source}")]
    Amount {
        column: &'static str,
        source: rust_decimal::Error,
    },
    /// A value could not be encoded for storage.
    #[error("cannot encode `{column}`: {source}")]
    Encode {
        column: &'static str,
        source: serde_json::Error,
    },
}

impl From<ModelError> for RepositoryError {
    fn from(value: ModelError) -> Self {
        let diesel_error = match value {
            ModelError::Encode { .. } => diesel::result::Error::SerializationError(Box::new(value)),
            _ => diesel::result::Error::DeserializationError(Box::new(value)),
        };
        RepositoryError::from(diesel_error)
    }
}

pub(crate) fn decode_json<T: serde::de::DeserializeOwned>(
    column: &'static str,
    raw: &str,
) -> Result<T, ModelError> {
    serde_json::from_str(raw).map_err(|source| ModelError::Json { column, source })
}

pub(crate) fn encode_json<T: serde::Serialize + ?Sized>(
    column: &'static str,
    value: &T,
) -> Result<String, ModelError> {
    serde_json::to_string(value).map_err(|source| ModelError::Encode { column, source })
}

pub(crate) fn decode_amount(
    column: &'static str,
    raw: &str,
) -> Result<rust_decimal::Decimal, ModelError> {
    crate::domain::money::parse_money(raw).map_err(|source| ModelError::Amount { column, source })
}
