//! Resolver error type and its mapping onto GraphQL error extensions.
//!
//! | Variant | `extensions.code` |
//! |---------|-------------------|
//! | `MissingId`, `InvalidId` | `BAD_USER_INPUT` |
//! | `Validation` | `VALIDATION_ERROR`, plus `extensions.violations` |
//! | `Internal` | `INTERNAL_ERROR`; the cause is logged, not returned |

use async_graphql::{ErrorExtensions, Value};
use personnes_core::validation::{Violation, violations};
use thiserror::Error;

/// An error returned by a resolver.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("argument `id` is required")]
  MissingId,

  #[error("invalid id: {0:?}")]
  InvalidId(String),

  #[error("validation failed")]
  Validation(Vec<Violation>),

  #[error("internal error")]
  Internal(#[source] personnes_core::Error),
}

impl ApiError {
  pub fn code(&self) -> &'static str {
    match self {
      ApiError::MissingId | ApiError::InvalidId(_) => "BAD_USER_INPUT",
      ApiError::Validation(_) => "VALIDATION_ERROR",
      ApiError::Internal(_) => "INTERNAL_ERROR",
    }
  }
}

impl From<personnes_core::Error> for ApiError {
  fn from(e: personnes_core::Error) -> Self {
    match e {
      personnes_core::Error::Validation(errors) => ApiError::Validation(violations(&errors)),
      other => ApiError::Internal(other),
    }
  }
}

impl ErrorExtensions for ApiError {
  fn extend(&self) -> async_graphql::Error {
    if let ApiError::Internal(source) = self {
      tracing::error!(error = %source, "resolver failed");
    }

    async_graphql::Error::new(self.to_string()).extend_with(|_, e| {
      e.set("code", self.code());
      if let ApiError::Validation(list) = self {
        e.set("violations", async_graphql::to_value(list).unwrap_or(Value::Null));
      }
    })
  }
}

/// Convert anything that maps onto [`ApiError`] into a GraphQL error.
pub(crate) fn gql<E: Into<ApiError>>(e: E) -> async_graphql::Error {
  let e: ApiError = e.into();
  e.extend()
}
