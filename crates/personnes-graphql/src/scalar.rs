//! The `Date` scalar.

use async_graphql::{InputValueError, InputValueResult, Scalar, ScalarType, Value};
use chrono::NaiveDate;
use personnes_core::date::{self, DateError};

/// Calendar date without time or zone.
///
/// Serialized as `YYYY-MM-DD`. Accepted on input as `YYYY-MM-DD` or
/// `DD/MM/YYYY`, from variables and inline string literals alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Date(pub NaiveDate);

/// Calendar date: `YYYY-MM-DD` on output, `YYYY-MM-DD` or `DD/MM/YYYY` on input.
#[Scalar(name = "Date")]
impl ScalarType for Date {
  fn parse(value: Value) -> InputValueResult<Self> {
    match &value {
      Value::String(s) => date::parse(s).map(Date).map_err(InputValueError::custom),
      other => Err(InputValueError::custom(DateError::Literal(other.to_string()))),
    }
  }

  fn to_value(&self) -> Value { Value::String(date::format(self.0)) }
}
