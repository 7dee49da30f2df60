//! Text codec for calendar dates.
//!
//! Output is always ISO-8601 `YYYY-MM-DD`. Input is tried against
//! [`ACCEPTED_FORMATS`] in order, so machine-generated ISO strings and
//! day-first strings typed by people both parse without client-side
//! normalisation.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex_lite::Regex;
use thiserror::Error;

/// Canonical wire and storage format.
pub const ISO_FORMAT: &str = "%Y-%m-%d";

/// Input formats, in the order they are tried.
pub const ACCEPTED_FORMATS: [&str; 2] = [ISO_FORMAT, "%d/%m/%Y"];

/// Digit layout of each entry of [`ACCEPTED_FORMATS`], same order.
///
/// chrono's `%Y`, `%m` and `%d` take variable widths and a sign, so the exact
/// shape is checked before the calendar parse.
static SHAPES: LazyLock<[Regex; 2]> = LazyLock::new(|| {
  [r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$", r"^[0-9]{2}/[0-9]{2}/[0-9]{4}$"]
    .map(|p| Regex::new(p).expect("date shape compiles"))
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
  /// The input matched none of [`ACCEPTED_FORMATS`].
  #[error("invalid date format: {0}")]
  Parse(String),

  /// A literal of some other kind was given where a date string was expected.
  #[error("expected a string literal, found {0}")]
  Literal(String),

  /// A value on the output side is not a canonical calendar date.
  #[error("expected a calendar date, found {0:?}")]
  Serialization(String),
}

/// Parse a date from its textual wire form; the first matching format wins.
pub fn parse(value: &str) -> Result<NaiveDate, DateError> {
  SHAPES
    .iter()
    .zip(ACCEPTED_FORMATS)
    .filter(|(shape, _)| shape.is_match(value))
    .find_map(|(_, fmt)| NaiveDate::parse_from_str(value, fmt).ok())
    .ok_or_else(|| DateError::Parse(value.to_owned()))
}

/// Render a date in the canonical `YYYY-MM-DD` form.
pub fn format(date: NaiveDate) -> String { date.format(ISO_FORMAT).to_string() }

/// Decode a value previously produced by [`format`].
///
/// Only the canonical form is accepted here; anything else means the value was
/// never a date this codec wrote.
pub fn decode_canonical(value: &str) -> Result<NaiveDate, DateError> {
  Some(value)
    .filter(|v| SHAPES[0].is_match(v))
    .and_then(|v| NaiveDate::parse_from_str(v, ISO_FORMAT).ok())
    .ok_or_else(|| DateError::Serialization(value.to_owned()))
}
