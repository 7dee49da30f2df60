//! Field rules for [`PersonneInput`](crate::PersonneInput) and the flattening
//! of `validator` results into a list of [`Violation`]s.

use std::{borrow::Cow, sync::LazyLock};

use chrono::{Local, NaiveDate};
use regex_lite::Regex;
use serde::Serialize;
use validator::{ValidationError, ValidationErrors};

/// Senegalese mobile numbers: optional `+221` or `00221` prefix, an operator
/// block `70`, `75`, `76`, `77` or `78`, then seven digits.
pub const TELEPHONE_PATTERN: &str = r"^(\+221|00221)?(7[05678])[0-9]{7}$";

static TELEPHONE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(TELEPHONE_PATTERN).expect("telephone pattern compiles"));

const BLANK: &str = "ne doit pas être vide";

/// One failed rule on one input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
  pub field:   String,
  pub message: String,
}

/// Flatten `errors` into violations, ordered by field name.
pub fn violations(errors: &ValidationErrors) -> Vec<Violation> {
  let mut out: Vec<Violation> = errors
    .field_errors()
    .into_iter()
    .flat_map(|(field, issues)| {
      issues.iter().map(move |issue| Violation {
        field:   field.to_string(),
        message: issue
          .message
          .as_ref()
          .map_or_else(|| issue.code.to_string(), |m| m.to_string()),
      })
    })
    .collect();
  out.sort_by(|a, b| a.field.cmp(&b.field));
  out
}

fn rejected(code: &'static str, message: &'static str) -> ValidationError {
  ValidationError::new(code).with_message(Cow::Borrowed(message))
}

pub fn not_blank(value: &str) -> Result<(), ValidationError> {
  if value.trim().is_empty() {
    return Err(rejected("blank", BLANK));
  }
  Ok(())
}

pub fn telephone(value: &str) -> Result<(), ValidationError> {
  not_blank(value)?;
  if !TELEPHONE.is_match(value) {
    return Err(rejected("telephone", "Numéro de téléphone invalide"));
  }
  Ok(())
}

/// The birth date must lie strictly before the server's local calendar day.
pub fn in_the_past(date: &NaiveDate) -> Result<(), ValidationError> {
  before(*date, Local::now().date_naive())
}

fn before(date: NaiveDate, today: NaiveDate) -> Result<(), ValidationError> {
  if date < today {
    Ok(())
  } else {
    Err(rejected("past", "La date de naissance doit être dans le passé"))
  }
}

#[cfg(test)]
mod tests {
  use validator::Validate as _;

  use super::*;
  use crate::{Error, NewPersonne, PersonneInput};

  fn diop() -> NewPersonne {
    NewPersonne {
      nom:            "Diop".into(),
      prenom:         "Awa".into(),
      date_naissance: NaiveDate::from_ymd_opt(1990, 5, 12).unwrap(),
      adresse:        "Dakar".into(),
      telephone:      "771112233".into(),
    }
  }

  fn fields(input: &PersonneInput) -> Vec<String> {
    match input.validate() {
      Ok(()) => vec![],
      Err(e) => violations(&e).into_iter().map(|v| v.field).collect(),
    }
  }

  // ─── Telephone ─────────────────────────────────────────────────────────────

  #[test]
  fn accepts_regional_mobile_numbers() {
    for number in ["771234567", "+221701234567", "00221781234567", "761234567", "751234567"] {
      assert!(telephone(number).is_ok(), "{number}");
    }
  }

  #[test]
  fn rejects_other_numbers() {
    for number in ["123456789", "+221991234567", "731234567", "77123456", "7712345678", "+33771234567"] {
      let err = telephone(number).unwrap_err();
      assert_eq!(err.code, "telephone", "{number}");
    }
  }

  #[test]
  fn blank_telephone_reports_blank() {
    assert_eq!(telephone("   ").unwrap_err().code, "blank");
  }

  // ─── Dates ─────────────────────────────────────────────────────────────────

  #[test]
  fn birth_date_must_be_strictly_past() {
    let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    assert!(before(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(), today).is_ok());
    assert!(before(today, today).is_err());
    assert!(before(NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(), today).is_err());
  }

  #[test]
  fn far_future_birth_date_is_rejected_against_the_clock() {
    assert!(in_the_past(&NaiveDate::from_ymd_opt(3000, 1, 1).unwrap()).is_err());
    assert!(in_the_past(&NaiveDate::from_ymd_opt(1900, 1, 1).unwrap()).is_ok());
  }

  // ─── Whole input ───────────────────────────────────────────────────────────

  #[test]
  fn valid_input_becomes_new_personne() {
    let input = PersonneInput::from(diop());
    assert!(fields(&input).is_empty());
    assert_eq!(input.into_new_personne().unwrap(), diop());
  }

  #[test]
  fn empty_input_reports_every_field() {
    let input = PersonneInput::default();
    let mut reported = fields(&input);
    reported.dedup();
    assert_eq!(reported.len(), 5, "{reported:?}");
    assert!(matches!(input.into_new_personne(), Err(Error::Validation(_))));
  }

  #[test]
  fn missing_nom_is_reported() {
    let input = PersonneInput { nom: None, ..PersonneInput::from(diop()) };
    assert_eq!(fields(&input), vec!["nom".to_string()]);
  }

  #[test]
  fn blank_prenom_and_adresse_are_reported() {
    let input = PersonneInput {
      prenom: Some(" ".into()),
      adresse: Some(String::new()),
      ..PersonneInput::from(diop())
    };
    assert_eq!(fields(&input), vec!["adresse".to_string(), "prenom".to_string()]);
  }

  #[test]
  fn violation_messages_are_human_readable() {
    let input = PersonneInput {
      telephone: Some("123456789".into()),
      ..PersonneInput::from(diop())
    };
    let errors = input.validate().unwrap_err();
    assert_eq!(violations(&errors), vec![Violation {
      field:   "telephone".into(),
      message: "Numéro de téléphone invalide".into(),
    }]);
  }
}
