//! Encoding and decoding helpers between domain types and the plain-text
//! columns stored in SQLite.
//!
//! Dates are stored in the canonical `YYYY-MM-DD` form produced by
//! [`personnes_core::date::format`]; reading anything else back is a
//! serialization error, not a parse error.

use chrono::NaiveDate;
use personnes_core::{Personne, date};

use crate::Result;

// ─── Dates ────────────────────────────────────────────────────────────────────

pub fn encode_date(d: NaiveDate) -> String { date::format(d) }

pub fn decode_date(s: &str) -> Result<NaiveDate> { Ok(date::decode_canonical(s)?) }

// ─── LIKE patterns ────────────────────────────────────────────────────────────

/// Escape character used with `LIKE ... ESCAPE '\'`.
const LIKE_ESCAPE: char = '\\';

/// Build a `LIKE` pattern matching any value that contains `fragment`.
///
/// `%`, `_` and the escape character itself are escaped so the fragment is
/// matched literally.
pub fn contains_pattern(fragment: &str) -> String {
  let mut pattern = String::with_capacity(fragment.len() + 2);
  pattern.push('%');
  for c in fragment.chars() {
    if matches!(c, '%' | '_' | LIKE_ESCAPE) {
      pattern.push(LIKE_ESCAPE);
    }
    pattern.push(c);
  }
  pattern.push('%');
  pattern
}

// ─── Raw row ──────────────────────────────────────────────────────────────────

/// A `personnes` row as read from SQLite, before date decoding.
pub struct RawPersonne {
  pub id:             i64,
  pub nom:            String,
  pub prenom:         String,
  pub date_naissance: String,
  pub adresse:        String,
  pub telephone:      String,
}

impl RawPersonne {
  /// Column order expected by [`RawPersonne::from_row`].
  pub const COLUMNS: &'static str = "id, nom, prenom, date_naissance, adresse, telephone";

  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:             row.get(0)?,
      nom:            row.get(1)?,
      prenom:         row.get(2)?,
      date_naissance: row.get(3)?,
      adresse:        row.get(4)?,
      telephone:      row.get(5)?,
    })
  }

  pub fn into_personne(self) -> Result<Personne> {
    Ok(Personne {
      id:             self.id,
      nom:            self.nom,
      prenom:         self.prenom,
      date_naissance: decode_date(&self.date_naissance)?,
      adresse:        self.adresse,
      telephone:      self.telephone,
    })
  }
}
