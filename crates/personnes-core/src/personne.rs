//! The `Personne` entity and the shapes derived from it.
//!
//! A record that has not been persisted yet is a [`NewPersonne`]; only the
//! store hands out [`Personne`] values, so an id is present exactly when the
//! record exists in the store.

use chrono::NaiveDate;
use validator::{Validate, ValidationErrors};

use crate::{Error, Result};

/// Store-generated primary key.
pub type PersonneId = i64;

/// The five business fields of a person, without an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPersonne {
  pub nom:            String,
  pub prenom:         String,
  pub date_naissance: NaiveDate,
  pub adresse:        String,
  pub telephone:      String,
}

impl NewPersonne {
  /// Attach a store-assigned id.
  pub fn with_id(self, id: PersonneId) -> Personne {
    Personne {
      id,
      nom:            self.nom,
      prenom:         self.prenom,
      date_naissance: self.date_naissance,
      adresse:        self.adresse,
      telephone:      self.telephone,
    }
  }
}

/// A persisted person record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Personne {
  pub id:             PersonneId,
  pub nom:            String,
  pub prenom:         String,
  pub date_naissance: NaiveDate,
  pub adresse:        String,
  pub telephone:      String,
}

impl Personne {
  /// Replace every business field with `values`. The id is left untouched.
  pub fn overwrite(&mut self, values: NewPersonne) {
    self.nom = values.nom;
    self.prenom = values.prenom;
    self.date_naissance = values.date_naissance;
    self.adresse = values.adresse;
    self.telephone = values.telephone;
  }
}

/// List-view projection: no id, no birth date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonneSummary {
  pub nom:       String,
  pub prenom:    String,
  pub telephone: String,
  pub adresse:   String,
}

impl From<&Personne> for PersonneSummary {
  fn from(p: &Personne) -> Self {
    Self {
      nom:       p.nom.clone(),
      prenom:    p.prenom.clone(),
      telephone: p.telephone.clone(),
      adresse:   p.adresse.clone(),
    }
  }
}

/// Boundary input for creation and update.
///
/// Every field is optional so that a missing field is reported as
/// a violation alongside the others instead of failing decoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct PersonneInput {
  #[validate(
    required(message = "est obligatoire"),
    custom(function = "crate::validation::not_blank")
  )]
  pub nom:            Option<String>,
  #[validate(
    required(message = "est obligatoire"),
    custom(function = "crate::validation::not_blank")
  )]
  pub prenom:         Option<String>,
  #[validate(
    required(message = "est obligatoire"),
    custom(function = "crate::validation::in_the_past")
  )]
  pub date_naissance: Option<NaiveDate>,
  #[validate(
    required(message = "est obligatoire"),
    custom(function = "crate::validation::not_blank")
  )]
  pub adresse:        Option<String>,
  #[validate(
    required(message = "est obligatoire"),
    custom(function = "crate::validation::telephone")
  )]
  pub telephone:      Option<String>,
}

impl PersonneInput {
  /// Validate every field and, when all rules pass, produce the record to
  /// hand to the service.
  pub fn into_new_personne(self) -> Result<NewPersonne> {
    self.validate()?;

    match (
      self.nom,
      self.prenom,
      self.date_naissance,
      self.adresse,
      self.telephone,
    ) {
      (Some(nom), Some(prenom), Some(date_naissance), Some(adresse), Some(telephone)) => {
        Ok(NewPersonne { nom, prenom, date_naissance, adresse, telephone })
      }
      // `required` already rejected any `None`.
      _ => Err(Error::Validation(ValidationErrors::new())),
    }
  }
}

impl From<NewPersonne> for PersonneInput {
  fn from(p: NewPersonne) -> Self {
    Self {
      nom:            Some(p.nom),
      prenom:         Some(p.prenom),
      date_naissance: Some(p.date_naissance),
      adresse:        Some(p.adresse),
      telephone:      Some(p.telephone),
    }
  }
}
