//! GraphQL object and input types.
//!
//! Mirrors of the `personnes-core` shapes; the core crate stays free of any
//! GraphQL dependency.

use async_graphql::{ID, InputObject, SimpleObject};
use personnes_core::{Personne, PersonneInput, PersonneSummary};

use crate::scalar::Date;

/// A persisted person record.
///
/// Fields are nullable in the schema even though a stored record always has
/// all of them.
#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "Personne")]
pub struct PersonneObject {
  pub id:             Option<ID>,
  pub nom:            Option<String>,
  pub prenom:         Option<String>,
  pub date_naissance: Option<Date>,
  pub adresse:        Option<String>,
  pub telephone:      Option<String>,
}

impl From<Personne> for PersonneObject {
  fn from(p: Personne) -> Self {
    Self {
      id:             Some(ID::from(p.id.to_string())),
      nom:            Some(p.nom),
      prenom:         Some(p.prenom),
      date_naissance: Some(Date(p.date_naissance)),
      adresse:        Some(p.adresse),
      telephone:      Some(p.telephone),
    }
  }
}

/// List-view projection of a person: no id, no birth date.
#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "PersonneSummary")]
pub struct PersonneSummaryObject {
  pub nom:       Option<String>,
  pub prenom:    Option<String>,
  pub telephone: Option<String>,
  pub adresse:   Option<String>,
}

impl From<PersonneSummary> for PersonneSummaryObject {
  fn from(s: PersonneSummary) -> Self {
    Self {
      nom:       Some(s.nom),
      prenom:    Some(s.prenom),
      telephone: Some(s.telephone),
      adresse:   Some(s.adresse),
    }
  }
}

/// Fields for `ajouterPersonne` and `modifierPersonne`. All five are
/// required; they are nullable here so that omissions come back as
/// validation violations.
#[derive(Debug, Clone, Default, InputObject)]
#[graphql(name = "PersonneInput")]
pub struct PersonneInputObject {
  pub nom:            Option<String>,
  pub prenom:         Option<String>,
  pub date_naissance: Option<Date>,
  pub adresse:        Option<String>,
  pub telephone:      Option<String>,
}

impl From<PersonneInputObject> for PersonneInput {
  fn from(i: PersonneInputObject) -> Self {
    Self {
      nom:            i.nom,
      prenom:         i.prenom,
      date_naissance: i.date_naissance.map(|d| d.0),
      adresse:        i.adresse,
      telephone:      i.telephone,
    }
  }
}
