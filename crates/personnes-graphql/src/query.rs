//! `Query` root.

use std::marker::PhantomData;

use async_graphql::{Context, ID, Object, Result};
use personnes_core::{PersonneStore, PersonneSummary};

use crate::{
  error::gql,
  parse_id, service,
  types::{PersonneObject, PersonneSummaryObject},
};

pub struct QueryRoot<S>(PhantomData<S>);

impl<S> Default for QueryRoot<S> {
  fn default() -> Self { Self(PhantomData) }
}

// Output types stay nullable, as in the published schema.
#[Object(name = "Query")]
impl<S: PersonneStore + 'static> QueryRoot<S> {
  /// Every person, as summaries (no id, no birth date).
  async fn lister_toutes_personnes(
    &self,
    ctx: &Context<'_>,
  ) -> Result<Option<Vec<Option<PersonneSummaryObject>>>> {
    let personnes = service::<S>(ctx)?.get_all().await.map_err(gql)?;
    Ok(Some(
      personnes
        .iter()
        .map(|p| Some(PersonneSummaryObject::from(PersonneSummary::from(p))))
        .collect(),
    ))
  }

  /// The person with this id, or null.
  async fn rechercher_personne_par_id(
    &self,
    ctx: &Context<'_>,
    id: Option<ID>,
  ) -> Result<Option<PersonneObject>> {
    let id = parse_id(id).map_err(gql)?;
    let found = service::<S>(ctx)?.get_by_id(id).await.map_err(gql)?;
    Ok(found.map(PersonneObject::from))
  }

  /// People whose surname contains `nom`, ignoring case. A null or empty
  /// `nom` matches everyone.
  async fn rechercher_personnes(
    &self,
    ctx: &Context<'_>,
    nom: Option<String>,
  ) -> Result<Option<Vec<Option<PersonneObject>>>> {
    let fragment = nom.unwrap_or_default();
    let found = service::<S>(ctx)?
      .search_by_name(&fragment)
      .await
      .map_err(gql)?;
    Ok(Some(found.into_iter().map(|p| Some(PersonneObject::from(p))).collect()))
  }
}
