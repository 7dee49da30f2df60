//! `Mutation` root.
//!
//! Inputs are validated here, before the service is called; an invalid input
//! never reaches the store.

use std::marker::PhantomData;

use async_graphql::{Context, ID, Object, Result};
use personnes_core::{NewPersonne, PersonneInput, PersonneStore};

use crate::{
  error::gql,
  parse_id, service,
  types::{PersonneInputObject, PersonneObject},
};

pub struct MutationRoot<S>(PhantomData<S>);

impl<S> Default for MutationRoot<S> {
  fn default() -> Self { Self(PhantomData) }
}

/// A missing `personne` argument validates like an empty input.
fn validated(input: Option<PersonneInputObject>) -> Result<NewPersonne> {
  PersonneInput::from(input.unwrap_or_default())
    .into_new_personne()
    .map_err(gql)
}

#[Object(name = "Mutation")]
impl<S: PersonneStore + 'static> MutationRoot<S> {
  /// Create a person; the response carries the generated id.
  async fn ajouter_personne(
    &self,
    ctx: &Context<'_>,
    personne: Option<PersonneInputObject>,
  ) -> Result<Option<PersonneObject>> {
    let values = validated(personne)?;
    let saved = service::<S>(ctx)?.save(values).await.map_err(gql)?;
    Ok(Some(saved.into()))
  }

  /// Overwrite every field of the person `id`. Null when `id` does not exist.
  async fn modifier_personne(
    &self,
    ctx: &Context<'_>,
    id: Option<ID>,
    personne: Option<PersonneInputObject>,
  ) -> Result<Option<PersonneObject>> {
    let id = parse_id(id).map_err(gql)?;
    let values = validated(personne)?;
    let updated = service::<S>(ctx)?
      .update(id, values)
      .await
      .map_err(gql)?;
    Ok(updated.map(PersonneObject::from))
  }

  /// Delete the person `id`. Always `true`, whether or not it existed.
  async fn supprimer_personne(
    &self,
    ctx: &Context<'_>,
    id: Option<ID>,
  ) -> Result<Option<bool>> {
    let id = parse_id(id).map_err(gql)?;
    service::<S>(ctx)?.delete(id).await.map_err(gql)?;
    Ok(Some(true))
  }
}
