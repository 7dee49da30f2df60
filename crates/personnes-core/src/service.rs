//! [`PersonneService`]: business rules over a [`PersonneStore`].
//!
//! The service holds no state of its own besides a handle on the store, so any
//! number of clones may serve requests concurrently.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::{
  Error, Result,
  personne::{NewPersonne, Personne, PersonneId},
  store::PersonneStore,
};

pub struct PersonneService<S> {
  store: Arc<S>,
}

impl<S> Clone for PersonneService<S> {
  fn clone(&self) -> Self { Self { store: Arc::clone(&self.store) } }
}

impl<S: PersonneStore> PersonneService<S> {
  pub fn new(store: Arc<S>) -> Self { Self { store } }

  /// Every record, in store order.
  #[instrument(skip(self))]
  pub async fn get_all(&self) -> Result<Vec<Personne>> {
    self.store.find_all().await.map_err(Error::store)
  }

  #[instrument(skip(self))]
  pub async fn get_by_id(&self, id: PersonneId) -> Result<Option<Personne>> {
    self.store.find_by_id(id).await.map_err(Error::store)
  }

  /// Persist a new record and return it with its generated id.
  #[instrument(skip(self))]
  pub async fn save(&self, personne: NewPersonne) -> Result<Personne> {
    let saved = self.store.insert(personne).await.map_err(Error::store)?;
    debug!(id = saved.id, "personne created");
    Ok(saved)
  }

  /// Overwrite all business fields of the record `id` with `values`.
  ///
  /// Returns `None` without writing anything when `id` does not exist. The
  /// read and the write are separate statements: two concurrent updates of the
  /// same id resolve as last-write-wins.
  #[instrument(skip(self))]
  pub async fn update(&self, id: PersonneId, values: NewPersonne) -> Result<Option<Personne>> {
    let Some(mut existing) = self.store.find_by_id(id).await.map_err(Error::store)? else {
      debug!("personne not found, nothing updated");
      return Ok(None);
    };
    existing.overwrite(values);
    self.store.update(existing).await.map_err(Error::store)
  }

  /// Remove the record `id` if it exists. Succeeds either way.
  #[instrument(skip(self))]
  pub async fn delete(&self, id: PersonneId) -> Result<()> {
    self.store.delete_by_id(id).await.map_err(Error::store)
  }

  /// Records whose `nom` contains `fragment`, ignoring case.
  #[instrument(skip(self))]
  pub async fn search_by_name(&self, fragment: &str) -> Result<Vec<Personne>> {
    self
      .store
      .find_by_nom_containing(fragment)
      .await
      .map_err(Error::store)
  }
}
