//! The `PersonneStore` trait.
//!
//! Implemented by storage backends (e.g. `personnes-store-sqlite`). The
//! service and the resolver layer depend on this abstraction, never on a
//! concrete backend.

use std::future::Future;

use crate::personne::{NewPersonne, Personne, PersonneId};

/// Abstraction over a relational store holding [`Personne`] records.
///
/// Every write is a single statement. Absence is reported as `None`, never as
/// an error.
///
/// All methods return `Send` futures so the trait can be used from axum
/// handlers and GraphQL resolvers on a multi-threaded runtime.
pub trait PersonneStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// All records, in primary-key order.
  fn find_all(&self) -> impl Future<Output = Result<Vec<Personne>, Self::Error>> + Send + '_;

  /// Retrieve a record by id. Returns `None` if not found.
  fn find_by_id(
    &self,
    id: PersonneId,
  ) -> impl Future<Output = Result<Option<Personne>, Self::Error>> + Send + '_;

  /// Persist a new record; the store assigns the id.
  fn insert(
    &self,
    personne: NewPersonne,
  ) -> impl Future<Output = Result<Personne, Self::Error>> + Send + '_;

  /// Overwrite the row whose id is `personne.id`.
  ///
  /// Returns `None` when no such row exists; nothing is created in that case.
  fn update(
    &self,
    personne: Personne,
  ) -> impl Future<Output = Result<Option<Personne>, Self::Error>> + Send + '_;

  /// Remove the row with `id`. Removing an absent id is not an error.
  fn delete_by_id(
    &self,
    id: PersonneId,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Records whose `nom` contains `fragment`, ignoring case. Wildcard
  /// characters in `fragment` match literally; an empty fragment matches
  /// every record.
  fn find_by_nom_containing<'a>(
    &'a self,
    fragment: &'a str,
  ) -> impl Future<Output = Result<Vec<Personne>, Self::Error>> + Send + 'a;
}
