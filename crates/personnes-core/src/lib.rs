//! Core types and trait definitions for the Personnes service.
//!
//! This crate is free of HTTP, GraphQL and database dependencies. The store
//! adapter and the resolver layer both depend on it.

// Native `async fn` in traits; the `Send` bounds are spelled out on the
// returned futures instead.
#![allow(async_fn_in_trait)]

pub mod date;
pub mod error;
pub mod personne;
pub mod service;
pub mod store;
pub mod validation;

pub use error::{Error, Result};
pub use personne::{NewPersonne, Personne, PersonneId, PersonneInput, PersonneSummary};
pub use service::PersonneService;
pub use store::PersonneStore;
