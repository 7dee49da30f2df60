//! GraphQL API for the Personnes service.
//!
//! Builds an `async-graphql` [`Schema`] over a [`PersonneService`] and exposes
//! it as an axum [`Router`]. Any [`PersonneStore`] backend can sit underneath.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let schema = personnes_graphql::schema(PersonneService::new(store));
//! let app = personnes_graphql::graphql_router(schema, true);
//! ```

pub mod error;
pub mod mutation;
pub mod query;
pub mod scalar;
pub mod types;

use async_graphql::{
  Context, EmptySubscription, ID, Schema, extensions::Tracing, http::GraphiQLSource,
};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
  Router,
  extract::State,
  response::{Html, IntoResponse},
  routing::post,
};
use personnes_core::{PersonneId, PersonneService, PersonneStore};

pub use error::ApiError;
pub use mutation::MutationRoot;
pub use query::QueryRoot;

/// Path the GraphQL endpoint is served on.
pub const GRAPHQL_PATH: &str = "/graphql";

pub type PersonneSchema<S> = Schema<QueryRoot<S>, MutationRoot<S>, EmptySubscription>;

/// Build the schema with `service` available to every resolver.
pub fn schema<S>(service: PersonneService<S>) -> PersonneSchema<S>
where
  S: PersonneStore + 'static,
{
  Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
    .extension(Tracing)
    .data(service)
    .finish()
}

/// Build a router serving `POST /graphql`, plus the GraphiQL IDE on
/// `GET /graphql` when `graphiql` is set.
///
/// The returned `Router<()>` can be nested or layered by the caller.
pub fn graphql_router<S>(schema: PersonneSchema<S>, graphiql: bool) -> Router<()>
where
  S: PersonneStore + 'static,
{
  let route = if graphiql {
    post(graphql_handler::<S>).get(graphiql_handler)
  } else {
    post(graphql_handler::<S>)
  };
  Router::new().route(GRAPHQL_PATH, route).with_state(schema)
}

async fn graphql_handler<S>(
  State(schema): State<PersonneSchema<S>>,
  req: GraphQLRequest,
) -> GraphQLResponse
where
  S: PersonneStore + 'static,
{
  schema.execute(req.into_inner()).await.into()
}

async fn graphiql_handler() -> impl IntoResponse {
  Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

// ─── Resolver helpers ─────────────────────────────────────────────────────────

fn service<'c, S>(ctx: &'c Context<'_>) -> async_graphql::Result<&'c PersonneService<S>>
where
  S: PersonneStore + 'static,
{
  ctx.data::<PersonneService<S>>()
}

/// `ID` arguments are nullable in the schema but required by every resolver.
fn parse_id(id: Option<ID>) -> Result<PersonneId, ApiError> {
  let raw = id.ok_or(ApiError::MissingId)?.0;
  raw.parse::<PersonneId>().map_err(|_| ApiError::InvalidId(raw))
}
