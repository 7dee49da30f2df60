//! HTTP wiring for the Personnes GraphQL service.
//!
//! Loads [`ServerConfig`] and wraps the GraphQL router with request tracing
//! and, when origins are configured, CORS.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use axum::{
  Router,
  http::{HeaderValue, Method, header},
};
use personnes_core::PersonneStore;
use personnes_graphql::{PersonneSchema, graphql_router};
use serde::Deserialize;
use tower_http::{
  cors::{AllowOrigin, CorsLayer},
  trace::TraceLayer,
};

/// Prefix of the environment variables that override the config file,
/// e.g. `PERSONNES_PORT=9000`.
pub const ENV_PREFIX: &str = "PERSONNES";

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml`.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
  pub host:                 String,
  pub port:                 u16,
  pub store_path:           PathBuf,
  pub graphiql:             bool,
  pub cors_allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:                 "127.0.0.1".to_string(),
      port:                 8080,
      store_path:           PathBuf::from("personnes.db"),
      graphiql:             true,
      cors_allowed_origins: Vec::new(),
    }
  }
}

impl ServerConfig {
  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

/// Read `path` (if it exists) layered under `PERSONNES_*` variables.
///
/// `PERSONNES_CORS_ALLOWED_ORIGINS` takes a comma-separated list.
pub fn load_config(path: &Path) -> anyhow::Result<ServerConfig> {
  config::Config::builder()
    .add_source(config::File::from(path).required(false))
    .add_source(
      config::Environment::with_prefix(ENV_PREFIX)
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("cors_allowed_origins"),
    )
    .build()
    .with_context(|| format!("failed to read config from {path:?}"))?
    .try_deserialize()
    .context("failed to deserialise ServerConfig")
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// The complete application: GraphQL routes plus tracing and CORS layers.
pub fn app<S>(schema: PersonneSchema<S>, config: &ServerConfig) -> anyhow::Result<Router>
where
  S: PersonneStore + 'static,
{
  let mut router = graphql_router(schema, config.graphiql);

  if let Some(cors) = cors_layer(&config.cors_allowed_origins)? {
    router = router.layer(cors);
  }

  Ok(router.layer(TraceLayer::new_for_http()))
}

/// `None` when no origin is allowed.
fn cors_layer(origins: &[String]) -> anyhow::Result<Option<CorsLayer>> {
  if origins.is_empty() {
    return Ok(None);
  }

  let origins = origins
    .iter()
    .map(|o| {
      HeaderValue::from_str(o).with_context(|| format!("invalid CORS origin {o:?}"))
    })
    .collect::<anyhow::Result<Vec<_>>>()?;

  Ok(Some(
    CorsLayer::new()
      .allow_origin(AllowOrigin::list(origins))
      .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
      .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
  ))
}
