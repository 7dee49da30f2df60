//! personnes-server binary.
//!
//! Reads `config.toml` (or the path given with `--config`), opens the SQLite
//! store and serves the GraphQL API over HTTP.
//!
//! ```
//! cargo run -p personnes-server -- --print-schema
//! ```

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use personnes_core::PersonneService;
use personnes_graphql::GRAPHQL_PATH;
use personnes_server::{app, load_config};
use personnes_store_sqlite::SqliteStore;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Personnes GraphQL server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Print the GraphQL schema (SDL) and exit.
  #[arg(long)]
  print_schema: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  if cli.print_schema {
    let store = SqliteStore::open_in_memory()
      .await
      .context("failed to open in-memory store")?;
    let schema = personnes_graphql::schema(PersonneService::new(Arc::new(store)));
    println!("{}", schema.sdl());
    return Ok(());
  }

  let server_cfg = load_config(&cli.config)?;

  let store = SqliteStore::open(&server_cfg.store_path)
    .await
    .with_context(|| format!("failed to open store at {:?}", server_cfg.store_path))?;

  let schema = personnes_graphql::schema(PersonneService::new(Arc::new(store)));
  let app = app(schema, &server_cfg)?;
  let address = server_cfg.address();

  if server_cfg.graphiql {
    tracing::info!("GraphiQL on http://{address}{GRAPHQL_PATH}");
  }
  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
