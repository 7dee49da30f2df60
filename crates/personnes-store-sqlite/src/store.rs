//! [`SqliteStore`], the SQLite implementation of [`PersonneStore`].

use std::path::Path;

use rusqlite::{OptionalExtension as _, functions::FunctionFlags};

use personnes_core::{
  personne::{NewPersonne, Personne, PersonneId},
  store::PersonneStore,
};

use crate::{
  Result,
  encode::{RawPersonne, contains_pattern, encode_date},
  schema::{SCHEMA, UNICODE_LOWER},
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Personnes store backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted. All clones
/// share one connection thread, so statements never run concurrently.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store, for tests.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Registers the SQL functions the queries rely on, then applies [`SCHEMA`].
  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.create_scalar_function(
          UNICODE_LOWER,
          1,
          FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
          |ctx| Ok(ctx.get::<String>(0)?.to_lowercase()),
        )?;
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Number of stored rows.
  pub async fn count(&self) -> Result<i64> {
    let n: i64 = self
      .conn
      .call(|conn| Ok(conn.query_row("SELECT COUNT(*) FROM personnes", [], |r| r.get(0))?))
      .await?;
    Ok(n)
  }
}

// ─── PersonneStore impl ──────────────────────────────────────────────────────

impl PersonneStore for SqliteStore {
  type Error = crate::Error;

  async fn find_all(&self) -> Result<Vec<Personne>> {
    let raws: Vec<RawPersonne> = self
      .conn
      .call(|conn| {
        let sql = format!("SELECT {} FROM personnes ORDER BY id", RawPersonne::COLUMNS);
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map([], RawPersonne::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawPersonne::into_personne).collect()
  }

  async fn find_by_id(&self, id: PersonneId) -> Result<Option<Personne>> {
    let raw: Option<RawPersonne> = self
      .conn
      .call(move |conn| {
        let sql = format!("SELECT {} FROM personnes WHERE id = ?1", RawPersonne::COLUMNS);
        Ok(
          conn
            .query_row(&sql, rusqlite::params![id], RawPersonne::from_row)
            .optional()?,
        )
      })
      .await?;

    raw.map(RawPersonne::into_personne).transpose()
  }

  async fn insert(&self, personne: NewPersonne) -> Result<Personne> {
    let row = personne.clone();
    let date = encode_date(row.date_naissance);

    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO personnes (nom, prenom, date_naissance, adresse, telephone)
           VALUES (?1, ?2, ?3, ?4, ?5)",
          rusqlite::params![row.nom, row.prenom, date, row.adresse, row.telephone],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(personne.with_id(id))
  }

  async fn update(&self, personne: Personne) -> Result<Option<Personne>> {
    let row = personne.clone();
    let date = encode_date(row.date_naissance);

    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE personnes
           SET nom = ?2, prenom = ?3, date_naissance = ?4, adresse = ?5, telephone = ?6
           WHERE id = ?1",
          rusqlite::params![row.id, row.nom, row.prenom, date, row.adresse, row.telephone],
        )?)
      })
      .await?;

    Ok((changed > 0).then_some(personne))
  }

  async fn delete_by_id(&self, id: PersonneId) -> Result<()> {
    self
      .conn
      .call(move |conn| {
        conn.execute("DELETE FROM personnes WHERE id = ?1", rusqlite::params![id])?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn find_by_nom_containing(&self, fragment: &str) -> Result<Vec<Personne>> {
    // LIKE folds ASCII case only; both sides are lowered first.
    let pattern = contains_pattern(&fragment.to_lowercase());

    let raws: Vec<RawPersonne> = self
      .conn
      .call(move |conn| {
        let sql = format!(
          "SELECT {} FROM personnes WHERE {UNICODE_LOWER}(nom) LIKE ?1 ESCAPE '\\' ORDER BY id",
          RawPersonne::COLUMNS
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(rusqlite::params![pattern], RawPersonne::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawPersonne::into_personne).collect()
  }
}
