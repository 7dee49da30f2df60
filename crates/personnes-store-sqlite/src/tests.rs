//! Integration tests for `SqliteStore` against an in-memory database.

use chrono::NaiveDate;
use personnes_core::{
  date::DateError,
  personne::NewPersonne,
  store::PersonneStore,
};

use crate::{
  Error, SqliteStore,
  encode::{RawPersonne, contains_pattern},
};

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn personne(nom: &str) -> NewPersonne {
  NewPersonne {
    nom:            nom.into(),
    prenom:         "Awa".into(),
    date_naissance: NaiveDate::from_ymd_opt(1990, 5, 12).unwrap(),
    adresse:        "Dakar".into(),
    telephone:      "771112233".into(),
  }
}

// ─── Insert / read ───────────────────────────────────────────────────────────

#[tokio::test]
async fn insert_assigns_id_and_find_by_id_returns_same_fields() {
  let s = store().await;

  let saved = s.insert(personne("Diop")).await.unwrap();
  assert!(saved.id > 0);

  let fetched = s.find_by_id(saved.id).await.unwrap().unwrap();
  assert_eq!(fetched, saved);
  assert_eq!(fetched.date_naissance, NaiveDate::from_ymd_opt(1990, 5, 12).unwrap());
}

#[tokio::test]
async fn find_by_id_missing_returns_none() {
  let s = store().await;
  assert!(s.find_by_id(7).await.unwrap().is_none());
}

#[tokio::test]
async fn find_all_returns_primary_key_order() {
  let s = store().await;
  let a = s.insert(personne("Diop")).await.unwrap();
  let b = s.insert(personne("Fall")).await.unwrap();
  let c = s.insert(personne("Ndiaye")).await.unwrap();

  let ids: Vec<i64> = s.find_all().await.unwrap().into_iter().map(|p| p.id).collect();
  assert_eq!(ids, vec![a.id, b.id, c.id]);
}

#[tokio::test]
async fn ids_are_not_reused_after_delete() {
  let s = store().await;
  let first = s.insert(personne("Diop")).await.unwrap();
  s.delete_by_id(first.id).await.unwrap();

  let second = s.insert(personne("Fall")).await.unwrap();
  assert!(second.id > first.id);
}

// ─── Update ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn update_overwrites_row() {
  let s = store().await;
  let mut saved = s.insert(personne("Diop")).await.unwrap();
  saved.nom = "Sow".into();
  saved.telephone = "00221781234567".into();

  let updated = s.update(saved.clone()).await.unwrap();
  assert_eq!(updated.as_ref(), Some(&saved));
  assert_eq!(s.find_by_id(saved.id).await.unwrap(), Some(saved));
}

#[tokio::test]
async fn update_missing_row_returns_none_and_creates_nothing() {
  let s = store().await;
  let ghost = personne("Ghost").with_id(99);

  assert!(s.update(ghost).await.unwrap().is_none());
  assert_eq!(s.count().await.unwrap(), 0);
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_is_idempotent() {
  let s = store().await;
  let saved = s.insert(personne("Diop")).await.unwrap();

  s.delete_by_id(saved.id).await.unwrap();
  assert!(s.find_by_id(saved.id).await.unwrap().is_none());

  s.delete_by_id(saved.id).await.unwrap();
  s.delete_by_id(4242).await.unwrap();
  assert_eq!(s.count().await.unwrap(), 0);
}

// ─── Search ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn search_matches_case_insensitive_substring() {
  let s = store().await;
  for nom in ["Martin", "ARTAUD", "barthes", "Diop"] {
    s.insert(personne(nom)).await.unwrap();
  }

  let found: Vec<String> = s
    .find_by_nom_containing("art")
    .await
    .unwrap()
    .into_iter()
    .map(|p| p.nom)
    .collect();
  assert_eq!(found, vec!["Martin", "ARTAUD", "barthes"]);
}

#[tokio::test]
async fn search_folds_accented_letters() {
  let s = store().await;
  for nom in ["ÉLODIE", "Ndèye", "Elodie", "Diop"] {
    s.insert(personne(nom)).await.unwrap();
  }

  let noms = |found: Vec<personnes_core::Personne>| -> Vec<String> {
    found.into_iter().map(|p| p.nom).collect()
  };
  assert_eq!(noms(s.find_by_nom_containing("élodie").await.unwrap()), vec!["ÉLODIE"]);
  assert_eq!(noms(s.find_by_nom_containing("NDÈYE").await.unwrap()), vec!["Ndèye"]);
  assert_eq!(noms(s.find_by_nom_containing("lod").await.unwrap()), vec!["ÉLODIE", "Elodie"]);
}

#[tokio::test]
async fn search_with_empty_fragment_matches_everything() {
  let s = store().await;
  s.insert(personne("Diop")).await.unwrap();
  s.insert(personne("Fall")).await.unwrap();

  assert_eq!(s.find_by_nom_containing("").await.unwrap().len(), 2);
}

#[tokio::test]
async fn search_treats_wildcards_literally() {
  let s = store().await;
  s.insert(personne("Diop")).await.unwrap();
  s.insert(personne("50%_off")).await.unwrap();

  assert!(s.find_by_nom_containing("_").await.unwrap().iter().all(|p| p.nom == "50%_off"));
  assert_eq!(s.find_by_nom_containing("%").await.unwrap().len(), 1);
  assert!(s.find_by_nom_containing("D_op").await.unwrap().is_empty());
}

// ─── Encoding ────────────────────────────────────────────────────────────────

#[test]
fn contains_pattern_escapes_like_metacharacters() {
  assert_eq!(contains_pattern("art"), "%art%");
  assert_eq!(contains_pattern(""), "%%");
  assert_eq!(contains_pattern("a%b_c\\d"), "%a\\%b\\_c\\\\d%");
}

#[test]
fn undecodable_stored_date_is_a_serialization_error() {
  let raw = RawPersonne {
    id:             1,
    nom:            "Diop".into(),
    prenom:         "Awa".into(),
    date_naissance: "12/05/1990".into(),
    adresse:        "Dakar".into(),
    telephone:      "771112233".into(),
  };

  match raw.into_personne() {
    Err(Error::Date(DateError::Serialization(value))) => assert_eq!(value, "12/05/1990"),
    other => panic!("expected serialization error, got {other:?}"),
  }
}

#[tokio::test]
async fn reopening_a_file_store_keeps_rows() {
  let dir = std::env::temp_dir().join(format!("personnes-test-{}", std::process::id()));
  std::fs::create_dir_all(&dir).unwrap();
  let path = dir.join("reopen.db");
  let _ = std::fs::remove_file(&path);

  let id = {
    let s = SqliteStore::open(&path).await.unwrap();
    s.insert(personne("Diop")).await.unwrap().id
  };

  let s = SqliteStore::open(&path).await.unwrap();
  assert_eq!(s.find_by_id(id).await.unwrap().map(|p| p.nom), Some("Diop".into()));

  drop(s);
  let _ = std::fs::remove_dir_all(&dir);
}
