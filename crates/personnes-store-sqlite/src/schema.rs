//! SQL schema for the Personnes SQLite store.
//!
//! Executed once at connection startup. `PRAGMA user_version` records the
//! schema revision for future migrations.

/// Scalar function folding text to lowercase over all of Unicode. Registered
/// on the connection before [`SCHEMA`] runs.
pub const UNICODE_LOWER: &str = "unicode_lower";

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- AUTOINCREMENT: ids of deleted rows are never handed out again.
CREATE TABLE IF NOT EXISTS personnes (
    id             INTEGER PRIMARY KEY AUTOINCREMENT,
    nom            TEXT NOT NULL,
    prenom         TEXT NOT NULL,
    date_naissance TEXT NOT NULL,   -- ISO 8601 calendar date, YYYY-MM-DD
    adresse        TEXT NOT NULL,
    telephone      TEXT NOT NULL
);

PRAGMA user_version = 1;
";
