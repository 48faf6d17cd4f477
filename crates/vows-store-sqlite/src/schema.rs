//! SQL schema for the Vows SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! the `user_version` pragma.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

-- Responses are strictly append-only.
-- No UPDATE or DELETE is ever issued against this table.
CREATE TABLE IF NOT EXISTS rsvps (
    rsvp_id      TEXT PRIMARY KEY,
    name         TEXT NOT NULL,
    attendance   TEXT NOT NULL CHECK (attendance IN ('yes', 'no')),
    guests       INTEGER NOT NULL CHECK (guests BETWEEN 1 AND 5),
    message      TEXT,            -- NULL means no message
    submitted_at TEXT NOT NULL    -- ISO 8601 UTC; store-assigned
);

CREATE INDEX IF NOT EXISTS rsvps_submitted_idx ON rsvps(submitted_at);

PRAGMA user_version = 1;
";
