//! SQLite persistence layer — the bundled ComplaintRepository.
//!
//! RULE: Only the store modules talk SQL. Everything else reaches
//! persistence through the ComplaintRepository trait.

mod complaint;

use crate::error::IntakeResult;
use rusqlite::Connection;

pub struct IntakeStore {
    conn: Connection,
}

impl IntakeStore {
    /// Open (or create) the intake database at `path`.
    pub fn open(path: &str) -> IntakeResult<Self> {
        let conn = Connection::open_with_flags(
            path,
            rusqlite::OpenFlags::SQLITE_OPEN_READ_WRITE
                | rusqlite::OpenFlags::SQLITE_OPEN_CREATE
                | rusqlite::OpenFlags::SQLITE_OPEN_URI,
        )?;
        // WAL mode only for real files (:memory: ignores it).
        let _ = conn.execute_batch("PRAGMA journal_mode=WAL;");
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self { conn })
    }

    /// Open an in-memory database (used in tests).
    pub fn in_memory() -> IntakeResult<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self { conn })
    }

    /// Apply all schema migrations in order.
    pub fn migrate(&self) -> IntakeResult<()> {
        self.conn
            .execute_batch(include_str!("../../migrations/001_complaints.sql"))?;
        Ok(())
    }

    pub(crate) fn conn(&self) -> &Connection {
        &self.conn
    }
}
