//! Durable, append-only record of user actions.
//!
//! Each session writes to its own SQLite database. Identifiers come from an
//! `AUTOINCREMENT` column, so they keep growing even after the newest entry
//! has been undone.

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use log::{debug, info};
use rusqlite::{Connection, OptionalExtension, Row, params};

use crate::error::{JournalError, JournalResult};

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS actions (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        action TEXT NOT NULL,
        timestamp DATETIME DEFAULT CURRENT_TIMESTAMP
    )";

/// Name of a session's journal store, derived from the session start time
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionLabel(String);

impl SessionLabel {
    pub fn from_start_time(started_at: NaiveDateTime) -> Self {
        Self(format!(
            "user_actions_{}",
            started_at.format("%Y-%m-%d-%H-%M-%S")
        ))
    }

    /// Label for a session starting now, in local time
    pub fn now() -> Self {
        Self::from_start_time(chrono::Local::now().naive_local())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Database file name for this session
    pub fn file_name(&self) -> String {
        format!("{}.db", self.0)
    }
}

impl fmt::Display for SessionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One recorded action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalEntry {
    pub id: i64,
    pub description: String,
    /// Assigned by the store at insert time (UTC)
    pub timestamp: NaiveDateTime,
}

impl JournalEntry {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            description: row.get(1)?,
            timestamp: row.get(2)?,
        })
    }
}

impl fmt::Display for JournalEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} at {}",
            self.id,
            self.description,
            self.timestamp.format("%Y-%m-%d %H:%M:%S")
        )
    }
}

pub struct ActionJournal {
    connection: Connection,
    label: SessionLabel,
    path: Option<PathBuf>,
}

impl fmt::Debug for ActionJournal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionJournal")
            .field("label", &self.label)
            .field("path", &self.path)
            .finish()
    }
}

impl ActionJournal {
    /// Create or attach to the session's store inside `dir`.
    /// Safe to call again for a store that already exists.
    pub fn open(dir: &Path, label: &SessionLabel) -> JournalResult<Self> {
        std::fs::create_dir_all(dir).map_err(|source| JournalError::DirectoryError {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = dir.join(label.file_name());
        let connection = Connection::open(&path)?;
        connection.execute(SCHEMA, [])?;
        info!("Action journal at {}", path.display());
        Ok(Self {
            connection,
            label: label.clone(),
            path: Some(path),
        })
    }

    /// A journal that lives only as long as this value
    pub fn open_in_memory(label: &SessionLabel) -> JournalResult<Self> {
        let connection = Connection::open_in_memory()?;
        connection.execute(SCHEMA, [])?;
        Ok(Self {
            connection,
            label: label.clone(),
            path: None,
        })
    }

    pub fn label(&self) -> &SessionLabel {
        &self.label
    }

    /// Database file backing this journal, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Record an action and return the stored entry
    pub fn append(&mut self, description: &str) -> JournalResult<JournalEntry> {
        let entry = self.connection.query_row(
            "INSERT INTO actions (action) VALUES (?1) RETURNING id, action, timestamp",
            params![description],
            JournalEntry::from_row,
        )?;
        debug!("Journal #{}: {}", entry.id, entry.description);
        Ok(entry)
    }

    /// Snapshot of every entry, oldest first
    pub fn list_all(&self) -> JournalResult<Vec<JournalEntry>> {
        let mut statement = self
            .connection
            .prepare("SELECT id, action, timestamp FROM actions ORDER BY id ASC")?;
        let entries = statement
            .query_map([], JournalEntry::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(entries)
    }

    pub fn len(&self) -> JournalResult<usize> {
        let count: i64 = self
            .connection
            .query_row("SELECT COUNT(*) FROM actions", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    pub fn is_empty(&self) -> JournalResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Delete the newest entry and return it. Does nothing on an empty journal.
    pub fn undo_last(&mut self) -> JournalResult<Option<JournalEntry>> {
        let tx = self.connection.transaction()?;
        let last = tx
            .query_row(
                "SELECT id, action, timestamp FROM actions ORDER BY id DESC LIMIT 1",
                [],
                JournalEntry::from_row,
            )
            .optional()?;
        if let Some(entry) = &last {
            tx.execute("DELETE FROM actions WHERE id = ?1", params![entry.id])?;
        }
        tx.commit()?;
        match &last {
            Some(entry) => info!("Undid journal entry #{}: {}", entry.id, entry.description),
            None => debug!("Undo requested on an empty journal"),
        }
        Ok(last)
    }
}
