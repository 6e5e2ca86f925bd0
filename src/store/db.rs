use std::path::Path;

use rusqlite::{Connection, params};

use crate::error::Error;

/// One row of the Stats table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StatsRecord {
    pub(crate) category: &'static str,
    pub(crate) count: u64,
    pub(crate) date: String,
}

/// Append-only store of per-category counts. Opened once per run and
/// reused for every insert.
pub(crate) struct StatsDb {
    conn: Connection,
}

impl StatsDb {
    /// Open the store, creating the file and schema when absent.
    pub(crate) fn open(path: &Path) -> Result<Self, Error> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| Error::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        let conn = Connection::open(path)?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS Stats (
                category TEXT NOT NULL,
                count INTEGER NOT NULL,
                date TEXT NOT NULL
            )",
            [],
        )?;
        Ok(Self { conn })
    }

    pub(crate) fn insert(&self, record: &StatsRecord) -> Result<(), Error> {
        self.conn.execute(
            "INSERT INTO Stats(category, count, date) VALUES(?1, ?2, ?3)",
            params![record.category, record.count as i64, record.date],
        )?;
        Ok(())
    }
}

/// The statement `insert` would run, for debug-mode output.
pub(crate) fn render_insert(record: &StatsRecord) -> String {
    format!(
        "INSERT INTO Stats(category, count, date) VALUES('{}', {}, '{}');",
        record.category, record.count, record.date
    )
}
