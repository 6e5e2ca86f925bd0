use chrono::{DateTime, Local};

use crate::consts::{DB_STAMP_FORMAT, FILE_STAMP_FORMAT};

/// Timestamp captured once at startup and shared by every artifact and
/// record the run produces, so one invocation carries one logical time
/// marker even when minutes tick over mid-run.
#[derive(Debug, Clone)]
pub(crate) struct RunStamp {
    file: String,
    db: String,
}

impl RunStamp {
    pub(crate) fn now() -> Self {
        Self::from_datetime(Local::now())
    }

    pub(crate) fn from_datetime(dt: DateTime<Local>) -> Self {
        Self {
            file: dt.format(FILE_STAMP_FORMAT).to_string(),
            db: dt.format(DB_STAMP_FORMAT).to_string(),
        }
    }

    /// Filename form, `YYYYMMDDHHMM`
    pub(crate) fn file_stamp(&self) -> &str {
        &self.file
    }

    /// Results-store form, `YYYY-MM-DD HH:MM`
    pub(crate) fn db_stamp(&self) -> &str {
        &self.db
    }
}
