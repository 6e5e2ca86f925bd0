use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::queries::Category;
use crate::stamp::RunStamp;

/// Artifact path for one category in one run: `{dir}/{YYYYMMDDHHMM}_{category}.json`.
pub(crate) fn artifact_path(dir: &Path, stamp: &RunStamp, category: Category) -> PathBuf {
    dir.join(format!("{}_{}.json", stamp.file_stamp(), category))
}

/// Save the raw response body for auditing. Written per attempt; a retry
/// overwrites, so the file ends up holding the last body fetched.
pub(crate) fn write(
    dir: &Path,
    stamp: &RunStamp,
    category: Category,
    body: &str,
) -> Result<PathBuf, Error> {
    fs::create_dir_all(dir).map_err(|e| Error::Io {
        path: dir.to_path_buf(),
        source: e,
    })?;
    let path = artifact_path(dir, stamp, category);
    fs::write(&path, body).map_err(|e| Error::Io {
        path: path.clone(),
        source: e,
    })?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use chrono::{Local, TimeZone};

    use super::*;

    fn stamp() -> RunStamp {
        RunStamp::from_datetime(Local.with_ymd_and_hms(2026, 8, 7, 9, 5, 0).unwrap())
    }

    #[test]
    fn filename_is_stamp_then_category() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), &stamp(), Category::High, r#"{"bugs":[]}"#).unwrap();
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "202608070905_high.json"
        );
        assert_eq!(fs::read_to_string(&path).unwrap(), r#"{"bugs":[]}"#);
    }

    #[test]
    fn same_run_shares_one_prefix_across_categories() {
        let stamp = stamp();
        let dir = tempfile::tempdir().unwrap();
        let a = write(dir.path(), &stamp, Category::Critical, "{}").unwrap();
        let b = write(dir.path(), &stamp, Category::ClosedThisWeek, "{}").unwrap();

        let prefix = |p: &PathBuf| {
            p.file_name()
                .unwrap()
                .to_str()
                .unwrap()
                .split('_')
                .next()
                .unwrap()
                .to_string()
        };
        assert_eq!(prefix(&a), prefix(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn retry_overwrites_previous_attempt() {
        let stamp = stamp();
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), &stamp, Category::Low, "garbage").unwrap();
        let path = write(dir.path(), &stamp, Category::Low, r#"{"bugs":[1]}"#).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), r#"{"bugs":[1]}"#);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
