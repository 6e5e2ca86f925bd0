//! The batch collector: one sequential pass over every triage category.

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use crate::config::Config;
use crate::consts;
use crate::error::Error;
use crate::fetch::BugzillaClient;
use crate::queries::Category;
use crate::stamp::RunStamp;
use crate::store::{StatsDb, StatsRecord, artifacts, render_insert};

pub(crate) struct Collector<'a> {
    config: &'a Config,
    client: BugzillaClient,
    /// `None` in debug mode; statements are printed instead.
    store: Option<StatsDb>,
    json_dir: PathBuf,
    stamp: RunStamp,
}

impl<'a> Collector<'a> {
    pub(crate) fn new(config: &'a Config, stamp: RunStamp, debug: bool) -> Result<Self, Error> {
        let client = BugzillaClient::new(
            &config.bugzilla.base_url,
            &config.bugzilla.api_key,
            config.timeout(),
        );
        let (store, json_dir) = if debug {
            (None, std::env::temp_dir().join(consts::SCRATCH_DIR))
        } else {
            (
                Some(StatsDb::open(&config.storage.db_path)?),
                config.storage.json_dir.clone(),
            )
        };
        Ok(Self {
            config,
            client,
            store,
            json_dir,
            stamp,
        })
    }

    /// Fetch, archive, and record every category once. Aborts on the first
    /// fatal error, leaving earlier categories recorded.
    pub(crate) fn run(&mut self) -> Result<(), Error> {
        for category in Category::ALL {
            eprintln!("Fetching {category}");
            let count = self.fetch_count(category)?;
            let record = StatsRecord {
                category: category.label(),
                count,
                date: self.stamp.db_stamp().to_string(),
            };
            match &self.store {
                Some(db) => db.insert(&record)?,
                None => println!("{}", render_insert(&record)),
            }
        }
        Ok(())
    }

    /// One category with the capped retry policy: transient failures back
    /// off and try again, persistence failures propagate immediately.
    fn fetch_count(&self, category: Category) -> Result<u64, Error> {
        let max_attempts = self.config.retry.max_attempts.max(1);
        for attempt in 1..=max_attempts {
            if attempt > 1 {
                eprintln!("Retrying {category} - attempt {attempt}");
            }
            match self.attempt(category) {
                Ok(count) => return Ok(count),
                Err(e) if e.is_retryable() => {
                    eprintln!("{e}");
                    if attempt < max_attempts {
                        thread::sleep(self.backoff(attempt));
                    }
                }
                Err(e) => return Err(e),
            }
        }
        Err(Error::RetriesExhausted {
            category: category.label(),
            attempts: max_attempts,
        })
    }

    fn attempt(&self, category: Category) -> Result<u64, Error> {
        let body = self.client.fetch_raw(category)?;
        artifacts::write(&self.json_dir, &self.stamp, category, &body)?;
        parse_count(&body, category)
    }

    fn backoff(&self, attempt: u32) -> Duration {
        let exp = attempt.saturating_sub(1).min(10);
        Duration::from_millis(self.config.retry.backoff_ms.saturating_mul(1u64 << exp))
    }
}

/// Extract the bug count from a raw response body: the length of the
/// `bugs` array. Anything else is a malformed response.
fn parse_count(body: &str, category: Category) -> Result<u64, Error> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| Error::Malformed {
        category: category.label(),
        reason: e.to_string(),
    })?;
    let bugs = value
        .get("bugs")
        .and_then(|v| v.as_array())
        .ok_or_else(|| Error::Malformed {
            category: category.label(),
            reason: "response has no \"bugs\" array".to_string(),
        })?;
    Ok(bugs.len() as u64)
}
