//! Persistence: the SQLite results store and raw JSON artifacts.

pub(crate) mod artifacts;
pub(crate) mod db;

pub(crate) use db::{StatsDb, StatsRecord, render_insert};
