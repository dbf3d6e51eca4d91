//! Best-effort pageview recording.
//!
//! The manual does not phone home. Analytics is a seam: the page lifecycle
//! calls [`Analytics::pageview`] and ignores the result, so any backend —
//! a local event log, a forwarding beacon, nothing at all — can sit behind
//! it without the pages knowing. The two backends shipped here are
//! [`NoopAnalytics`] (the default) and [`PageviewLog`], an append-only
//! JSON-lines file a site operator can tail or aggregate offline.

use serde::Serialize;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Records page-view events. Best-effort: callers are free to drop errors.
pub trait Analytics {
    fn pageview(&mut self, path: &str) -> Result<(), AnalyticsError>;
}

/// Discards every event. Used when analytics is disabled in config.
#[derive(Default)]
pub struct NoopAnalytics;

impl Analytics for NoopAnalytics {
    fn pageview(&mut self, _path: &str) -> Result<(), AnalyticsError> {
        Ok(())
    }
}

/// One line of the pageview log.
#[derive(Debug, Serialize)]
struct PageviewEvent<'a> {
    event: &'static str,
    path: &'a str,
    /// Unix seconds. Zero if the clock is before the epoch.
    at: u64,
}

/// Appends one JSON line per pageview to a local file.
///
/// The file and its parent directory are created on first write. Each line
/// is `{"event":"pageview","path":"...","at":...}` — the same
/// serde_json-backed format the rest of the crate uses for machine-readable
/// output, so standard JSONL tooling applies.
pub struct PageviewLog {
    log_path: PathBuf,
}

impl PageviewLog {
    pub fn new(log_path: impl Into<PathBuf>) -> Self {
        Self { log_path: log_path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.log_path
    }
}

impl Analytics for PageviewLog {
    fn pageview(&mut self, path: &str) -> Result<(), AnalyticsError> {
        let at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let event = PageviewEvent { event: "pageview", path, at };
        let mut line = serde_json::to_string(&event)?;
        line.push('\n');

        if let Some(parent) = self.log_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let mut file = OpenOptions::new().create(true).append(true).open(&self.log_path)?;
        file.write_all(line.as_bytes())?;
        Ok(())
    }
}
