//! history.rs — append-only JSON-lines log of analysis records.
//!
//! One record per line. Reads tolerate a missing file (empty history) and skip
//! lines that fail to parse.

use std::fs::{self, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde_json::Value;

use crate::engine::AnalysisResult;

pub const DEFAULT_HISTORY_PATH: &str = "data/analysis_history.jsonl";

#[derive(Debug)]
pub struct HistoryStore {
    path: PathBuf,
    // Serializes appends so concurrent requests never interleave lines.
    write_lock: Mutex<()>,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, record: &AnalysisResult) -> io::Result<()> {
        let line = serde_json::to_string(record)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| io::Error::other("history lock poisoned"))?;

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let mut f = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(f, "{line}")?;
        Ok(())
    }

    /// Last `limit` records in file order; all records when `limit` is `None` or 0.
    pub fn read_last(&self, limit: Option<usize>) -> io::Result<Vec<Value>> {
        let f = match fs::File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };

        // Raw bytes per line: a line that is not UTF-8 is skipped like any other
        // line that fails to parse.
        let mut out = Vec::new();
        for line in BufReader::new(f).split(b'\n') {
            let line = line?;
            if line.iter().all(u8::is_ascii_whitespace) {
                continue;
            }
            if let Ok(v) = serde_json::from_slice::<Value>(&line) {
                out.push(v);
            }
        }

        if let Some(n) = limit.filter(|&n| n > 0) {
            let start = out.len().saturating_sub(n);
            out.drain(..start);
        }
        Ok(out)
    }
}
