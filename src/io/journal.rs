use std::{
    fs::{self, File, OpenOptions},
    io::Read,
    path::{Path, PathBuf},
};

use chrono::NaiveDateTime;
use tracing::{debug, info, warn};

use crate::{
    common::error::AppError,
    domain::{ledger::Ledger, transaction::TransactionRecord},
    io::{reader, segment, writer},
    worker::netting,
};

/// Append-only transaction log, one CSV segment per calendar month.
///
/// The log holds raw transactions, never net balances. Only the segment of
/// the month being replayed is ever read back; older segments stay on disk
/// untouched.
#[derive(Debug, Clone)]
pub struct TransactionLog {
    root: PathBuf,
}

impl TransactionLog {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn segment_path(&self, at: &NaiveDateTime) -> PathBuf {
        segment::segment_path(&self.root, at)
    }

    /// Appends `record` to the segment of the month it was created in,
    /// creating directories and the header row as needed. Returns the
    /// segment path.
    ///
    /// A partial last line left by an interrupted write is cut off first;
    /// that record was never acknowledged.
    pub fn append(&self, record: &TransactionRecord) -> Result<PathBuf, AppError> {
        let path = self.segment_path(&record.timestamp);
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&path)?;
        truncate_torn_tail(&mut file, &path)?;
        // an empty file gets the header, including one left behind by a crash
        let fresh = file.metadata()?.len() == 0;
        writer::write_record(file, record, fresh)?;

        debug!(path = %path.display(), fresh, "appended transaction");
        Ok(path)
    }

    /// Rebuilds `ledger` from the segment of the month containing `at`,
    /// feeding each record through netting in file order.
    ///
    /// A missing segment is not an error and applies nothing. On the first
    /// unreadable record the replay stops with an error; records before it
    /// remain applied. Returns the number of records applied.
    pub fn replay(&self, ledger: &mut Ledger, at: &NaiveDateTime) -> Result<usize, AppError> {
        let path = self.segment_path(at);
        if !path.exists() {
            info!(path = %path.display(), "no segment for this month, starting empty");
            return Ok(0);
        }

        let file = File::open(&path)?;
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(file);

        let mut applied = 0;
        for record in reader::read_records(&mut rdr) {
            let record = record.map_err(|e| {
                AppError::Parse(format!(
                    "{} record {}: {e}",
                    path.display(),
                    applied + 1
                ))
            })?;
            netting::apply(ledger, record.debtor, record.creditor, record.amount).map_err(
                |e| AppError::Parse(format!("{} record {}: {e}", path.display(), applied + 1)),
            )?;
            applied += 1;
        }

        info!(path = %path.display(), records = applied, "replayed segment");
        Ok(applied)
    }
}

/// Drops everything after the last newline of a non-empty segment.
fn truncate_torn_tail(file: &mut File, path: &Path) -> Result<(), AppError> {
    let len = file.metadata()?.len();
    if len == 0 {
        return Ok(());
    }

    let mut content = Vec::with_capacity(len as usize);
    file.read_to_end(&mut content)?;
    if content.last() == Some(&b'\n') {
        return Ok(());
    }

    let keep = content
        .iter()
        .rposition(|&b| b == b'\n')
        .map_or(0, |pos| pos + 1);
    warn!(
        path = %path.display(),
        dropped = content.len() - keep,
        "truncating partial record left by an interrupted write"
    );
    file.set_len(keep as u64)?;
    Ok(())
}
