//! Tabular (CSV) export: header `x,y` followed by one row per sample.

use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::data::series::Snapshot;
use crate::error::{Result, SamplePlotError};

use super::timestamp;

/// `<label>_<timestamp>.csv`. The label is used verbatim.
pub fn file_name(label: &str, now: NaiveDateTime) -> String {
    format!("{}_{}.csv", label, timestamp(now))
}

/// Write `snapshot` to any writer. Floats use the shortest form that parses back
/// to the same value.
pub fn write_csv<W: Write>(writer: W, snapshot: &Snapshot) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(["x", "y"])?;
    for step in snapshot.iter() {
        wtr.serialize((step.x, step.y))?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Write `snapshot` into `dir` and return the created path.
pub fn export_csv(
    dir: &Path,
    label: &str,
    now: NaiveDateTime,
    snapshot: &Snapshot,
) -> Result<PathBuf> {
    let path = dir.join(file_name(label, now));
    let file = std::fs::File::create(&path).map_err(|e| SamplePlotError::io(&path, e))?;
    write_csv(file, snapshot)?;
    Ok(path)
}
