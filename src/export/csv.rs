use crate::core::codec;
use crate::core::store::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::models::{Category, Entry};
use csv::{Terminator, WriterBuilder};
use std::io;
use std::path::{Path, PathBuf};

/// One `(timestamp, value)` row of a chart export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRow {
    pub timestamp: String,
    pub value: String,
}

/// Result of a successful export.
#[derive(Debug, Clone)]
pub struct CsvExport {
    pub path: PathBuf,
    pub rows: Vec<CsvRow>,
    /// Source lines that could not be parsed and were left out.
    pub skipped: usize,
}

/// Output file, value column and value projection of a chartable category.
#[derive(Debug, Clone, Copy)]
pub struct ChartColumns {
    pub file_name: &'static str,
    pub value_header: &'static str,
    value: fn(&Entry) -> Option<String>,
}

impl ChartColumns {
    /// The value column for `entry`, if it belongs to this chart.
    pub fn value(&self, entry: &Entry) -> Option<String> {
        (self.value)(entry)
    }
}

/// Chart columns for `category`, `None` when it cannot be charted.
pub fn chart_columns(category: Category) -> Option<ChartColumns> {
    match category {
        Category::Sleep => Some(ChartColumns {
            file_name: "sleep_data.csv",
            value_header: "SleepDuration_minutes",
            value: |entry| match entry {
                Entry::Sleep { minutes } => Some(minutes.to_string()),
                _ => None,
            },
        }),
        Category::Weight => Some(ChartColumns {
            file_name: "weight_data.csv",
            value_header: "Weight_kg",
            value: |entry| match entry {
                Entry::Weight { kg } => Some(kg.to_string()),
                _ => None,
            },
        }),
        _ => None,
    }
}

/// Projects a user's Sleep or Weight records into a two-column CSV.
pub struct CsvExporter {
    out_dir: PathBuf,
}

impl CsvExporter {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Read the record file, keep the lines that parse, and (re)write the
    /// category's CSV file. Timestamps are copied as written. The record
    /// file itself is only read.
    pub fn export(
        &self,
        store: &RecordStore,
        username: &str,
        category: Category,
    ) -> AppResult<CsvExport> {
        let columns = chart_columns(category).ok_or_else(|| {
            AppError::Validation(format!(
                "{category} records cannot be exported; choose Sleep or Weight"
            ))
        })?;

        // Opened before the destination so a missing source leaves no CSV behind.
        let lines = store.list_raw(username, category)?;

        let mut rows = Vec::new();
        let mut skipped = 0;
        for item in lines {
            let (_, chunk) = item?;
            match project(&columns, &chunk, category) {
                Some(row) => rows.push(row),
                None => skipped += 1,
            }
        }

        let path = self.out_dir.join(columns.file_name);
        write_rows(&path, columns.value_header, &rows)?;

        Ok(CsvExport {
            path,
            rows,
            skipped,
        })
    }
}

fn project(columns: &ChartColumns, chunk: &[u8], category: Category) -> Option<CsvRow> {
    let line = std::str::from_utf8(chunk).ok()?;
    let (record, source_ts) = codec::decode_with_source(line, category).ok()?;
    Some(CsvRow {
        timestamp: source_ts.to_string(),
        value: columns.value(&record.entry)?,
    })
}

fn write_rows(path: &Path, value_header: &str, rows: &[CsvRow]) -> AppResult<()> {
    let mut wtr = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_path(path)
        .map_err(|e| AppError::from(io::Error::other(format!("CSV open error: {e}"))))?;

    // The header keeps the ", " spacing charting scripts already expect.
    let value_col = format!(" {value_header}");
    wtr.write_record(["DateTime", value_col.as_str()])
        .map_err(|e| AppError::from(io::Error::other(format!("CSV write error: {e}"))))?;

    for row in rows {
        wtr.write_record([&row.timestamp, &row.value])
            .map_err(|e| AppError::from(io::Error::other(format!("CSV write error: {e}"))))?;
    }

    wtr.flush()?;
    Ok(())
}
