//! Per-user flat-record store.
//!
//! One append-only text file per (user, category) under an explicit base
//! directory. A record has no id: its 1-based line position is its address,
//! and every delete renumbers the lines that follow it.

use crate::core::codec;
use crate::errors::{AppError, AppResult};
use crate::models::{Category, Record};
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Split, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub struct RecordStore {
    base_dir: PathBuf,
}

impl RecordStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// `<base_dir>/<username>_<Category>.txt`
    pub fn record_file(&self, username: &str, category: Category) -> PathBuf {
        self.base_dir
            .join(format!("{}_{}.txt", username, category.as_str()))
    }

    pub fn exists(&self, username: &str, category: Category) -> bool {
        self.record_file(username, category).is_file()
    }

    /// Create an empty file for every category (done once at signup).
    pub fn create_files(&self, username: &str) -> AppResult<()> {
        validate_username(username)?;
        fs::create_dir_all(&self.base_dir)?;

        for category in Category::ALL {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(self.record_file(username, category))?;
        }
        Ok(())
    }

    /// Append one record as a new last line.
    pub fn append(&self, username: &str, record: &Record) -> AppResult<()> {
        validate_username(username)?;
        record.validate()?;

        let line = codec::encode(record);
        fs::create_dir_all(&self.base_dir)?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.record_file(username, record.category()))?;
        writeln!(file, "{line}")?;
        file.flush()?;
        Ok(())
    }

    /// Lazily iterate `(position, line)` pairs in file order.
    ///
    /// Each call re-opens the file, so the sequence can be restarted. Bytes
    /// that are not UTF-8 are shown with replacement characters.
    pub fn list_all(&self, username: &str, category: Category) -> AppResult<RecordLines> {
        Ok(RecordLines {
            raw: self.list_raw(username, category)?,
        })
    }

    /// Same as `list_all`, but yields each line's bytes as stored, without
    /// the line terminator.
    pub fn list_raw(&self, username: &str, category: Category) -> AppResult<RawLines> {
        let file = self.open_existing(username, category)?;
        Ok(RawLines {
            chunks: BufReader::new(file).split(b'\n'),
            position: 0,
        })
    }

    /// Remove the whole record file.
    pub fn delete_all(&self, username: &str, category: Category) -> AppResult<()> {
        validate_username(username)?;
        let path = self.record_file(username, category);

        fs::remove_file(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => not_found(username, category),
            _ => AppError::Io(e),
        })
    }

    /// Remove the line at `position` (1-based) and return it.
    ///
    /// The remaining lines are copied byte for byte to a temp file next to
    /// the original, which then replaces it with a single atomic rename. If
    /// anything fails before that rename the original file is left as it was
    /// and the temp file is removed.
    pub fn delete_at(
        &self,
        username: &str,
        category: Category,
        position: usize,
    ) -> AppResult<String> {
        if position == 0 {
            return Err(AppError::Validation(
                "record positions start at 1".into(),
            ));
        }

        let source = self.open_existing(username, category)?;
        let path = self.record_file(username, category);

        let mut tmp = NamedTempFile::new_in(&self.base_dir)?;
        let mut removed = None;
        let mut seen = 0;

        {
            let mut out = BufWriter::new(tmp.as_file_mut());
            for chunk in BufReader::new(source).split(b'\n') {
                let chunk = chunk?;
                seen += 1;
                if seen == position {
                    removed = Some(lossy_line(&chunk));
                } else {
                    out.write_all(&chunk)?;
                    out.write_all(b"\n")?;
                }
            }
            out.flush()?;
        }

        // `tmp` is dropped (and deleted) on this early return.
        let Some(removed) = removed else {
            return Err(AppError::PositionNotFound {
                position,
                available: seen,
            });
        };

        tmp.as_file().sync_all()?;
        tmp.persist(&path).map_err(|e| AppError::Io(e.error))?;
        Ok(removed)
    }

    fn open_existing(&self, username: &str, category: Category) -> AppResult<File> {
        validate_username(username)?;
        File::open(self.record_file(username, category)).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => not_found(username, category),
            _ => AppError::Io(e),
        })
    }
}

/// Raw lines of one record file, numbered from 1. A trailing `\r` is kept.
pub struct RawLines {
    chunks: Split<BufReader<File>>,
    position: usize,
}

impl Iterator for RawLines {
    type Item = AppResult<(usize, Vec<u8>)>;

    fn next(&mut self) -> Option<Self::Item> {
        let chunk = self.chunks.next()?;
        self.position += 1;
        Some(chunk.map(|c| (self.position, c)).map_err(AppError::from))
    }
}

/// Lines of one record file as text, numbered from 1.
pub struct RecordLines {
    raw: RawLines,
}

impl Iterator for RecordLines {
    type Item = AppResult<(usize, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.raw.next()?;
        Some(item.map(|(position, chunk)| (position, lossy_line(&chunk))))
    }
}

fn lossy_line(chunk: &[u8]) -> String {
    let chunk = chunk.strip_suffix(b"\r").unwrap_or(chunk);
    String::from_utf8_lossy(chunk).into_owned()
}

/// Usernames become part of file names, so they must be a plain path
/// component.
pub fn validate_username(username: &str) -> AppResult<()> {
    if username.is_empty() {
        return Err(AppError::Validation("username cannot be empty".into()));
    }
    if username.starts_with('.')
        || username
            .chars()
            .any(|c| c.is_whitespace() || c == '/' || c == '\\')
    {
        return Err(AppError::Validation(format!(
            "invalid username '{username}': no spaces, slashes or leading dot"
        )));
    }
    Ok(())
}

fn not_found(username: &str, category: Category) -> AppError {
    AppError::NotFound(format!("{} records for user '{}'", category, username))
}
