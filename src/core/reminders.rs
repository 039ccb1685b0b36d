use crate::errors::{AppError, AppResult};
use crate::utils::date::format_timestamp;
use chrono::NaiveDateTime;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;

/// Shared append log of health reminders, one line per reminder:
/// `Reminder: <text>, DateTime: <ts>, User: <username>`.
pub struct ReminderLog {
    path: PathBuf,
}

impl ReminderLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn add(&self, username: &str, text: &str, at: NaiveDateTime) -> AppResult<()> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::Validation("reminder text cannot be empty".into()));
        }
        if text.contains(['\n', '\r']) {
            return Err(AppError::Validation(
                "reminder must fit on a single line".into(),
            ));
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(
            file,
            "Reminder: {}, DateTime: {}, User: {}",
            text,
            format_timestamp(&at),
            username
        )?;
        file.flush()?;
        Ok(())
    }

    /// Reminders whose `User:` field is exactly `username`.
    pub fn for_user(&self, username: &str) -> AppResult<Vec<String>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let suffix = format!(", User: {username}");
        Ok(content
            .lines()
            .filter(|l| l.trim_end().ends_with(&suffix))
            .map(str::to_string)
            .collect())
    }
}
