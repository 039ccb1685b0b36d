//! Internal operation log (`healthdash.log` in the data directory).
//!
//! Each line is `date \t operation \t target \t message` with an RFC 3339
//! local timestamp. Writing is best-effort: callers warn and carry on.

use crate::errors::AppResult;
use crate::ui::messages::warning;
use ansi_term::Colour;
use chrono::Local;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub const LOG_FILE: &str = "healthdash.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

pub struct OpLog {
    path: PathBuf,
}

impl OpLog {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(LOG_FILE),
        }
    }

    /// Append one entry. Tabs and line breaks in the fields are flattened.
    pub fn write(&self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(
            file,
            "{}\t{}\t{}\t{}",
            Local::now().to_rfc3339(),
            clean(operation),
            clean(target),
            clean(message)
        )?;
        Ok(())
    }

    /// Same as [`OpLog::write`] but only warns on failure.
    pub fn record(&self, operation: &str, target: &str, message: &str) {
        if let Err(e) = self.write(operation, target, message) {
            warning(format!("Failed to write internal log: {e}"));
        }
    }

    pub fn entries(&self) -> AppResult<Vec<LogEntry>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        Ok(content
            .lines()
            .filter_map(|line| {
                let mut parts = line.splitn(4, '\t');
                Some(LogEntry {
                    date: parts.next()?.to_string(),
                    operation: parts.next()?.to_string(),
                    target: parts.next()?.to_string(),
                    message: parts.next().unwrap_or_default().to_string(),
                })
            })
            .collect())
    }

    pub fn print(&self) -> AppResult<()> {
        let entries = self.entries()?;
        if entries.is_empty() {
            println!("Operation log is empty.");
            return Ok(());
        }

        let id_w = entries.len().to_string().len();
        let op_w = entries
            .iter()
            .map(|e| op_target(e).chars().count())
            .max()
            .unwrap_or(10)
            .min(40);

        for (i, e) in entries.iter().enumerate() {
            let label = op_target(e);
            let padding = " ".repeat(op_w.saturating_sub(label.chars().count()));
            println!(
                "{:>id_w$}: {} | {}{} => {}",
                i + 1,
                e.date,
                color_for_operation(&e.operation).paint(label),
                padding,
                e.message,
                id_w = id_w
            );
        }
        Ok(())
    }
}

fn op_target(e: &LogEntry) -> String {
    if e.target.is_empty() {
        e.operation.clone()
    } else {
        format!("{} ({})", e.operation, e.target)
    }
}

fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "export" => Colour::Blue,
        "signup" => Colour::Yellow,
        "remind" => Colour::Cyan,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

fn clean(field: &str) -> String {
    field.replace(['\t', '\n', '\r'], " ")
}
