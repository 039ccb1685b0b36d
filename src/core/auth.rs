//! Account store: `username password` pairs, one per line.

use crate::core::store::validate_username;
use crate::errors::{AppError, AppResult};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;

/// Checks and creates user credentials.
pub trait Authenticator {
    fn authenticate(&self, username: &str, password: &str) -> AppResult<bool>;

    /// `Ok(false)` when the username is already taken.
    fn create(&self, username: &str, password: &str) -> AppResult<bool>;
}

/// Plain-text `users.txt` account file.
pub struct UserFile {
    path: PathBuf,
}

impl UserFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn entries(&self) -> AppResult<Vec<(String, String)>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        Ok(content
            .lines()
            .filter_map(|line| {
                let mut parts = line.split_whitespace();
                match (parts.next(), parts.next()) {
                    (Some(u), Some(p)) => Some((u.to_string(), p.to_string())),
                    _ => None,
                }
            })
            .collect())
    }
}

impl Authenticator for UserFile {
    fn authenticate(&self, username: &str, password: &str) -> AppResult<bool> {
        Ok(self
            .entries()?
            .iter()
            .any(|(u, p)| u == username && p == password))
    }

    fn create(&self, username: &str, password: &str) -> AppResult<bool> {
        validate_username(username)?;
        if password.is_empty() || password.chars().any(char::is_whitespace) {
            return Err(AppError::Validation(
                "password cannot be empty or contain spaces".into(),
            ));
        }

        if self.entries()?.iter().any(|(u, _)| u == username) {
            return Ok(false);
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{username} {password}")?;
        file.flush()?;
        Ok(true)
    }
}
