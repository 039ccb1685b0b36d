//! Login for commands that act on a user's records.

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::{Authenticator, UserFile};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use std::io::{self, Write};

/// Read one trimmed line from stdin after printing `label`.
pub fn prompt(label: &str) -> AppResult<String> {
    print!("{label}: ");
    io::stdout().flush().ok();

    let mut s = String::new();
    io::stdin().read_line(&mut s)?;
    Ok(s.trim().to_string())
}

/// Username and password from the command line, prompting for what's missing.
pub fn credentials(cli: &Cli) -> AppResult<(String, String)> {
    let username = match &cli.user {
        Some(u) => u.clone(),
        None => prompt("Enter username")?,
    };
    let password = match &cli.password {
        Some(p) => p.clone(),
        None => prompt("Enter password")?,
    };
    Ok((username, password))
}

/// Authenticate against the account file and return the logged-in username.
pub fn login(cli: &Cli, cfg: &Config) -> AppResult<String> {
    let users = UserFile::new(cfg.users_path());
    if !cfg.users_path().exists() {
        return Err(AppError::Auth(
            "no users found, please sign up first".into(),
        ));
    }

    let (username, password) = credentials(cli)?;
    if users.authenticate(&username, &password)? {
        if cli.user.is_none() {
            info(format!("Welcome to HealthDash, {username}"));
        }
        Ok(username)
    } else {
        Err(AppError::Auth("invalid username or password".into()))
    }
}
