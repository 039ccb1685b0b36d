use crate::cli::parser::Cli;
use crate::cli::session::credentials;
use crate::config::Config;
use crate::core::oplog::OpLog;
use crate::core::{Authenticator, RecordStore, UserFile};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;

/// Create the account, then an empty record file per category.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let (username, password) = credentials(cli)?;

    let users = UserFile::new(cfg.users_path());
    if !users.create(&username, &password)? {
        return Err(AppError::Validation(format!(
            "username '{username}' already exists, choose another"
        )));
    }

    RecordStore::new(cfg.data_path()).create_files(&username)?;

    OpLog::new(&cfg.data_path()).record("signup", &username, "Account created");
    success(format!("Signup successful! Welcome user {username}"));
    Ok(())
}
