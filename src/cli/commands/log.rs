use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::oplog::OpLog;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print } = cmd
        && *print
    {
        OpLog::new(&cfg.data_path()).print()?;
    }
    Ok(())
}
