use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::oplog::OpLog;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This creates:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the data directory for record files
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    cfg.init_all(cli.test)?;

    let data_dir = cfg.data_path();
    println!("⚙️  Initializing HealthDash…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗂️  Data dir    : {}", data_dir.display());

    OpLog::new(&data_dir).record(
        "init",
        "",
        &format!("Data directory initialized at {}", data_dir.display()),
    );

    println!("🎉 HealthDash initialization completed!");
    Ok(())
}
