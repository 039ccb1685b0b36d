use crate::cli::commands::list::numbered_table;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::RecordStore;
use crate::core::oplog::OpLog;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config, username: &str) -> AppResult<()> {
    if let Commands::Del {
        category,
        pos,
        force,
    } = cmd
    {
        let store = RecordStore::new(cfg.data_path());

        // Show the numbering the user is about to act on.
        let table = numbered_table(&store, username, *category)?;
        if table.is_empty() && pos.is_none() {
            info(format!("No {category} records to delete."));
            return Ok(());
        }
        print!("{}", table.render(None));

        let prompt = match pos {
            Some(p) => format!("Delete {category} record #{p}? This action is irreversible."),
            None => format!("Delete ALL {category} records? This action is irreversible."),
        };
        if !*force && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let oplog = OpLog::new(&cfg.data_path());
        let target = format!("{username}/{category}");

        match pos {
            Some(p) => {
                let removed = store.delete_at(username, *category, *p)?;
                oplog.record("del", &target, &format!("#{p}: {removed}"));
                success(format!("Record {p} deleted successfully."));
            }
            None => {
                store.delete_all(username, *category)?;
                oplog.record("del", &target, "all records");
                success(format!("All {category} records deleted."));
            }
        }
    }

    Ok(())
}
