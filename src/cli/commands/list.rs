use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{RecordStore, codec};
use crate::errors::{AppError, AppResult};
use crate::models::Category;
use crate::ui::messages::{header, info};
use crate::utils::Table;

const WRAP_WIDTH: usize = 100;

pub fn handle(cmd: &Commands, cfg: &Config, username: &str) -> AppResult<()> {
    if let Commands::List { category, json } = cmd {
        let store = RecordStore::new(cfg.data_path());

        let result = if *json {
            print_json(&store, username, *category)
        } else {
            print_table(&store, username, *category)
        };

        match result {
            Err(AppError::NotFound(_)) => info(format!("No records found for {category}.")),
            other => other?,
        }
    }
    Ok(())
}

/// Numbered table of the raw lines of one record file.
pub(crate) fn numbered_table(
    store: &RecordStore,
    username: &str,
    category: Category,
) -> AppResult<Table> {
    let mut table = Table::new(["#", "Record"]);
    for item in store.list_all(username, category)? {
        let (pos, line) = item?;
        table.add_row(vec![pos.to_string(), line]);
    }
    Ok(table)
}

fn print_table(store: &RecordStore, username: &str, category: Category) -> AppResult<()> {
    let table = numbered_table(store, username, category)?;
    if table.is_empty() {
        info(format!("No records found for {category}."));
        return Ok(());
    }

    header(format!("{category} records for {username}"));
    print!("{}", table.render(Some(WRAP_WIDTH)));
    Ok(())
}

/// Parsed records as a JSON array; unreadable lines are left out.
fn print_json(store: &RecordStore, username: &str, category: Category) -> AppResult<()> {
    let mut records = Vec::new();
    for item in store.list_all(username, category)? {
        let (_, line) = item?;
        if let Ok(record) = codec::decode(&line, category) {
            records.push(record);
        }
    }

    let json = serde_json::to_string_pretty(&records)
        .map_err(|e| AppError::Other(format!("JSON serialization error: {e}")))?;
    println!("{json}");
    Ok(())
}
