use crate::cli::commands::list::numbered_table;
use crate::config::Config;
use crate::core::RecordStore;
use crate::errors::AppResult;
use crate::models::Category;
use crate::ui::messages::{header, warning};

/// Dump every record file the user has, in the usual category order.
pub fn handle(cfg: &Config, username: &str) -> AppResult<()> {
    let store = RecordStore::new(cfg.data_path());
    let mut found = false;

    for category in Category::ALL {
        if !store.exists(username, category) {
            continue;
        }
        found = true;

        let path = store.record_file(username, category);
        header(format!("Contents of {}", path.display()));

        let table = numbered_table(&store, username, category)?;
        if table.is_empty() {
            println!("(empty)");
        } else {
            print!("{}", table.render(None));
        }
        println!();
    }

    if !found {
        warning(format!("No records found for user {username}."));
    }
    Ok(())
}
