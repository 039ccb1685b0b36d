use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::{AddLogic, RecordInput};
use crate::core::codec;
use crate::core::oplog::OpLog;
use crate::core::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config, username: &str) -> AppResult<()> {
    if let Commands::Add {
        category,
        kind,
        minutes,
        food,
        grams,
        liters,
        kg,
        count,
        at,
    } = cmd
    {
        let timestamp = match at {
            Some(s) => date::parse_timestamp(s).ok_or_else(|| {
                AppError::Validation(format!(
                    "invalid date-time '{s}', expected YYYY-MM-DD HH:MM:SS"
                ))
            })?,
            None => date::now(),
        };

        let input = RecordInput {
            kind: *kind,
            minutes: *minutes,
            food: food.clone(),
            grams: *grams,
            liters: liters.clone(),
            kg: kg.clone(),
            count: *count,
        };

        let store = RecordStore::new(cfg.data_path());
        let record = AddLogic::apply(&store, username, *category, &input, timestamp)?;
        let line = codec::encode(&record);

        OpLog::new(&cfg.data_path()).record("add", &format!("{username}/{category}"), &line);
        success(format!("{category} record added successfully: {line}"));
    }
    Ok(())
}
