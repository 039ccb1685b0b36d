use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::oplog::OpLog;
use crate::core::reminders::ReminderLog;
use crate::errors::AppResult;
use crate::ui::messages::{header, info, success};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config, username: &str) -> AppResult<()> {
    if let Commands::Remind { set, list } = cmd {
        let reminders = ReminderLog::new(cfg.reminders_path());

        if let Some(text) = set {
            reminders.add(username, text, date::now())?;
            OpLog::new(&cfg.data_path()).record("remind", username, text);
            success("Reminder set successfully!");
        }

        if *list || set.is_none() {
            let mine = reminders.for_user(username)?;
            if mine.is_empty() {
                info(format!("No reminders for {username}."));
                return Ok(());
            }

            header(format!("Reminders for {username}"));
            let opts = textwrap::Options::new(100).subsequent_indent("    ");
            for line in mine {
                println!("{}", textwrap::fill(&line, &opts));
            }
        }
    }
    Ok(())
}
