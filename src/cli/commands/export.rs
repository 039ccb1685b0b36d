use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::RecordStore;
use crate::core::oplog::OpLog;
use crate::errors::AppResult;
use crate::export::{CsvExporter, Gnuplot, RenderGateway, notify_export, notify_render};
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config, username: &str) -> AppResult<()> {
    if let Commands::Export {
        category,
        plot,
        out_dir,
    } = cmd
    {
        let out_dir = match out_dir {
            Some(dir) => expand_tilde(dir),
            None => cfg.export_path(),
        };

        let store = RecordStore::new(cfg.data_path());
        let export = CsvExporter::new(out_dir).export(&store, username, *category)?;
        notify_export(&export);

        OpLog::new(&cfg.data_path()).record(
            "export",
            &format!("{username}/{category}"),
            &format!("{} rows → {}", export.rows.len(), export.path.display()),
        );

        if *plot {
            let renderer = Gnuplot::new(cfg.renderer.clone());
            let title = category.to_string();
            // The chart is optional: a renderer error never fails the export.
            match renderer.render(&export.path, &title) {
                Ok(outcome) => notify_render(outcome, &cfg.renderer),
                Err(e) => warning(format!("Failed to plot the graph: {e}")),
            }
        }
    }
    Ok(())
}
