// src/export/mod.rs

pub mod csv;
pub mod render;

pub use self::csv::{ChartColumns, CsvExport, CsvExporter, CsvRow, chart_columns};
pub use render::{Gnuplot, RenderGateway, RenderOutcome};

use crate::ui::messages::{info, success, warning};

/// Shared messages for the export + chart step.
pub(crate) fn notify_export(export: &CsvExport) {
    success(format!(
        "{} rows exported to {}",
        export.rows.len(),
        export.path.display()
    ));
    if export.skipped > 0 {
        warning(format!(
            "{} unreadable line(s) were skipped",
            export.skipped
        ));
    }
}

pub(crate) fn notify_render(outcome: RenderOutcome, program: &str) {
    match outcome {
        RenderOutcome::Rendered => success("Graph plotted."),
        RenderOutcome::Unavailable => info(format!(
            "'{program}' not found on PATH. Install it to use the plotting feature; the CSV is ready."
        )),
        RenderOutcome::Failed(code) => warning(format!(
            "Failed to plot the graph ({program} exited with {}).",
            code.map_or_else(|| "a signal".to_string(), |c| c.to_string())
        )),
    }
}
