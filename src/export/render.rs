use crate::errors::AppResult;
use std::path::Path;
use std::process::{Command, Stdio};

/// What happened when a chart was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    Rendered,
    /// The renderer is not installed; the CSV is still there.
    Unavailable,
    /// The renderer ran and returned a non-zero status.
    Failed(Option<i32>),
}

/// Turns an exported CSV into a time-series chart.
pub trait RenderGateway {
    fn render(&self, csv: &Path, title: &str) -> AppResult<RenderOutcome>;
}

/// Renders with an external gnuplot binary.
pub struct Gnuplot {
    program: String,
}

impl Gnuplot {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn is_available(&self) -> bool {
        Command::new(&self.program)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .is_ok_and(|s| s.success())
    }
}

impl Default for Gnuplot {
    fn default() -> Self {
        Self::new("gnuplot")
    }
}

impl RenderGateway for Gnuplot {
    fn render(&self, csv: &Path, title: &str) -> AppResult<RenderOutcome> {
        if !self.is_available() {
            return Ok(RenderOutcome::Unavailable);
        }

        let status = Command::new(&self.program)
            .arg("-persist")
            .arg("-e")
            .arg(plot_script(csv, title))
            .status()?;

        if status.success() {
            Ok(RenderOutcome::Rendered)
        } else {
            Ok(RenderOutcome::Failed(status.code()))
        }
    }
}

/// gnuplot commands for a `timestamp,value` CSV with one header line.
pub fn plot_script(csv: &Path, title: &str) -> String {
    let file = csv.display().to_string().replace('\'', "");
    let title = title.replace('\'', "");
    format!(
        "set datafile separator ','; \
         set xdata time; \
         set timefmt '%Y-%m-%d %H:%M:%S'; \
         set format x \"%Y-%m-%d\\n%H:%M\"; \
         set title 'Health Data - {title}'; \
         set xlabel 'DateTime'; \
         set ylabel 'Value'; \
         plot '{file}' using 1:2 every ::1 with linespoints title '{title}'"
    )
}
