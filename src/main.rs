//! HealthDash main entrypoint.

use healthdash::run;
use healthdash::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
