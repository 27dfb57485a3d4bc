use log::debug;

use analizador_rollback::api::{console, ApiError, Rollback};
use analizador_rollback::logging::LogFacts;
use analizador_rollback::types::Layout;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let api = Rollback::new(LogFacts, Layout::default());
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match api.run(&mut out) {
        Ok(report) => match serde_json::to_string(&report) {
            Ok(s) => debug!("rollback finished: {s}"),
            Err(e) => debug!("rollback finished; report not serializable: {e}"),
        },
        Err(e) => {
            match e {
                // already reported on stdout
                ApiError::BackupMissing { .. } => {}
                ApiError::PayloadMissing { .. } | ApiError::RestoreFailed { .. } => {
                    eprintln!("{} {e}", console::MSG_COPY_FAILED)
                }
                ApiError::Console(_) => eprintln!("{e}"),
            }
            std::process::exit(e.exit_code());
        }
    }
}
