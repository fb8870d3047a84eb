// src/log.rs
// Debug log file. Console output goes through `Progress`; this is the
// after-the-fact record of what a run fetched, resolved, and merged.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{fmt::time::uptime, EnvFilter};

use crate::config::consts::LOG_FILTER_VAR;

/// Install a subscriber appending to `path`. Level filter comes from
/// `SODEXO_LOG` (EnvFilter syntax), default `info`.
///
/// Best-effort: an unopenable log file or an already-installed subscriber
/// leaves logging as it was and returns false.
pub fn init(path: &Path) -> bool {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            let _ = std::fs::create_dir_all(parent);
        }
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(path) else {
        return false;
    };

    let filter = EnvFilter::try_from_env(LOG_FILTER_VAR)
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_timer(uptime())
        .with_target(false)
        .try_init()
        .is_ok()
}
