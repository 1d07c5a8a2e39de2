// File: ./src/logging.rs
use directories::ProjectDirs;
use std::env;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub fn log_path() -> Option<PathBuf> {
    // ISOLATION: Check env var first
    if let Ok(dir) = env::var("TODOVIEW_LOG_DIR") {
        return Some(PathBuf::from(dir).join("todoview.log"));
    }
    ProjectDirs::from("com", "todoview", "todoview")
        .map(|proj| proj.data_dir().join("todoview.log"))
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Routes diagnostics to a log file so they never draw over the terminal UI.
///
/// Filter comes from `RUST_LOG`, defaulting to `info`. Returns the log path
/// only when the file subscriber was installed.
pub fn init() -> Option<PathBuf> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let opened = log_path().and_then(|path| match open_log_file(&path) {
        Ok(file) => Some((path, file)),
        Err(e) => {
            eprintln!("Failed to open log file {}: {e}", path.display());
            None
        }
    });

    match opened {
        Some((path, file)) => {
            let installed = tracing_subscriber::registry()
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .with(env_filter)
                .try_init();
            match installed {
                Ok(()) => {
                    tracing::info!(path = %path.display(), "Logging initialized");
                    Some(path)
                }
                Err(e) => {
                    tracing::warn!(%e, "Subscriber already set, not logging to file");
                    None
                }
            }
        }
        None => None,
    }
}
