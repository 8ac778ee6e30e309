//! Logging setup
//!
//! Installs `env_logger` behind the `log` facade. Output goes to a file
//! next to the executable, truncated on every start, unless configured
//! otherwise.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use crate::shared::config::LogConfig;

/// Environment variable that overrides the configured filter
pub const LOG_ENV: &str = "GAMEBAR_LOG";

/// Get the directory where the executable is located
pub fn exe_dir() -> PathBuf {
    std::env::current_exe()
        .unwrap_or_else(|_| PathBuf::from("gamebar"))
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Where file logging writes to
pub fn log_path(config: &LogConfig) -> PathBuf {
    config
        .file
        .clone()
        .unwrap_or_else(|| exe_dir().join("gamebar.log"))
}

/// Initialize logging.
///
/// Returns the log file path, or `None` when logging to stderr (either
/// configured, or because the file could not be opened).
pub fn init(config: &LogConfig) -> Option<PathBuf> {
    let mut builder = env_logger::Builder::new();
    builder.parse_filters(&config.level);

    if std::env::var_os(LOG_ENV).is_some() {
        builder.parse_env(env_logger::Env::new().filter(LOG_ENV));
    }

    builder.format(|buf, record| {
        writeln!(
            buf,
            "[{}] {:<5} {}: {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    let mut file_path = None;
    if !config.stderr {
        let path = log_path(config);
        match OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&path)
        {
            Ok(file) => {
                builder.target(env_logger::Target::Pipe(Box::new(file)));
                file_path = Some(path);
            }
            Err(e) => eprintln!("Cannot open log file {}: {}", path.display(), e),
        }
    }

    // A logger installed earlier (tests, embedding) stays in place
    if builder.try_init().is_ok() {
        log::info!("=== Gamebar Log Started ===");
    }

    file_path
}
