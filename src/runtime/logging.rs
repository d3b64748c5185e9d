use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::Settings;

/// Where log lines go: `log.file`, else `cadenza.log` in the cache directory.
pub fn log_path(settings: &Settings) -> PathBuf {
    settings
        .log
        .file
        .clone()
        .unwrap_or_else(|| settings.library.resolved_cache_dir().join("cadenza.log"))
}

/// Build the filter from `CADENZA_LOG`, falling back to `log.filter`.
fn build_filter(settings: &Settings) -> EnvFilter {
    EnvFilter::try_from_env("CADENZA_LOG")
        .or_else(|_| EnvFilter::try_new(&settings.log.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install a file-backed `tracing` subscriber. The terminal belongs to the
/// UI, so nothing is written to stdout or stderr once this succeeds.
pub fn init_logging(settings: &Settings) -> Result<PathBuf, std::io::Error> {
    let path = log_path(settings);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let installed = tracing_subscriber::fmt()
        .with_env_filter(build_filter(settings))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init();
    if let Err(e) = installed {
        eprintln!("cadenza: logging already initialized: {e}");
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_path_prefers_configured_file() {
        let mut settings = Settings::default();
        settings.log.file = Some(PathBuf::from("/tmp/cadenza-test.log"));
        assert_eq!(log_path(&settings), PathBuf::from("/tmp/cadenza-test.log"));
    }

    #[test]
    fn log_path_defaults_into_cache_dir() {
        let mut settings = Settings::default();
        settings.library.cache_dir = Some(PathBuf::from("/tmp/cadenza-cache"));
        assert_eq!(
            log_path(&settings),
            PathBuf::from("/tmp/cadenza-cache").join("cadenza.log")
        );
    }
}
