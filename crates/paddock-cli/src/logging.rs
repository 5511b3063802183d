//! Tracing subscriber setup for the binary.
//!
//! The filter comes from `RUST_LOG` when set, else from a log config file
//! (one `EnvFilter` directive per line, `#` comments allowed), else from the
//! plain `--log-level`. An unreadable or invalid config file falls back to
//! the level and is reported once the subscriber is up.

use std::io;
use std::path::Path;

use tracing::warn;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::LogFormat;

/// Install the global subscriber.
///
/// Records go to stderr so they do not interleave with the racer's output on
/// stdout. Fails if a global subscriber is already installed.
pub fn init_tracing(
    level: &str,
    config: Option<&Path>,
    format: LogFormat,
) -> Result<(), TryInitError> {
    let (filter, fallback) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, None),
        Err(_) => file_filter(level, config),
    };
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .try_init()?,
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?,
    }

    if let Some(reason) = fallback {
        warn!("{reason}; using log level '{level}'");
    }
    Ok(())
}

/// Filter from the config file at `config`, or from `level` when there is
/// none. The second value explains why a given file was not used.
fn file_filter(level: &str, config: Option<&Path>) -> (EnvFilter, Option<String>) {
    let Some(path) = config else {
        return (EnvFilter::new(level), None);
    };

    let reason = match read_directives(path) {
        Ok(directives) if directives.is_empty() => {
            format!("log config {} has no directives", path.display())
        }
        Ok(directives) => match EnvFilter::try_new(&directives) {
            Ok(filter) => return (filter, None),
            Err(e) => format!("invalid log config {}: {e}", path.display()),
        },
        Err(e) => format!("cannot read log config {}: {e}", path.display()),
    };
    (EnvFilter::new(level), Some(reason))
}

/// Read a log config file into a comma-separated directive string.
pub fn read_directives(path: &Path) -> io::Result<String> {
    let text = std::fs::read_to_string(path)?;
    let directives: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();
    Ok(directives.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_config(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("paddock-{}-{name}", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn directives_skip_comments_and_blanks() {
        let path = write_config(
            "directives.log",
            "# paddock logging\ninfo\n\n  paddock=debug  \n# reqwest=trace\n",
        );
        assert_eq!(read_directives(&path).unwrap(), "info,paddock=debug");
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn config_file_drives_the_filter() {
        let path = write_config("filter.log", "warn\npaddock=trace\n");
        let (filter, fallback) = file_filter("info", Some(&path));
        assert_eq!(fallback, None);
        let shown = filter.to_string();
        assert!(shown.contains("paddock=trace"), "{shown}");
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn unusable_config_falls_back_to_level() {
        let missing = std::env::temp_dir().join("paddock-no-such-log-config");
        let (filter, fallback) = file_filter("debug", Some(&missing));
        assert_eq!(filter.to_string(), "debug");
        assert!(fallback.unwrap().starts_with("cannot read log config"));

        let empty = write_config("empty.log", "# nothing here\n");
        let (_, fallback) = file_filter("info", Some(&empty));
        assert!(fallback.unwrap().contains("has no directives"));
        std::fs::remove_file(empty).unwrap();
    }

    #[test]
    fn no_config_uses_level() {
        let (filter, fallback) = file_filter("warn", None);
        assert_eq!(filter.to_string(), "warn");
        assert_eq!(fallback, None);
    }

    #[test]
    fn second_install_reports_an_error() {
        let _ = init_tracing("info", None, LogFormat::Text);
        assert!(init_tracing("info", None, LogFormat::Text).is_err());
    }
}
