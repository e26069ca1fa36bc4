use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging based on output mode and debug flag
pub fn init_logging(debug: bool, quiet: bool, log_file: Option<PathBuf>) -> anyhow::Result<()> {
    let env_filter = filter_directive(debug, quiet);

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_line_number(debug)
        .with_file(debug)
        .with_writer(std::io::stderr);

    if let Some(log_path) = log_file {
        // Create log directory if needed
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_ansi(false)
            .with_writer(file)
            .with_target(true)
            .with_line_number(true)
            .with_file(true);

        tracing_subscriber::registry()
            .with(EnvFilter::new(env_filter))
            .with(fmt_layer)
            .with(file_layer)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(EnvFilter::new(env_filter))
            .with(fmt_layer)
            .init();
    }

    Ok(())
}

fn filter_directive(debug: bool, quiet: bool) -> &'static str {
    if debug {
        "wfshow=debug"
    } else if quiet {
        "wfshow=error"
    } else {
        "wfshow=warn"
    }
}

/// Get default log file path for a command
pub fn default_log_path(command: &str) -> anyhow::Result<PathBuf> {
    let log_dir = dirs::config_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
        .join("wfshow")
        .join("logs");

    let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    let filename = format!("{}-{}.log", command, timestamp);

    Ok(log_dir.join(filename))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directive() {
        assert_eq!(filter_directive(true, true), "wfshow=debug");
        assert_eq!(filter_directive(false, true), "wfshow=error");
        assert_eq!(filter_directive(false, false), "wfshow=warn");
    }

    #[test]
    fn test_default_log_path() {
        if dirs::config_dir().is_none() {
            return;
        }
        let path = default_log_path("inspect").unwrap();
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("inspect-"));
        assert!(name.ends_with(".log"));
        assert!(path.parent().unwrap().ends_with("wfshow/logs"));
    }
}
