use crate::config::AppConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global subscriber. Keep the returned guard alive until exit
/// or buffered file output is lost.
pub fn init_logging(config: &AppConfig) -> WorkerGuard {
    let file_appender = match config.rotation.as_str() {
        "hourly" => tracing_appender::rolling::hourly(&config.log_dir, &config.log_file),
        "daily" => tracing_appender::rolling::daily(&config.log_dir, &config.log_file),
        _ => tracing_appender::rolling::never(&config.log_dir, &config.log_file),
    };

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    let registry = tracing_subscriber::registry().with(filter);

    if config.use_json {
        let file_layer = fmt::layer()
            .json()
            .with_target(true) // module path is a queryable field in JSON
            .with_writer(non_blocking)
            .with_ansi(false);
        registry.with(file_layer).init();
    } else {
        let file_layer = fmt::layer()
            .with_target(false) // single crate, target adds nothing to text lines
            .with_writer(non_blocking)
            .with_ansi(false);
        let console_layer = fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr) // stdout carries criterion's report
            .with_ansi(true);
        registry.with(file_layer).with(console_layer).init();
    }

    guard
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BenchConfig;

    /// JSON mode writes structured events to the configured file.
    #[test]
    fn test_json_file_output() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            log_level: "info".to_string(),
            log_dir: dir.path().to_string_lossy().into_owned(),
            log_file: "bench.json".to_string(),
            use_json: true,
            rotation: "never".to_string(),
            bench: BenchConfig::default(),
        };

        let guard = init_logging(&config);
        // error level so a RUST_LOG override cannot filter it out
        tracing::error!(matched = 250, "json layer check");
        drop(guard); // flushes the non-blocking writer

        let content = std::fs::read_to_string(dir.path().join("bench.json")).unwrap();
        assert!(content.contains("json layer check"), "log file: {content}");
        assert!(content.contains("\"matched\":250"), "log file: {content}");
    }
}
