use std::sync::Once;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

static INIT: Once = Once::new();

/// Logs go to stderr so stdout stays clean for command output. With a
/// `log_dir` an hourly rolling file is written as well.
pub fn setup_telemetry(log_dir: Option<&str>) {
    INIT.call_once(|| {
        let file_appender = log_dir.and_then(|log_dir| {
            match RollingFileAppender::builder()
                .rotation(Rotation::HOURLY)
                .filename_prefix("cnft-tree")
                .filename_suffix("log")
                .max_log_files(48) // 2 days
                .build(log_dir)
            {
                Ok(appender) => Some(appender),
                Err(e) => {
                    eprintln!(
                        "Warning: Failed to create log file appender: {}. Logging to stderr only.",
                        e
                    );
                    None
                }
            }
        });

        let stderr_env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

        let stderr_layer = fmt::Layer::new()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_filter(stderr_env_filter);

        if let Some(file_appender) = file_appender {
            let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
            let file_env_filter = EnvFilter::new("info");
            let file_layer = fmt::Layer::new()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_filter(file_env_filter);

            tracing_subscriber::registry()
                .with(stderr_layer)
                .with(file_layer)
                .init();

            std::mem::forget(_guard);
        } else {
            tracing_subscriber::registry().with(stderr_layer).init();
        }
    });
}
