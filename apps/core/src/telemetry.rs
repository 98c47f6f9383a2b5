//! Tracing subscriber setup.

use tracing::Subscriber;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::LogFormat;
use crate::error::AppError;

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "mailwise_core=info,mailwise_server=info,tower_http=info";

const BUNYAN_APP_NAME: &str = "mailwise";

/// Build a subscriber for `format` writing to `writer`, without installing it
pub fn build_subscriber<W>(
    format: LogFormat,
    filter: EnvFilter,
    writer: W,
) -> Box<dyn Subscriber + Send + Sync>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Pretty => Box::new(registry.with(fmt::layer().with_writer(writer))),
        LogFormat::Json => Box::new(registry.with(fmt::layer().json().with_writer(writer))),
        LogFormat::Bunyan => Box::new(
            registry
                .with(JsonStorageLayer)
                .with(BunyanFormattingLayer::new(BUNYAN_APP_NAME.to_string(), writer)),
        ),
    }
}

/// Install the global stdout subscriber. Fails if one is already installed.
pub fn init_tracing(format: LogFormat) -> Result<(), AppError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    build_subscriber(format, filter, std::io::stdout)
        .try_init()
        .map_err(|e| AppError::Config(format!("Failed to install tracing subscriber: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn emit(format: LogFormat) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = build_subscriber(format, EnvFilter::new("info"), move || writer.clone());

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(keywords = 2, "Reply drafted");
            tracing::debug!("filtered out");
        });

        captured.text()
    }

    #[test]
    fn test_json_lines() {
        let output = emit(LogFormat::Json);
        let line: serde_json::Value = serde_json::from_str(output.trim()).unwrap();

        assert_eq!(line["fields"]["message"], "Reply drafted");
        assert_eq!(line["fields"]["keywords"], 2);
        assert!(!output.contains("filtered out"));
    }

    #[test]
    fn test_bunyan_lines() {
        let output = emit(LogFormat::Bunyan);
        let line: serde_json::Value = serde_json::from_str(output.trim()).unwrap();

        assert_eq!(line["name"], BUNYAN_APP_NAME);
        assert_eq!(line["msg"], "Reply drafted");
        assert_eq!(line["keywords"], 2);
    }

    #[test]
    fn test_pretty_lines() {
        let output = emit(LogFormat::Pretty);

        assert!(output.contains("Reply drafted"));
        assert!(!output.contains("filtered out"));
    }
}
