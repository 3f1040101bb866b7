use anyhow::Result;
use tracing::Level;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, layer::SubscriberExt};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl LogFormat {
    /// Unknown names fall back to `Pretty`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Pretty
        }
    }
}

/// Install the global subscriber. Logs go to stderr so stdout stays JSON.
/// # Errors
/// Returns an error if a directive is invalid or a subscriber is already set.
pub fn init(verbosity_level: Option<Level>, format: LogFormat) -> Result<()> {
    let verbosity_level = verbosity_level.unwrap_or(Level::ERROR);

    let filter = filter(verbosity_level)?;

    let subscriber = Registry::default().with(fmt_layer(format)).with(filter);
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}

fn fmt_layer(format: LogFormat) -> Box<dyn Layer<Registry> + Send + Sync> {
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_target(false);

    match format {
        LogFormat::Pretty => layer.pretty().boxed(),
        LogFormat::Json => layer.json().flatten_event(true).boxed(),
    }
}

// RUST_LOG wins over the verbosity flag; transport crates stay quiet.
fn filter(verbosity_level: Level) -> Result<EnvFilter> {
    Ok(EnvFilter::builder()
        .with_default_directive(verbosity_level.into())
        .from_env_lossy()
        .add_directive("hyper=error".parse()?)
        .add_directive("hyper_util=error".parse()?)
        .add_directive("reqwest=warn".parse()?)
        .add_directive("tokio=error".parse()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_filter_uses_verbosity_as_default() {
        temp_env::with_vars([("RUST_LOG", None::<&str>)], || {
            let filter = filter(Level::DEBUG).unwrap().to_string();
            assert!(filter.contains("debug"));
            assert!(filter.contains("hyper=error"));
        });
    }

    #[test]
    fn test_log_format_from_name() {
        assert_eq!(LogFormat::from_name("json"), LogFormat::Json);
        assert_eq!(LogFormat::from_name("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::from_name("pretty"), LogFormat::Pretty);
        assert_eq!(LogFormat::from_name(""), LogFormat::Pretty);
    }

    #[test]
    fn test_json_layer_writes_one_object_per_event() {
        let captured = Arc::new(Mutex::new(Vec::new()));
        let sink = captured.clone();
        let layer = fmt::layer()
            .with_writer(move || Captured(sink.clone()))
            .with_target(false)
            .json()
            .flatten_event(true);
        let subscriber = Registry::default().with(layer);

        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!(notification = "Resource not found.", "request failed");
        });

        let bytes = captured.lock().unwrap().clone();
        let line: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(line["level"], "WARN");
        assert_eq!(line["message"], "request failed");
        assert_eq!(line["notification"], "Resource not found.");
    }

    #[test]
    fn test_filter_honours_rust_log() {
        temp_env::with_vars([("RUST_LOG", Some("stockroom=trace"))], || {
            let filter = filter(Level::ERROR).unwrap().to_string();
            assert!(filter.contains("stockroom=trace"));
        });
    }
}
