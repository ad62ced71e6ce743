//! Diagnostic sink wiring.
//!
//! Records are split three ways, matching the logging contract this service
//! inherited: an interactive console (human-readable), `error.log` (JSON,
//! error-level only) and `combined.log` (JSON, everything below error). Each
//! record the core emits carries a `service` tag alongside the timestamp,
//! level and message the formatter adds.
//!
//! [`init`] is called once by the binary. The library itself never installs
//! a subscriber; tests compose [`file_layers`] (or a plain capturing
//! writer) into a local subscriber via `tracing::subscriber::with_default`.
//! Logging is best-effort throughout: an unwritable log directory degrades
//! to console-only and never aborts request processing.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing::{Level, Subscriber};
use tracing_subscriber::{
    EnvFilter, Layer,
    filter::filter_fn,
    fmt,
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
};

/// Tag attached to every record the core emits.
pub const SERVICE: &str = "calculator-service";

/// Open the two persistent streams under `log_dir` and return them as one
/// composed layer: a JSON error-only stream plus a JSON
/// everything-but-error stream.
///
/// Files are opened in append mode behind `Arc`, so concurrent request
/// handlers share one descriptor and the kernel serializes line appends.
///
/// # Errors
///
/// Fails if the directory cannot be created or either file cannot be opened.
pub fn file_layers<S>(log_dir: &Path) -> io::Result<impl Layer<S>>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fs::create_dir_all(log_dir)?;
    let error_file = Arc::new(append_file(&log_dir.join("error.log"))?);
    let combined_file = Arc::new(append_file(&log_dir.join("combined.log"))?);

    let error_layer = fmt::layer()
        .json()
        .with_ansi(false)
        .with_writer(error_file)
        .with_filter(filter_fn(|metadata| *metadata.level() == Level::ERROR));

    let combined_layer = fmt::layer()
        .json()
        .with_ansi(false)
        .with_writer(combined_file)
        .with_filter(filter_fn(|metadata| *metadata.level() != Level::ERROR));

    Ok(error_layer.and_then(combined_layer))
}

fn append_file(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global subscriber: console plus the two file streams.
///
/// `RUST_LOG` overrides the default filter. If the log directory is
/// unusable the service keeps running on console output alone.
pub fn init(log_dir: &Path) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,calc_service=debug,tower_http=debug".into());

    match file_layers(log_dir) {
        Ok(file_layer) => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer())
                .with(file_layer)
                .init();
        }
        Err(err) => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer())
                .init();
            tracing::warn!(
                service = SERVICE,
                "log directory {} unavailable, console only: {err}",
                log_dir.display()
            );
        }
    }
}

/// Test support: render records through the plain formatter into a string,
/// so tests can assert on exactly what a request emitted.
#[cfg(test)]
#[allow(clippy::expect_used)]
pub(crate) mod capture {
    use std::io;
    use std::sync::{Arc, Mutex};

    /// io::Write into a shared buffer, for capturing formatter output.
    #[derive(Clone)]
    pub(crate) struct Capture(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().expect("capture poisoned").extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Run `f` under a local capturing subscriber and return its value plus
    /// everything it logged.
    pub(crate) fn rendered<T>(f: impl FnOnce() -> T) -> (T, String) {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let writer = Capture(Arc::clone(&buffer));
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let value = tracing::subscriber::with_default(subscriber, f);

        let output = String::from_utf8(buffer.lock().expect("capture poisoned").clone())
            .expect("utf8 log output");
        (value, output)
    }
}
