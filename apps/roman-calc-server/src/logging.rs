//! Logging initialisation.
//!
//! `RUST_LOG` takes precedence over the configured levels:
//! ```bash
//! RUST_LOG=roman_calculator=debug roman-calc-server run
//! ```

use std::sync::Once;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

use crate::config::{LogFormat, LoggingConfig};

static INIT: Once = Once::new();

/// Install the global subscriber. Only the first call takes effect.
///
/// Output goes to stderr so that `--print-config` and `check` keep stdout clean.
/// `logging.format: json` switches to one JSON object per event.
pub fn init(config: &LoggingConfig) {
    INIT.call_once(|| {
        let filter = if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::try_new(config.filter_directives()).unwrap_or_else(|e| {
                eprintln!("invalid logging configuration ({e}), falling back to 'info'");
                EnvFilter::new("info")
            })
        };

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_level(true)
            .with_writer(std::io::stderr);
        let fmt_layer: Box<dyn Layer<Registry> + Send + Sync> = match config.format {
            LogFormat::Text => fmt_layer.boxed(),
            LogFormat::Json => fmt_layer.json().boxed(),
        };

        tracing_subscriber::registry()
            .with(fmt_layer.with_filter(filter))
            .init();
    });
}
