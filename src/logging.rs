//! Tracing setup for the terminal front-end.
//!
//! The subscriber is installed before configuration is read so that config
//! loading is itself traced. The filter sits behind a reload layer and is
//! swapped for the configured one afterwards unless `RUST_LOG` was set.

use crate::TrisConfig;
use derive_more::{Display, Error, From};
use tracing::debug;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt, reload};

/// Filter used until the configuration has been loaded.
const BOOTSTRAP_FILTER: &str = "warn";

/// Error raised while switching the active log filter.
#[derive(Debug, Display, Error, From)]
pub enum LoggingError {
    /// The configured filter string is not a valid directive list.
    #[display("Invalid log filter: {_0}")]
    Parse(ParseError),

    /// The installed subscriber could not be updated.
    #[display("Failed to reload log filter: {_0}")]
    Reload(reload::Error),
}

/// Handle to the live tracing filter.
#[derive(Debug)]
pub struct LogFilter {
    handle: reload::Handle<EnvFilter, Registry>,
    from_env: bool,
}

impl LogFilter {
    /// Installs the global subscriber, writing to stderr.
    ///
    /// Uses `RUST_LOG` when set, otherwise `warn` until
    /// [`LogFilter::apply_config`] is called.
    pub fn init() -> Self {
        let (layer, filter) = Self::layer(EnvFilter::try_from_default_env().ok());
        tracing_subscriber::registry()
            .with(layer)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
        filter
    }

    fn layer(env: Option<EnvFilter>) -> (reload::Layer<EnvFilter, Registry>, Self) {
        let from_env = env.is_some();
        let (layer, handle) =
            reload::Layer::new(env.unwrap_or_else(|| EnvFilter::new(BOOTSTRAP_FILTER)));
        (layer, Self { handle, from_env })
    }

    /// Switches to the configured filter. A filter from `RUST_LOG` is kept.
    ///
    /// # Errors
    ///
    /// Returns [`LoggingError::Parse`] if `log_filter` is malformed.
    pub fn apply_config(&self, config: &TrisConfig) -> Result<(), LoggingError> {
        if self.from_env {
            debug!("RUST_LOG set, ignoring configured log filter");
            return Ok(());
        }
        let filter = EnvFilter::try_new(config.log_filter())?;
        self.handle.reload(filter)?;
        debug!(filter = %config.log_filter(), "Applied configured log filter");
        Ok(())
    }

    /// The filter currently in effect, if the subscriber is still alive.
    pub fn current(&self) -> Option<String> {
        self.handle.with_current(|filter| filter.to_string()).ok()
    }
}
