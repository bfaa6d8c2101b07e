//! Audit logging setup.
//!
//! `init` is called once at process start and returns a `LogHandle`.
//! The handle owns the background writer for the log file and a
//! `tracing::Dispatch`; `VaultSession` keeps a clone of that dispatch and
//! scopes its events to it, so library code never depends on global
//! logger state.
//!
//! Nothing secret is ever handed to the logger: no password, derived key
//! or plaintext appears in any event.

use std::path::Path;

use tracing::Dispatch;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Settings;
use crate::errors::{Result, VaultGuardError};

/// Process-wide logging handle.
///
/// Keep it alive until the process exits; dropping it flushes and
/// closes the log file.
pub struct LogHandle {
    dispatch: Dispatch,
    _guard: Option<WorkerGuard>,
}

impl LogHandle {
    /// A handle whose events go nowhere (tests, embedding).
    pub fn disabled() -> Self {
        Self {
            dispatch: Dispatch::none(),
            _guard: None,
        }
    }

    /// Wrap an existing dispatch, e.g. a test subscriber.
    pub fn from_dispatch(dispatch: Dispatch) -> Self {
        Self {
            dispatch,
            _guard: None,
        }
    }

    /// The dispatch events should be sent to.
    pub fn dispatch(&self) -> &Dispatch {
        &self.dispatch
    }

    /// Also route events emitted outside a session (CLI commands) here.
    ///
    /// May only succeed once per process.
    pub fn install_global(&self) -> Result<()> {
        tracing::dispatcher::set_global_default(self.dispatch.clone())
            .map_err(|e| VaultGuardError::ConfigError(format!("logging already initialized: {e}")))
    }
}

/// Open the append-only log file named in `settings` and build the handle.
///
/// Lines carry a timestamp and level, no ANSI colours.  `RUST_LOG`
/// overrides `settings.log_level`.
pub fn init(settings: &Settings) -> Result<LogHandle> {
    let log_path = Path::new(&settings.log_file);
    let file_name = log_path
        .file_name()
        .ok_or_else(|| {
            VaultGuardError::ConfigError(format!(
                "log_file '{}' does not name a file",
                settings.log_file
            ))
        })?
        .to_string_lossy()
        .into_owned();
    let log_dir = match log_path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(log_dir)
        .map_err(|e| {
            VaultGuardError::ConfigError(format!(
                "cannot open log file {}: {e}",
                log_path.display()
            ))
        })?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&settings.log_level).map_err(|e| {
            VaultGuardError::ConfigError(format!(
                "invalid log_level '{}': {e}",
                settings.log_level
            ))
        })?,
    };

    let subscriber = tracing_subscriber::registry().with(filter).with(
        fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_target(false),
    );

    Ok(LogHandle {
        dispatch: Dispatch::new(subscriber),
        _guard: Some(guard),
    })
}
