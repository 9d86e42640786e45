//! Log subscriber setup
//!
//! The subscriber is installed once in `main` with a reloadable filter; the
//! pipeline's log stage later adjusts it to the `-v` count. `RUST_LOG`, when
//! set, wins over the flag.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry, fmt, reload};

/// Map the `-v` count to a level
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Handle to the installed filter
#[derive(Clone, Default)]
pub struct LogHandle {
    reload: Option<reload::Handle<EnvFilter, Registry>>,
    env_override: bool,
}

impl LogHandle {
    /// Handle that ignores verbosity changes (tests, embedding)
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn set_verbosity(&self, verbosity: u8) {
        let Some(handle) = &self.reload else {
            return;
        };
        if self.env_override {
            return;
        }

        let filter = EnvFilter::default().add_directive(level_for(verbosity).into());
        if let Err(e) = handle.reload(filter) {
            tracing::warn!("Failed to apply log level: {}", e);
        }
    }
}

/// Install the global subscriber, writing to stderr
pub fn init() -> LogHandle {
    let env_override = std::env::var_os(EnvFilter::DEFAULT_ENV).is_some();
    let initial = if env_override {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::default().add_directive(LevelFilter::WARN.into())
    };

    let (filter, handle) = reload::Layer::new(initial);
    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .is_ok();

    LogHandle {
        reload: installed.then_some(handle),
        env_override,
    }
}
