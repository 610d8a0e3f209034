// src/core/logging.rs
use crate::core::config::Config;
use crate::core::constants::DEFAULT_LOG_LEVEL;
use log::LevelFilter;

/// Handle returned by [`init_with`]; remembers whether `RUST_LOG` owns the
/// level so the config cannot override it.
#[derive(Debug, Clone, Copy)]
pub struct LogSetup {
    env_controlled: bool,
}

impl LogSetup {
    /// Applies the configured level unless `RUST_LOG` was given.
    pub fn apply_config(&self, config: &Config) {
        if self.env_controlled {
            log::debug!("RUST_LOG set, ignoring config log_level");
            return;
        }
        log::set_max_level(config.log_filter());
        log::debug!("Log level set to {}", config.log_filter());
    }
}

pub fn init() -> LogSetup {
    init_with(std::env::var("RUST_LOG").ok().as_deref())
}

/// Installs the logger before anything else runs, so config loading can
/// already report problems. Without `RUST_LOG` every record reaches the
/// logger and `log::max_level` does the filtering.
pub fn init_with(rust_log: Option<&str>) -> LogSetup {
    let mut builder = env_logger::Builder::new();
    match rust_log {
        Some(filters) => builder.parse_filters(filters),
        None => builder.filter_level(LevelFilter::Trace),
    };
    builder.format_timestamp_millis();

    let logger = builder.build();
    let max_level = match rust_log {
        Some(_) => logger.filter(),
        None => DEFAULT_LOG_LEVEL.parse().unwrap_or(LevelFilter::Info),
    };

    if log::set_boxed_logger(Box::new(logger)).is_ok() {
        log::set_max_level(max_level);
    } else {
        eprintln!("Logger already initialized");
    }

    LogSetup {
        env_controlled: rust_log.is_some(),
    }
}
