// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Add;

use strum_macros::Display;
use tracing_core::LevelFilter;

pub const DEFAULT_LOG_FILE_NAME: &str = "r3bl_containers.log";

/// Configure where the container events go, and at which level. Logging is **DISABLED**
/// unless one of the install functions in [`super::tracing_init`] is called with a
/// level filter other than [`LevelFilter::OFF`].
///
/// Every container operation emits a `TRACE` event, and overwrites, failures and
/// destroys also emit a `DEBUG` event. So [`LevelFilter::DEBUG`] is a good default, and
/// [`LevelFilter::TRACE`] shows every single operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

/// - `File` and `DisplayAndFile` hold the path of the log file. Eg: `/tmp/containers.log`
///   or `containers.log`.
/// - [`DisplayPreference`] is the preferred display to use for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    File(String),
    DisplayAndFile(DisplayPreference, String),
}

#[derive(Debug, Display, Copy, Clone, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

impl TracingConfig {
    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }
}

/// Instead of having lots of arguments, the install functions receive a type that
/// implements [`Into<TracingConfig>`], and the pieces compose with `+`:
///
/// ```no_run
/// use r3bl_containers::{DisplayPreference, TracingConfig, WriterConfig,
///                       try_initialize_logging_thread_local};
///
/// let config_1: TracingConfig = tracing::Level::TRACE.into();
/// let config_2: TracingConfig = DisplayPreference::Stderr.into();
/// let config_3: TracingConfig = WriterConfig::File("ring_buffer.log".to_string()).into();
///
/// let _guard = try_initialize_logging_thread_local(config_1 + config_2 + config_3);
/// ```
pub mod tracing_config_options {
    use super::{Add, DEFAULT_LOG_FILE_NAME, DisplayPreference, LevelFilter,
                TracingConfig, WriterConfig};

    impl From<tracing::Level> for TracingConfig {
        fn from(level: tracing::Level) -> Self { LevelFilter::from_level(level).into() }
    }

    impl From<LevelFilter> for TracingConfig {
        fn from(level_filter: LevelFilter) -> Self {
            Self {
                level_filter,
                writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
            }
        }
    }

    impl From<DisplayPreference> for TracingConfig {
        fn from(preferred_display: DisplayPreference) -> Self {
            WriterConfig::Display(preferred_display).into()
        }
    }

    impl From<WriterConfig> for TracingConfig {
        fn from(writer_config: WriterConfig) -> Self {
            Self {
                level_filter: LevelFilter::DEBUG,
                writer_config,
            }
        }
    }

    /// Merge two [`TracingConfig`] instances. The more verbose level filter wins.
    impl Add<TracingConfig> for TracingConfig {
        type Output = Self;

        fn add(self, rhs: Self) -> Self::Output {
            Self {
                level_filter: self.level_filter.max(rhs.level_filter),
                writer_config: self.writer_config + rhs.writer_config,
            }
        }
    }

    /// Merge two [`WriterConfig`] instances. The `rhs` has higher specificity, so it
    /// clobbers whatever it collides with in `self`:
    /// - `{display: Stdout} + {file: "a"} = {display: Stdout, file: "a"}`.
    /// - `{display: Stdout} + {display: Stderr} = {display: Stderr}`.
    /// - `{file: "a"} + None = {file: "a"}`.
    impl Add<WriterConfig> for WriterConfig {
        type Output = Self;

        fn add(self, rhs: WriterConfig) -> Self::Output {
            use WriterConfig::{Display, DisplayAndFile, File, None};

            match (self, rhs) {
                // No collision merge.
                (None, wc_rhs) => wc_rhs,
                (wc_lhs, None) => wc_lhs,
                (Display(dp_lhs), File(f_rhs)) => DisplayAndFile(dp_lhs, f_rhs),
                (File(f_lhs), Display(dp_rhs)) => DisplayAndFile(dp_rhs, f_lhs),

                // Collision (rhs has higher specificity).
                (Display(_) | File(_) | DisplayAndFile(..), DisplayAndFile(dp, f)) => {
                    DisplayAndFile(dp, f)
                }
                (Display(_), Display(dp_rhs)) => Display(dp_rhs),
                (File(_), File(f_rhs)) => File(f_rhs),
                (DisplayAndFile(_, f_lhs), Display(dp_rhs)) => {
                    DisplayAndFile(dp_rhs, f_lhs)
                }
                (DisplayAndFile(dp_lhs, _), File(f_rhs)) => DisplayAndFile(dp_lhs, f_rhs),
            }
        }
    }
}
