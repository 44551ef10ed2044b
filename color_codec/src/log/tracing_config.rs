// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Add;

use tracing_core::LevelFilter;

pub const DEFAULT_LOG_FILE_NAME: &str = "color_codec_log.txt";

/// Where display output (as opposed to file output) goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WriterConfig {
    #[default]
    None,
    Display(DisplayPreference),
    /// Path to the log file.
    File(String),
    DisplayAndFile(DisplayPreference, String),
}

/// Passed to [`try_initialize_logging_global`] and
/// [`try_initialize_logging_thread_local`], usually via one of the `From` impls below.
///
/// ```
/// use r3bl_color_codec::{DisplayPreference, TracingConfig, WriterConfig};
///
/// let level: TracingConfig = tracing::Level::DEBUG.into();
/// let display: TracingConfig = DisplayPreference::Stderr.into();
/// let config = level + display;
/// assert_eq!(
///     config.get_writer_config(),
///     WriterConfig::DisplayAndFile(DisplayPreference::Stderr, "color_codec_log.txt".into())
/// );
/// ```
///
/// [`try_initialize_logging_global`]: crate::try_initialize_logging_global
/// [`try_initialize_logging_thread_local`]: crate::try_initialize_logging_thread_local
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    pub level_filter: LevelFilter,
    pub writer_config: WriterConfig,
}

impl TracingConfig {
    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }
}

mod tracing_config_options {
    use super::*;

    impl From<tracing::Level> for TracingConfig {
        fn from(level: tracing::Level) -> Self {
            Self {
                level_filter: level.into(),
                writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
            }
        }
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
            Self {
                level_filter: LevelFilter::DEBUG,
                writer_config: WriterConfig::Display(preferred_display),
            }
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

    /// Merge two [`WriterConfig`] instances. A display or file setting in `rhs`
    /// clobbers the one in `self`, so the `rhs` has higher specificity:
    /// - `{a: "foo"} + {a: "bar"} = {a: "bar"}`.
    /// - `{a: None } + {a: "bar"} = {a: "bar"}`.
    /// - `{a: "foo"} + {a: None } = {a: "foo"}`.
    impl Add<WriterConfig> for WriterConfig {
        type Output = Self;

        fn add(self, rhs: WriterConfig) -> Self::Output {
            let (display_lhs, file_lhs) = self.split();
            let (display_rhs, file_rhs) = rhs.split();

            match (display_rhs.or(display_lhs), file_rhs.or(file_lhs)) {
                (Some(display), Some(file)) => Self::DisplayAndFile(display, file),
                (Some(display), None) => Self::Display(display),
                (None, Some(file)) => Self::File(file),
                (None, None) => Self::None,
            }
        }
    }

    impl WriterConfig {
        fn split(self) -> (Option<DisplayPreference>, Option<String>) {
            match self {
                WriterConfig::None => (None, None),
                WriterConfig::Display(display) => (Some(display), None),
                WriterConfig::File(file) => (None, Some(file)),
                WriterConfig::DisplayAndFile(display, file) => (Some(display), Some(file)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_add_writer_configs() {
        let stdout = DisplayPreference::Stdout;
        let stderr = DisplayPreference::Stderr;
        let fname = "log.txt".to_string();

        let none = WriterConfig::None;
        let display_stdout = WriterConfig::Display(stdout);
        let display_stderr = WriterConfig::Display(stderr);
        let file = WriterConfig::File(fname.clone());
        let display_stdout_and_file = WriterConfig::DisplayAndFile(stdout, fname.clone());
        let display_stderr_and_file = WriterConfig::DisplayAndFile(stderr, fname.clone());

        // No collision merge.
        assert_eq!(none.clone() + none.clone(), none);
        assert_eq!(display_stdout.clone() + none.clone(), display_stdout);
        assert_eq!(none.clone() + file.clone(), file);
        assert_eq!(file.clone() + display_stdout.clone(), display_stdout_and_file);
        assert_eq!(display_stdout.clone() + file.clone(), display_stdout_and_file);

        // Collision (rhs has higher specificity).
        assert_eq!(display_stdout.clone() + display_stderr.clone(), display_stderr);
        assert_eq!(
            display_stderr_and_file.clone() + display_stdout.clone(),
            display_stdout_and_file
        );
        assert_eq!(
            file.clone() + WriterConfig::File("other.txt".into()),
            WriterConfig::File("other.txt".into())
        );
        assert_eq!(
            display_stdout_and_file.clone() + display_stderr_and_file.clone(),
            display_stderr_and_file
        );
    }

    #[test]
    fn test_add_tracing_configs_keeps_more_verbose_level() {
        let info: TracingConfig = LevelFilter::INFO.into();
        let trace: TracingConfig = LevelFilter::TRACE.into();
        assert_eq!((info.clone() + trace.clone()).get_level_filter(), LevelFilter::TRACE);
        assert_eq!((trace + info).get_level_filter(), LevelFilter::TRACE);
    }
}
