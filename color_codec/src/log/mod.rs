// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Tracing setup for the `color_codec` binary, and for tests that want to see the
//! library's `debug!` events. Logging is **disabled** unless you initialize it.
//!
//! Only the configuration types and the two initializers are public. Layer and file
//! appender plumbing stays inside this module.
//!
//! ```compile_fail
//! use r3bl_color_codec::try_create_layers;
//! ```

// Attach sources.
mod public_api;
mod rolling_file_appender_impl;
mod tracing_config;
mod tracing_init;

// Re-export.
pub use public_api::{try_initialize_logging_global, try_initialize_logging_thread_local};
pub use tracing_config::{DEFAULT_LOG_FILE_NAME, DisplayPreference, TracingConfig,
                         WriterConfig};
