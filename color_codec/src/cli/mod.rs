// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Argument model and command runner for the `color_codec` binary.

// Attach sources.
pub mod clap_config;
pub mod run_command;

// Re-export.
pub use clap_config::*;
pub use run_command::*;
