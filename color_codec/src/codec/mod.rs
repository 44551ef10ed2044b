// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod codec_config;
pub mod color_codec;

// Re-export.
pub use codec_config::*;
pub use color_codec::*;
