// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod channel_value_kind;
pub mod color_codec_error;
pub mod color_value;
pub mod delimited_color_parser;
pub mod hex_color_parser;
pub mod named_colors;

// Re-export.
pub use channel_value_kind::*;
pub use color_codec_error::*;
pub use color_value::*;
pub use delimited_color_parser::*;
pub use hex_color_parser::*;
pub use named_colors::*;
