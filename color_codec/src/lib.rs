// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # `r3bl_color_codec`
//!
//! Convert an RGBA [`Color`] to and from its textual forms, and read its channels.
//!
//! | Form              | Example                     | Entry point                        |
//! | :---------------- | :-------------------------- | :--------------------------------- |
//! | Delimited numeric | `1.0\|\|0.5\|\|0.25\|\|1.0` | [`parse_color`], [`to_delimited_string`] |
//! | Named color       | `red`, `Gray`, `PINK`       | [`parse_color`], [`lookup_named_color`]  |
//! | Hex (lenient)     | `#ff8000`, `0xff8000`       | [`from_hex`]                       |
//! | Hex (strict)      | `#ff8000`, `ff8000`         | [`parse_hex_strict`]               |
//!
//! Every operation is a pure, synchronous transformation over an in-memory value. The
//! only shared state touched is the thread local RNG used by [`random_color`].
//!
//! ```
//! use r3bl_color_codec::{ChannelValueKind, Color, parse_color};
//!
//! let color = parse_color("1.0||0.5||0.0||1.0").unwrap();
//! assert_eq!(color.channel_value(ChannelValueKind::StandardGreen), 127.5);
//! assert_eq!(parse_color("RED").unwrap(), Color::rgb(1.0, 0.0, 0.0));
//! ```
//!
//! If you need to change how parsing treats out of range channels, or whether hex
//! input is scanned leniently, use [`ColorCodec`] with a [`CodecConfig`].

#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod cli;
pub mod codec;
pub mod color;
pub mod log;

// Re-export.
pub use codec::*;
pub use color::*;
pub use log::*;

/// Type alias for fallible operations outside of color parsing (logging setup, CLI).
/// Color parsing itself returns [`ColorParseError`] so callers can match on it.
pub type CommonResult<T> = miette::Result<T>;
