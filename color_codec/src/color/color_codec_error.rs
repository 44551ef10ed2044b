// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Errors returned when a string can't be turned into a [`Color`].
//!
//! All other operations in this crate are total. [`from_hex`] never fails (unparsable
//! input is black), and neither do the channel readers.
//!
//! [`Color`]: crate::Color
//! [`from_hex`]: crate::from_hex

use crate::Channel;

/// Errors from [`parse_color`], [`ColorCodec::parse_color`], and [`parse_hex_strict`].
///
/// | Variant                   | Cause                                                  |
/// | :------------------------ | :----------------------------------------------------- |
/// | [`InvalidStringFormat`]   | Delimited form does not split into exactly 4 segments |
/// | [`InvalidChannelValue`]   | A segment is not a floating point number               |
/// | [`ChannelOutOfRange`]     | [`OutOfRangePolicy::Reject`] and a value is not in 0..=1 |
/// | [`InvalidHexColorFormat`] | Strict hex input is not `#RRGGBB` or `RRGGBB`          |
///
/// [`parse_color`]: crate::parse_color
/// [`ColorCodec::parse_color`]: crate::ColorCodec::parse_color
/// [`parse_hex_strict`]: crate::parse_hex_strict
/// [`OutOfRangePolicy::Reject`]: crate::OutOfRangePolicy::Reject
/// [`InvalidStringFormat`]: Self::InvalidStringFormat
/// [`InvalidChannelValue`]: Self::InvalidChannelValue
/// [`ChannelOutOfRange`]: Self::ChannelOutOfRange
/// [`InvalidHexColorFormat`]: Self::InvalidHexColorFormat
#[derive(Debug, Clone, PartialEq, thiserror::Error, miette::Diagnostic)]
pub enum ColorParseError {
    #[error("🎨 Color string has {segment_count} segment(s), expected 4 separated by `||`")]
    #[diagnostic(
        code(r3bl_color_codec::invalid_string_format),
        help(
            "Use a named color (red, green, blue, yellow, orange, pink, black, gray) \
             or the form `red||green||blue||alpha`, eg: `1.0||0.5||0.0||1.0`"
        )
    )]
    InvalidStringFormat { segment_count: usize },

    #[error("🔢 Could not parse the {channel} channel value '{segment}' as a number")]
    #[diagnostic(
        code(r3bl_color_codec::invalid_channel_value),
        help("Each channel must be a decimal floating point literal, eg: `0.25`")
    )]
    InvalidChannelValue { channel: Channel, segment: String },

    #[error("📏 The {channel} channel value {value} is outside of 0.0 ..= 1.0")]
    #[diagnostic(
        code(r3bl_color_codec::channel_out_of_range),
        help("Use the `clamp` or `pass-through` out of range policy to accept this value")
    )]
    ChannelOutOfRange { channel: Channel, value: f64 },

    #[error("#️⃣ Invalid hex color '{input}'")]
    #[diagnostic(
        code(r3bl_color_codec::invalid_hex_color_format),
        help("Use exactly 6 hex digits with an optional `#` prefix, eg: `#ff8000`")
    )]
    InvalidHexColorFormat { input: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display_names_the_channel() {
        let error = ColorParseError::InvalidChannelValue {
            channel: Channel::Green,
            segment: "x".into(),
        };
        assert_eq!(
            error.to_string(),
            "🔢 Could not parse the green channel value 'x' as a number"
        );
    }

    #[test]
    fn test_diagnostic_code() {
        use miette::Diagnostic;

        let error = ColorParseError::InvalidStringFormat { segment_count: 3 };
        let code = error.code().map(|it| it.to_string());
        assert_eq!(
            code.as_deref(),
            Some("r3bl_color_codec::invalid_string_format")
        );
    }
}
