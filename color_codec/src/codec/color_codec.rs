// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CodecConfig, Color, ColorParseError, HexParseMode, from_hex, parse_color_with_policy,
            parse_hex_strict};

/// Parses colors according to a [`CodecConfig`]. A codec created with
/// [`ColorCodec::default`] behaves exactly like [`parse_color`](crate::parse_color)
/// and [`from_hex`].
///
/// ```
/// use r3bl_color_codec::{Color, ColorCodec, OutOfRangePolicy};
///
/// let codec = ColorCodec::new(OutOfRangePolicy::Clamp);
/// assert_eq!(codec.parse_color("1.5||0.5||-1||1").unwrap(), Color::rgb(1.0, 0.5, 0.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColorCodec {
    config: CodecConfig,
}

impl ColorCodec {
    #[must_use]
    pub fn new(config: impl Into<CodecConfig>) -> Self {
        Self {
            config: config.into(),
        }
    }

    #[must_use]
    pub fn config(&self) -> CodecConfig { self.config }

    /// # Errors
    ///
    /// See [`parse_color_with_policy`]. The policy comes from
    /// [`CodecConfig::out_of_range`].
    pub fn parse_color(&self, input: &str) -> Result<Color, ColorParseError> {
        parse_color_with_policy(input, self.config.out_of_range)
    }

    /// # Errors
    ///
    /// Only in [`HexParseMode::Strict`], see [`parse_hex_strict`]. In
    /// [`HexParseMode::Lenient`] this always succeeds.
    pub fn from_hex(&self, input: &str) -> Result<Color, ColorParseError> {
        match self.config.hex_mode {
            HexParseMode::Lenient => Ok(from_hex(input)),
            HexParseMode::Strict => parse_hex_strict(input),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Channel, OutOfRangePolicy, parse_color};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_codec_matches_free_functions() {
        let codec = ColorCodec::default();
        for input in ["pink", "1.5||0||0||1", "0.1||0.2||0.3||0.4", "1||2"] {
            assert_eq!(codec.parse_color(input), parse_color(input));
        }
        for input in ["#ff8000", "junk", ""] {
            assert_eq!(codec.from_hex(input), Ok(from_hex(input)));
        }
    }

    #[test]
    fn test_reject_codec() {
        let codec = ColorCodec::new(OutOfRangePolicy::Reject);
        assert_eq!(
            codec.parse_color("0.5||0.5||0.5||1.01"),
            Err(ColorParseError::ChannelOutOfRange {
                channel: Channel::Alpha,
                value: 1.01
            })
        );
        // Named colors are always in range.
        assert_eq!(codec.parse_color("Orange"), parse_color("orange"));
    }

    #[test]
    fn test_strict_hex_codec() {
        let codec = ColorCodec::new(HexParseMode::Strict);
        assert_eq!(codec.from_hex("#00ff00"), Ok(Color::rgb(0.0, 1.0, 0.0)));
        assert!(codec.from_hex("color: #00ff00").is_err());
    }

    #[test]
    fn test_config_round_trip() {
        let config = CodecConfig::from(OutOfRangePolicy::Clamp) + HexParseMode::Strict.into();
        assert_eq!(ColorCodec::new(config).config(), config);
    }
}
