// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Add;

use crate::{Channel, ColorParseError};

/// What [`ColorCodec::parse_color`] does with a parsed channel value that is outside of
/// `0.0 ..= 1.0`.
///
/// [`ColorCodec::parse_color`]: crate::ColorCodec::parse_color
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum OutOfRangePolicy {
    /// Keep the value as is.
    #[default]
    PassThrough,
    /// Clamp the value into `0.0 ..= 1.0`. `NaN` is left unchanged.
    Clamp,
    /// Fail with [`ColorParseError::ChannelOutOfRange`]. `NaN` is rejected too.
    Reject,
}

impl OutOfRangePolicy {
    /// # Errors
    ///
    /// Returns [`ColorParseError::ChannelOutOfRange`] if `self` is [`Self::Reject`] and
    /// `value` isn't in `0.0 ..= 1.0`.
    pub fn apply(self, channel: Channel, value: f64) -> Result<f64, ColorParseError> {
        if (0.0..=1.0).contains(&value) {
            return Ok(value);
        }

        match self {
            Self::PassThrough => Ok(value),
            Self::Clamp => {
                let clamped = value.clamp(0.0, 1.0);
                // % is Display, ? is Debug.
                tracing::debug!(
                    message = "📏 Clamped channel value",
                    channel = %channel,
                    value = ?value,
                    clamped = ?clamped
                );
                Ok(clamped)
            }
            Self::Reject => Err(ColorParseError::ChannelOutOfRange { channel, value }),
        }
    }
}

/// How [`ColorCodec::from_hex`] reads its input.
///
/// [`ColorCodec::from_hex`]: crate::ColorCodec::from_hex
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum HexParseMode {
    /// See [`from_hex`](crate::from_hex). Never fails.
    #[default]
    Lenient,
    /// See [`parse_hex_strict`](crate::parse_hex_strict).
    Strict,
}

/// Configuration for [`ColorCodec`](crate::ColorCodec). The default matches the
/// behavior of the free functions: out of range values pass through, and hex input is
/// scanned leniently.
///
/// Anything that converts [`Into<CodecConfig>`] can be used to create a codec, and
/// configs can be merged with `+`:
///
/// ```
/// use r3bl_color_codec::{CodecConfig, HexParseMode, OutOfRangePolicy};
///
/// let config: CodecConfig = CodecConfig::from(OutOfRangePolicy::Clamp) + HexParseMode::Strict.into();
/// assert_eq!(config.out_of_range, OutOfRangePolicy::Clamp);
/// assert_eq!(config.hex_mode, HexParseMode::Strict);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CodecConfig {
    pub out_of_range: OutOfRangePolicy,
    pub hex_mode: HexParseMode,
}

mod codec_config_options {
    use super::*;

    impl From<OutOfRangePolicy> for CodecConfig {
        fn from(out_of_range: OutOfRangePolicy) -> Self {
            Self {
                out_of_range,
                ..Default::default()
            }
        }
    }

    impl From<HexParseMode> for CodecConfig {
        fn from(hex_mode: HexParseMode) -> Self {
            Self {
                hex_mode,
                ..Default::default()
            }
        }
    }

    /// Merge two [`CodecConfig`] instances. A field in `rhs` that is not the default
    /// clobbers the one in `self`, so the `rhs` has higher specificity.
    impl Add<CodecConfig> for CodecConfig {
        type Output = Self;

        fn add(self, rhs: Self) -> Self::Output {
            Self {
                out_of_range: if rhs.out_of_range == OutOfRangePolicy::default() {
                    self.out_of_range
                } else {
                    rhs.out_of_range
                },
                hex_mode: if rhs.hex_mode == HexParseMode::default() {
                    self.hex_mode
                } else {
                    rhs.hex_mode
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(OutOfRangePolicy::PassThrough, 1.5, Some(1.5))]
    #[test_case(OutOfRangePolicy::PassThrough, -0.5, Some(-0.5))]
    #[test_case(OutOfRangePolicy::Clamp, 1.5, Some(1.0))]
    #[test_case(OutOfRangePolicy::Clamp, -0.5, Some(0.0))]
    #[test_case(OutOfRangePolicy::Reject, 1.5, None)]
    #[test_case(OutOfRangePolicy::Reject, 0.5, Some(0.5))]
    #[test_case(OutOfRangePolicy::Reject, 1.0, Some(1.0))]
    fn test_apply(policy: OutOfRangePolicy, value: f64, expected: Option<f64>) {
        assert_eq!(policy.apply(Channel::Red, value).ok(), expected);
    }

    #[test]
    fn test_reject_names_channel() {
        assert_eq!(
            OutOfRangePolicy::Reject.apply(Channel::Alpha, 2.0),
            Err(ColorParseError::ChannelOutOfRange {
                channel: Channel::Alpha,
                value: 2.0
            })
        );
    }

    #[test]
    fn test_reject_nan() {
        assert!(OutOfRangePolicy::Reject.apply(Channel::Red, f64::NAN).is_err());
    }

    #[test]
    fn test_add_configs() {
        let clamp = CodecConfig::from(OutOfRangePolicy::Clamp);
        let strict = CodecConfig::from(HexParseMode::Strict);
        let default = CodecConfig::default();

        assert_eq!(default + clamp, clamp);
        assert_eq!(clamp + default, clamp);
        assert_eq!(
            clamp + strict,
            CodecConfig {
                out_of_range: OutOfRangePolicy::Clamp,
                hex_mode: HexParseMode::Strict,
            }
        );
        assert_eq!(
            clamp + CodecConfig::from(OutOfRangePolicy::Reject),
            CodecConfig::from(OutOfRangePolicy::Reject)
        );
    }
}
