// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The delimited numeric form of a [`Color`]: `red||green||blue||alpha`, eg:
//! `1.0||0.5||0.0||1.0`. Named colors (see [`NAMED_COLORS`]) are also accepted when
//! parsing, and they take precedence over the delimited grammar.
//!
//! [`NAMED_COLORS`]: crate::NAMED_COLORS

use std::fmt::{Display, Formatter, Result as FmtResult};

use strum::IntoEnumIterator;

use crate::{Channel, Color, ColorParseError, OutOfRangePolicy, lookup_named_color};

pub const CHANNEL_DELIMITER: &str = "||";

/// Uses the shortest representation that round trips, and integral values keep their
/// trailing `.0`, eg: `1.0||0.0||0.0||1.0`.
impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let [red, green, blue, alpha] = self.channels();
        write!(
            f,
            "{red:?}{CHANNEL_DELIMITER}{green:?}{CHANNEL_DELIMITER}{blue:?}{CHANNEL_DELIMITER}{alpha:?}"
        )
    }
}

#[must_use]
pub fn to_delimited_string(color: &Color) -> String { color.to_string() }

/// Parse a named color or the delimited numeric form. Out of range channel values are
/// passed through unchanged. Use [`ColorCodec`](crate::ColorCodec) for other policies.
///
/// # Errors
///
/// - [`ColorParseError::InvalidStringFormat`] if the input isn't a named color and it
///   doesn't split into exactly 4 segments.
/// - [`ColorParseError::InvalidChannelValue`] for the first channel (in red, green,
///   blue, alpha order) whose segment isn't a floating point number.
pub fn parse_color(input: &str) -> Result<Color, ColorParseError> {
    parse_color_with_policy(input, OutOfRangePolicy::default())
}

/// # Errors
///
/// Same as [`parse_color`], and additionally [`ColorParseError::ChannelOutOfRange`]
/// when `policy` is [`OutOfRangePolicy::Reject`].
pub fn parse_color_with_policy(
    input: &str,
    policy: OutOfRangePolicy,
) -> Result<Color, ColorParseError> {
    if let Some(color) = lookup_named_color(input) {
        // % is Display, ? is Debug.
        tracing::debug!(message = "🎨 Matched named color", input = %input);
        return Ok(color);
    }

    let segments: Vec<&str> = input.split(CHANNEL_DELIMITER).collect();
    let Ok(segments) = <[&str; 4]>::try_from(segments.as_slice()) else {
        return Err(ColorParseError::InvalidStringFormat {
            segment_count: segments.len(),
        });
    };

    // Parse every segment first, then report the first failure in channel order.
    let parsed = segments.map(|segment| segment.parse::<f64>().ok());

    let mut values = [0.0; 4];
    for (index, channel) in Channel::iter().enumerate() {
        values[index] =
            parsed[index].ok_or_else(|| ColorParseError::InvalidChannelValue {
                channel,
                segment: segments[index].to_string(),
            })?;
    }

    for (index, channel) in Channel::iter().enumerate() {
        values[index] = policy.apply(channel, values[index])?;
    }

    let [red, green, blue, alpha] = values;
    Ok(Color::new(red, green, blue, alpha))
}

impl std::str::FromStr for Color {
    type Err = ColorParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> { parse_color(input) }
}

impl TryFrom<&str> for Color {
    type Error = ColorParseError;

    fn try_from(input: &str) -> Result<Self, Self::Error> { parse_color(input) }
}

/// Used by serde to deserialize a [`Color`].
impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(input: String) -> Result<Self, Self::Error> { parse_color(&input) }
}

/// Used by serde to serialize a [`Color`].
impl From<Color> for String {
    fn from(color: Color) -> Self { color.to_string() }
}
