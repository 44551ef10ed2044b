// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Derived readings of a [`Color`]. A reading is either the normalized channel
//! (`0.0 ..= 1.0`) or the standard one (normalized × 255).
//!
//! All readings are computed from the channels stored in the [`Color`], not from
//! whatever input was used to construct it.

use std::collections::HashMap;

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumCount, EnumIter};

use crate::{Color, STANDARD_SCALE};

/// One of the four components of a [`Color`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
}

/// Selects which reading [`get_channel_value`] returns.
///
/// [`ChannelValueKind::Hex`] is reserved. It is accepted by [`get_channel_value`] and
/// always yields `0.0`, and it is never a key in [`all_channel_values`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumCount,
    clap::ValueEnum,
)]
#[strum(serialize_all = "kebab-case")]
pub enum ChannelValueKind {
    NormalizedRed,
    NormalizedGreen,
    NormalizedBlue,
    NormalizedAlpha,
    StandardRed,
    StandardGreen,
    StandardBlue,
    StandardAlpha,
    Hex,
}

/// Placeholder returned for [`ChannelValueKind::Hex`].
pub const HEX_READING_PLACEHOLDER: f64 = 0.0;

/// The eight computed readings of a [`Color`], keyed by kind.
pub type ChannelValues = HashMap<ChannelValueKind, f64>;

impl ChannelValueKind {
    /// The channel this reading is derived from. [`None`] for [`Self::Hex`].
    #[must_use]
    pub const fn channel(self) -> Option<Channel> {
        match self {
            Self::NormalizedRed | Self::StandardRed => Some(Channel::Red),
            Self::NormalizedGreen | Self::StandardGreen => Some(Channel::Green),
            Self::NormalizedBlue | Self::StandardBlue => Some(Channel::Blue),
            Self::NormalizedAlpha | Self::StandardAlpha => Some(Channel::Alpha),
            Self::Hex => None,
        }
    }

    #[must_use]
    pub const fn is_standard(self) -> bool {
        matches!(
            self,
            Self::StandardRed | Self::StandardGreen | Self::StandardBlue | Self::StandardAlpha
        )
    }

    /// Every kind that has a computed reading, ie: all of them except [`Self::Hex`].
    pub fn computed() -> impl Iterator<Item = ChannelValueKind> {
        Self::iter().filter(|it| it.channel().is_some())
    }
}

impl Color {
    #[must_use]
    pub fn channel_value(&self, kind: ChannelValueKind) -> f64 {
        match kind.channel() {
            None => HEX_READING_PLACEHOLDER,
            Some(channel) => {
                let normalized = self.channel(channel);
                if kind.is_standard() {
                    normalized * STANDARD_SCALE
                } else {
                    normalized
                }
            }
        }
    }

    #[must_use]
    pub fn all_channel_values(&self) -> ChannelValues {
        ChannelValueKind::computed()
            .map(|kind| (kind, self.channel_value(kind)))
            .collect()
    }
}

/// Free function form of [`Color::channel_value`].
#[must_use]
pub fn get_channel_value(color: &Color, kind: ChannelValueKind) -> f64 {
    color.channel_value(kind)
}

/// Free function form of [`Color::all_channel_values`].
#[must_use]
pub fn all_channel_values(color: &Color) -> ChannelValues { color.all_channel_values() }

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use strum::EnumCount;
    use test_case::test_case;

    const COLOR: Color = Color::new(0.5, 0.25, 1.0, 0.2);

    #[test_case(ChannelValueKind::NormalizedRed, 0.5)]
    #[test_case(ChannelValueKind::NormalizedGreen, 0.25)]
    #[test_case(ChannelValueKind::NormalizedBlue, 1.0)]
    #[test_case(ChannelValueKind::NormalizedAlpha, 0.2)]
    #[test_case(ChannelValueKind::StandardRed, 127.5)]
    #[test_case(ChannelValueKind::StandardGreen, 63.75)]
    #[test_case(ChannelValueKind::StandardBlue, 255.0)]
    #[test_case(ChannelValueKind::StandardAlpha, 51.0)]
    #[test_case(ChannelValueKind::Hex, 0.0)]
    fn test_get_channel_value(kind: ChannelValueKind, expected: f64) {
        assert_eq!(get_channel_value(&COLOR, kind), expected);
    }

    #[test]
    fn test_all_channel_values_omits_hex() {
        let values = all_channel_values(&COLOR);
        assert_eq!(values.len(), ChannelValueKind::COUNT - 1);
        assert!(!values.contains_key(&ChannelValueKind::Hex));
        for (kind, value) in &values {
            assert_eq!(*value, COLOR.channel_value(*kind));
        }
    }

    #[test]
    fn test_channel_display_is_lowercase() {
        assert_eq!(Channel::Alpha.to_string(), "alpha");
        assert_eq!(ChannelValueKind::StandardRed.to_string(), "standard-red");
    }
}
