// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! RGBA color with normalized `f64` channels.

use rand::{Rng, rngs::ThreadRng};
use serde::{Deserialize, Serialize};

use crate::Channel;

/// Multiplier between a normalized channel (0.0 ..= 1.0) and a standard one (0 ..= 255).
pub const STANDARD_SCALE: f64 = 255.0;

/// An RGBA color. Each channel is a normalized `f64`, nominally in `0.0 ..= 1.0`.
///
/// Values outside of that range are representable (parsing passes them through by
/// default, see [`OutOfRangePolicy`]). A [`Color`] is never mutated in place, every
/// "modifying" method returns a new value.
///
/// It serializes to the delimited form produced by [`to_delimited_string`], and
/// deserializes from anything [`parse_color`] accepts.
///
/// [`OutOfRangePolicy`]: crate::OutOfRangePolicy
/// [`to_delimited_string`]: crate::to_delimited_string
/// [`parse_color`]: crate::parse_color
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    red: f64,
    green: f64,
    blue: f64,
    alpha: f64,
}

/// Opaque black. This is also what [`from_hex`](crate::from_hex) yields for input
/// that has no hex digits in it.
impl Default for Color {
    fn default() -> Self { Self::rgb(0.0, 0.0, 0.0) }
}

impl Color {
    #[must_use]
    pub const fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Opaque color, alpha is `1.0`.
    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::new(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn red(&self) -> f64 { self.red }

    #[must_use]
    pub const fn green(&self) -> f64 { self.green }

    #[must_use]
    pub const fn blue(&self) -> f64 { self.blue }

    #[must_use]
    pub const fn alpha(&self) -> f64 { self.alpha }

    /// `[red, green, blue, alpha]`.
    #[must_use]
    pub const fn channels(&self) -> [f64; 4] { [self.red, self.green, self.blue, self.alpha] }

    #[must_use]
    pub const fn channel(&self, channel: Channel) -> f64 {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
            Channel::Alpha => self.alpha,
        }
    }

    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self::new(self.red, self.green, self.blue, alpha)
    }

    /// Build a color from standard (0 ..= 255) channel values, mapping each one
    /// linearly with `value / 255.0`.
    ///
    /// This is not the reciprocal `255 / value`, so `0` maps to `0.0` and
    /// `from_standard_rgba(128, 0, 0, 255)` is `(0.50196…, 0.0, 0.0, 1.0)`.
    #[must_use]
    pub fn from_standard_rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        let scale = |it: u8| f64::from(it) / STANDARD_SCALE;
        Self::new(scale(red), scale(green), scale(blue), scale(alpha))
    }

    /// See [`random_color`].
    #[must_use]
    pub fn random() -> Self { random_color() }
}

/// Standard (0 ..= 255) channel values. Any channel you don't set defaults to `255`,
/// so `StandardRgba::default()` is opaque white.
///
/// ```
/// use r3bl_color_codec::{Color, StandardRgba};
///
/// let color: Color = StandardRgba { red: 0, ..Default::default() }.into();
/// assert_eq!(color, Color::rgb(0.0, 1.0, 1.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StandardRgba {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Default for StandardRgba {
    fn default() -> Self {
        Self {
            red: 255,
            green: 255,
            blue: 255,
            alpha: 255,
        }
    }
}

impl From<StandardRgba> for Color {
    fn from(it: StandardRgba) -> Self {
        Color::from_standard_rgba(it.red, it.green, it.blue, it.alpha)
    }
}

/// Free function form of [`Color::from_standard_rgba`].
#[must_use]
pub fn from_standard_rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Color {
    Color::from_standard_rgba(red, green, blue, alpha)
}

/// Opaque color whose red, green, and blue channels are each drawn uniformly from
/// `0.0 ..= 1.0` using the thread local RNG. Use [`random_color_with`] and a seeded
/// RNG if you need reproducible output.
#[must_use]
pub fn random_color() -> Color {
    let mut rng: ThreadRng = rand::rng();
    random_color_with(&mut rng)
}

pub fn random_color_with(rng: &mut impl Rng) -> Color {
    Color::rgb(
        rng.random_range(0.0..=1.0),
        rng.random_range(0.0..=1.0),
        rng.random_range(0.0..=1.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::{SeedableRng, rngs::StdRng};
    use test_case::test_case;

    #[test]
    fn test_default_is_opaque_black() {
        assert_eq!(Color::default().channels(), [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_with_alpha_returns_new_value() {
        let opaque = Color::rgb(0.1, 0.2, 0.3);
        let translucent = opaque.with_alpha(0.5);
        assert_eq!(opaque.alpha(), 1.0);
        assert_eq!(translucent.channels(), [0.1, 0.2, 0.3, 0.5]);
    }

    #[test_case(255, 255, 255, 255, [1.0, 1.0, 1.0, 1.0])]
    #[test_case(0, 0, 0, 0, [0.0, 0.0, 0.0, 0.0])]
    #[test_case(51, 102, 204, 255, [0.2, 0.4, 0.8, 1.0])]
    fn test_from_standard_rgba_is_linear(r: u8, g: u8, b: u8, a: u8, expected: [f64; 4]) {
        let color = from_standard_rgba(r, g, b, a);
        assert_eq!(color.channels(), expected);
    }

    #[test]
    fn test_from_standard_rgba_is_not_reciprocal() {
        // A reciprocal mapping with integer division would give 1.0 here.
        let color = Color::from_standard_rgba(128, 255, 255, 255);
        assert!((color.red() - 128.0 / 255.0).abs() < f64::EPSILON);
        assert!(color.red() < 1.0);
    }

    #[test]
    fn test_standard_rgba_defaults_to_white() {
        assert_eq!(Color::from(StandardRgba::default()), Color::rgb(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_random_color_bounds() {
        for _ in 0..10_000 {
            let color = random_color();
            for channel in [color.red(), color.green(), color.blue()] {
                assert!((0.0..=1.0).contains(&channel), "{channel} out of range");
            }
            assert_eq!(color.alpha(), 1.0);
        }
    }

    #[test]
    fn test_random_color_with_seed_is_reproducible() {
        let lhs = random_color_with(&mut StdRng::seed_from_u64(42));
        let rhs = random_color_with(&mut StdRng::seed_from_u64(42));
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn test_channel_selects_component() {
        let color = Color::new(0.1, 0.2, 0.3, 0.4);
        assert_eq!(color.channel(Channel::Red), 0.1);
        assert_eq!(color.channel(Channel::Green), 0.2);
        assert_eq!(color.channel(Channel::Blue), 0.3);
        assert_eq!(color.channel(Channel::Alpha), 0.4);
    }
}
