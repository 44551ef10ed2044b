// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Parsers that turn a hex color string into a [`Color`]. There are two modes.
//!
//! | Mode    | Function             | Accepts                                        | On bad input |
//! | :------ | :------------------- | :--------------------------------------------- | :----------- |
//! | Lenient | [`from_hex`]         | First run of hex digits, anything before it is skipped | Black |
//! | Strict  | [`parse_hex_strict`] | `#RRGGBB` or `RRGGBB`, nothing else            | Error        |
//!
//! Both read the value as 24 bit `RRGGBB`, and the result is always opaque since hex
//! input carries no alpha.

use nom::{IResult,
          Parser,
          bytes::complete::{tag, tag_no_case, take_till, take_while_m_n, take_while1},
          combinator::{all_consuming, map_res, opt}};

use crate::{Color, ColorParseError};

/// Lenient hex parse. This never fails:
/// 1. Skip every character up to the first hex digit (so `#`, whitespace, or other
///    prefix junk are ignored).
/// 2. Skip an optional `0x` / `0X`.
/// 3. Take the run of hex digits and read it as a `u64`. A run that is too long to fit
///    saturates to [`u64::MAX`], which is white.
/// 4. Use bits 16..24 as red, 8..16 as green, 0..8 as blue.
///
/// If there are no hex digits at all the value is `0`, ie: opaque black.
///
/// ```
/// use r3bl_color_codec::{Color, from_hex};
///
/// assert_eq!(from_hex("#FF0000"), Color::rgb(1.0, 0.0, 0.0));
/// assert_eq!(from_hex("#xyz"), Color::rgb(0.0, 0.0, 0.0));
/// ```
#[must_use]
pub fn from_hex(input: &str) -> Color {
    let value = match scan_hex_run(input) {
        Ok((_, run)) => u64::from_str_radix(run, 16).unwrap_or(u64::MAX),
        Err(_) => {
            // % is Display, ? is Debug.
            tracing::debug!(message = "#️⃣ No hex digits found, using black", input = %input);
            0
        }
    };
    color_from_rgb_bits(value)
}

/// Strict hex parse. The input must be exactly 6 hex digits with an optional leading
/// `#`.
///
/// # Errors
///
/// Returns [`ColorParseError::InvalidHexColorFormat`] for anything else, eg: `#ff000`,
/// `ff00000`, `#gg0000`, ` #ff0000`.
pub fn parse_hex_strict(input: &str) -> Result<Color, ColorParseError> {
    match all_consuming(parse_hex_color).parse(input) {
        Ok((_, [red, green, blue])) => Ok(Color::from_standard_rgba(red, green, blue, 255)),
        Err(_) => Err(ColorParseError::InvalidHexColorFormat {
            input: input.to_string(),
        }),
    }
}

/// Parse function that generates `[red, green, blue]` bytes from `#RRGGBB` or
/// `RRGGBB`. Any remaining input is returned to the caller.
pub fn parse_hex_color(input: &str) -> IResult<&str, [u8; 3]> {
    let (input, _) = opt(tag("#")).parse(input)?;
    let (input, (red, green, blue)) = (
        helper_fns::parse_hex_seg,
        helper_fns::parse_hex_seg,
        helper_fns::parse_hex_seg,
    )
        .parse(input)?;
    Ok((input, [red, green, blue]))
}

/// Returns the first run of hex digits, after skipping prefix junk and an optional
/// `0x`.
fn scan_hex_run(input: &str) -> IResult<&str, &str> {
    let (input, _) = take_till(helper_fns::match_is_hex_digit).parse(input)?;
    let (input, _) = opt(tag_no_case("0x")).parse(input)?;
    take_while1(helper_fns::match_is_hex_digit).parse(input)
}

fn color_from_rgb_bits(value: u64) -> Color {
    let [.., red, green, blue] = value.to_be_bytes();
    Color::from_standard_rgba(red, green, blue, 255)
}

impl Color {
    /// `#rrggbb`, lowercase. Channels are clamped to `0.0 ..= 1.0` and rounded to the
    /// nearest byte. Alpha is not included.
    #[must_use]
    pub fn to_hex_string(&self) -> String {
        use std::fmt::Write as _;

        let [red, green, blue] = [self.red(), self.green(), self.blue()].map(to_byte);
        let mut acc = String::with_capacity(7);
        _ = write!(acc, "#{red:02x}{green:02x}{blue:02x}");
        acc
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_byte(normalized: f64) -> u8 {
    // NaN clamps to NaN, and `NaN as u8` is 0.
    (normalized.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Helper functions to match and parse hex digits. These are not [Parser] implementations.
mod helper_fns {
    use super::*;

    /// This function is used by [map_res] and it returns a [Result], not [IResult].
    pub fn parse_str_to_hex_num(input: &str) -> Result<u8, std::num::ParseIntError> {
        u8::from_str_radix(input, 16)
    }

    /// As long as this returns `true` items will be taken from the input.
    pub fn match_is_hex_digit(c: char) -> bool { c.is_ascii_hexdigit() }

    pub fn parse_hex_seg(input: &str) -> IResult<&str, u8> {
        map_res(
            take_while_m_n(2, 2, match_is_hex_digit),
            parse_str_to_hex_num,
        )
        .parse(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("FF0000", [1.0, 0.0, 0.0, 1.0])]
    #[test_case("00FF00", [0.0, 1.0, 0.0, 1.0])]
    #[test_case("0000ff", [0.0, 0.0, 1.0, 1.0])]
    #[test_case("#FF0000", [1.0, 0.0, 0.0, 1.0])]
    #[test_case("0xff0000", [1.0, 0.0, 0.0, 1.0])]
    #[test_case("  #00ff00;", [0.0, 1.0, 0.0, 1.0])]
    #[test_case("ff", [0.0, 0.0, 1.0, 1.0])]
    #[test_case("12FF0000", [1.0, 0.0, 0.0, 1.0])]
    fn test_from_hex(input: &str, expected: [f64; 4]) {
        assert_eq!(from_hex(input).channels(), expected);
    }

    #[test_case("")]
    #[test_case("#")]
    #[test_case("zzz")]
    #[test_case("0x")]
    fn test_from_hex_without_digits_is_black(input: &str) {
        assert_eq!(from_hex(input), Color::rgb(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_from_hex_stops_at_first_run() {
        // The scan reads `ab`, and ignores `12` after the space.
        assert_eq!(from_hex("#ab 12"), from_hex("0000ab"));
    }

    #[test]
    fn test_from_hex_overflow_saturates() {
        assert_eq!(from_hex("ffffffffffffffffff00"), Color::rgb(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_from_hex_mid_values() {
        let color = from_hex("#2F14DF");
        assert_eq!(color.red(), 47.0 / 255.0);
        assert_eq!(color.green(), 20.0 / 255.0);
        assert_eq!(color.blue(), 223.0 / 255.0);
    }

    #[test_case("#ff8000", [255, 128, 0])]
    #[test_case("ff8000", [255, 128, 0])]
    #[test_case("#2F14DF", [47, 20, 223])]
    fn test_parse_hex_strict(input: &str, expected: [u8; 3]) {
        let [r, g, b] = expected;
        assert_eq!(
            parse_hex_strict(input),
            Ok(Color::from_standard_rgba(r, g, b, 255))
        );
    }

    #[test_case("#ff000")]
    #[test_case("#ff00000")]
    #[test_case("#gg0000")]
    #[test_case(" #ff0000")]
    #[test_case("0xff0000")]
    #[test_case("")]
    fn test_parse_hex_strict_rejects(input: &str) {
        assert_eq!(
            parse_hex_strict(input),
            Err(ColorParseError::InvalidHexColorFormat {
                input: input.to_string()
            })
        );
    }

    #[test]
    fn test_parse_hex_color_returns_remainder() {
        let mut input = String::new();
        input.push_str("#2F14DF");
        input.push('🔅');

        let Ok((remainder, bytes)) = parse_hex_color(&input) else {
            panic!();
        };
        assert_eq!(remainder, "🔅");
        assert_eq!(bytes, [47, 20, 223]);
    }

    #[test_case(Color::rgb(1.0, 0.0, 0.0), "#ff0000")]
    #[test_case(Color::rgb(0.0, 0.5, 1.0), "#0080ff")]
    #[test_case(Color::rgb(2.0, -1.0, 0.2), "#ff0033")]
    fn test_to_hex_string(color: Color, expected: &str) {
        assert_eq!(color.to_hex_string(), expected);
    }

    #[test]
    fn test_to_hex_string_round_trips_through_strict_parse() {
        let color = Color::from_standard_rgba(12, 200, 99, 255);
        assert_eq!(parse_hex_strict(&color.to_hex_string()), Ok(color));
    }
}
