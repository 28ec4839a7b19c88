//! Color parsing and conversion for the swatch tooltips.
//!
//! Swatch colors arrive as strict `#RRGGBB` identifiers. This module turns
//! them into RGB and HSV values and formats the labels shown in the
//! color tooltip.

use std::fmt;

/// An RGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to HSV.
    pub fn to_hsv(self) -> Hsv {
        rgb_to_hsv(self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.r, self.g, self.b)
    }
}

/// An HSV color rounded to whole display units.
///
/// Hue is in degrees `[0, 360)`, saturation and value are percentages `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Hsv {
    pub h: u16,
    pub s: u8,
    pub v: u8,
}

impl Hsv {
    pub const fn new(h: u16, s: u8, v: u8) -> Self {
        Self { h, s, v }
    }
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°, {}%, {}%", self.h, self.s, self.v)
    }
}

/// Parse a `#RRGGBB` color identifier.
///
/// The leading `#` is optional and hex digits are case-insensitive. Any
/// other shape (3-digit shorthand, wrong length, stray characters) is
/// rejected; this is not a general CSS color parser.
pub fn parse_color(input: &str) -> Option<Rgb> {
    let digits = input.strip_prefix('#').unwrap_or(input).as_bytes();
    if digits.len() != 6 {
        return None;
    }

    let pair = |i: usize| -> Option<u8> {
        let hi = hex_digit(digits[i])?;
        let lo = hex_digit(digits[i + 1])?;
        Some(hi << 4 | lo)
    };

    Some(Rgb::new(pair(0)?, pair(2)?, pair(4)?))
}

fn hex_digit(byte: u8) -> Option<u8> {
    char::from(byte)
        .to_digit(16)
        .and_then(|d| u8::try_from(d).ok())
}

/// Convert RGB to HSV.
///
/// When two channels share the maximum, the hue sector is chosen by
/// channel priority red, then green, then blue.
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> Hsv {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);

    let (rf, gf, bf) = (unit(r), unit(g), unit(b));
    let (maxf, minf) = (unit(max), unit(min));
    let diff = maxf - minf;

    let s = if max == 0 { 0.0 } else { diff / maxf };

    let h = if max == min {
        0.0
    } else if max == r {
        ((gf - bf) / diff + if g < b { 6.0 } else { 0.0 }) / 6.0
    } else if max == g {
        ((bf - rf) / diff + 2.0) / 6.0
    } else {
        ((rf - gf) / diff + 4.0) / 6.0
    };

    // Hues a hair below a full turn round up to 360
    let degrees = (h * 360.0).round() as u16 % 360;

    Hsv {
        h: degrees,
        s: (s * 100.0).round() as u8,
        v: (maxf * 100.0).round() as u8,
    }
}

fn unit(channel: u8) -> f64 {
    f64::from(channel) / 255.0
}

/// Strip one leading `#` from a color identifier.
pub fn bare_hex(identifier: &str) -> &str {
    identifier.strip_prefix('#').unwrap_or(identifier)
}

/// Everything the color tooltip displays for one swatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorInfo {
    /// The identifier as given, uppercased
    pub hex: String,
    pub rgb: Rgb,
    pub hsv: Hsv,
}

impl ColorInfo {
    /// Build the tooltip data for a color identifier, or `None` if it is malformed.
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        let rgb = parse_color(identifier)?;
        Some(Self {
            hex: identifier.to_uppercase(),
            rgb,
            hsv: rgb.to_hsv(),
        })
    }

    /// Labels in display order: hex, RGB, HSV.
    pub fn lines(&self) -> Vec<String> {
        vec![self.hex.clone(), self.rgb.to_string(), self.hsv.to_string()]
    }
}
