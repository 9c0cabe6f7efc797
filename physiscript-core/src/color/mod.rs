//! Color model and conversions.
//!
//! A [`Color`] is stored in normalized RGBA form: every channel is an `f64` in
//! `[0, 1]`. Colors are created either from four floats with [`Color::new`] or
//! through one of the conversion factories (8-bit bytes, packed integers,
//! `#rrggbb`/`0xrrggbb` strings, named colors). [`Color::create`] accepts any
//! [`ColorLike`] value and picks the right factory.

pub mod display;
pub mod like;
pub mod named;
pub mod parse;

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{PhysiscriptError, Result};

pub use display::ColorDisplayMode;
pub use like::ColorLike;

/// An immutable RGBA color with normalized channels.
///
/// Equality and hashing are structural over the four channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    red: f64,
    green: f64,
    blue: f64,
    alpha: f64,
}

// Channels are never NaN, so equality is total.
impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for channel in self.to_normalized_rgba_array() {
            channel.to_bits().hash(state);
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl Color {
    /// Opaque black.
    pub const BLACK: Color = Color::raw(0.0, 0.0, 0.0, 1.0);

    /// Opaque white.
    pub const WHITE: Color = Color::raw(1.0, 1.0, 1.0, 1.0);

    /// Fully transparent black.
    pub const TRANSPARENT: Color = Color::raw(0.0, 0.0, 0.0, 0.0);

    const fn raw(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Color {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates a color from normalized channels.
    ///
    /// Fails with [`PhysiscriptError::InvalidColorValue`] if any channel lies
    /// outside `[0, 1]` (bounds inclusive) or is NaN.
    pub fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Result<Self> {
        Ok(Color::raw(
            unit_channel("red", red)?,
            unit_channel("green", green)?,
            unit_channel("blue", blue)?,
            unit_channel("alpha", alpha)?,
        ))
    }

    /// Creates a fully opaque color from normalized channels.
    pub fn opaque(red: f64, green: f64, blue: f64) -> Result<Self> {
        Color::new(red, green, blue, 1.0)
    }

    /// Creates an opaque color from 8-bit channels.
    pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Color::from_rgba8(red, green, blue, u8::MAX)
    }

    /// Creates a color from 8-bit channels.
    pub fn from_rgba8(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Color::raw(
            byte_to_unit(red),
            byte_to_unit(green),
            byte_to_unit(blue),
            byte_to_unit(alpha),
        )
    }

    /// Creates an opaque color from integer channels, each in `[0, 255]`.
    pub fn from_rgb(red: i64, green: i64, blue: i64) -> Result<Self> {
        Ok(Color::from_rgb8(
            byte_channel("red", red)?,
            byte_channel("green", green)?,
            byte_channel("blue", blue)?,
        ))
    }

    /// Creates a color from integer channels, each in `[0, 255]`.
    pub fn from_rgba(red: i64, green: i64, blue: i64, alpha: i64) -> Result<Self> {
        Ok(Color::from_rgba8(
            byte_channel("red", red)?,
            byte_channel("green", green)?,
            byte_channel("blue", blue)?,
            byte_channel("alpha", alpha)?,
        ))
    }

    /// Creates a color from a 3-byte (RGB) or 4-byte (RGBA) buffer.
    pub fn from_bytes(buffer: &[u8]) -> Result<Self> {
        match *buffer {
            [r, g, b] => Ok(Color::from_rgb8(r, g, b)),
            [r, g, b, a] => Ok(Color::from_rgba8(r, g, b, a)),
            _ => Err(PhysiscriptError::InvalidColorFormat(format!(
                "invalid bytes format for color: {:?} (expected 3 or 4 bytes, got {})",
                buffer,
                buffer.len()
            ))),
        }
    }

    /// Creates a color from a packed `0xRRGGBBAA` integer.
    ///
    /// Fails with [`PhysiscriptError::InvalidColorValue`] unless the value is
    /// in `[0, 0xFFFFFFFF]`.
    pub fn from_int(value: i128) -> Result<Self> {
        let packed = u32::try_from(value).map_err(|_| {
            PhysiscriptError::InvalidColorValue(format!(
                "an integer for an RGBA color must be between 0 and 0xFFFFFFFF, got {value}"
            ))
        })?;
        Ok(Color::from_packed(packed))
    }

    /// Creates a color from a packed `0xRRGGBBAA` value.
    pub fn from_packed(value: u32) -> Self {
        let [r, g, b, a] = value.to_be_bytes();
        Color::from_rgba8(r, g, b, a)
    }

    /// Parses `#rrggbb` or `#rrggbbaa`.
    pub fn from_html(text: &str) -> Result<Self> {
        parse::parse_html(text).ok_or_else(|| {
            PhysiscriptError::InvalidColorFormat(format!("invalid HTML format for color: '{text}'"))
        })
    }

    /// Parses `0xrrggbb` or `0xrrggbbaa` (the `x` may be upper-case).
    pub fn from_hex(text: &str) -> Result<Self> {
        parse::parse_hex(text).ok_or_else(|| {
            PhysiscriptError::InvalidColorFormat(format!("invalid HEX format for color: '{text}'"))
        })
    }

    /// Looks up a named color such as `"light-sky-blue3"`.
    pub fn from_name(name: &str) -> Option<Self> {
        named::lookup(name).map(|[r, g, b, a]| Color::from_rgba8(r, g, b, a))
    }

    /// All recognized color names, sorted lexicographically.
    pub fn names() -> Vec<&'static str> {
        named::names().collect()
    }

    pub fn red(&self) -> f64 {
        self.red
    }

    pub fn green(&self) -> f64 {
        self.green
    }

    pub fn blue(&self) -> f64 {
        self.blue
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// 8-bit RGB channels, each rounded half away from zero.
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        (
            unit_to_byte(self.red),
            unit_to_byte(self.green),
            unit_to_byte(self.blue),
        )
    }

    /// 8-bit RGBA channels, each rounded half away from zero.
    pub fn to_rgba(&self) -> (u8, u8, u8, u8) {
        let (r, g, b) = self.to_rgb();
        (r, g, b, unit_to_byte(self.alpha))
    }

    pub fn to_normalized_rgb(&self) -> (f64, f64, f64) {
        (self.red, self.green, self.blue)
    }

    pub fn to_normalized_rgba(&self) -> (f64, f64, f64, f64) {
        (self.red, self.green, self.blue, self.alpha)
    }

    /// Normalized channels as an array, the layout graphics APIs take for a
    /// clear color.
    pub fn to_normalized_rgba_array(&self) -> [f64; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }

    /// Packs the rounded 8-bit channels as `0xRRGGBBAA`.
    pub fn to_packed_int(&self) -> u32 {
        let (r, g, b, a) = self.to_rgba();
        u32::from_be_bytes([r, g, b, a])
    }

    /// Formats the color as `#RRGGBBAA`.
    pub fn to_html(&self) -> String {
        format!("#{:08X}", self.to_packed_int())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Color(red={}, green={}, blue={}, alpha={})",
            self.red, self.green, self.blue, self.alpha
        )
    }
}

fn unit_channel(name: &str, value: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&value) {
        // Folds -0.0 into +0.0 so equal colors hash identically.
        Ok(value + 0.0)
    } else {
        Err(PhysiscriptError::InvalidColorValue(format!(
            "{name} channel must be normalized (between 0 and 1), got {value}"
        )))
    }
}

fn byte_channel(name: &str, value: i64) -> Result<u8> {
    u8::try_from(value).map_err(|_| {
        PhysiscriptError::InvalidColorValue(format!(
            "{name} channel must be between 0 and 255, got {value}"
        ))
    })
}

fn byte_to_unit(value: u8) -> f64 {
    f64::from(value) / 255.0
}

fn unit_to_byte(value: f64) -> u8 {
    (value * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_new_accepts_inclusive_bounds() {
        let color = Color::new(0.0, 1.0, 0.5, 1.0).unwrap();
        assert_eq!(color.to_normalized_rgba(), (0.0, 1.0, 0.5, 1.0));

        let color = Color::opaque(0.25, 0.5, 0.75).unwrap();
        assert_eq!(color.alpha(), 1.0);
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        let err = Color::opaque(1.1, 0.0, 0.0).unwrap_err();
        assert!(matches!(err, PhysiscriptError::InvalidColorValue(_)));
        assert!(err.to_string().contains("red"));

        assert!(Color::new(0.0, -0.01, 0.0, 1.0).is_err());
        assert!(Color::new(0.0, 0.0, 2.0, 1.0).is_err());
        assert!(Color::new(0.0, 0.0, 0.0, 1.5).is_err());
        assert!(Color::new(f64::NAN, 0.0, 0.0, 1.0).is_err());
        assert!(Color::new(0.0, f64::INFINITY, 0.0, 1.0).is_err());
    }

    #[test]
    fn test_negative_zero_hashes_like_zero() {
        let a = Color::opaque(-0.0, 0.0, 0.0).unwrap();
        let b = Color::opaque(0.0, 0.0, 0.0).unwrap();
        assert_eq!(a, b);

        let set: HashSet<Color> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_from_rgb_bounds() {
        assert_eq!(Color::from_rgb(255, 255, 255).unwrap(), Color::WHITE);
        assert_eq!(Color::from_rgb(0, 0, 0).unwrap(), Color::BLACK);

        let err = Color::from_rgb(256, 0, 0).unwrap_err();
        assert!(matches!(err, PhysiscriptError::InvalidColorValue(_)));
        assert!(Color::from_rgb(0, -1, 0).is_err());
        assert!(Color::from_rgba(0, 0, 0, 300).is_err());
    }

    #[test]
    fn test_from_rgba_scales_by_255() {
        let color = Color::from_rgba(0, 51, 102, 255).unwrap();
        assert_eq!(color.to_normalized_rgba(), (0.0, 0.2, 0.4, 1.0));
    }

    #[test]
    fn test_from_bytes_lengths() {
        assert_eq!(
            Color::from_bytes(&[255, 255, 255]).unwrap(),
            Color::opaque(1.0, 1.0, 1.0).unwrap()
        );
        assert_eq!(
            Color::from_bytes(&[0, 128, 0, 200]).unwrap(),
            Color::from_rgba(0, 128, 0, 200).unwrap()
        );

        for bad in [&[][..], &[1u8][..], &[1, 2][..], &[1, 2, 3, 4, 5][..]] {
            let err = Color::from_bytes(bad).unwrap_err();
            assert!(matches!(err, PhysiscriptError::InvalidColorFormat(_)));
        }
    }

    #[test]
    fn test_from_int_byte_order() {
        let color = Color::from_int(0x4566FFFF).unwrap();
        assert_eq!(color, Color::from_rgba(0x45, 0x66, 0xFF, 0xFF).unwrap());
        assert_eq!(color.to_rgba(), (0x45, 0x66, 0xFF, 0xFF));

        assert_eq!(Color::from_int(0).unwrap(), Color::TRANSPARENT);
        assert_eq!(Color::from_int(0xFFFFFFFF).unwrap(), Color::WHITE);
    }

    #[test]
    fn test_from_int_out_of_range() {
        for value in [-1, 0x1_0000_0000, i128::MAX, i128::MIN] {
            let err = Color::from_int(value).unwrap_err();
            assert!(matches!(err, PhysiscriptError::InvalidColorValue(_)));
        }
    }

    #[test]
    fn test_packed_int_inverse() {
        for value in [0u32, 1, 0xFF, 0x12345678, 0x80808080, 0xDEADBEEF, u32::MAX] {
            assert_eq!(Color::from_packed(value).to_packed_int(), value);
        }
    }

    #[test]
    fn test_to_rgb_rounds_half_away_from_zero() {
        // 0.5 * 255 = 127.5
        let color = Color::opaque(0.5, 0.5, 0.5).unwrap();
        assert_eq!(color.to_rgb(), (128, 128, 128));

        let color = Color::new(0.2, 0.4, 0.6, 0.8).unwrap();
        assert_eq!(color.to_rgba(), (51, 102, 153, 204));
    }

    #[test]
    fn test_every_byte_round_trips() {
        for b in 0..=u8::MAX {
            let color = Color::from_rgba8(b, b, b, b);
            assert_eq!(color.to_rgba(), (b, b, b, b));
        }
    }

    #[test]
    fn test_to_html() {
        assert_eq!(Color::from_rgb8(0x3C, 0x54, 0xFF).to_html(), "#3C54FFFF");
        assert_eq!(Color::TRANSPARENT.to_html(), "#00000000");
    }

    #[test]
    fn test_from_html_and_hex_strict() {
        assert_eq!(
            Color::from_html("#3C54FF").unwrap(),
            Color::from_rgb8(0x3C, 0x54, 0xFF)
        );
        assert!(Color::from_html("0x3C54FF").is_err());
        assert_eq!(
            Color::from_hex("0X3c54ff80").unwrap(),
            Color::from_rgba8(0x3C, 0x54, 0xFF, 0x80)
        );
        let err = Color::from_hex("#3C54FF").unwrap_err();
        assert!(matches!(err, PhysiscriptError::InvalidColorFormat(_)));
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Color::from_name("black"), Some(Color::BLACK));
        assert_eq!(Color::from_name("white"), Some(Color::WHITE));
        assert_eq!(Color::from_name("Black"), None);
    }

    #[test]
    fn test_names_sorted() {
        let names = Color::names();
        assert_eq!(names.len(), named::NAMED_COLOR_COUNT);
        assert!(names.windows(2).all(|w| w[0] < w[1]));
        assert!(names.contains(&"light-sky-blue3"));
    }

    #[test]
    fn test_display() {
        let color = Color::new(1.0, 0.5, 0.0, 0.25).unwrap();
        assert_eq!(
            color.to_string(),
            "Color(red=1, green=0.5, blue=0, alpha=0.25)"
        );
    }

    #[test]
    fn test_default_is_black() {
        assert_eq!(Color::default(), Color::BLACK);
        assert_eq!(Color::BLACK.to_normalized_rgba_array(), [0.0, 0.0, 0.0, 1.0]);
    }
}
