//! Loosely-typed color input.
//!
//! Configuration surfaces (a clear color, a picker's initial value) accept a
//! color in whichever shape is convenient. [`ColorLike`] names those shapes and
//! [`Color::create`] normalizes them into a [`Color`].

use std::fmt;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::color::{named, parse, Color};
use crate::error::{PhysiscriptError, Result};

/// Any value that can be turned into a [`Color`].
#[derive(Debug, Clone, PartialEq)]
pub enum ColorLike {
    /// An existing color, passed through unchanged.
    Color(Color),
    /// A color name, `#RRGGBB[AA]` or `0xRRGGBB[AA]`.
    Text(String),
    /// 3 (RGB) or 4 (RGBA) bytes.
    Bytes(Vec<u8>),
    /// A packed `0xRRGGBBAA` integer.
    Int(i128),
    /// 3 (RGB) or 4 (RGBA) normalized floats.
    Floats(Vec<f64>),
    /// A value of no supported shape, described for error reporting.
    Other(String),
}

impl ColorLike {
    /// Short name of the input shape, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ColorLike::Color(_) => "color",
            ColorLike::Text(_) => "string",
            ColorLike::Bytes(_) => "bytes",
            ColorLike::Int(_) => "integer",
            ColorLike::Floats(_) => "float sequence",
            ColorLike::Other(_) => "unsupported",
        }
    }
}

impl Color {
    /// Converts any color-like value into a [`Color`].
    ///
    /// Strings are tried as a color name (case-sensitive), then as
    /// `#RRGGBB[AA]`, then as `0xRRGGBB[AA]`.
    ///
    /// ```
    /// use physiscript::Color;
    ///
    /// let a = Color::create("#3C54FF").unwrap();
    /// let b = Color::create(0x3C54FFFFu32).unwrap();
    /// assert_eq!(a, b);
    /// assert_eq!(Color::create("white").unwrap(), Color::WHITE);
    /// ```
    pub fn create(value: impl Into<ColorLike>) -> Result<Color> {
        let value = value.into();
        trace!(kind = value.kind(), "creating color");

        match value {
            ColorLike::Color(color) => Ok(color),
            ColorLike::Text(text) => Color::from_text(&text),
            ColorLike::Bytes(bytes) => Color::from_bytes(&bytes),
            ColorLike::Int(value) => Color::from_int(value),
            ColorLike::Floats(values) => match values[..] {
                [r, g, b] => Color::opaque(r, g, b),
                [r, g, b, a] => Color::new(r, g, b, a),
                _ => Err(PhysiscriptError::InvalidColorFormat(format!(
                    "sequence must be of length 3 (RGB) or 4 (RGBA), got {}",
                    values.len()
                ))),
            },
            ColorLike::Other(description) => Err(PhysiscriptError::UnsupportedColorType(
                format!("can't create color from {description}"),
            )),
        }
    }

    fn from_text(text: &str) -> Result<Color> {
        if let Some(color) = Color::from_name(text) {
            trace!(name = text, "matched named color");
            return Ok(color);
        }
        if let Some(color) = parse::parse_html(text) {
            trace!(text, "matched HTML color");
            return Ok(color);
        }
        if let Some(color) = parse::parse_hex(text) {
            trace!(text, "matched hex color");
            return Ok(color);
        }

        debug!(
            text,
            known_names = named::NAMED_COLOR_COUNT,
            "string matches no color format"
        );
        Err(PhysiscriptError::InvalidColorFormat(format!(
            "invalid string format for color: '{text}'"
        )))
    }
}

impl FromStr for Color {
    type Err = PhysiscriptError;

    fn from_str(s: &str) -> Result<Self> {
        Color::from_text(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = PhysiscriptError;

    fn try_from(value: &str) -> Result<Self> {
        Color::from_text(value)
    }
}

impl From<Color> for ColorLike {
    fn from(color: Color) -> Self {
        ColorLike::Color(color)
    }
}

impl From<&Color> for ColorLike {
    fn from(color: &Color) -> Self {
        ColorLike::Color(*color)
    }
}

impl From<&str> for ColorLike {
    fn from(text: &str) -> Self {
        ColorLike::Text(text.to_string())
    }
}

impl From<String> for ColorLike {
    fn from(text: String) -> Self {
        ColorLike::Text(text)
    }
}

impl From<&[u8]> for ColorLike {
    fn from(bytes: &[u8]) -> Self {
        ColorLike::Bytes(bytes.to_vec())
    }
}

impl From<Vec<u8>> for ColorLike {
    fn from(bytes: Vec<u8>) -> Self {
        ColorLike::Bytes(bytes)
    }
}

impl<const N: usize> From<[u8; N]> for ColorLike {
    fn from(bytes: [u8; N]) -> Self {
        ColorLike::Bytes(bytes.to_vec())
    }
}

impl From<u32> for ColorLike {
    fn from(value: u32) -> Self {
        ColorLike::Int(value.into())
    }
}

impl From<i32> for ColorLike {
    fn from(value: i32) -> Self {
        ColorLike::Int(value.into())
    }
}

impl From<i64> for ColorLike {
    fn from(value: i64) -> Self {
        ColorLike::Int(value.into())
    }
}

impl From<u64> for ColorLike {
    fn from(value: u64) -> Self {
        ColorLike::Int(value.into())
    }
}

impl From<i128> for ColorLike {
    fn from(value: i128) -> Self {
        ColorLike::Int(value)
    }
}

impl From<&[f64]> for ColorLike {
    fn from(values: &[f64]) -> Self {
        ColorLike::Floats(values.to_vec())
    }
}

impl From<Vec<f64>> for ColorLike {
    fn from(values: Vec<f64>) -> Self {
        ColorLike::Floats(values)
    }
}

impl<const N: usize> From<[f64; N]> for ColorLike {
    fn from(values: [f64; N]) -> Self {
        ColorLike::Floats(values.to_vec())
    }
}

impl From<(f64, f64, f64)> for ColorLike {
    fn from((r, g, b): (f64, f64, f64)) -> Self {
        ColorLike::Floats(vec![r, g, b])
    }
}

impl From<(f64, f64, f64, f64)> for ColorLike {
    fn from((r, g, b, a): (f64, f64, f64, f64)) -> Self {
        ColorLike::Floats(vec![r, g, b, a])
    }
}

// A lone float or boolean is never a color, but callers may still hand one
// over from a loosely typed source.
impl From<f64> for ColorLike {
    fn from(value: f64) -> Self {
        ColorLike::Other(format!("float {value}"))
    }
}

impl From<bool> for ColorLike {
    fn from(value: bool) -> Self {
        ColorLike::Other(format!("boolean {value}"))
    }
}

impl fmt::Display for ColorLike {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorLike::Color(color) => write!(f, "{color}"),
            ColorLike::Text(text) => write!(f, "'{text}'"),
            ColorLike::Bytes(bytes) => write!(f, "bytes {bytes:?}"),
            ColorLike::Int(value) if *value < 0 => write!(f, "-{:#X}", value.unsigned_abs()),
            ColorLike::Int(value) => write!(f, "{value:#X}"),
            ColorLike::Floats(values) => write!(f, "{values:?}"),
            ColorLike::Other(description) => f.write_str(description),
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use std::fmt;

    use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
    use serde::ser::Serializer;
    use serde::{Deserialize, Serialize};

    use super::ColorLike;
    use crate::color::Color;
    use crate::error::PhysiscriptError;

    struct ColorLikeVisitor;

    impl<'de> Visitor<'de> for ColorLikeVisitor {
        type Value = ColorLike;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a color name, hex string, packed integer, or list of normalized floats")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<ColorLike, E> {
            Ok(ColorLike::Text(v.to_string()))
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<ColorLike, E> {
            Ok(ColorLike::Text(v))
        }

        fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<ColorLike, E> {
            Ok(ColorLike::Bytes(v.to_vec()))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<ColorLike, E> {
            Ok(ColorLike::Int(v.into()))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<ColorLike, E> {
            Ok(ColorLike::Int(v.into()))
        }

        fn visit_i128<E: de::Error>(self, v: i128) -> Result<ColorLike, E> {
            Ok(ColorLike::Int(v))
        }

        // Integer literals beyond the 64-bit range arrive as floats.
        fn visit_f64<E: de::Error>(self, v: f64) -> Result<ColorLike, E> {
            if v.fract() == 0.0 && !(i64::MIN as f64..u64::MAX as f64).contains(&v) {
                Ok(ColorLike::Int(v as i128))
            } else {
                Ok(ColorLike::Other(format!("float {v}")))
            }
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<ColorLike, E> {
            Ok(ColorLike::Other(format!("boolean {v}")))
        }

        fn visit_unit<E: de::Error>(self) -> Result<ColorLike, E> {
            Ok(ColorLike::Other("null".to_string()))
        }

        fn visit_none<E: de::Error>(self) -> Result<ColorLike, E> {
            Ok(ColorLike::Other("null".to_string()))
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<ColorLike, A::Error> {
            let mut values = Vec::with_capacity(seq.size_hint().unwrap_or(4));
            let mut malformed = false;
            while let Some(Component(value)) = seq.next_element::<Component>()? {
                match value {
                    Some(value) => values.push(value),
                    None => malformed = true,
                }
            }
            if malformed {
                return Err(de::Error::custom(PhysiscriptError::InvalidColorFormat(
                    "sequence elements must be numbers".to_string(),
                )));
            }
            Ok(ColorLike::Floats(values))
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<ColorLike, A::Error> {
            while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
            Ok(ColorLike::Other("map".to_string()))
        }
    }

    /// One element of a color sequence; `None` when it is not a number.
    struct Component(Option<f64>);

    struct ComponentVisitor;

    impl<'de> Visitor<'de> for ComponentVisitor {
        type Value = Component;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a normalized color channel")
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Component, E> {
            Ok(Component(Some(v)))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Component, E> {
            Ok(Component(Some(v as f64)))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Component, E> {
            Ok(Component(Some(v as f64)))
        }

        fn visit_str<E: de::Error>(self, _: &str) -> Result<Component, E> {
            Ok(Component(None))
        }

        fn visit_bytes<E: de::Error>(self, _: &[u8]) -> Result<Component, E> {
            Ok(Component(None))
        }

        fn visit_bool<E: de::Error>(self, _: bool) -> Result<Component, E> {
            Ok(Component(None))
        }

        fn visit_unit<E: de::Error>(self) -> Result<Component, E> {
            Ok(Component(None))
        }

        fn visit_none<E: de::Error>(self) -> Result<Component, E> {
            Ok(Component(None))
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Component, A::Error> {
            while seq.next_element::<IgnoredAny>()?.is_some() {}
            Ok(Component(None))
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Component, A::Error> {
            while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
            Ok(Component(None))
        }
    }

    impl<'de> Deserialize<'de> for Component {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_any(ComponentVisitor)
        }
    }

    impl<'de> Deserialize<'de> for ColorLike {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_any(ColorLikeVisitor)
        }
    }

    impl<'de> Deserialize<'de> for Color {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let like = ColorLike::deserialize(deserializer)?;
            Color::create(like).map_err(de::Error::custom)
        }
    }

    impl Serialize for Color {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            self.to_normalized_rgba_array().serialize(serializer)
        }
    }
}
