//! HTML and hex-literal color grammars.
//!
//! Both grammars are a prefix followed by 3 or 4 pairs of hex digits:
//! * `#RRGGBB` / `#RRGGBBAA`
//! * `0xRRGGBB` / `0xRRGGBBAA` (also `0X`)
//!
//! Hex digits are case-insensitive. A string that does not fit returns `None`
//! so the caller can try the next grammar.

use crate::color::Color;

/// Parses `#RRGGBB` or `#RRGGBBAA`.
pub fn parse_html(text: &str) -> Option<Color> {
    text.strip_prefix('#').and_then(parse_digit_pairs)
}

/// Parses `0xRRGGBB` or `0xRRGGBBAA`.
pub fn parse_hex(text: &str) -> Option<Color> {
    text.strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .and_then(parse_digit_pairs)
}

fn parse_digit_pairs(digits: &str) -> Option<Color> {
    let bytes = digits.as_bytes();
    if bytes.len() != 6 && bytes.len() != 8 {
        return None;
    }

    let mut channels = [u8::MAX; 4];
    for (channel, pair) in channels.iter_mut().zip(bytes.chunks_exact(2)) {
        *channel = nibble(pair[0])? << 4 | nibble(pair[1])?;
    }

    let [r, g, b, a] = channels;
    Some(Color::from_rgba8(r, g, b, a))
}

fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}
