//! Textual presentation of colors, as shown next to a color picker.

use std::fmt;
use std::str::FromStr;

use crate::color::Color;
use crate::error::PhysiscriptError;

/// How a color editor presents its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColorDisplayMode {
    #[default]
    Rgb,
    Hsv,
    Hex,
}

impl ColorDisplayMode {
    pub const ALL: [ColorDisplayMode; 3] = [
        ColorDisplayMode::Rgb,
        ColorDisplayMode::Hsv,
        ColorDisplayMode::Hex,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorDisplayMode::Rgb => "rgb",
            ColorDisplayMode::Hsv => "hsv",
            ColorDisplayMode::Hex => "hex",
        }
    }
}

impl fmt::Display for ColorDisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorDisplayMode {
    type Err = PhysiscriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorDisplayMode::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                PhysiscriptError::InvalidSettings(format!(
                    "unknown color display mode '{s}' (expected rgb, hsv or hex)"
                ))
            })
    }
}

impl Color {
    /// Hue in degrees `[0, 360)`, saturation and value in `[0, 1]`.
    ///
    /// Achromatic colors report a hue of 0.
    pub fn to_hsv(&self) -> (f64, f64, f64) {
        let (r, g, b) = self.to_normalized_rgb();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let hue = if delta == 0.0 {
            0.0
        } else if max == r {
            60.0 * ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };
        // rem_euclid may round up to exactly 6.0
        let hue = if hue >= 360.0 { 0.0 } else { hue };
        let saturation = if max == 0.0 { 0.0 } else { delta / max };

        (hue, saturation, max)
    }

    /// Formats the color the way a picker in `mode` would display it.
    pub fn format(&self, mode: ColorDisplayMode) -> String {
        match mode {
            ColorDisplayMode::Rgb => {
                let (r, g, b, a) = self.to_rgba();
                format!("rgba({r}, {g}, {b}, {a})")
            }
            ColorDisplayMode::Hsv => {
                let (h, s, v) = self.to_hsv();
                format!(
                    "hsva({:.0}, {:.0}%, {:.0}%, {:.2})",
                    h,
                    s * 100.0,
                    v * 100.0,
                    self.alpha()
                )
            }
            ColorDisplayMode::Hex => self.to_html(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: (f64, f64, f64), expected: (f64, f64, f64)) {
        let eps = 1e-9;
        assert!(
            (actual.0 - expected.0).abs() < eps
                && (actual.1 - expected.1).abs() < eps
                && (actual.2 - expected.2).abs() < eps,
            "{actual:?} != {expected:?}"
        );
    }

    #[test]
    fn test_hsv_primaries() {
        assert_close(Color::from_rgb8(255, 0, 0).to_hsv(), (0.0, 1.0, 1.0));
        assert_close(Color::from_rgb8(0, 255, 0).to_hsv(), (120.0, 1.0, 1.0));
        assert_close(Color::from_rgb8(0, 0, 255).to_hsv(), (240.0, 1.0, 1.0));
        assert_close(Color::from_rgb8(255, 0, 255).to_hsv(), (300.0, 1.0, 1.0));
    }

    #[test]
    fn test_hsv_achromatic() {
        assert_close(Color::BLACK.to_hsv(), (0.0, 0.0, 0.0));
        assert_close(Color::WHITE.to_hsv(), (0.0, 0.0, 1.0));
        let (h, s, _) = Color::from_rgb8(128, 128, 128).to_hsv();
        assert_eq!((h, s), (0.0, 0.0));
    }

    #[test]
    fn test_format_modes() {
        let color = Color::from_rgba8(0x3C, 0x54, 0xFF, 0xFF);
        assert_eq!(color.format(ColorDisplayMode::Rgb), "rgba(60, 84, 255, 255)");
        assert_eq!(color.format(ColorDisplayMode::Hex), "#3C54FFFF");

        let red = Color::from_rgba8(255, 0, 0, 255);
        assert_eq!(red.format(ColorDisplayMode::Hsv), "hsva(0, 100%, 100%, 1.00)");
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("rgb".parse::<ColorDisplayMode>().unwrap(), ColorDisplayMode::Rgb);
        assert_eq!("HSV".parse::<ColorDisplayMode>().unwrap(), ColorDisplayMode::Hsv);
        assert_eq!("Hex".parse::<ColorDisplayMode>().unwrap(), ColorDisplayMode::Hex);
        assert!("cmyk".parse::<ColorDisplayMode>().is_err());
    }

    #[test]
    fn test_mode_display_round_trips() {
        for mode in ColorDisplayMode::ALL {
            assert_eq!(mode.to_string().parse::<ColorDisplayMode>().unwrap(), mode);
        }
        assert_eq!(ColorDisplayMode::default(), ColorDisplayMode::Rgb);
    }
}
