//! Application settings.
//!
//! The options a PhysiScript application is opened with. The clear color
//! accepts any color-like JSON value (`"black"`, `"#202020"`, `0x202020FF`,
//! `[0.1, 0.1, 0.1]`) and is normalized to a [`Color`] on load.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::{Color, ColorDisplayMode};
use crate::error::{PhysiscriptError, Result};

/// Frame rate used when none is configured.
pub const FALLBACK_FPS: u32 = 60;

pub const DEFAULT_TITLE: &str = "PhysiScript App";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppSettings {
    pub width: u32,
    pub height: u32,
    pub title: String,
    /// Target frame rate; `None` uses [`FALLBACK_FPS`].
    pub fps: Option<u32>,
    pub vsync: bool,
    pub exit_on_escape: bool,
    pub disable_tools_menubar: bool,
    pub clear_color: Color,
    pub color_display: ColorDisplayMode,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: DEFAULT_TITLE.to_string(),
            fps: None,
            vsync: true,
            exit_on_escape: true,
            disable_tools_menubar: false,
            clear_color: Color::BLACK,
            color_display: ColorDisplayMode::Rgb,
        }
    }
}

impl AppSettings {
    /// Creates settings for a window of the given size, everything else default.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Sets the clear color from any color-like value.
    pub fn with_clear_color(mut self, color: impl Into<crate::color::ColorLike>) -> Result<Self> {
        self.clear_color = Color::create(color)?;
        Ok(self)
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = Some(fps);
        self
    }

    pub fn effective_fps(&self) -> u32 {
        self.fps.unwrap_or(FALLBACK_FPS)
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(PhysiscriptError::InvalidSettings(format!(
                "window size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.fps == Some(0) {
            return Err(PhysiscriptError::InvalidSettings(
                "fps must be positive when set".to_string(),
            ));
        }
        Ok(())
    }

    /// Parses and validates settings from JSON. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: AppSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json_str(&json)?;
        debug!(
            path = %path.display(),
            width = settings.width,
            height = settings.height,
            clear_color = %settings.clear_color.to_html(),
            "loaded settings"
        );
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
