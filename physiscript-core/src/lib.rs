//! # physiscript
//!
//! Color model and application settings for the PhysiScript framework.
//!
//! ## Features
//!
//! - **Normalized colors**: [`Color`] stores RGBA as floats in `[0, 1]` and
//!   rejects out-of-range input instead of clamping it
//! - **Flexible input**: [`Color::create`] accepts color names, `#RRGGBB[AA]`,
//!   `0xRRGGBB[AA]`, byte buffers, packed integers and float sequences
//! - **Output formats**: 8-bit tuples, normalized tuples, packed integers,
//!   HTML strings and HSV
//! - **Settings** (feature `serde`): [`settings::AppSettings`] loads the
//!   window options and clear color of an application from JSON
//!
//! ## Quick Start
//!
//! ```rust
//! use physiscript::{Color, Result};
//!
//! # fn main() -> Result<()> {
//! let sky = Color::create("light-sky-blue3")?;
//! assert_eq!(sky.to_rgb(), (141, 182, 205));
//!
//! let accent = Color::create("#3C54FF")?;
//! assert_eq!(accent.to_packed_int(), 0x3C54FFFF);
//!
//! let clear = Color::create([0.0f64, 1.0, 0.5])?;
//! assert_eq!(clear.to_normalized_rgba(), (0.0, 1.0, 0.5, 1.0));
//! # Ok(())
//! # }
//! ```

pub mod color;
pub mod error;
#[cfg(feature = "serde")]
pub mod settings;

pub use color::{Color, ColorDisplayMode, ColorLike};
pub use error::{PhysiscriptError, Result};

#[cfg(feature = "serde")]
pub use settings::AppSettings;

/// Current version of physiscript
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
