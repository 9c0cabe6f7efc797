use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use physiscript::{AppSettings, Color, ColorDisplayMode, ColorLike};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "physiscript",
    about = "Inspect PhysiScript colors and application settings",
    version,
    author
)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a color and print every representation
    Convert {
        /// A color name, #RRGGBB[AA], 0xRRGGBB[AA], a decimal packed
        /// integer, or a list of normalized floats like "[0, 1, 0.5]"
        value: String,

        /// Display mode for the summary line (rgb, hsv, hex)
        #[arg(short, long, default_value = "rgb")]
        mode: ColorDisplayMode,
    },

    /// List recognized color names
    Names {
        /// Only show names containing this text
        #[arg(short, long)]
        filter: Option<String>,

        /// Print the HTML value next to each name
        #[arg(long)]
        values: bool,
    },

    /// Load and validate a settings file
    Settings {
        /// Settings JSON file
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Convert { value, mode } => {
            let like = interpret_value(&value);
            debug!(kind = like.kind(), input = %like, "interpreted command-line value");
            let color = Color::create(like)
                .with_context(|| format!("Failed to parse color '{value}'"))?;
            print!("{}", describe(&color, mode));
        }

        Commands::Names { filter, values } => {
            let names = Color::names();
            let matching = names
                .iter()
                .filter(|name| filter.as_deref().map_or(true, |f| name.contains(f)));

            let mut count = 0;
            for name in matching {
                count += 1;
                if values {
                    // Every listed name resolves
                    let color = Color::create(*name)?;
                    println!("{name:<24} {}", color.to_html());
                } else {
                    println!("{name}");
                }
            }

            if count == 0 {
                eprintln!("No color names match");
            }
        }

        Commands::Settings { input } => {
            let settings = AppSettings::from_file(&input)
                .with_context(|| format!("Failed to load settings from {}", input.display()))?;

            println!("Settings: {}", input.display());
            println!("  Window: {}x{}", settings.width, settings.height);
            println!("  Title: {}", settings.title);
            println!("  FPS: {}", settings.effective_fps());
            println!("  VSync: {}", settings.vsync);
            println!("  Exit on escape: {}", settings.exit_on_escape);
            println!("  Tools menu bar: {}", !settings.disable_tools_menubar);
            println!(
                "  Clear color: {}",
                settings.clear_color.format(settings.color_display)
            );
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "physiscript=debug,physiscript_cli=debug"
    } else {
        "physiscript=warn,physiscript_cli=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Maps command-line text onto the shape it most likely denotes.
///
/// `[a, b, c]` becomes a float sequence and a plain decimal number a packed
/// integer; everything else is left as a string for name/hex lookup.
fn interpret_value(value: &str) -> ColorLike {
    let trimmed = value.trim();

    if let Some(inner) = trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
    {
        let parsed: Result<Vec<f64>, _> = inner
            .split(',')
            .map(|part| part.trim().parse::<f64>())
            .collect();
        return match parsed {
            Ok(values) => ColorLike::Floats(values),
            Err(_) => ColorLike::Text(value.to_string()),
        };
    }

    if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit() || b == b'-') {
        if let Ok(int) = trimmed.parse::<i128>() {
            return ColorLike::Int(int);
        }
    }

    if trimmed.contains('.') {
        if let Ok(float) = trimmed.parse::<f64>() {
            return ColorLike::from(float);
        }
    }

    ColorLike::Text(value.to_string())
}

fn describe(color: &Color, mode: ColorDisplayMode) -> String {
    let (r, g, b, a) = color.to_rgba();
    let (nr, ng, nb, na) = color.to_normalized_rgba();
    let (h, s, v) = color.to_hsv();

    let rows = [
        ("RGBA (8-bit):", format!("{r}, {g}, {b}, {a}")),
        ("RGBA (normalized):", format!("{nr}, {ng}, {nb}, {na}")),
        ("HSV:", format!("{h:.1}, {s:.3}, {v:.3}")),
        ("Packed:", format!("{:#010X}", color.to_packed_int())),
        ("HTML:", color.to_html()),
    ];

    let mut out = format!("{}\n", color.format(mode));
    for (label, value) in rows {
        out.push_str(&format!("  {label:<19}{value}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_interpret_float_list() {
        assert_eq!(
            interpret_value("[0, 1, 0.5]"),
            ColorLike::Floats(vec![0.0, 1.0, 0.5])
        );
        assert_eq!(
            interpret_value(" [0.1,0.2,0.3,0.4] "),
            ColorLike::Floats(vec![0.1, 0.2, 0.3, 0.4])
        );
    }

    #[test]
    fn test_interpret_bad_list_stays_text() {
        assert_eq!(
            interpret_value("[red, green]"),
            ColorLike::Text("[red, green]".to_string())
        );
    }

    #[test]
    fn test_interpret_integer() {
        assert_eq!(interpret_value("1164378111"), ColorLike::Int(0x4566FFFF));
        assert_eq!(interpret_value("-1"), ColorLike::Int(-1));
    }

    #[test]
    fn test_interpret_strings() {
        assert_eq!(
            interpret_value("0x4566FFFF"),
            ColorLike::Text("0x4566FFFF".to_string())
        );
        assert_eq!(interpret_value("#3C54FF"), ColorLike::Text("#3C54FF".to_string()));
        assert_eq!(interpret_value("navy"), ColorLike::Text("navy".to_string()));
    }

    #[test]
    fn test_interpret_lone_float_is_unsupported() {
        let like = interpret_value("3.5");
        assert!(matches!(like, ColorLike::Other(_)));
        assert!(Color::create(like).is_err());
    }

    #[test]
    fn test_describe() {
        let color = Color::from_rgba8(0x3C, 0x54, 0xFF, 0xFF);
        let text = describe(&color, ColorDisplayMode::Hex);
        assert!(text.starts_with("#3C54FFFF\n"));
        assert!(text.contains("  RGBA (8-bit):      60, 84, 255, 255\n"));
        assert!(text.contains("  Packed:            0x3C54FFFF\n"));
    }

    #[test]
    fn test_cli_parses_subcommands() {
        let cli = Cli::try_parse_from(["physiscript", "convert", "navy", "--mode", "hsv"]).unwrap();
        match cli.command {
            Commands::Convert { value, mode } => {
                assert_eq!(value, "navy");
                assert_eq!(mode, ColorDisplayMode::Hsv);
            }
            _ => panic!("expected convert"),
        }

        let cli = Cli::try_parse_from(["physiscript", "-v", "names", "--filter", "blue"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Names { filter: Some(_), values: false }));

        assert!(Cli::try_parse_from(["physiscript", "convert", "red", "--mode", "cmyk"]).is_err());
    }

    #[test]
    fn test_settings_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.json");
        let settings = AppSettings::new(640, 480).with_clear_color("navy").unwrap();
        std::fs::write(&path, settings.to_json().unwrap()).unwrap();

        let loaded = AppSettings::from_file(&path).unwrap();
        assert_eq!(loaded.clear_color, Color::from_rgb8(0, 0, 128));
    }
}
