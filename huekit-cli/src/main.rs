use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use huekit::contrast::{evaluate, readable_text_color, ContrastReport};
use huekit::harmony::{self, Harmony, HarmonyOptions};
use huekit::names::{closest_named_color, NamedColorMatch};
use huekit::{parse_color_strict, try_hex_to_rgb, Cmyk, Hsl, Hsv, Rgb};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "huekit",
    about = "Convert colors, build palettes and check contrast",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Log library decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a color in every supported space
    Convert {
        /// Hex literal, rgb()/hsl() function or CSS color name
        color: String,
    },

    /// Generate a palette from a seed color
    Harmony {
        /// Seed color
        color: String,

        /// Scheme: complementary, split-complementary, analogous, triad, tetrad, shades, tints
        #[arg(short, long, default_value = "complementary")]
        scheme: String,

        /// Palette size for analogous, shades and tints
        #[arg(short, long)]
        count: Option<usize>,

        /// Hue step in degrees for analogous palettes
        #[arg(short, long, allow_hyphen_values = true)]
        angle: Option<i32>,
    },

    /// Check the WCAG contrast between two colors
    Contrast {
        /// Foreground (text) color
        foreground: String,

        /// Background color
        background: String,
    },

    /// Find the closest CSS named color
    Name {
        /// Color to match
        color: String,
    },
}

#[derive(Serialize)]
struct Conversion {
    hex: String,
    rgb: Rgb,
    hsl: Hsl,
    hsv: Hsv,
    cmyk: Cmyk,
    name: Option<NamedColorMatch>,
}

#[derive(Serialize)]
struct Palette {
    seed: String,
    scheme: Harmony,
    colors: Vec<String>,
}

#[derive(Serialize)]
struct ContrastCheck {
    foreground: String,
    background: String,
    #[serde(flatten)]
    report: ContrastReport,
    suggested_text: &'static str,
}

#[derive(Serialize)]
struct NameMatch {
    input: String,
    #[serde(flatten)]
    found: NamedColorMatch,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "huekit=debug" } else { "huekit=warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn pass(ok: bool) -> &'static str {
    if ok {
        "pass"
    } else {
        "fail"
    }
}

fn harmony_options(count: Option<usize>, angle: Option<i32>) -> HarmonyOptions {
    let mut options = HarmonyOptions::default();
    if let Some(count) = count {
        options.analogous_count = count;
        options.shade_count = count;
        options.tint_count = count;
    }
    if let Some(angle) = angle {
        options.analogous_angle = angle;
    }
    options
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Convert { color } => {
            let hex = parse_color_strict(&color)?;
            let rgb = try_hex_to_rgb(&hex)?;
            debug!(input = %color, %hex, "converting");

            let conversion = Conversion {
                hex: rgb.to_hex(),
                rgb,
                hsl: rgb.to_hsl(),
                hsv: rgb.to_hsv(),
                cmyk: rgb.to_cmyk(),
                name: closest_named_color(&hex),
            };

            if cli.json {
                print_json(&conversion)?;
            } else {
                println!("hex:  {}", conversion.hex);
                println!("rgb:  {}", conversion.rgb);
                println!("hsl:  {}", conversion.hsl);
                println!("hsv:  {}", conversion.hsv);
                println!("cmyk: {}", conversion.cmyk);
                if let Some(found) = conversion.name {
                    println!("name: {}", found.name);
                }
            }
        }

        Commands::Harmony {
            color,
            scheme,
            count,
            angle,
        } => {
            let seed = parse_color_strict(&color)?;
            let scheme: Harmony = scheme.parse()?;
            let options = harmony_options(count, angle);
            let colors = harmony::generate(&seed, scheme, &options)?;

            if cli.json {
                print_json(&Palette {
                    seed,
                    scheme,
                    colors,
                })?;
            } else {
                println!("{} palette for {}:", scheme, seed);
                for hex in &colors {
                    println!("  {hex}");
                }
            }
        }

        Commands::Contrast {
            foreground,
            background,
        } => {
            let foreground = parse_color_strict(&foreground)?;
            let background = parse_color_strict(&background)?;
            let check = ContrastCheck {
                report: evaluate(&foreground, &background),
                suggested_text: readable_text_color(&background),
                foreground,
                background,
            };

            if cli.json {
                print_json(&check)?;
            } else {
                let report = &check.report;
                println!(
                    "{} on {}: {:.2}:1",
                    check.foreground, check.background, report.ratio
                );
                println!("AA normal text:  {}", pass(report.aa));
                println!("AAA normal text: {}", pass(report.aaa));
                println!("AA large text:   {}", pass(report.aa_large));
                println!("AAA large text:  {}", pass(report.aaa_large));
                println!("Readable text on this background: {}", check.suggested_text);
            }
        }

        Commands::Name { color } => {
            let hex = parse_color_strict(&color)?;
            let found = closest_named_color(&hex)
                .ok_or_else(|| anyhow!("No named color found for {}", hex))?;

            if cli.json {
                print_json(&NameMatch { input: hex, found })?;
            } else if found.distance == 0.0 {
                println!("{} ({})", found.name, found.hex);
            } else {
                println!(
                    "{} ({}), distance {:.2}",
                    found.name, found.hex, found.distance
                );
            }
        }
    }

    Ok(())
}
