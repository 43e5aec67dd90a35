use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use db32_pixel::Palette;
use db32art::models::{AppConfig, CONFIG_ENV_VAR};
use db32art::services::Converter;

#[derive(Parser)]
#[command(name = "db32art")]
#[command(about = "Turn photos into DB32 pixel art, block mosaics and glyph art")]
struct Cli {
    /// YAML config file (falls back to $DB32ART_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render pixel art: downscale, snap to DB32, upscale, frame
    Pixel {
        /// Input image
        input: PathBuf,

        /// Output PNG file path
        output: PathBuf,

        /// Longest edge of the downscaled image
        #[arg(long, allow_negative_numbers = true)]
        max_size: Option<i64>,

        /// Integer upscale factor
        #[arg(long, allow_negative_numbers = true)]
        scale: Option<i64>,

        /// Frame margin in output pixels
        #[arg(long, allow_negative_numbers = true)]
        border_size: Option<i64>,

        /// Do not frame the output
        #[arg(long)]
        no_border: bool,
    },
    /// Repaint an image as DB32 blocks at its original size
    Blocks {
        /// Input image
        input: PathBuf,

        /// Output PNG file path
        output: PathBuf,

        /// Block edge in pixels
        #[arg(long, allow_negative_numbers = true)]
        block_size: Option<i64>,
    },
    /// Render an image as brightness-mapped glyphs to a text file
    Glyphs {
        /// Input image
        input: PathBuf,

        /// Output text file path
        output: PathBuf,

        /// Glyphs per row
        #[arg(long, allow_negative_numbers = true)]
        columns: Option<i64>,

        /// Text stamped at the end of the last row
        #[arg(long)]
        signature: Option<String>,
    },
    /// List the DB32 palette
    Palette,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "db32art=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let config_path = AppConfig::resolve_path(cli.config);

    match cli.command {
        Some(Commands::Pixel {
            input,
            output,
            max_size,
            scale,
            border_size,
            no_border,
        }) => {
            let mut config = load_config(config_path)?;
            config.override_pixel_art(max_size, scale, border_size, no_border);
            let summary = Converter::new(config)
                .pixel_art(&input, &output)
                .with_context(|| format!("Failed to render {}", input.display()))?;
            println!(
                "Rendered {} ({}x{}, {} bytes)",
                output.display(),
                summary.output_dimensions.0,
                summary.output_dimensions.1,
                summary.bytes_written
            );
            Ok(())
        }
        Some(Commands::Blocks {
            input,
            output,
            block_size,
        }) => {
            let mut config = load_config(config_path)?;
            config.override_blocks(block_size);
            let summary = Converter::new(config)
                .blocks(&input, &output)
                .with_context(|| format!("Failed to stylize {}", input.display()))?;
            println!(
                "Rendered {} ({}x{}, {} bytes)",
                output.display(),
                summary.output_dimensions.0,
                summary.output_dimensions.1,
                summary.bytes_written
            );
            Ok(())
        }
        Some(Commands::Glyphs {
            input,
            output,
            columns,
            signature,
        }) => {
            let mut config = load_config(config_path)?;
            config.override_glyphs(columns, signature);
            let summary = Converter::new(config)
                .glyphs(&input, &output)
                .with_context(|| format!("Failed to map {}", input.display()))?;
            println!(
                "Wrote {} ({} columns x {} rows)",
                output.display(),
                summary.output_dimensions.0,
                summary.output_dimensions.1
            );
            Ok(())
        }
        Some(Commands::Palette) => {
            run_palette_command();
            Ok(())
        }
        None => {
            run_status_command(config_path);
            Ok(())
        }
    }
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<AppConfig> {
    AppConfig::load(path.as_deref()).context("Failed to load configuration")
}

/// Print every DB32 entry as index, RGB and hex
fn run_palette_command() {
    let palette = Palette::db32();
    println!("DB32 ({} colors)\n", palette.len());
    for (i, color) in palette.colors().iter().enumerate() {
        println!("  {i:>2}  {:<16} {}", color.to_string(), color.to_hex());
    }
}

/// Display status and configuration information
fn run_status_command(config_path: Option<PathBuf>) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("db32art v{VERSION} - DB32 pixel art from photos\n");

    println!("Environment Variables:");
    println!(
        "  {CONFIG_ENV_VAR} = {}",
        std::env::var(CONFIG_ENV_VAR)
            .ok()
            .as_deref()
            .unwrap_or("(not set)")
    );
    println!(
        "  RUST_LOG       = {}",
        std::env::var("RUST_LOG")
            .ok()
            .as_deref()
            .unwrap_or("db32art=info (default)")
    );

    println!("\nConfiguration:");
    let source = match &config_path {
        Some(p) if p.exists() => p.display().to_string(),
        Some(p) => format!("{} (file not found)", p.display()),
        None => "built-in defaults".to_string(),
    };
    println!("  Source: {source}");

    match AppConfig::load(config_path.as_deref()) {
        Ok(config) => {
            let p = &config.pixel_art;
            println!(
                "  pixel:  max_size={} scale_factor={} add_border={} border_size={} frame_colors={}",
                p.max_size,
                p.scale_factor,
                p.add_border,
                p.border_size,
                p.frame_colors.join(",")
            );
            println!("  blocks: block_size={}", config.blocks.block_size);
            println!(
                "  glyphs: columns={} signature={}",
                config.glyphs.columns,
                config.glyphs.signature.as_deref().unwrap_or("(none)")
            );
        }
        Err(e) => println!("  Error: {e}"),
    }

    println!("\nCommands:");
    println!("  db32art pixel <INPUT> <OUTPUT>    Pixel art PNG");
    println!("  db32art blocks <INPUT> <OUTPUT>   Block mosaic PNG");
    println!("  db32art glyphs <INPUT> <OUTPUT>   Glyph text");
    println!("  db32art palette                   List DB32 colors");
    println!("\nRun 'db32art --help' for all options.");
}
