//! Lucent CLI
//!
//! List, preview, export, and rasterize icons.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use lucent_core::{Color, IconConfig, IconProps};
use lucent_svg::{RasterOptions, RasterizedIcon};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;

use config::LucentConfig;

#[derive(Parser)]
#[command(name = "lucent")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lucent icon CLI", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to a lucent.toml (defaults to ./lucent.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List icon names
    List {
        /// Only show icons whose name contains this text
        #[arg(short, long)]
        filter: Option<String>,
    },

    /// Print an icon's SVG markup
    Show {
        /// Icon name (alarm-clock, AlarmClock, AlarmClockIcon, ...)
        name: String,

        #[command(flatten)]
        style: StyleArgs,
    },

    /// Rasterize an icon to PNG
    Render {
        /// Icon name
        name: String,

        /// Output PNG path
        #[arg(short, long)]
        output: PathBuf,

        /// Output width and height in pixels
        #[arg(short, long)]
        pixels: Option<u32>,

        /// Color substituted for currentColor
        #[arg(long)]
        current_color: Option<String>,

        #[command(flatten)]
        style: StyleArgs,
    },

    /// Write every icon as <name>.svg into a directory
    Export {
        /// Output directory
        dir: PathBuf,

        #[command(flatten)]
        style: StyleArgs,
    },

    /// Show version, icon count, and effective defaults
    Info {
        /// Print the effective configuration as lucent.toml instead
        #[arg(long)]
        toml: bool,
    },
}

/// Props shared by the rendering commands
#[derive(Args, Debug, Default)]
struct StyleArgs {
    /// Width and height
    #[arg(long)]
    size: Option<f32>,

    /// Stroke color (any CSS color)
    #[arg(long)]
    color: Option<String>,

    /// Stroke width
    #[arg(long)]
    stroke_width: Option<f32>,

    /// Keep the stroke width constant regardless of size
    /// (`--absolute-stroke-width=false` overrides a config file `true`)
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    absolute_stroke_width: Option<bool>,

    /// Extra class for the root element
    #[arg(long)]
    class: Option<String>,
}

impl StyleArgs {
    fn props(&self) -> IconProps {
        IconProps {
            size: self.size,
            color: self.color.clone(),
            stroke_width: self.stroke_width,
            absolute_stroke_width: self.absolute_stroke_width,
            class: self.class.clone(),
            ..IconProps::default()
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let cwd = std::env::current_dir()?;
    let config = LucentConfig::load(cli.config.as_deref(), &cwd)?;

    match cli.command {
        Commands::List { filter } => cmd_list(filter.as_deref()),

        Commands::Show { name, style } => cmd_show(&name, &style, &config.defaults),

        Commands::Render {
            name,
            output,
            pixels,
            current_color,
            style,
        } => cmd_render(
            &name,
            &output,
            pixels.unwrap_or(config.render.pixels),
            current_color
                .as_deref()
                .unwrap_or(&config.render.current_color),
            &style,
            &config.defaults,
        ),

        Commands::Export { dir, style } => cmd_export(&dir, &style, &config.defaults),

        Commands::Info { toml } => cmd_info(&config, toml),
    }
}

fn cmd_list(filter: Option<&str>) -> Result<()> {
    for icon in lucent_icons::search(filter.unwrap_or("")) {
        println!("{}", icon.name());
    }
    Ok(())
}

fn cmd_show(name: &str, style: &StyleArgs, defaults: &IconConfig) -> Result<()> {
    let icon = lucent_icons::get(name)?;
    let root = icon.render_with(&style.props(), defaults);
    println!("{}", root);
    Ok(())
}

fn cmd_render(
    name: &str,
    output: &Path,
    pixels: u32,
    current_color: &str,
    style: &StyleArgs,
    defaults: &IconConfig,
) -> Result<()> {
    let icon = lucent_icons::get(name)?;
    let current_color = Color::parse_css(current_color)?.ok_or_else(|| {
        anyhow::anyhow!("--current-color needs a concrete color, not currentColor")
    })?;

    let root = icon.render_with(&style.props(), defaults);
    let options = RasterOptions::default().current_color(current_color);
    RasterizedIcon::from_element(&root, pixels, pixels, &options)?
        .save_png(output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    info!("Rendered {} at {}px to {}", icon.name(), pixels, output.display());
    Ok(())
}

fn cmd_export(dir: &Path, style: &StyleArgs, defaults: &IconConfig) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;

    let props = style.props();
    for icon in lucent_icons::ALL {
        let path = dir.join(format!("{}.svg", icon.name()));
        let markup = icon.render_with(&props, defaults).to_markup();
        fs::write(&path, markup).with_context(|| format!("Failed to write {}", path.display()))?;
    }

    info!("Exported {} icons to {}", lucent_icons::count(), dir.display());
    Ok(())
}

fn cmd_info(config: &LucentConfig, as_toml: bool) -> Result<()> {
    if as_toml {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    let style = lucent_core::ResolvedStyle::resolve(&IconProps::default(), &config.defaults);

    println!("Lucent Icons");
    println!("============");
    println!();
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!("Icons:   {}", lucent_icons::count());
    println!();
    println!("Defaults:");
    println!("  size:                  {}", lucent_core::format_number(style.size));
    println!("  color:                 {}", style.color);
    println!("  stroke width:          {}", lucent_core::format_number(style.stroke_width));
    println!("  absolute stroke width: {}", style.absolute_stroke_width);
    if let Some(class) = &config.defaults.class {
        println!("  class:                 {}", class);
    }
    println!();
    println!("Render:");
    println!("  pixels:        {}", config.render.pixels);
    println!("  current color: {}", config.render.current_color);

    Ok(())
}
