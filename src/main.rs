use clap::{Parser, Subcommand};
use serde_json::json;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chromapick::models::{AppConfig, OutputFormat, CONFIG_ENV};
use chromapick::services::{ConversionService, DistanceMetric, PaletteService, PixelStream};

#[derive(Parser)]
#[command(name = "chromapick")]
#[command(about = "Color conversion and palette extraction")]
struct Cli {
    /// Config file (YAML); defaults to $CHROMAPICK_CONFIG
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Reference illuminant for Lab/LCh (A, C, D50, D55, D65, D75, F2, F7, F11)
    #[arg(long, global = true)]
    illuminant: Option<String>,

    /// Standard observer for Lab/LCh ("2" or "10")
    #[arg(long, global = true)]
    observer: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a color in every supported color space
    Convert {
        /// Hex color, e.g. "#ff8000"
        color: String,
    },
    /// Extract a palette from raw RGB/RGBA pixels
    Palette {
        /// Raw interleaved 8-bit pixel file, or "-" for stdin
        #[arg(short, long)]
        input: PathBuf,

        /// Maximum number of colors
        #[arg(short, long)]
        colors: Option<usize>,

        /// Bytes per pixel: 3 (RGB) or 4 (RGBA)
        #[arg(long, default_value_t = 3)]
        channels: usize,

        /// Octree depth
        #[arg(long)]
        depth: Option<u32>,

        /// Name prefix for palette entries (defaults to the input file name)
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Pick black or white text for a background color
    Contrast {
        /// Hex background color
        color: String,
    },
    /// Difference between two colors
    Distance {
        a: String,
        b: String,

        #[arg(short, long, value_enum, default_value_t = DistanceMetric::Rgb)]
        metric: DistanceMetric,
    },
    /// Blend two colors in linear light
    Mix {
        a: String,
        b: String,

        /// 0 gives the first color, 1 the second
        #[arg(short, long, default_value_t = 0.5)]
        ratio: f32,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chromapick=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let mut config = AppConfig::load(cli.config.as_deref());
    if let Some(illuminant) = cli.illuminant {
        config.illuminant = illuminant;
    }
    if let Some(observer) = cli.observer {
        config.observer = observer;
    }
    let output = if cli.json {
        OutputFormat::Json
    } else {
        config.output
    };

    match cli.command {
        Some(Commands::Convert { color }) => run_convert_command(&config, output, &color),
        Some(Commands::Palette {
            input,
            colors,
            channels,
            depth,
            name,
        }) => {
            if let Some(colors) = colors {
                config.palette.colors = colors;
            }
            if let Some(depth) = depth {
                config.palette.max_depth = depth;
            }
            if name.is_some() {
                config.palette.name = name;
            }
            run_palette_command(&config, output, &input, channels)
        }
        Some(Commands::Contrast { color }) => run_contrast_command(output, &color),
        Some(Commands::Distance { a, b, metric }) => {
            run_distance_command(&config, output, &a, &b, metric)
        }
        Some(Commands::Mix { a, b, ratio }) => run_mix_command(&config, output, &a, &b, ratio),
        None => {
            run_status_command(&config, cli.config.as_deref());
            Ok(())
        }
    }
}

fn conversion_service(config: &AppConfig) -> anyhow::Result<ConversionService> {
    let (illuminant, observer) = config.reference();
    Ok(ConversionService::new(illuminant, observer)?)
}

fn run_convert_command(
    config: &AppConfig,
    output: OutputFormat,
    input: &str,
) -> anyhow::Result<()> {
    let service = conversion_service(config)?;
    let report = service.report(ConversionService::parse(input)?);

    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => println!("{report}"),
    }
    Ok(())
}

fn run_palette_command(
    config: &AppConfig,
    output: OutputFormat,
    input: &Path,
    channels: usize,
) -> anyhow::Result<()> {
    let service = PaletteService::new(&config.palette);

    let (source, reader): (String, Box<dyn Read>) = if input == Path::new("-") {
        ("stdin".to_string(), Box::new(std::io::stdin().lock()))
    } else {
        let file = std::fs::File::open(input)
            .map_err(|e| anyhow::anyhow!("Failed to open {}: {e}", input.display()))?;
        let base = input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| input.display().to_string());
        (base, Box::new(file))
    };
    let source = config.palette.name.clone().unwrap_or(source);

    let entries = service.extract(&source, PixelStream::new(reader, channels)?)?;

    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
        OutputFormat::Text => {
            for entry in &entries {
                println!("{}\t{}", entry.hex, entry.name);
            }
        }
    }
    Ok(())
}

fn run_contrast_command(output: OutputFormat, input: &str) -> anyhow::Result<()> {
    let color = ConversionService::parse(input)?;
    let contrasting = color.contrasting().to_hex();

    match output {
        OutputFormat::Json => println!(
            "{}",
            json!({ "color": color.to_hex(), "contrasting": contrasting })
        ),
        OutputFormat::Text => println!("{contrasting}"),
    }
    Ok(())
}

fn run_distance_command(
    config: &AppConfig,
    output: OutputFormat,
    a: &str,
    b: &str,
    metric: DistanceMetric,
) -> anyhow::Result<()> {
    let service = conversion_service(config)?;
    let a = ConversionService::parse(a)?;
    let b = ConversionService::parse(b)?;
    let distance = service.distance(a, b, metric);

    match output {
        OutputFormat::Json => println!("{}", json!({ "metric": metric, "distance": distance })),
        OutputFormat::Text => println!("{distance:.6}"),
    }
    Ok(())
}

fn run_mix_command(
    config: &AppConfig,
    output: OutputFormat,
    a: &str,
    b: &str,
    ratio: f32,
) -> anyhow::Result<()> {
    let service = conversion_service(config)?;
    let mixed = service.mix(ConversionService::parse(a)?, ConversionService::parse(b)?, ratio);

    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&service.report(mixed))?),
        OutputFormat::Text => println!("{}", mixed.to_hex()),
    }
    Ok(())
}

fn run_status_command(config: &AppConfig, config_arg: Option<&Path>) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let config_env = std::env::var(CONFIG_ENV).ok();
    let (illuminant, observer) = config.reference();

    // Header
    println!("Chromapick v{VERSION}");
    println!("Color conversion and palette extraction\n");

    println!("Environment Variables:");
    println!(
        "  {CONFIG_ENV} = {}",
        config_env.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  RUST_LOG          = {}",
        std::env::var("RUST_LOG")
            .ok()
            .as_deref()
            .unwrap_or("chromapick=warn (default)")
    );

    println!("\nConfiguration:");
    let source = config_arg
        .map(|p| p.display().to_string())
        .or(config_env)
        .unwrap_or_else(|| "built-in defaults".to_string());
    println!("  Source:     {source}");
    println!("  Reference:  {illuminant} / {observer} degree");
    println!("  Palette:    {} colors, depth {}", config.palette.colors, config.palette.max_depth);
    println!(
        "  Output:     {}",
        match config.output {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    );

    println!("\nCommands:");
    println!("  convert <color>            Show a color in every color space");
    println!("  palette -i <file|->        Extract a palette from raw pixels");
    println!("  contrast <color>           Black or white text for a background");
    println!("  distance <a> <b>           Color difference (--metric rgb|lch)");
    println!("  mix <a> <b>                Linear-light blend (--ratio)");
    println!("\nRun 'chromapick --help' for all options.");
}
