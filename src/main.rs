//! Slide Charts CLI
//!
//! Usage:
//!   slide-charts [OPTIONS] render [FILE] [--surface NAME | --width W --height H]
//!   slide-charts [OPTIONS] scene [FILE] [--surface NAME | --width W --height H]
//!   slide-charts [OPTIONS] export [FILE] [--format html|json]
//!
//! Options:
//!   -p, --palette <FILE>  Palette file for chart colors (TOML format)
//!   -d, --debug           Log render details to stderr
//!   -h, --help            Print help

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use slide_charts::{
    export_html, render_scene, render_svg, Deck, RenderConfig, RenderError, Surface, SvgConfig,
};

#[derive(Parser)]
#[command(name = "slide-charts")]
#[command(about = "Render slide charts to SVG and export decks")]
struct Cli {
    /// Palette file for chart colors (TOML format)
    #[arg(short, long, global = true)]
    palette: Option<PathBuf>,

    /// Log render details to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a chart JSON document to SVG
    Render(ChartArgs),

    /// Print the computed scene of a chart JSON document as JSON
    Scene(ChartArgs),

    /// Export a deck JSON document
    Export(ExportArgs),
}

#[derive(Args)]
struct ChartArgs {
    /// Input file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Named render box: default, editor, preview or thumbnail
    #[arg(short, long, value_enum, default_value_t = Surface::Default)]
    surface: Surface,

    /// Render box width (overrides --surface)
    #[arg(long, requires = "height")]
    width: Option<f64>,

    /// Render box height (overrides --surface)
    #[arg(long, requires = "width")]
    height: Option<f64>,

    /// Omit the XML declaration
    #[arg(long)]
    inline: bool,
}

#[derive(Args)]
struct ExportArgs {
    /// Deck file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "html")]
    format: ExportFormat,
}

#[derive(Clone, Copy, ValueEnum)]
enum ExportFormat {
    /// Standalone HTML document
    Html,
    /// Normalized deck JSON
    Json,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let config = match base_config(cli.palette.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            let path = cli.palette.as_deref().unwrap_or(Path::new(""));
            eprintln!("Error loading palette '{}': {}", path.display(), e);
            std::process::exit(1);
        }
    };

    let (input, result) = match &cli.command {
        Command::Render(args) => {
            let source = read_input(args.input.as_deref());
            let config = chart_config(config, args);
            let result = render_scene(&source, &config).map(|scene| render_svg(&scene, &config.svg));
            ((args.input.clone(), source), result)
        }
        Command::Scene(args) => {
            let source = read_input(args.input.as_deref());
            let config = chart_config(config, args);
            let result = render_scene(&source, &config).map(|scene| {
                serde_json::to_string_pretty(&scene).unwrap_or_default()
            });
            ((args.input.clone(), source), result)
        }
        Command::Export(args) => {
            let source = read_input(args.input.as_deref());
            let result = Deck::from_json(&source)
                .map(|deck| match args.format {
                    ExportFormat::Html => export_html(&deck, &config),
                    ExportFormat::Json => deck.to_json(),
                })
                .map_err(RenderError::from);
            ((args.input.clone(), source), result)
        }
    };

    match result {
        Ok(output) => println!("{}", output),
        Err(e) => {
            let (path, source) = input;
            let filename = path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "<stdin>".to_string());
            eprintln!("Error: {}", e.format(&source, &filename));
            std::process::exit(1);
        }
    }
}

fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn base_config(palette: Option<&Path>) -> Result<RenderConfig, RenderError> {
    let config = RenderConfig::new();
    match palette {
        Some(path) => config.with_palette_file(path),
        None => Ok(config),
    }
}

fn chart_config(config: RenderConfig, args: &ChartArgs) -> RenderConfig {
    let config = match (args.width, args.height) {
        (Some(w), Some(h)) => config.with_size(w, h),
        _ => config.with_surface(args.surface),
    };
    if args.inline {
        config.with_svg(SvgConfig::inline())
    } else {
        config
    }
}

fn read_input(path: Option<&Path>) -> String {
    match path {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }
}
