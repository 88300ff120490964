use bezier2svg::logging::init_logging;
use bezier2svg::{ExportOptions, ProjectionAxis, export_to_file, parse_scene};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::process;
use tracing::{error, warn};

/// Export Bezier curves from a 3D scene description as an SVG document
#[derive(Parser, Debug)]
#[command(name = "bezier2svg", version)]
struct Cli {
    /// Scene description (JSON)
    scene: PathBuf,

    /// Output SVG file
    output: PathBuf,

    /// Export every visible curve, not only the selected ones
    #[arg(long)]
    all: bool,

    /// Projection axis
    #[arg(
        short,
        long,
        value_enum,
        default_value_t = ProjectionAxis::Viewport,
        allow_hyphen_values = true
    )]
    axis: ProjectionAxis,

    /// Scale in pixels per scene unit
    #[arg(short, long, default_value_t = 100.0)]
    scale: f64,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let content = match fs::read_to_string(&cli.scene) {
        Ok(content) => content,
        Err(e) => {
            error!("Error reading scene file '{}': {}", cli.scene.display(), e);
            process::exit(1);
        }
    };

    let scene = match parse_scene(&content) {
        Ok(scene) => scene,
        Err(e) => {
            error!("Error parsing scene file: {}", e);
            process::exit(2);
        }
    };

    let options = ExportOptions {
        selection_only: !cli.all,
        projection: cli.axis,
        scale: cli.scale,
        ..Default::default()
    };

    match export_to_file(&scene, &options, &cli.output) {
        Ok(report) => {
            if !report.warnings.is_empty() {
                warn!("{} curve(s) were skipped", report.warnings.len());
            }
            println!(
                "Exported {} layer(s) to '{}'",
                report.document.layers.len(),
                cli.output.display()
            );
        }
        Err(e) => {
            error!("Export failed: {}", e);
            process::exit(3);
        }
    }
}
