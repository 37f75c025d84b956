use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::info;
use rinkplot_core::plotly::PlotlyFigure;
use rinkplot_core::report::DiagramSummary;
use rinkplot_core::{Orientation, Region, Rink, RinkConfig, RinkDiagram};
use rinkplot_export_svg::{save_svg, SvgOptions};
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "rinkplot")]
#[command(about = "Schematic ice-hockey rink diagrams as SVG or Plotly figures.")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Args)]
struct RinkArgs {
    /// full, offense, ozone, defense, dzone or neutral
    #[arg(long)]
    region: Option<String>,
    /// horizontal or vertical
    #[arg(long)]
    orientation: Option<String>,
    /// JSON file with region, orientation and style overrides.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Command {
    Render {
        #[command(flatten)]
        rink: RinkArgs,
        #[arg(long)]
        svg: Option<PathBuf>,
        #[arg(long)]
        plotly: Option<PathBuf>,
        #[arg(long)]
        dump_diagram: Option<PathBuf>,
        #[arg(long, default_value_t = 5.0, value_parser = parse_scale)]
        pixels_per_foot: f64,
    },
    Describe {
        #[command(flatten)]
        rink: RinkArgs,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render {
            rink,
            svg,
            plotly,
            dump_diagram,
            pixels_per_foot,
        } => {
            let diagram = build(&rink)?;
            render(
                &diagram,
                svg.as_deref(),
                plotly.as_deref(),
                dump_diagram.as_deref(),
                pixels_per_foot,
            )
        }
        Command::Describe { rink } => {
            let diagram = build(&rink)?;
            let json = serde_json::to_string_pretty(&DiagramSummary::of(&diagram))
                .context("serialize summary")?;
            println!("{json}");
            Ok(())
        }
    }
}

fn parse_scale(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if v.is_finite() && v > 0.0 {
        Ok(v)
    } else {
        Err(format!("expected a positive number, got {s}"))
    }
}

fn load_config(args: &RinkArgs) -> Result<RinkConfig> {
    let mut cfg = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("read config: {path:?}"))?;
            serde_json::from_str(&text).with_context(|| format!("parse config: {path:?}"))?
        }
        None => RinkConfig::default(),
    };
    if let Some(region) = &args.region {
        cfg.region = region.parse::<Region>()?;
    }
    if let Some(orientation) = &args.orientation {
        cfg.orientation = orientation.parse::<Orientation>()?;
    }
    Ok(cfg)
}

fn build(args: &RinkArgs) -> Result<RinkDiagram> {
    let cfg = load_config(args)?;
    let diagram = Rink::from_config(cfg).diagram()?;
    info!(
        "built {} rink ({}) with {} marks",
        diagram.region,
        diagram.orientation,
        diagram.marks.len()
    );
    Ok(diagram)
}

fn render(
    diagram: &RinkDiagram,
    svg: Option<&Path>,
    plotly: Option<&Path>,
    dump_diagram: Option<&Path>,
    pixels_per_foot: f64,
) -> Result<()> {
    let figure = PlotlyFigure::from_diagram(diagram);

    if let Some(path) = svg {
        ensure_parent(path);
        let opts = SvgOptions {
            pixels_per_foot,
            ..SvgOptions::default()
        };
        save_svg(path, diagram, &opts)?;
        info!("wrote {path:?}");
    }

    if let Some(path) = plotly {
        let json = figure.to_json_string_pretty().context("serialize plotly figure")?;
        ensure_parent(path);
        std::fs::write(path, &json).with_context(|| format!("write plotly figure: {path:?}"))?;
        info!("wrote {path:?}");
    }

    if let Some(path) = dump_diagram {
        let json = serde_json::to_string_pretty(diagram).context("serialize diagram")?;
        ensure_parent(path);
        std::fs::write(path, &json).with_context(|| format!("write diagram: {path:?}"))?;
        info!("wrote {path:?}");
    }

    if svg.is_none() && plotly.is_none() && dump_diagram.is_none() {
        let json = figure.to_json_string_pretty().context("serialize plotly figure")?;
        println!("{json}");
    }

    Ok(())
}

fn ensure_parent(path: &Path) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).ok();
    }
}
