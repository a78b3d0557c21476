//! Command-line preview tool: renders the single view or the thumbnail
//! grid into a PNG with the CPU rasterizer.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use image::RgbaImage;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use viewplane::config::ViewerConfig;
use viewplane::raster::render_frame;
use viewplane::scene::Scene;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    Single,
    Grid,
}

#[derive(Debug, Parser)]
#[command(name = "viewplane", about = "Render image-viewer previews to PNG")]
struct Cli {
    /// Images to show, in grid order
    #[arg(value_name = "IMAGE", required = true)]
    images: Vec<PathBuf>,

    /// Path to YAML config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// View to render; defaults to single for one image, grid for more
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Output window size
    #[arg(long, value_parser = parse_size, default_value = "1280x800", value_name = "WxH")]
    window: [u32; 2],

    /// Output PNG path
    #[arg(short, long, default_value = "preview.png")]
    out: PathBuf,

    /// Item to select (grid) or show (single)
    #[arg(long, default_value_t = 0, value_name = "INDEX")]
    selected: usize,

    /// Single view: zoom override instead of fit-to-window
    #[arg(long)]
    zoom: Option<f32>,

    /// Single view: pan offset in window pixels
    #[arg(long, value_parser = parse_pair, value_name = "X,Y")]
    pan: Option<[f32; 2]>,

    /// Grid: scroll down by this many pixels
    #[arg(long, default_value_t = 0.0, value_name = "PIXELS")]
    scroll: f32,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn parse_size(s: &str) -> Result<[u32; 2], String> {
    let (w, h) = s
        .split_once('x')
        .ok_or_else(|| format!("expected WxH, got {s:?}"))?;
    let w: u32 = w.parse().map_err(|_| format!("bad width in {s:?}"))?;
    let h: u32 = h.parse().map_err(|_| format!("bad height in {s:?}"))?;
    if w == 0 || h == 0 {
        return Err(format!("window must be non-empty, got {s:?}"));
    }
    Ok([w, h])
}

fn parse_pair(s: &str) -> Result<[f32; 2], String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got {s:?}"))?;
    let x: f32 = x.trim().parse().map_err(|_| format!("bad x in {s:?}"))?;
    let y: f32 = y.trim().parse().map_err(|_| format!("bad y in {s:?}"))?;
    Ok([x, y])
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter = EnvFilter::from_default_env()
        .add_directive(format!("viewplane={level}").parse().unwrap())
        .add_directive("wgpu=warn".parse().unwrap());
    fmt().with_env_filter(filter).with_target(true).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cfg = match &cli.config {
        Some(path) => ViewerConfig::from_yaml_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => ViewerConfig::default(),
    };

    let mut images = Vec::with_capacity(cli.images.len());
    for path in &cli.images {
        let img = image::open(path)
            .with_context(|| format!("opening {}", path.display()))?
            .to_rgba8();
        images.push(img);
    }
    info!(count = images.len(), "loaded images");

    let sizes: Vec<[f32; 2]> = images
        .iter()
        .map(|img| [img.width() as f32, img.height() as f32])
        .collect();
    let window = [cli.window[0] as f32, cli.window[1] as f32];
    let count = images.len();

    let mode = cli.mode.unwrap_or(if count == 1 { ModeArg::Single } else { ModeArg::Grid });
    let mut scene = Scene::new(&cfg);
    match mode {
        ModeArg::Single => {
            let size = *sizes
                .get(cli.selected)
                .with_context(|| format!("--selected {} is out of range", cli.selected))?;
            scene.open_image(cli.selected, size, count, window);
            if let Some(zoom) = cli.zoom {
                scene.camera.set_zoom(zoom);
            }
            if let Some([dx, dy]) = cli.pan {
                scene.camera.pan_by(dx, dy);
            }
        }
        ModeArg::Grid => {
            if !scene.grid.select(cli.selected, count) {
                anyhow::bail!("--selected {} is out of range", cli.selected);
            }
            scene.grid.scroll_by(-cli.scroll, count, window);
        }
    }

    let plan = scene.plan_frame(window, &sizes);
    info!(draws = plan.draws.len(), mode = ?mode, "rendering frame");

    let mut target = RgbaImage::new(cli.window[0], cli.window[1]);
    render_frame(&mut target, plan.clear_color, &plan.draws, &images)?;
    target
        .save(&cli.out)
        .with_context(|| format!("writing {}", cli.out.display()))?;
    info!(path = %cli.out.display(), "preview written");
    Ok(())
}
