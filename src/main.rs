use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use mandelbrot_explorer::{
    Complex64, ExplorerController, MandelbrotConfig, NavigationCommand, PamFilePresenter,
    read_palette_csv,
};

/// Renders one escape-time frame of the Mandelbrot set to a PAM image.
///
/// Example:
///   mandelbrot_explorer --width 800 --height 600 --step in --step click:520,200 -o frame.pam
#[derive(Parser, Debug)]
#[command(name = "mandelbrot_explorer", version)]
struct Cli {
    /// Frame width in pixels
    #[arg(long, default_value_t = MandelbrotConfig::default().width)]
    width: u32,

    /// Frame height in pixels
    #[arg(long, default_value_t = MandelbrotConfig::default().height)]
    height: u32,

    /// Iteration cap; points that reach it count as inside the set
    #[arg(long = "iter", default_value_t = MandelbrotConfig::default().max_iterations)]
    max_iterations: u32,

    /// Distance in the complex plane between neighbouring pixels
    #[arg(long = "dpp", default_value_t = MandelbrotConfig::default().distance_per_pixel)]
    distance_per_pixel: f64,

    /// Real part of the frame centre
    #[arg(
        long,
        default_value_t = MandelbrotConfig::default().center.re,
        allow_negative_numbers = true
    )]
    cx: f64,

    /// Imaginary part of the frame centre
    #[arg(
        long,
        default_value_t = MandelbrotConfig::default().center.im,
        allow_negative_numbers = true
    )]
    cy: f64,

    /// Real part of the orbit seed z0 (non-zero gives the seeded variant)
    #[arg(
        long,
        default_value_t = MandelbrotConfig::default().z0.re,
        allow_negative_numbers = true
    )]
    z0x: f64,

    /// Imaginary part of the orbit seed z0
    #[arg(
        long,
        default_value_t = MandelbrotConfig::default().z0.im,
        allow_negative_numbers = true
    )]
    z0y: f64,

    /// CSV palette with an r,g,b,a header row; two-tone colours when omitted
    #[arg(long = "palette_path")]
    palette_path: Option<PathBuf>,

    /// Navigation applied before rendering, in order: in, out, reset,
    /// pan:DX,DY, click:X,Y, size:WxH, iter:N
    #[arg(long = "step", allow_hyphen_values = true)]
    steps: Vec<NavigationCommand>,

    /// Output file
    #[arg(short, long, default_value = "output/mandelbrot.pam")]
    output: PathBuf,
}

impl Cli {
    fn config(&self) -> MandelbrotConfig {
        MandelbrotConfig {
            width: self.width,
            height: self.height,
            center: Complex64::new(self.cx, self.cy),
            distance_per_pixel: self.distance_per_pixel,
            max_iterations: self.max_iterations,
            z0: Complex64::new(self.z0x, self.z0y),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let palette = match &cli.palette_path {
        Some(path) => read_palette_csv(path)
            .with_context(|| format!("failed to load palette {}", path.display()))?,
        None => None,
    };

    let mut controller =
        ExplorerController::from_config(PamFilePresenter::new(), &cli.config(), palette)
            .context("invalid view parameters")?;

    for step in &cli.steps {
        controller
            .apply(*step)
            .with_context(|| format!("cannot apply navigation step {}", step))?;
    }

    info!("{}", controller.status_line());

    controller.redraw_if_needed().context("render failed")?;

    if let Some(parent) = cli.output.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    controller
        .write(&cli.output)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    Ok(())
}
