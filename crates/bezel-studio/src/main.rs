//! Bezel Studio: renders a styled demo scene to a PNG.
//!
//! Builds a panel with a toolbar of buttons and a chart of circle markers,
//! styles every element from a style sheet, rasterizes on the CPU, and writes
//! the framebuffer to disk.

mod layout;
mod scene;
mod styled;

use std::path::{Path, PathBuf};

use anyhow::{ensure, Context, Result};
use bezel_engine::logging::{init_logging, LoggingConfig};
use bezel_engine::raster::{Framebuffer, RasterConfig, RasterStats, Rasterizer};
use bezel_style::StyleSheet;
use clap::Parser;

use scene::{build_demo, Styler};

pub(crate) const DEFAULT_SHEET: &str = include_str!("../ui/default.bss");
pub(crate) const INITIAL_SHEET: &str = include_str!("../ui/initial.bss");

/// Smallest target the demo layout fits in.
const MIN_SIZE: (u32, u32) = (480, 240);

/// Render a styled demo scene of markers and UI elements to a PNG
#[derive(Parser, Debug)]
#[command(name = "bezel-studio")]
#[command(about = "Render a styled demo scene of markers and UI elements to a PNG")]
#[command(version)]
struct Args {
    /// Image width in pixels
    #[arg(long, default_value = "640")]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value = "400")]
    height: u32,

    /// Style sheet replacing the built-in theme
    #[arg(short, long)]
    stylesheet: Option<PathBuf>,

    /// Rasterize on the calling thread only
    #[arg(long)]
    serial: bool,

    /// Where to write the PNG
    #[arg(short, long, default_value = "bezel.png")]
    output: PathBuf,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn load_sheet(path: Option<&Path>) -> Result<StyleSheet> {
    let Some(path) = path else {
        return StyleSheet::parse(DEFAULT_SHEET).context("built-in style sheet");
    };
    let src = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read style sheet {}", path.display()))?;
    StyleSheet::parse(&src).with_context(|| format!("failed to parse style sheet {}", path.display()))
}

fn render(args: &Args, sheet: &StyleSheet) -> Result<(Framebuffer, RasterStats)> {
    ensure!(
        args.width >= MIN_SIZE.0 && args.height >= MIN_SIZE.1,
        "image must be at least {}x{} pixels, got {}x{}",
        MIN_SIZE.0,
        MIN_SIZE.1,
        args.width,
        args.height
    );

    let initial = StyleSheet::parse(INITIAL_SHEET).context("built-in initial style sheet")?;
    let styler = Styler { sheet, initial: &initial };

    let (mut list, scene) = build_demo(args.width, args.height, &styler)?;
    log::info!(
        "scene: {} elements, {} markers, {} hidden",
        scene.elements,
        scene.markers,
        scene.hidden
    );

    let mut target = Framebuffer::new(args.width, args.height)?;
    let rasterizer = Rasterizer::new(RasterConfig {
        parallel: !args.serial,
        clear_color: Some(styler.clear_color()),
    });
    let stats = rasterizer.render(&mut list, &mut target);
    Ok((target, stats))
}

fn write_png(target: &Framebuffer, path: &Path) -> Result<()> {
    let image = image::RgbaImage::from_raw(target.width(), target.height(), target.to_rgba8())
        .context("framebuffer size does not match its pixel data")?;
    image
        .save(path)
        .with_context(|| format!("failed to write {}", path.display()))
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(LoggingConfig::default().with_verbosity(args.verbose));

    log::info!("Starting Bezel Studio ({}x{})", args.width, args.height);

    let sheet = load_sheet(args.stylesheet.as_deref())?;
    let (target, stats) = render(&args, &sheet)?;

    log::info!(
        "drew {} commands ({} skipped, {} culled): {} of {} fragments written",
        stats.commands_drawn,
        stats.commands_skipped,
        stats.commands_culled,
        stats.fragments_written,
        stats.fragments_evaluated
    );
    if stats.fragments_unreachable > 0 {
        log::warn!("{} fragments matched no region", stats.fragments_unreachable);
    }

    write_png(&target, &args.output)?;
    log::info!("wrote {}", args.output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("bezel-studio").chain(extra.iter().copied())).unwrap()
    }

    #[test]
    fn defaults() {
        let a = args(&[]);
        assert_eq!((a.width, a.height), (640, 400));
        assert!(!a.serial);
        assert_eq!(a.output, PathBuf::from("bezel.png"));
        assert!(a.stylesheet.is_none());
        assert_eq!(a.verbose, 0);
    }

    #[test]
    fn flags() {
        let a = args(&["--width", "320", "--serial", "-vv", "-o", "out.png"]);
        assert_eq!(a.width, 320);
        assert!(a.serial);
        assert_eq!(a.verbose, 2);
        assert_eq!(a.output, PathBuf::from("out.png"));
    }

    #[test]
    fn built_in_sheets_parse() {
        load_sheet(None).unwrap();
        StyleSheet::parse(INITIAL_SHEET).unwrap();
    }

    #[test]
    fn missing_style_sheet_is_reported() {
        let err = load_sheet(Some(Path::new("/nonexistent/theme.bss"))).unwrap_err();
        assert!(err.to_string().contains("failed to read style sheet"));
    }

    #[test]
    fn demo_renders_every_command() {
        let a = args(&["--serial"]);
        let sheet = load_sheet(None).unwrap();
        let (target, stats) = render(&a, &sheet).unwrap();

        assert_eq!(stats.commands_drawn, 7 + scene::MARKER_COUNT as u32);
        assert_eq!(stats.commands_skipped, 0);
        assert_eq!(stats.fragments_unreachable, 0);
        assert_eq!(target.to_rgba8().len(), 640 * 400 * 4);
    }

    #[test]
    fn too_small_is_rejected() {
        let sheet = load_sheet(None).unwrap();
        let err = render(&args(&["--width", "100"]), &sheet).unwrap_err();
        assert!(err.to_string().contains("at least 480x240"));
    }

    #[test]
    fn serial_and_parallel_match() {
        let sheet = load_sheet(None).unwrap();
        let (serial, _) = render(&args(&["--serial"]), &sheet).unwrap();
        let (parallel, _) = render(&args(&[]), &sheet).unwrap();
        assert_eq!(serial.as_bytes(), parallel.as_bytes());
    }
}
