mod raster;
mod vector;

use std::path::{Path, PathBuf};

use color_lib::color::sRGB;
use hemicycle::{ChamberConfig, DrawCommand, Point};
use thiserror::Error;
use tracing::info;

pub use raster::RasterCanvas;
pub use vector::VectorCanvas;

/// Something seats can be painted onto.
pub trait Canvas {
    fn fill_circle(&mut self, center: Point, diameter: f64, color: &sRGB);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Background {
    Solid(sRGB),
    Transparent,
}

impl Default for Background {
    fn default() -> Self {
        Background::Solid([0xFF, 0xFF, 0xFF])
    }
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("failed to encode image: {0}")]
    Image(#[from] image::ImageError),
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
    #[error("don't know how to write {0:?}, expected a .png or .svg file")]
    UnsupportedFormat(PathBuf),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Svg,
}

impl OutputFormat {
    pub fn from_path(path: &Path) -> Result<Self, RenderError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("png") => Ok(OutputFormat::Png),
            Some("svg") => Ok(OutputFormat::Svg),
            _ => Err(RenderError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// Paints `commands` in order; later seats cover earlier ones.
pub fn paint<C: Canvas>(canvas: &mut C, commands: &[DrawCommand], diameter: f64) {
    for command in commands {
        canvas.fill_circle(command.point, diameter, &command.color);
    }
}

pub fn rasterize(
    config: &ChamberConfig,
    commands: &[DrawCommand],
    background: Background,
) -> RasterCanvas {
    let mut canvas = RasterCanvas::new(config.width(), config.height(), background);
    paint(&mut canvas, commands, config.diameter());
    canvas
}

pub fn save_png<T>(
    path: T,
    config: &ChamberConfig,
    commands: &[DrawCommand],
    background: Background,
) -> Result<(), RenderError>
where
    T: AsRef<Path>,
{
    rasterize(config, commands, background).save(path)
}

pub fn save_svg<T>(
    path: T,
    config: &ChamberConfig,
    commands: &[DrawCommand],
    background: Background,
) -> Result<(), RenderError>
where
    T: AsRef<Path>,
{
    let mut canvas = VectorCanvas::new(config.width(), config.height(), background);
    paint(&mut canvas, commands, config.diameter());
    svg::save(path, &canvas.into_document())?;
    Ok(())
}

/// Writes the chart, picking PNG or SVG from the file extension.
pub fn save(
    path: &Path,
    config: &ChamberConfig,
    commands: &[DrawCommand],
    background: Background,
) -> Result<OutputFormat, RenderError> {
    let format = OutputFormat::from_path(path)?;
    match format {
        OutputFormat::Png => save_png(path, config, commands, background)?,
        OutputFormat::Svg => save_svg(path, config, commands, background)?,
    }
    info!(
        path = %path.display(),
        ?format,
        seats = commands.len(),
        width = config.width(),
        height = config.height(),
        "wrote chamber chart"
    );
    Ok(format)
}
