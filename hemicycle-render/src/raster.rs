use std::path::Path;

use color_lib::color::{opaque, sRGB};
use hemicycle::Point;
use image::codecs::png::PngEncoder;
use image::{ImageEncoder, ImageFormat, Rgba, RgbaImage};

use crate::{Background, Canvas, RenderError};

/// Pixel buffer that seats are stamped into. No anti-aliasing: a pixel is
/// painted when its center falls inside the circle.
pub struct RasterCanvas {
    image: RgbaImage,
}

impl RasterCanvas {
    pub fn new(width: u32, height: u32, background: Background) -> Self {
        let fill = match background {
            Background::Solid(c) => Rgba(opaque(&c)),
            Background::Transparent => Rgba([0, 0, 0, 0]),
        };
        Self {
            image: RgbaImage::from_pixel(width, height, fill),
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    pub fn encode_png(&self) -> Result<Vec<u8>, RenderError> {
        let mut png = Vec::new();
        PngEncoder::new(&mut png).write_image(
            self.image.as_raw(),
            self.image.width(),
            self.image.height(),
            image::ExtendedColorType::Rgba8,
        )?;
        Ok(png)
    }

    pub fn save<T: AsRef<Path>>(&self, path: T) -> Result<(), RenderError> {
        self.image.save_with_format(path, ImageFormat::Png)?;
        Ok(())
    }
}

impl Canvas for RasterCanvas {
    fn fill_circle(&mut self, center: Point, diameter: f64, color: &sRGB) {
        let radius = diameter / 2.0;
        let (w, h) = self.image.dimensions();
        let clamp = |v: f64, max: u32| v.floor().clamp(0.0, max as f64) as u32;
        let (x0, x1) = (clamp(center.x - radius, w), clamp(center.x + radius + 1.0, w));
        let (y0, y1) = (clamp(center.y - radius, h), clamp(center.y + radius + 1.0, h));
        let pixel = Rgba(opaque(color));
        for y in y0..y1 {
            let dy = y as f64 + 0.5 - center.y;
            for x in x0..x1 {
                let dx = x as f64 + 0.5 - center.x;
                if dx * dx + dy * dy <= radius * radius {
                    self.image.put_pixel(x, y, pixel);
                }
            }
        }
    }
}
