//! In-memory surface used when no browser canvas is available.

use std::io::Cursor;

use base64::Engine;
use image::{ImageFormat, Rgba, RgbaImage};

use crate::error::SnapshotError;
use crate::palette::parse_color;
use crate::surface::{Surface, SurfaceSize, BACKGROUND_COLOR, STROKE_WIDTH};
use crate::Point;

pub const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

pub struct RasterSurface {
    image: RgbaImage,
    background: Rgba<u8>,
    line_width: f64,
}

impl Default for RasterSurface {
    fn default() -> Self {
        Self::new(SurfaceSize::default())
    }
}

impl RasterSurface {
    pub fn new(size: SurfaceSize) -> Self {
        let background = parse_color(BACKGROUND_COLOR).unwrap_or([0x2d, 0x2d, 0x2d, 255]);
        let mut surface = Self {
            image: RgbaImage::new(0, 0),
            background: Rgba(background),
            line_width: STROKE_WIDTH,
        };
        surface.resize(size);
        surface
    }

    pub fn background(&self) -> Rgba<u8> {
        self.background
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        if x >= self.image.width() || y >= self.image.height() {
            return None;
        }
        Some(*self.image.get_pixel(x, y))
    }

    /// True when every pixel still holds the background fill.
    pub fn is_blank(&self) -> bool {
        self.image.pixels().all(|pixel| *pixel == self.background)
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }
}

impl Surface for RasterSurface {
    fn size(&self) -> SurfaceSize {
        SurfaceSize::new(self.image.width(), self.image.height())
    }

    fn resize(&mut self, size: SurfaceSize) {
        self.line_width = STROKE_WIDTH;
        self.image = RgbaImage::from_pixel(size.width, size.height, self.background);
    }

    fn clear(&mut self) {
        for pixel in self.image.pixels_mut() {
            *pixel = self.background;
        }
    }

    fn stroke_segment(&mut self, from: Point, to: Point, color: &str) {
        let rgba = match parse_color(color) {
            Ok(rgba) => Rgba(rgba),
            Err(error) => {
                log::warn!("skipping segment: {error}");
                return;
            }
        };
        fill_capsule(&mut self.image, from, to, self.line_width / 2.0, rgba);
    }

    fn export_snapshot(&self) -> Result<String, SnapshotError> {
        if self.size().is_empty() {
            return Err(SnapshotError::Empty);
        }
        let mut bytes = Vec::new();
        self.image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .map_err(|error| SnapshotError::Encode(error.to_string()))?;
        let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
        Ok(format!("{PNG_DATA_URL_PREFIX}{encoded}"))
    }
}

/// Paints every pixel whose center lies within `radius` of the segment.
/// The distance test gives the segment round caps at both ends.
fn fill_capsule(image: &mut RgbaImage, from: Point, to: Point, radius: f64, color: Rgba<u8>) {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return;
    }
    let (ax, ay) = (from.x as f64, from.y as f64);
    let (bx, by) = (to.x as f64, to.y as f64);
    let min_x = (ax.min(bx) - radius).floor().max(0.0);
    let min_y = (ay.min(by) - radius).floor().max(0.0);
    let max_x = (ax.max(bx) + radius).ceil().min(width as f64 - 1.0);
    let max_y = (ay.max(by) + radius).ceil().min(height as f64 - 1.0);
    if min_x > max_x || min_y > max_y {
        return;
    }

    let dx = bx - ax;
    let dy = by - ay;
    let length_sq = dx * dx + dy * dy;
    let radius_sq = radius * radius;

    for y in min_y as u32..=max_y as u32 {
        for x in min_x as u32..=max_x as u32 {
            let px = x as f64 + 0.5;
            let py = y as f64 + 0.5;
            let t = if length_sq == 0.0 {
                0.0
            } else {
                (((px - ax) * dx + (py - ay) * dy) / length_sq).clamp(0.0, 1.0)
            };
            let cx = ax + t * dx - px;
            let cy = ay + t * dy - py;
            if cx * cx + cy * cy <= radius_sq {
                image.put_pixel(x, y, color);
            }
        }
    }
}

#[cfg(test)]
#[path = "raster_test.rs"]
mod raster_test;
