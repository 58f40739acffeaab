pub mod actions;
pub mod api;
pub mod board;
pub mod config;
pub mod error;
pub mod palette;
#[cfg(feature = "raster")]
pub mod raster;
pub mod surface;

pub use api::{calculate_url, CalculateRequest, CalculateResponse, VariableMap};
pub use board::{Board, DrawMode, UiState};
pub use config::ClientConfig;
pub use error::{ColorError, SnapshotError};
pub use palette::{parse_color, DEFAULT_COLOR, SWATCHES};
#[cfg(feature = "raster")]
pub use raster::RasterSurface;
pub use surface::{surface_size, DisplayMode, Surface, SurfaceSize, Viewport};

/// A position in surface-local pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

pub fn normalize_point(point: Point) -> Option<Point> {
    if !point.is_finite() {
        return None;
    }
    Some(point)
}
