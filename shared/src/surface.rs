use crate::error::SnapshotError;
use crate::Point;

pub const STROKE_WIDTH: f64 = 5.0;
pub const BACKGROUND_COLOR: &str = "#2D2D2D";
/// Largest width or height handed to a surface, in pixels.
pub const MAX_SURFACE_DIMENSION: u32 = 16_384;

const NORMAL_WIDTH: f64 = 0.90;
const NORMAL_HEIGHT: f64 = 0.5;
const EXPANDED_WIDTH: f64 = 0.95;
const EXPANDED_HEIGHT: f64 = 0.9;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayMode {
    #[default]
    Normal,
    Expanded,
}

impl DisplayMode {
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Normal => DisplayMode::Expanded,
            DisplayMode::Expanded => DisplayMode::Normal,
        }
    }

    pub fn is_expanded(self) -> bool {
        self == DisplayMode::Expanded
    }

    /// Label for the button that switches away from this mode.
    pub fn toggle_label(self) -> &'static str {
        match self {
            DisplayMode::Normal => "Expand Blackboard",
            DisplayMode::Expanded => "Shrink Blackboard",
        }
    }

    fn fractions(self) -> (f64, f64) {
        match self {
            DisplayMode::Normal => (NORMAL_WIDTH, NORMAL_HEIGHT),
            DisplayMode::Expanded => (EXPANDED_WIDTH, EXPANDED_HEIGHT),
        }
    }
}

/// Inner size of the browser window in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Pixel dimensions of the surface for a viewport and display mode.
///
/// Fractions are truncated toward zero, matching how a canvas coerces
/// fractional width/height assignments. Each side is capped at
/// [`MAX_SURFACE_DIMENSION`].
pub fn surface_size(viewport: Viewport, mode: DisplayMode) -> SurfaceSize {
    let (width_fraction, height_fraction) = mode.fractions();
    SurfaceSize {
        width: to_pixels(viewport.width * width_fraction),
        height: to_pixels(viewport.height * height_fraction),
    }
}

fn to_pixels(value: f64) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    value.min(MAX_SURFACE_DIMENSION as f64) as u32
}

/// A drawable bitmap the board paints on.
///
/// `resize` always discards prior content; raster surfaces cannot change
/// dimensions without losing their pixels.
pub trait Surface {
    fn size(&self) -> SurfaceSize;

    /// Sets the dimensions, configures round caps at [`STROKE_WIDTH`] and
    /// fills everything with [`BACKGROUND_COLOR`].
    fn resize(&mut self, size: SurfaceSize);

    /// Erases drawn content back to the freshly resized state.
    fn clear(&mut self);

    /// Renders one straight segment immediately.
    fn stroke_segment(&mut self, from: Point, to: Point, color: &str);

    /// Encodes the current content as a `data:image/png;base64,` URI.
    fn export_snapshot(&self) -> Result<String, SnapshotError>;
}

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;
