use crate::api::VariableMap;
use crate::palette::DEFAULT_COLOR;
use crate::surface::{surface_size, DisplayMode, Surface, SurfaceSize, Viewport};
use crate::Point;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawMode {
    Idle,
    Drawing { last: Point },
}

/// Everything the board mutates in response to input, in one place.
#[derive(Clone, Debug, PartialEq)]
pub struct UiState {
    pub mode: DisplayMode,
    pub color: String,
    pub draw: DrawMode,
    pub variables: VariableMap,
    pub submitting: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            mode: DisplayMode::Normal,
            color: DEFAULT_COLOR.to_string(),
            draw: DrawMode::Idle,
            variables: VariableMap::new(),
            submitting: false,
        }
    }
}

/// The drawing surface plus the state that drives it.
///
/// `surface` is `None` until mounted; actions on an unmounted board are
/// silently skipped.
pub struct Board<S> {
    pub surface: Option<S>,
    pub viewport: Viewport,
    pub ui: UiState,
}

impl<S> Default for Board<S> {
    fn default() -> Self {
        Self {
            surface: None,
            viewport: Viewport::default(),
            ui: UiState::default(),
        }
    }
}

impl<S: Surface> Board<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a surface and sizes it for `viewport`.
    pub fn mount(&mut self, surface: S, viewport: Viewport) {
        self.surface = Some(surface);
        self.viewport = viewport;
        crate::actions::apply_resize(self);
    }

    pub fn unmount(&mut self) -> Option<S> {
        self.ui.draw = DrawMode::Idle;
        self.surface.take()
    }

    pub fn is_mounted(&self) -> bool {
        self.surface.is_some()
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.ui.draw, DrawMode::Drawing { .. })
    }

    pub fn color(&self) -> &str {
        &self.ui.color
    }

    pub fn mode(&self) -> DisplayMode {
        self.ui.mode
    }

    pub fn target_size(&self) -> SurfaceSize {
        surface_size(self.viewport, self.ui.mode)
    }
}
