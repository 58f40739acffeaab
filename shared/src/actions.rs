use crate::api::CalculateRequest;
use crate::board::{Board, DrawMode};
use crate::palette::swatch;
use crate::surface::{Surface, Viewport};
use crate::{normalize_point, Point};

pub fn pointer_down<S: Surface>(board: &mut Board<S>, point: Point) {
    let Some(point) = normalize_point(point) else {
        return;
    };
    if !board.is_mounted() {
        return;
    }
    board.ui.draw = DrawMode::Drawing { last: point };
}

pub fn pointer_move<S: Surface>(board: &mut Board<S>, point: Point) {
    let Some(point) = normalize_point(point) else {
        return;
    };
    let DrawMode::Drawing { last } = board.ui.draw else {
        return;
    };
    let Some(surface) = board.surface.as_mut() else {
        return;
    };
    surface.stroke_segment(last, point, &board.ui.color);
    board.ui.draw = DrawMode::Drawing { last: point };
}

pub fn pointer_up<S: Surface>(board: &mut Board<S>) {
    end_stroke(board);
}

pub fn pointer_leave<S: Surface>(board: &mut Board<S>) {
    end_stroke(board);
}

fn end_stroke<S: Surface>(board: &mut Board<S>) {
    board.ui.draw = DrawMode::Idle;
}

pub fn select_color<S: Surface>(board: &mut Board<S>, color: &str) {
    board.ui.color = color.to_string();
}

/// Selects a palette swatch by position; out-of-range indices are ignored.
pub fn select_swatch<S: Surface>(board: &mut Board<S>, index: usize) -> bool {
    match swatch(index) {
        Some(color) => {
            select_color(board, color);
            true
        }
        None => false,
    }
}

pub fn reset<S: Surface>(board: &mut Board<S>) {
    end_stroke(board);
    if let Some(surface) = board.surface.as_mut() {
        surface.clear();
    }
}

pub fn toggle_expand<S: Surface>(board: &mut Board<S>) {
    board.ui.mode = board.ui.mode.toggled();
    apply_resize(board);
}

pub fn resize_viewport<S: Surface>(board: &mut Board<S>, viewport: Viewport) {
    board.viewport = viewport;
    apply_resize(board);
}

/// Re-sizes the surface for the current viewport and mode. Drawn content
/// does not survive.
pub fn apply_resize<S: Surface>(board: &mut Board<S>) {
    let size = board.target_size();
    end_stroke(board);
    let Some(surface) = board.surface.as_mut() else {
        return;
    };
    log::debug!(
        "resizing surface to {}x{} ({:?})",
        size.width,
        size.height,
        board.ui.mode
    );
    surface.resize(size);
}

/// Captures the surface and builds the request body. Marks the board as
/// submitting until [`finish_submit`] is called.
pub fn submit<S: Surface>(board: &mut Board<S>) -> Option<CalculateRequest> {
    let surface = board.surface.as_ref()?;
    let image = match surface.export_snapshot() {
        Ok(image) => image,
        Err(error) => {
            log::error!("snapshot export failed: {error}");
            return None;
        }
    };
    if board.ui.submitting {
        log::warn!("submitting while a previous calculation is still in flight");
    }
    board.ui.submitting = true;
    Some(CalculateRequest::new(image, board.ui.variables.clone()))
}

pub fn finish_submit<S: Surface>(board: &mut Board<S>) {
    board.ui.submitting = false;
}

#[cfg(all(test, feature = "raster"))]
#[path = "actions_test.rs"]
mod actions_test;
