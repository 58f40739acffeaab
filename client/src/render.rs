use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use blackboard_shared::surface::{BACKGROUND_COLOR, STROKE_WIDTH};
use blackboard_shared::{Point, SnapshotError, Surface, SurfaceSize};

/// A [`Surface`] drawn straight onto a `<canvas>` 2D context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Returns `None` when the canvas cannot hand out a 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { canvas, ctx })
    }

    fn fill_background(&self) {
        self.ctx.set_fill_style_str(BACKGROUND_COLOR);
        self.ctx.fill_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> SurfaceSize {
        SurfaceSize::new(self.canvas.width(), self.canvas.height())
    }

    fn resize(&mut self, size: SurfaceSize) {
        // Assigning either dimension wipes the bitmap and the context state.
        self.canvas.set_width(size.width);
        self.canvas.set_height(size.height);
        self.ctx.set_line_cap("round");
        self.ctx.set_line_width(STROKE_WIDTH);
        self.fill_background();
    }

    fn clear(&mut self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
        self.fill_background();
    }

    fn stroke_segment(&mut self, from: Point, to: Point, color: &str) {
        let ctx = &self.ctx;
        ctx.set_stroke_style_str(color);
        ctx.begin_path();
        ctx.move_to(from.x as f64, from.y as f64);
        ctx.line_to(to.x as f64, to.y as f64);
        ctx.stroke();
    }

    fn export_snapshot(&self) -> Result<String, SnapshotError> {
        if self.size().is_empty() {
            return Err(SnapshotError::Empty);
        }
        self.canvas
            .to_data_url_with_type("image/png")
            .map_err(|error| SnapshotError::Encode(format!("{error:?}")))
    }
}
