use web_sys::{HtmlButtonElement, HtmlCanvasElement, HtmlElement, Window};

use blackboard_shared::{Board, ClientConfig};

use crate::render::CanvasSurface;

/// DOM handles the command handlers update.
pub struct Controls {
    pub palette: HtmlElement,
    pub reset: HtmlButtonElement,
    pub calculate: HtmlButtonElement,
    pub expand: HtmlButtonElement,
}

pub struct State {
    pub window: Window,
    pub canvas: HtmlCanvasElement,
    pub controls: Controls,
    pub board: Board<CanvasSurface>,
    pub config: ClientConfig,
}
