use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Reflect;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, HtmlCanvasElement, PointerEvent};

use blackboard_shared::actions::{
    finish_submit, pointer_down, pointer_leave, pointer_move, pointer_up, reset, resize_viewport,
    select_swatch, submit, toggle_expand,
};
use blackboard_shared::palette::swatch_index;
use blackboard_shared::{calculate_url, Board, ClientConfig, SWATCHES};

use crate::dom::{
    event_to_point, get_element, set_board_mode, set_busy, set_expand_label, viewport,
};
use crate::net::{fetch_config, log_response, post_calculation};
use crate::palette::{mark_selected, render_palette, swatch_index_from_event};
use crate::render::CanvasSurface;
use crate::state::{Controls, State};
use crate::util::{debug_enabled, Listener};

const BUILD_API_URL: Option<&str> = option_env!("BLACKBOARD_API_URL");

struct App {
    state: Rc<RefCell<State>>,
    listeners: Vec<Listener>,
}

thread_local! {
    static MOUNTED: RefCell<Option<App>> = const { RefCell::new(None) };
}

fn document_ready_state(document: &web_sys::Document) -> Option<String> {
    Reflect::get(document.as_ref(), &JsValue::from_str("readyState"))
        .ok()?
        .as_string()
}

fn init_logging(window: &web_sys::Window) {
    let level = if debug_enabled(window) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if console_log::init_with_level(level).is_ok() {
        log::debug!("Blackboard debug logging enabled");
    }
}

#[cfg_attr(not(test), wasm_bindgen(start))]
pub fn run() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("Missing window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("Missing document"))?;

    if document_ready_state(&document).as_deref() == Some("complete") {
        return mount_blackboard();
    }

    let onload = Closure::<dyn FnMut(Event)>::new(move |_| {
        if let Err(err) = mount_blackboard() {
            web_sys::console::error_1(&err);
        }
    });
    window.add_event_listener_with_callback("load", onload.as_ref().unchecked_ref())?;
    onload.forget();

    Ok(())
}

/// Creates the surface, renders the palette and registers every listener.
/// Mounting twice without an unmount in between is a no-op.
#[wasm_bindgen]
pub fn mount_blackboard() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("Missing window"))?;
    init_logging(&window);
    if MOUNTED.with(|mounted| mounted.borrow().is_some()) {
        log::warn!("Blackboard already mounted");
        return Ok(());
    }
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("Missing document"))?;

    let canvas: HtmlCanvasElement = get_element(&document, "board")?;
    let controls = Controls {
        palette: get_element(&document, "palette")?,
        reset: get_element(&document, "reset")?,
        calculate: get_element(&document, "calculate")?,
        expand: get_element(&document, "expand")?,
    };

    let mut board = Board::new();
    match CanvasSurface::new(canvas.clone()) {
        Some(surface) => board.mount(surface, viewport(&window)),
        None => log::warn!("2D context unavailable, drawing disabled"),
    }

    render_palette(
        &document,
        &controls.palette,
        &SWATCHES,
        swatch_index(board.color()),
    );
    set_expand_label(&controls.expand, board.mode());
    set_board_mode(&canvas, board.mode());

    let state = Rc::new(RefCell::new(State {
        window,
        canvas,
        controls,
        board,
        config: ClientConfig::resolve(None, BUILD_API_URL),
    }));
    let listeners = attach_listeners(&state)?;

    {
        let state = state.clone();
        spawn_local(async move {
            let config = ClientConfig::resolve(fetch_config().await, BUILD_API_URL);
            log::info!("Calculation service at {}", config.api_url);
            state.borrow_mut().config = config;
        });
    }

    MOUNTED.with(|mounted| *mounted.borrow_mut() = Some(App { state, listeners }));
    Ok(())
}

/// Deregisters every listener and releases the surface.
#[wasm_bindgen]
pub fn unmount_blackboard() {
    let Some(App { state, listeners }) = MOUNTED.with(|mounted| mounted.borrow_mut().take())
    else {
        return;
    };
    let count = listeners.len();
    drop(listeners);
    let _ = state.borrow_mut().board.unmount();
    log::info!("Blackboard unmounted, {count} listeners removed");
}

fn attach_listeners(state: &Rc<RefCell<State>>) -> Result<Vec<Listener>, JsValue> {
    let (window, canvas, palette, reset_button, calculate_button, expand_button) = {
        let state = state.borrow();
        (
            state.window.clone(),
            state.canvas.clone(),
            state.controls.palette.clone(),
            state.controls.reset.clone(),
            state.controls.calculate.clone(),
            state.controls.expand.clone(),
        )
    };
    let mut listeners = Vec::new();

    {
        let state = state.clone();
        listeners.push(Listener::new(
            canvas.as_ref(),
            "pointerdown",
            move |event: Event| {
                let Some(event) = event.dyn_ref::<PointerEvent>() else {
                    return;
                };
                event.prevent_default();
                pointer_down(&mut state.borrow_mut().board, event_to_point(event));
            },
        )?);
    }

    {
        let state = state.clone();
        listeners.push(Listener::new(
            canvas.as_ref(),
            "pointermove",
            move |event: Event| {
                let Some(event) = event.dyn_ref::<PointerEvent>() else {
                    return;
                };
                pointer_move(&mut state.borrow_mut().board, event_to_point(event));
            },
        )?);
    }

    {
        let state = state.clone();
        listeners.push(Listener::new(canvas.as_ref(), "pointerup", move |_| {
            pointer_up(&mut state.borrow_mut().board);
        })?);
    }

    {
        let state = state.clone();
        listeners.push(Listener::new(canvas.as_ref(), "pointerleave", move |_| {
            pointer_leave(&mut state.borrow_mut().board);
        })?);
    }

    {
        let state = state.clone();
        listeners.push(Listener::new(window.as_ref(), "resize", move |_| {
            let mut state = state.borrow_mut();
            let current = viewport(&state.window);
            resize_viewport(&mut state.board, current);
        })?);
    }

    {
        let state = state.clone();
        listeners.push(Listener::new(palette.as_ref(), "click", move |event| {
            let Some(index) = swatch_index_from_event(&event) else {
                return;
            };
            let mut state = state.borrow_mut();
            if select_swatch(&mut state.board, index) {
                log::debug!("Selected color {}", state.board.color());
                mark_selected(&state.controls.palette, Some(index));
            }
        })?);
    }

    {
        let state = state.clone();
        listeners.push(Listener::new(reset_button.as_ref(), "click", move |_| {
            reset(&mut state.borrow_mut().board);
        })?);
    }

    {
        let state = state.clone();
        listeners.push(Listener::new(expand_button.as_ref(), "click", move |_| {
            let mut state = state.borrow_mut();
            toggle_expand(&mut state.board);
            let mode = state.board.mode();
            set_expand_label(&state.controls.expand, mode);
            set_board_mode(&state.canvas, mode);
        })?);
    }

    {
        let state = state.clone();
        listeners.push(Listener::new(calculate_button.as_ref(), "click", move |_| {
            let (request, url, button) = {
                let mut state = state.borrow_mut();
                let request = submit(&mut state.board);
                let url = calculate_url(&state.config.api_url);
                (request, url, state.controls.calculate.clone())
            };
            let Some(request) = request else {
                log::warn!("Nothing to submit, surface unavailable");
                return;
            };
            log::debug!("Posting snapshot ({} bytes) to {url}", request.image.len());
            set_busy(&button, true);
            let state = state.clone();
            spawn_local(async move {
                match post_calculation(&url, &request).await {
                    Ok(body) => log_response(&body),
                    Err(error) => log::error!("Calculation request failed: {error}"),
                }
                finish_submit(&mut state.borrow_mut().board);
                set_busy(&button, false);
            });
        })?);
    }

    Ok(listeners)
}

#[cfg(all(test, target_arch = "wasm32"))]
#[path = "app_test.rs"]
mod app_test;
