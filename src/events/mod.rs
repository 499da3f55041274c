use crate::dom::{self, Listener};
use crystal_core::InputState;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

mod pointer;

/// Register every page listener that writes into `input`. Canvases listed in
/// `canvases` get their backing store resynced on resize. The returned guards
/// deregister their listener when dropped.
pub fn wire_input(
    window: &web::Window,
    document: &web::Document,
    input: &Rc<RefCell<InputState>>,
    canvases: Vec<web::HtmlCanvasElement>,
) -> anyhow::Result<Vec<Listener>> {
    Ok(vec![
        pointer::wire_pointermove(window, input)?,
        pointer::wire_hover(document, input)?,
        pointer::wire_leave(document, input)?,
        wire_scroll(window, input)?,
        wire_resize(window, input, canvases)?,
    ])
}

fn wire_scroll(window: &web::Window, input: &Rc<RefCell<InputState>>) -> anyhow::Result<Listener> {
    let input = input.clone();
    let wnd = window.clone();
    Listener::new(window, "scroll", move |_ev: web::Event| {
        let offset = wnd.scroll_y().unwrap_or(0.0) as f32;
        input.borrow_mut().scrolled(offset);
    })
}

fn wire_resize(
    window: &web::Window,
    input: &Rc<RefCell<InputState>>,
    canvases: Vec<web::HtmlCanvasElement>,
) -> anyhow::Result<Listener> {
    let input = input.clone();
    let wnd = window.clone();
    Listener::new(window, "resize", move |_ev: web::Event| {
        let (w, h) = dom::inner_size(&wnd);
        input.borrow_mut().resized(w, h);
        for canvas in &canvases {
            dom::sync_canvas_backing_size(canvas);
        }
        log::info!("[resize] {w:.0}x{h:.0}");
    })
}
