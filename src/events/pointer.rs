use crate::constants::HOVER_SELECTOR;
use crate::dom::Listener;
use crystal_core::InputState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer moves anywhere on the page feed the raw sample.
pub fn wire_pointermove(
    window: &web::Window,
    input: &Rc<RefCell<InputState>>,
) -> anyhow::Result<Listener> {
    let input = input.clone();
    Listener::new(window, "pointermove", move |ev: web::Event| {
        if let Some(pe) = ev.dyn_ref::<web::PointerEvent>() {
            input
                .borrow_mut()
                .pointer_moved(pe.client_x() as f32, pe.client_y() as f32);
        }
    })
}

/// Hover state follows `mouseover`; the target or one of its ancestors must
/// match the hover selector.
pub fn wire_hover(
    document: &web::Document,
    input: &Rc<RefCell<InputState>>,
) -> anyhow::Result<Listener> {
    let input = input.clone();
    Listener::new(document, "mouseover", move |ev: web::Event| {
        let hovering = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .and_then(|el| el.closest(HOVER_SELECTOR).ok().flatten())
            .is_some();
        let mut state = input.borrow_mut();
        if state.hovering() != hovering {
            state.set_hovering(hovering);
        }
    })
}

/// Leaving the page clears hover so the ring does not stay enlarged.
pub fn wire_leave(
    document: &web::Document,
    input: &Rc<RefCell<InputState>>,
) -> anyhow::Result<Listener> {
    let input = input.clone();
    Listener::new(document, "mouseleave", move |_ev: web::Event| {
        input.borrow_mut().set_hovering(false);
    })
}
