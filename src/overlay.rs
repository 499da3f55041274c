use crate::constants::{HIDDEN_CLASS, SPLASH_ID};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(SPLASH_ID) {
        _ = el.class_list().add_1(HIDDEN_CLASS);
        // fallback for pages without the CSS class
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    let Some(el) = document.get_element_by_id(SPLASH_ID) else {
        return true;
    };
    el.class_list().contains(HIDDEN_CLASS)
        || el
            .get_attribute("style")
            .map(|s| s.contains("display:none"))
            .unwrap_or(false)
}

/// Hide the loading splash after `delay_ms`. No-op when the page has none.
pub fn hide_splash_after(window: &web::Window, delay_ms: i32) {
    let Some(document) = window.document() else {
        return;
    };
    if is_hidden(&document) {
        return;
    }
    let cb = Closure::once_into_js(move || {
        hide(&document);
        log::info!("[splash] hidden");
    });
    if let Err(e) = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), delay_ms)
    {
        log::warn!("[splash] set_timeout failed: {:?}", e);
    }
}
