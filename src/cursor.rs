use crate::constants::*;
use crate::dom;
use crate::viewport::centered_transform;
use crystal_core::{ElementStyle, FollowerPose};
use web_sys as web;

/// The fixed-position elements of the custom cursor. Any of them may be
/// absent from the page.
pub struct CursorElements {
    dot: Option<web::HtmlElement>,
    ring: Option<web::HtmlElement>,
    trail: Option<web::HtmlElement>,
    burst: Option<web::HtmlElement>,
}

impl CursorElements {
    pub fn find(document: &web::Document) -> Self {
        let els = Self {
            dot: dom::html_element_by_id(document, CURSOR_DOT_ID),
            ring: dom::html_element_by_id(document, CURSOR_RING_ID),
            trail: dom::html_element_by_id(document, CURSOR_TRAIL_ID),
            burst: dom::html_element_by_id(document, CURSOR_BURST_ID),
        };
        if els.is_empty() {
            log::info!("[cursor] no follower elements on page");
        }
        els
    }

    pub fn is_empty(&self) -> bool {
        self.dot.is_none() && self.ring.is_none() && self.trail.is_none() && self.burst.is_none()
    }

    pub fn apply(&self, pose: &FollowerPose) {
        if !pose.visible {
            return;
        }
        for (el, style) in [
            (&self.dot, &pose.dot),
            (&self.ring, &pose.ring),
            (&self.trail, &pose.trail),
            (&self.burst, &pose.burst),
        ] {
            if let Some(el) = el {
                write_style(el, style);
            }
        }
    }
}

fn write_style(el: &web::HtmlElement, style: &ElementStyle) {
    let css = el.style();
    _ = css.set_property(
        "transform",
        &centered_transform(style.position.x, style.position.y, style.scale),
    );
    _ = css.set_property("opacity", &format!("{:.3}", style.opacity.clamp(0.0, 1.0)));
}
