//! Canvas2D surface for the particle field.

use crate::viewport::rgba_css;
use crystal_core::{FieldSurface, FIELD_LINK_WIDTH_PX, FIELD_RGB};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
    dpr: f64,
}

impl CanvasSurface {
    /// `None` when the canvas has no 2D context (the field layer is then off).
    pub fn new(canvas: &web::HtmlCanvasElement, dpr: f64) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { ctx, dpr })
    }

    pub fn set_dpr(&mut self, dpr: f64) {
        self.dpr = dpr;
    }
}

impl FieldSurface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        // Field coordinates are CSS pixels; scale once onto the backing store.
        _ = self.ctx.set_transform(self.dpr, 0.0, 0.0, self.dpr, 0.0, 0.0);
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
        self.ctx.set_line_width(FIELD_LINK_WIDTH_PX as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, opacity: f32) {
        self.ctx.begin_path();
        if self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
            .is_err()
        {
            return;
        }
        self.ctx.set_fill_style_str(&rgba_css(FIELD_RGB, opacity));
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, opacity: f32) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.set_stroke_style_str(&rgba_css(FIELD_RGB, opacity));
        self.ctx.stroke();
    }
}
