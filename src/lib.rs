#![cfg(target_arch = "wasm32")]
use crystal_core::{
    CursorFollower, FieldConfig, FrameClock, InputState, ParticleField, SceneConfig, SceneDriver,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod backdrop;
mod constants;
mod cursor;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;
mod tick;
mod viewport;

use constants::*;

thread_local! {
    static ACTIVE: RefCell<Option<frame::FrameSlot>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("crystal-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Stop the frame loop and remove every listener the backdrop registered.
#[wasm_bindgen]
pub fn stop() {
    if let Some(slot) = ACTIVE.with(|a| a.borrow_mut().take()) {
        slot.borrow_mut().take();
        log::info!("crystal-web stopped");
    }
}

fn field_config(canvas: &web::HtmlCanvasElement) -> FieldConfig {
    let mut cfg = FieldConfig::default();
    let particles = dom::data_attribute(canvas, DATA_PARTICLES);
    if let Some(n) = viewport::particle_override(particles.as_deref(), MAX_PARTICLES) {
        cfg.particle_count = n;
    }
    let seed = dom::data_attribute(canvas, DATA_SEED);
    if let Some(seed) = viewport::parse_override::<u64>(seed.as_deref()) {
        cfg.seed = seed;
    }
    cfg
}

fn build_field_layer(document: &web::Document, width: f32, height: f32) -> Option<frame::FieldLayer> {
    let canvas = match dom::canvas_by_id(document, FIELD_CANVAS_ID) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("[field] disabled: {e}");
            return None;
        }
    };
    let dpr = dom::sync_canvas_backing_size(&canvas);
    let Some(surface) = backdrop::CanvasSurface::new(&canvas, dpr) else {
        log::debug!("[field] disabled: no 2d context");
        return None;
    };
    match ParticleField::new(field_config(&canvas), width, height) {
        Ok(field) => Some(frame::FieldLayer {
            field,
            surface,
            canvas,
        }),
        Err(e) => {
            log::error!("[field] invalid config: {e}");
            None
        }
    }
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    if ACTIVE.with(|a| a.borrow().is_some()) {
        log::warn!("already running");
        return Ok(());
    }

    overlay::hide_splash_after(&window, SPLASH_DELAY_MS);

    let (width, height) = dom::inner_size(&window);
    let input = Rc::new(RefCell::new(InputState::new(width, height)));
    input
        .borrow_mut()
        .scrolled(window.scroll_y().unwrap_or(0.0) as f32);

    let field = build_field_layer(&document, width, height);
    let scene_canvas = match dom::canvas_by_id(&document, SCENE_CANVAS_ID) {
        Ok(c) => {
            dom::sync_canvas_backing_size(&c);
            Some(c)
        }
        Err(e) => {
            log::warn!("[scene] not drawn: {e}");
            None
        }
    };

    let mut canvases = Vec::new();
    canvases.extend(field.as_ref().map(|l| l.canvas.clone()));
    canvases.extend(scene_canvas.clone());
    let listeners = events::wire_input(&window, &document, &input, canvases)?;

    let gpu = match &scene_canvas {
        Some(c) => frame::init_gpu(c).await,
        None => None,
    };

    let scene = SceneDriver::mounted(SceneConfig::default())?;
    let ctx = frame::FrameContext {
        input,
        clock: FrameClock::new(),
        field,
        scene,
        follower: CursorFollower::new(),
        cursor: cursor::CursorElements::find(&document),
        scene_canvas,
        gpu,
        _listeners: listeners,
    };
    let slot: frame::FrameSlot = Rc::new(RefCell::new(Some(ctx)));
    ACTIVE.with(|a| *a.borrow_mut() = Some(slot.clone()));
    frame::start_loop(slot);
    log::info!("crystal-web running");
    Ok(())
}
