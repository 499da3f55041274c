use crate::backdrop::CanvasSurface;
use crate::cursor::CursorElements;
use crate::dom::{self, Listener};
use crate::render;
use crate::tick::step_or_release;
use crystal_core::{Animator, CursorFollower, FrameClock, InputState, ParticleField, SceneDriver};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The 2D layer: simulation plus the canvas it draws into.
pub struct FieldLayer {
    pub field: ParticleField,
    pub surface: CanvasSurface,
    pub canvas: web::HtmlCanvasElement,
}

pub struct FrameContext {
    pub input: Rc<RefCell<InputState>>,
    pub clock: FrameClock,
    pub field: Option<FieldLayer>,
    pub scene: SceneDriver,
    pub follower: CursorFollower,
    pub cursor: CursorElements,
    pub scene_canvas: Option<web::HtmlCanvasElement>,
    pub gpu: Option<render::GpuState>,
    // Dropping the context deregisters these.
    pub _listeners: Vec<Listener>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let dt_sec = self.clock.tick();
        let input = self.input.borrow();

        if let Some(layer) = &mut self.field {
            let viewport = input.viewport();
            if viewport != layer.field.bounds() {
                layer.field.resize(viewport.x, viewport.y);
                layer.surface.set_dpr(dom::sync_canvas_backing_size(&layer.canvas));
            }
            layer.field.advance(dt_sec, &input);
            layer.field.draw(&mut layer.surface);
        }

        self.scene.advance(dt_sec, &input);
        self.follower.advance(dt_sec, &input);
        drop(input);
        self.cursor.apply(self.follower.pose());

        if let (Some(g), Some(canvas)) = (&mut self.gpu, &self.scene_canvas) {
            g.resize_if_needed(canvas.width(), canvas.height());
            if let Err(e) = g.render(self.scene.graph()) {
                log::error!("render error: {:?}", e);
            }
        }

        if self.clock.frame() % 600 == 0 {
            let s = self.scene.signals();
            log::trace!(
                "[frame] #{} progress={:.2} section={} speed={:.2}",
                self.clock.frame(),
                s.progress,
                s.section,
                s.influence.velocity
            );
        }
    }
}

/// Shared slot for the running context; emptying it stops the loop.
pub type FrameSlot = Rc<RefCell<Option<FrameContext>>>;

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState> {
    match render::GpuState::new(canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

/// Drive `slot` from requestAnimationFrame until it is emptied. The
/// callback frees itself on the first frame that finds the slot empty.
pub fn start_loop(slot: FrameSlot) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if step_or_release(&*slot, &*tick_clone, FrameContext::frame) {
            request_frame(&tick_clone);
        } else {
            log::info!("frame loop stopped");
        }
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
