use crate::core::{
    step, target_for_frame, AvatarPose, Camera, ClassifyInputs, MotionParams, PointerState,
    ScrollTracker, Stage,
};
use crate::overlay;
use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// HUD text is only rewritten when the readout would visibly change.
const HUD_EPSILON: f32 = 0.005;

pub struct FrameContext<'a> {
    pub scroll: Rc<RefCell<ScrollTracker>>,
    pub pointer: Rc<RefCell<PointerState>>,
    pub pose: Rc<RefCell<AvatarPose>>,
    pub params: MotionParams,

    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,

    pub started: Instant,
    pub last_stage: Option<Stage>,
    pub last_hud_value: f32,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let elapsed_sec = self.started.elapsed().as_secs_f32();
        let stage_value = self.scroll.borrow().stage_value();
        let pointer = *self.pointer.borrow();

        let w = self.canvas.width();
        let h = self.canvas.height();
        let camera = Camera::page(w.max(1) as f32 / h.max(1) as f32);
        let inputs = ClassifyInputs {
            viewport: camera.viewport(),
            elapsed_sec,
        };
        let target = target_for_frame(stage_value, &inputs, pointer);
        let pose = {
            let mut pose_ref = self.pose.borrow_mut();
            *pose_ref = step(&pose_ref, &target, &self.params, elapsed_sec);
            *pose_ref
        };

        let stage = Stage::for_value(stage_value);
        if self.last_stage != Some(stage) {
            log::info!(
                "[stage] {} (value {:.2}, wireframe={})",
                stage.name(),
                stage_value,
                target.wireframe
            );
            self.last_stage = Some(stage);
        }
        if (stage_value - self.last_hud_value).abs() > HUD_EPSILON {
            overlay::update_sync_level(&self.document, stage_value);
            self.last_hud_value = stage_value;
        }

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(w, h);
            if let Err(e) = g.render(&camera, &pose, elapsed_sec) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref().map(|c| c.as_ref().clone()))
    else {
        return;
    };
    _ = w.request_animation_frame(cb.unchecked_ref());
}
