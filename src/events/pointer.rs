use crate::camera::ndc_to_world_ray;
use crate::core::{AvatarPose, Camera, PointerState};
use crate::dom;
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub canvas: web::HtmlCanvasElement,
    pub pointer: Rc<RefCell<PointerState>>,
    pub pose: Rc<RefCell<AvatarPose>>,
    pub hover: Rc<RefCell<input::HoverState>>,
}

/// Track the pointer over the whole window (the canvas is fixed behind the
/// content and does not receive events itself).
pub fn wire_pointer(w: PointerWiring) {
    let Some(window) = web::window() else {
        return;
    };

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let Some(wnd) = web::window() else { return };
        let ndc = input::pointer_window_ndc(&ev, &wnd);
        *w.pointer.borrow_mut() = PointerState::new(ndc.x, ndc.y);

        let aspect = w.canvas.width().max(1) as f32 / w.canvas.height().max(1) as f32;
        let camera = Camera::page(aspect);
        let (ro, rd) = ndc_to_world_ray(&camera, ndc);
        let hit = {
            let pose = w.pose.borrow();
            input::ray_sphere(ro, rd, pose.position, pose.scale).is_some()
        };
        if let Some(hovered) = w.hover.borrow_mut().update(hit) {
            if let Some(doc) = wnd.document() {
                dom::set_body_cursor(&doc, hovered);
            }
        }
    }) as Box<dyn FnMut(_)>);
    dom::listen(&window, "pointermove", closure);
}
