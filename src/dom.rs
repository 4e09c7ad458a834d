use crate::core::MAX_DEVICE_PIXEL_RATIO;
use wasm_bindgen::closure::{Closure, WasmClosure};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn element(document: &web::Document, id: &str) -> anyhow::Result<web::Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))
}

/// Attach `closure` to `target` for the page lifetime.
pub fn listen<E>(target: &web::EventTarget, event: &str, closure: Closure<E>)
where
    E: ?Sized + WasmClosure,
{
    let callback: &js_sys::Function = closure.as_ref().unchecked_ref();
    if let Err(e) = target.add_event_listener_with_callback(event, callback) {
        log::error!("add_event_listener({}) failed: {:?}", event, e);
    }
    closure.forget();
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut(web::MouseEvent) + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| handler(ev))
            as Box<dyn FnMut(web::MouseEvent)>);
        listen(&el, "click", closure);
    }
}

/// Walk up from the event target to the nearest element carrying
/// `attribute` and return its value.
pub fn closest_attribute(ev: &web::Event, attribute: &str) -> Option<String> {
    let el = ev.target()?.dyn_into::<web::Element>().ok()?;
    let selector = format!("[{}]", attribute);
    el.closest(&selector).ok()??.get_attribute(attribute)
}

#[inline]
pub fn device_pixel_ratio(window: &web::Window) -> f64 {
    window.device_pixel_ratio().clamp(1.0, MAX_DEVICE_PIXEL_RATIO)
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = device_pixel_ratio(&w);
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

pub fn scroll_to_section(document: &web::Document, section_id: &str) {
    if let Some(el) = document.get_element_by_id(section_id) {
        let opts = web::ScrollIntoViewOptions::new();
        opts.set_behavior(web::ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
    }
}

pub fn set_body_cursor(document: &web::Document, pointer: bool) {
    if let Some(body) = document.body() {
        _ = body
            .style()
            .set_property("cursor", if pointer { "pointer" } else { "auto" });
    }
}
