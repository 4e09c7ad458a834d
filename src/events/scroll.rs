use crate::constants::{REVEALED_CLASS, REVEAL_SELECTOR};
use crate::core::{PanelRect, RevealTracker, ScrollTracker};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn viewport_height(window: &web::Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Read the window scroll offset into the tracker.
pub fn sync_scroll(window: &web::Window, tracker: &RefCell<ScrollTracker>) {
    let Some(root) = window.document().and_then(|d| d.document_element()) else {
        return;
    };
    let offset = window.scroll_y().unwrap_or(0.0);
    let scrollable = root.scroll_height() as f64 - viewport_height(window);
    tracker.borrow_mut().update(offset as f32, scrollable as f32);
}

/// Fade in every `.reveal` panel that has entered the viewport. Panels that
/// were revealed before a re-render come back already visible.
pub fn reveal_pass(document: &web::Document, reveals: &RefCell<RevealTracker>) {
    let Some(window) = web::window() else {
        return;
    };
    let vh = viewport_height(&window) as f32;
    let Ok(nodes) = document.query_selector_all(REVEAL_SELECTOR) else {
        return;
    };
    let mut tracker = reveals.borrow_mut();
    for i in 0..nodes.length() {
        let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        let id = el.id();
        if id.is_empty() {
            continue;
        }
        let rect = el.get_bounding_client_rect();
        let panel = PanelRect {
            top: rect.top() as f32,
            bottom: rect.bottom() as f32,
        };
        if tracker.is_revealed(&id) || tracker.observe(&id, panel, vh) {
            _ = el.class_list().add_1(REVEALED_CLASS);
        }
    }
}

pub fn wire_scroll(
    tracker: Rc<RefCell<ScrollTracker>>,
    reveals: Rc<RefCell<RevealTracker>>,
    canvas: web::HtmlCanvasElement,
) {
    let Some(window) = web::window() else {
        return;
    };

    let scroll_tracker = tracker.clone();
    let scroll_reveals = reveals.clone();
    let on_scroll = Closure::wrap(Box::new(move || {
        let Some(w) = web::window() else { return };
        sync_scroll(&w, &scroll_tracker);
        if let Some(doc) = w.document() {
            reveal_pass(&doc, &scroll_reveals);
        }
    }) as Box<dyn FnMut()>);
    dom::listen(&window, "scroll", on_scroll);

    let on_resize = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas);
        let Some(w) = web::window() else { return };
        sync_scroll(&w, &tracker);
        if let Some(doc) = w.document() {
            reveal_pass(&doc, &reveals);
        }
    }) as Box<dyn FnMut()>);
    dom::listen(&window, "resize", on_resize);
}
