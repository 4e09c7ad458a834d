#![cfg(target_arch = "wasm32")]
use crate::core::sections::{content_html, nav_html, SECTION_HERO};
use crate::core::{
    validate, AvatarPose, MotionParams, PointerState, ProjectFilter, RevealTracker, ScrollTracker,
    Terminal, EXPERIENCE, PROJECTS, SKILLS,
};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod camera;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

use constants::{CANVAS_ID, CONTENT_ID, NAV_ID};

/// Shared page state handed to event closures and the frame loop.
struct PageState {
    scroll: Rc<RefCell<ScrollTracker>>,
    pointer: Rc<RefCell<PointerState>>,
    pose: Rc<RefCell<AvatarPose>>,
    reveals: Rc<RefCell<RevealTracker>>,
    filter: Rc<RefCell<ProjectFilter>>,
    terminal: Rc<RefCell<Terminal>>,
}

impl PageState {
    fn new() -> Self {
        Self {
            scroll: Rc::new(RefCell::new(ScrollTracker::new())),
            pointer: Rc::new(RefCell::new(PointerState::default())),
            pose: Rc::new(RefCell::new(AvatarPose::default())),
            reveals: Rc::new(RefCell::new(RevealTracker::new())),
            filter: Rc::new(RefCell::new(ProjectFilter::All)),
            terminal: Rc::new(RefCell::new(Terminal::new())),
        }
    }
}

fn mount_content(document: &web::Document, filter: ProjectFilter) -> anyhow::Result<()> {
    if let Err(e) = validate(PROJECTS, EXPERIENCE, SKILLS) {
        log::error!("catalog: {}", e);
    }
    dom::element(document, NAV_ID)?.set_inner_html(&nav_html());
    dom::element(document, CONTENT_ID)?.set_inner_html(&content_html(filter));
    Ok(())
}

fn wire_content(document: &web::Document, state: &PageState) -> anyhow::Result<()> {
    events::wire_terminal(document, state.terminal.clone())?;
    events::wire_project_filters(document, state.filter.clone(), state.reveals.clone());
    events::wire_nav_clicks(document, &[NAV_ID, SECTION_HERO]);
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    overlay::show_loading(&document);

    let canvas: web::HtmlCanvasElement = dom::element(&document, CANVAS_ID)?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::sync_canvas_backing_size(&canvas);

    let state = PageState::new();
    mount_content(&document, *state.filter.borrow())?;
    wire_content(&document, &state)?;

    // Scroll/resize only overwrite tracker state; the frame loop reads it.
    events::wire_scroll(state.scroll.clone(), state.reveals.clone(), canvas.clone());
    events::sync_scroll(&window, &state.scroll);
    events::reveal_pass(&document, &state.reveals);

    events::wire_pointer(events::PointerWiring {
        canvas: canvas.clone(),
        pointer: state.pointer.clone(),
        pose: state.pose.clone(),
        hover: Rc::new(RefCell::new(input::HoverState::default())),
    });

    static STARTED: AtomicBool = AtomicBool::new(false);
    if !STARTED.swap(true, Ordering::SeqCst) {
        spawn_local(async move {
            let gpu = frame::init_gpu(&canvas).await;
            if gpu.is_none() {
                log::error!("avatar disabled: no WebGPU");
            }
            overlay::hide_loading(&document);

            let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
                scroll: state.scroll.clone(),
                pointer: state.pointer.clone(),
                pose: state.pose.clone(),
                params: MotionParams::default(),
                document: document.clone(),
                canvas: canvas.clone(),
                gpu,
                started: Instant::now(),
                last_stage: None,
                last_hud_value: -1.0,
            }));
            // Start RAF loop
            frame::start_loop(frame_ctx);
            log::info!("frame loop running");
        });
    }

    Ok(())
}
