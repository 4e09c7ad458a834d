use crate::core::sections::{terminal_log_html, TERMINAL_FORM_ID, TERMINAL_INPUT_ID, TERMINAL_LOG_ID};
use crate::core::{SubmitOutcome, Terminal};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn render_log(document: &web::Document, terminal: &Terminal) {
    let Some(log_el) = document.get_element_by_id(TERMINAL_LOG_ID) else {
        return;
    };
    log_el.set_inner_html(&terminal_log_html(terminal.history()));
    // keep the newest line in view
    if let Some(body) = log_el.parent_element() {
        body.set_scroll_top(body.scroll_height());
    }
}

pub fn wire_terminal(document: &web::Document, terminal: Rc<RefCell<Terminal>>) -> anyhow::Result<()> {
    let form = dom::element(document, TERMINAL_FORM_ID)?;
    let input: web::HtmlInputElement = dom::element(document, TERMINAL_INPUT_ID)?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("#{} is not an input: {:?}", TERMINAL_INPUT_ID, e)))?;

    render_log(document, &terminal.borrow());

    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        ev.prevent_default();
        let line = input.value();
        let outcome = terminal.borrow_mut().submit(&line);
        if outcome == SubmitOutcome::Cleared {
            log::info!("[shell] cleared");
        }
        input.set_value("");
        render_log(&doc, &terminal.borrow());
    }) as Box<dyn FnMut(_)>);
    dom::listen(&form, "submit", closure);
    Ok(())
}
