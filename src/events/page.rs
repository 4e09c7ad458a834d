use crate::core::sections::{
    filter_bar_html, nav_target, project_grid_html, PROJECT_FILTERS_ID, PROJECT_GRID_ID,
};
use crate::core::{ProjectFilter, RevealTracker, PROJECTS};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

use super::scroll::reveal_pass;

/// Re-render the filter bar and project grid for `filter`.
pub fn render_projects(document: &web::Document, filter: ProjectFilter) {
    if let Some(el) = document.get_element_by_id(PROJECT_FILTERS_ID) {
        el.set_inner_html(&filter_bar_html(filter));
    }
    if let Some(el) = document.get_element_by_id(PROJECT_GRID_ID) {
        el.set_inner_html(&project_grid_html(PROJECTS, filter));
    }
}

pub fn wire_project_filters(
    document: &web::Document,
    active: Rc<RefCell<ProjectFilter>>,
    reveals: Rc<RefCell<RevealTracker>>,
) {
    let doc = document.clone();
    dom::add_click_listener(document, PROJECT_FILTERS_ID, move |ev| {
        let Some(label) = dom::closest_attribute(&ev, "data-filter") else {
            return;
        };
        let Some(filter) = ProjectFilter::from_label(&label) else {
            log::error!("[projects] unknown filter '{}'", label);
            return;
        };
        if *active.borrow() == filter {
            return;
        }
        *active.borrow_mut() = filter;
        log::info!("[projects] filter={}", filter.label());
        render_projects(&doc, filter);
        reveal_pass(&doc, &reveals);
    });
}

/// Any element with `data-nav` (nav buttons, hero call-to-action) scrolls
/// its section into view.
pub fn wire_nav_clicks(document: &web::Document, container_ids: &[&str]) {
    for id in container_ids {
        let doc = document.clone();
        dom::add_click_listener(document, id, move |ev| {
            let Some(label) = dom::closest_attribute(&ev, "data-nav") else {
                return;
            };
            match nav_target(&label) {
                Some(section) => {
                    log::info!("[nav] {} -> #{}", label, section);
                    dom::scroll_to_section(&doc, section);
                }
                None => log::error!("[nav] no section for '{}'", label),
            }
        });
    }
}
