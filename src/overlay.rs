use crate::constants::{HIDDEN_CLASS, HUD_SYNC_ID, LOADING_SCREEN_ID};
use crate::core::sync_level_label;
use web_sys as web;

#[inline]
pub fn show_loading(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(LOADING_SCREEN_ID) {
        _ = el.class_list().remove_1(HIDDEN_CLASS);
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide_loading(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(LOADING_SCREEN_ID) {
        _ = el.class_list().add_1(HIDDEN_CLASS);
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

/// Bottom-right HUD readout of how far down the page the visitor is.
pub fn update_sync_level(document: &web::Document, stage_value: f32) {
    if let Some(el) = document.get_element_by_id(HUD_SYNC_ID) {
        el.set_text_content(Some(&sync_level_label(stage_value)));
    }
}
