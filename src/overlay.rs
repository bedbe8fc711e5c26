use crate::core::{progress_label, LoadState};
use crate::dom;
use web_sys as web;

const LOADING_ID: &str = "viewer-loading";
const LABEL_ID: &str = "viewer-loading-label";
const BAR_ID: &str = "viewer-loading-bar";

#[inline]
pub fn show_loading(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(LOADING_ID) {
        _ = el.class_list().remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

/// Show download progress in the fallback. `None` means the size is unknown:
/// the bar switches to its indeterminate style.
pub fn set_progress(document: &web::Document, percent: Option<u8>) {
    if let Some(label) = document.get_element_by_id(LABEL_ID) {
        label.set_text_content(Some(&progress_label(percent)));
    }
    if let Some(bar) = document.get_element_by_id(BAR_ID) {
        _ = bar
            .class_list()
            .toggle_with_force("is-indeterminate", percent.is_none());
        let pct = percent.unwrap_or(0);
        _ = bar.set_attribute("aria-valuenow", &pct.to_string());
        dom::set_style(&bar, "--progress", &format!("{}%", pct));
    }
}

/// Remove the loading fallback from the tree once the asset resolved.
#[inline]
pub fn remove_loading(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(LOADING_ID) {
        el.remove();
    }
}

/// Reflect the load state on the host and show/remove the fallback.
pub fn apply_load_state(document: &web::Document, host: &web::Element, state: LoadState) {
    _ = host.set_attribute("data-state", state.as_attr());
    if state.shows_fallback() {
        show_loading(document);
    } else {
        remove_loading(document);
    }
}
