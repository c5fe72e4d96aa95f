use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::error::SiteError;

pub fn window() -> Result<Window, SiteError> {
    web_sys::window().ok_or(SiteError::NoWindow)
}

pub fn document() -> Result<Document, SiteError> {
    window()?.document().ok_or(SiteError::NoDocument)
}

/// Collects every element matching `selector`. No match is an empty list.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, SiteError> {
    let nodes = document.query_selector_all(selector)?;
    let mut elements = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        if let Some(element) = nodes.item(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            elements.push(element);
        }
    }
    Ok(elements)
}

/// Sets inline style properties, skipping elements without a style object.
pub fn set_styles(element: &Element, declarations: &[(&str, &str)]) {
    let Some(element) = element.dyn_ref::<HtmlElement>() else {
        return;
    };
    let style = element.style();
    for (property, value) in declarations {
        if let Err(e) = style.set_property(property, value) {
            log::warn!("Failed to set {} on element: {:?}", property, e);
        }
    }
}

/// Runs `init` once the document is parsed, right away if it already is.
pub fn on_dom_ready(init: impl FnOnce() + 'static) -> Result<(), SiteError> {
    let document = document()?;
    if document.ready_state() == "loading" {
        let callback = Closure::once_into_js(init);
        document.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())?;
    } else {
        init();
    }
    Ok(())
}
