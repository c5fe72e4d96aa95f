use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions};

use crate::config::{ANCHOR_SELECTOR, NAV_HEIGHT_PX};
use crate::error::SiteError;
use crate::utils::dom::{self, query_all};

/// Scroll position that puts a section just below the fixed navbar.
pub fn scroll_top_for(offset_top: f64) -> f64 {
    offset_top - NAV_HEIGHT_PX
}

fn scroll_to_anchor(href: &str) -> Result<(), SiteError> {
    let document = dom::document()?;
    // A bare "#" is not a valid selector, treat it like a missing target.
    let Ok(Some(target)) = document.query_selector(href) else {
        return Ok(());
    };
    let Some(target) = target.dyn_ref::<HtmlElement>() else {
        return Ok(());
    };
    let options = ScrollToOptions::new();
    options.set_top(scroll_top_for(f64::from(target.offset_top())));
    options.set_behavior(ScrollBehavior::Smooth);
    dom::window()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

/// Makes in-page links glide to their section instead of jumping.
pub fn enable(document: &Document) -> Result<usize, SiteError> {
    let anchors = query_all(document, ANCHOR_SELECTOR)?;
    for anchor in &anchors {
        let link = anchor.clone();
        let callback = Closure::<dyn Fn(MouseEvent)>::new(move |e: MouseEvent| {
            e.prevent_default();
            let href = link.get_attribute("href").unwrap_or_default();
            if let Err(err) = scroll_to_anchor(&href) {
                log::warn!("Smooth scroll to {} failed: {}", href, err);
            }
        });
        anchor.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())?;
        callback.forget();
    }
    Ok(anchors.len())
}
