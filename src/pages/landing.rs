use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlImageElement, MouseEvent};

use crate::components::lightbox::open_lightbox;
use crate::config;
use crate::effects::{navbar, particles, smooth_scroll};
use crate::error::SiteError;
use crate::reveal::{observe_all, RevealEffect};
use crate::utils::dom::{self, query_all};
use crate::utils::schedule;

/// Opens the lightbox for whichever image a portfolio tile holds.
fn bind_portfolio(document: &Document) -> Result<usize, SiteError> {
    let items = query_all(document, config::PORTFOLIO_SELECTOR)?;
    for item in &items {
        let tile = item.clone();
        let callback = Closure::<dyn Fn(MouseEvent)>::new(move |_: MouseEvent| {
            let Some(img) = tile
                .query_selector("img")
                .ok()
                .flatten()
                .and_then(|img| img.dyn_into::<HtmlImageElement>().ok())
            else {
                return;
            };
            if let Err(e) = open_lightbox(&img.src(), &img.alt()) {
                log::warn!("Failed to open lightbox: {}", e);
            }
        });
        item.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())?;
        callback.forget();
    }
    Ok(items.len())
}

fn report<T: std::fmt::Debug>(step: &str, result: Result<T, SiteError>) {
    match result {
        Ok(summary) => log::debug!("{} ready: {:?}", step, summary),
        Err(e) => log::warn!("{} skipped: {}", step, e),
    }
}

/// Wires every enhancement into the parsed document. One failing step never stops the rest.
pub fn init() {
    let document = match dom::document() {
        Ok(document) => document,
        Err(e) => {
            log::error!("Cannot enhance page: {}", e);
            return;
        }
    };

    report("Particles", particles::start(&document));
    report("Smooth scroll", smooth_scroll::enable(&document));
    report(
        "Counters",
        observe_all(
            &document,
            config::COUNTER_SELECTOR,
            config::COUNTER_POLICY,
            RevealEffect::CountUp,
        ),
    );
    report(
        "Lazy images",
        observe_all(
            &document,
            config::LAZY_IMAGE_SELECTOR,
            config::LAZY_IMAGE_POLICY,
            RevealEffect::FadeIn,
        ),
    );
    report(
        "Card reveals",
        observe_all(
            &document,
            config::CARD_SELECTOR,
            config::CARD_POLICY,
            RevealEffect::SlideIn,
        ),
    );
    report(
        "Timeline",
        observe_all(
            &document,
            config::TIMELINE_SELECTOR,
            config::TIMELINE_POLICY,
            RevealEffect::AddClass(config::TIMELINE_ACTIVE_CLASS),
        ),
    );
    report("Portfolio lightbox", bind_portfolio(&document));
    report("Schedule buttons", schedule::bind_buttons(&document));
    report("Navbar", dom::window().and_then(|window| navbar::watch(&window)));
}
