use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::js_sys;
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::counter::{CountUp, COUNT_UP_TICK_MS};
use super::{
    slide_transition, RevealEffect, RevealEngine, RevealPolicy, RevealSurface, RunningFlag,
    VisibilityEvent,
    FADE_TRANSITION, SLIDE_HIDDEN_TRANSFORM, SLIDE_SHOWN_TRANSFORM,
};
use crate::error::SiteError;
use crate::utils::dom::{query_all, set_styles};

/// Browser side of the engine, bound to the observer that reported the batch.
struct DomSurface {
    observer: IntersectionObserver,
}

impl RevealSurface<Element> for DomSurface {
    fn prepare(&mut self, target: &Element, effect: RevealEffect, index: usize) {
        match effect {
            RevealEffect::FadeIn => {
                set_styles(target, &[("opacity", "0"), ("transition", FADE_TRANSITION)])
            }
            RevealEffect::SlideIn => {
                let transition = slide_transition(index);
                set_styles(
                    target,
                    &[
                        ("opacity", "0"),
                        ("transform", SLIDE_HIDDEN_TRANSFORM),
                        ("transition", &transition),
                    ],
                );
            }
            RevealEffect::AddClass(_) | RevealEffect::CountUp => {}
        }
    }

    fn fade_in(&mut self, target: &Element) {
        set_styles(target, &[("opacity", "1")]);
    }

    fn slide_in(&mut self, target: &Element) {
        set_styles(target, &[("opacity", "1"), ("transform", SLIDE_SHOWN_TRANSFORM)]);
    }

    fn add_class(&mut self, target: &Element, class: &str) {
        if let Err(e) = target.class_list().add_1(class) {
            log::warn!("Failed to add class {}: {:?}", class, e);
        }
    }

    fn text(&self, target: &Element) -> Option<String> {
        target.text_content()
    }

    fn start_count_up(&mut self, target: &Element, run: CountUp, running: RunningFlag) {
        log::debug!("Counting up to {}{}", run.target(), run.suffix().as_str());
        animate_counter(target.clone(), run, running);
    }

    fn release(&mut self, target: &Element) {
        self.observer.unobserve(target);
    }
}

/// Drives a count-up on its own task until the run reports completion.
fn animate_counter(element: Element, mut run: CountUp, running: RunningFlag) {
    spawn_local(async move {
        element.set_text_content(Some(&run.display()));
        while !run.is_finished() {
            TimeoutFuture::new(COUNT_UP_TICK_MS).await;
            if let Some(frame) = run.advance() {
                element.set_text_content(Some(&frame));
            }
        }
        running.finish();
    });
}

/// Watches every element matching `selector` and applies `effect` under `policy`.
///
/// Returns how many elements are being observed. A selector with no match
/// is not an error.
pub fn observe_all(
    document: &Document,
    selector: &str,
    policy: RevealPolicy,
    effect: RevealEffect,
) -> Result<usize, SiteError> {
    let targets = query_all(document, selector)?;
    if targets.is_empty() {
        log::debug!("No elements match {}, skipping reveal", selector);
        return Ok(0);
    }

    let engine = Rc::new(RefCell::new(RevealEngine::new(policy, effect)));
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new({
        let engine = engine.clone();
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let events = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|entry| VisibilityEvent {
                    target: entry.target(),
                    ratio: entry.intersection_ratio(),
                    is_intersecting: entry.is_intersecting(),
                });
            let mut surface = DomSurface { observer };
            engine.borrow_mut().dispatch(events, &mut surface);
        }
    });

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(policy.threshold));
    options.set_root_margin(policy.root_margin);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    // Observers live as long as the page.
    callback.forget();

    let mut surface = DomSurface {
        observer: observer.clone(),
    };
    let mut engine = engine.borrow_mut();
    for target in targets {
        if engine.register(target.clone(), &mut surface) {
            observer.observe(&target);
        }
    }
    Ok(engine.observed_count())
}
