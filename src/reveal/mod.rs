//! Viewport-triggered reveal effects.
//!
//! A [`RevealEngine`] owns the bookkeeping for one group of elements that
//! share a trigger policy and an effect. The platform side (styling, text,
//! observation) sits behind [`RevealSurface`], so the engine can be driven by
//! an `IntersectionObserver` in the browser or by a recording surface in
//! tests.

use std::cell::Cell;
use std::rc::Rc;

pub mod counter;
pub mod observer;

pub use counter::{CountUp, Suffix};
pub use observer::observe_all;

/// Opacity transition applied to lazily shown images.
pub const FADE_TRANSITION: &str = "opacity 0.5s ease";

/// Starting offset of cards before they slide into place.
pub const SLIDE_HIDDEN_TRANSFORM: &str = "translateY(30px)";

pub const SLIDE_SHOWN_TRANSFORM: &str = "translateY(0)";

/// Extra delay per card so neighbours slide in one after another.
pub const SLIDE_STAGGER_MS: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Fire on the first qualifying notification, then stop observing.
    Once,
    /// Fire every time the element enters the viewport.
    Repeat,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealPolicy {
    pub threshold: f64,
    pub root_margin: &'static str,
    pub trigger: Trigger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealEffect {
    FadeIn,
    SlideIn,
    AddClass(&'static str),
    CountUp,
}

/// One notification from the viewport observer.
#[derive(Debug, Clone)]
pub struct VisibilityEvent<T> {
    pub target: T,
    pub ratio: f64,
    pub is_intersecting: bool,
}

/// Platform operations the engine needs to apply its effects.
pub trait RevealSurface<T> {
    /// Puts a freshly registered target in its hidden starting state.
    fn prepare(&mut self, target: &T, effect: RevealEffect, index: usize);
    fn fade_in(&mut self, target: &T);
    fn slide_in(&mut self, target: &T);
    fn add_class(&mut self, target: &T, class: &str);
    fn text(&self, target: &T) -> Option<String>;
    /// Hands a parsed counter to whatever drives its animation. The driver
    /// must call [`RunningFlag::finish`] once the run has ended.
    fn start_count_up(&mut self, target: &T, run: CountUp, running: RunningFlag);
    /// Stops platform observation of a one-shot target.
    fn release(&mut self, target: &T);
}

/// Marks a count-up as in progress so a re-entry cannot start a second run.
#[derive(Debug, Clone, Default)]
pub struct RunningFlag(Rc<Cell<bool>>);

impl RunningFlag {
    pub fn is_running(&self) -> bool {
        self.0.get()
    }

    fn start(&self) {
        self.0.set(true);
    }

    pub fn finish(&self) {
        self.0.set(false);
    }
}

struct Slot<T> {
    target: T,
    observed: bool,
    /// Counter parsed from the text the target had when it was registered.
    counter: Option<CountUp>,
    running: RunningFlag,
}

pub struct RevealEngine<T> {
    policy: RevealPolicy,
    effect: RevealEffect,
    slots: Vec<Slot<T>>,
}

impl<T: PartialEq> RevealEngine<T> {
    pub fn new(policy: RevealPolicy, effect: RevealEffect) -> Self {
        Self {
            policy,
            effect,
            slots: Vec::new(),
        }
    }

    /// Registers a target and primes it. Returns `false` if it was already registered.
    pub fn register<S: RevealSurface<T>>(&mut self, target: T, surface: &mut S) -> bool {
        if self.slots.iter().any(|slot| slot.target == target) {
            return false;
        }
        let counter = match self.effect {
            RevealEffect::CountUp => surface.text(&target).as_deref().and_then(CountUp::parse),
            _ => None,
        };
        surface.prepare(&target, self.effect, self.slots.len());
        self.slots.push(Slot {
            target,
            observed: true,
            counter,
            running: RunningFlag::default(),
        });
        true
    }

    pub fn is_observing(&self, target: &T) -> bool {
        self.slots
            .iter()
            .any(|slot| slot.observed && slot.target == *target)
    }

    pub fn observed_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.observed).count()
    }

    /// Applies the effect for every intersecting event, in delivery order.
    ///
    /// Events for unknown or already released targets are dropped. Returns
    /// the number of effects that ran.
    pub fn dispatch<S, I>(&mut self, events: I, surface: &mut S) -> usize
    where
        S: RevealSurface<T>,
        I: IntoIterator<Item = VisibilityEvent<T>>,
    {
        let mut fired = 0;
        for event in events {
            if !event.is_intersecting {
                continue;
            }
            let Some(slot) = self
                .slots
                .iter_mut()
                .find(|slot| slot.observed && slot.target == event.target)
            else {
                continue;
            };
            log::debug!(
                "Reveal {:?} fired at ratio {:.2}",
                self.effect,
                event.ratio
            );
            if apply(self.effect, slot, surface) {
                fired += 1;
            }
            if self.policy.trigger == Trigger::Once {
                slot.observed = false;
                surface.release(&slot.target);
            }
        }
        fired
    }
}

/// Runs the effect for one slot. Returns `false` when there was nothing to do.
fn apply<T, S: RevealSurface<T>>(effect: RevealEffect, slot: &Slot<T>, surface: &mut S) -> bool {
    let target = &slot.target;
    match effect {
        RevealEffect::FadeIn => surface.fade_in(target),
        RevealEffect::SlideIn => surface.slide_in(target),
        RevealEffect::AddClass(class) => surface.add_class(target, class),
        RevealEffect::CountUp => {
            let Some(counter) = &slot.counter else {
                log::debug!("Counter text has no digits, leaving it as is");
                return false;
            };
            if slot.running.is_running() {
                return false;
            }
            slot.running.start();
            surface.start_count_up(target, counter.clone(), slot.running.clone());
        }
    }
    true
}

/// Transition for the card at `index`, delayed so cards cascade.
pub fn slide_transition(index: usize) -> String {
    let delay_ms = u64::try_from(index)
        .unwrap_or(u64::MAX)
        .saturating_mul(u64::from(SLIDE_STAGGER_MS));
    format!("all 0.6s ease {}ms", delay_ms)
}
