//! Golden particles drifting up the hero section.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use web_sys::{Document, Element};

use crate::config::PARTICLES_CONTAINER_ID;
use crate::error::SiteError;
use crate::utils::dom::set_styles;
use crate::utils::lifecycle::{Lifecycle, Step};

/// Particles spawned right after load, one every [`BURST_SPACING_MS`].
pub const INITIAL_BURST: u32 = 50;
pub const BURST_SPACING_MS: u32 = 200;
/// Steady spawn rate once the page is running.
pub const SPAWN_INTERVAL_MS: u32 = 400;
/// Every particle is removed this long after it was created.
pub const PARTICLE_LIFETIME_MS: u32 = 10_000;

/// A particle has no timed phases of its own; its CSS animation runs until removal.
pub fn particle_lifecycle() -> Lifecycle<()> {
    Lifecycle::removed_after(PARTICLE_LIFETIME_MS)
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParticleSpec {
    pub left_pct: f64,
    pub drift_px: f64,
    pub size_px: f64,
    pub delay_s: f64,
}

impl ParticleSpec {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            left_pct: rng.gen_range(0.0..100.0),
            drift_px: rng.gen_range(-50.0..50.0),
            size_px: rng.gen_range(2.0..6.0),
            delay_s: rng.gen_range(0.0..2.0),
        }
    }

    /// Inline style declarations for the particle node.
    pub fn declarations(&self) -> Vec<(&'static str, String)> {
        let size = format!("{}px", self.size_px);
        vec![
            ("left", format!("{}%", self.left_pct)),
            ("bottom", "0".to_string()),
            ("--drift", format!("{}px", self.drift_px)),
            ("width", size.clone()),
            ("height", size),
            ("animation-delay", format!("{}s", self.delay_s)),
        ]
    }
}

/// Starts the initial burst and the endless spawner. A page without the container is left alone.
pub fn start(document: &Document) -> Result<(), SiteError> {
    let Some(container) = document.get_element_by_id(PARTICLES_CONTAINER_ID) else {
        log::debug!("No #{} container, particles disabled", PARTICLES_CONTAINER_ID);
        return Ok(());
    };
    let rng = Rc::new(RefCell::new(StdRng::from_entropy()));

    for i in 0..INITIAL_BURST {
        let container = container.clone();
        let rng = rng.clone();
        Timeout::new(i * BURST_SPACING_MS, move || {
            spawn(&container, &mut *rng.borrow_mut())
        })
        .forget();
    }

    Interval::new(SPAWN_INTERVAL_MS, move || {
        spawn(&container, &mut *rng.borrow_mut())
    })
    .forget();
    Ok(())
}

fn spawn<R: Rng>(container: &Element, rng: &mut R) {
    if let Err(e) = try_spawn(container, rng) {
        log::warn!("Failed to spawn particle: {}", e);
    }
}

fn try_spawn<R: Rng>(container: &Element, rng: &mut R) -> Result<(), SiteError> {
    let document = container.owner_document().ok_or(SiteError::NoDocument)?;
    let particle = document.create_element("div")?;
    particle.set_class_name("particle");

    let declarations = ParticleSpec::random(rng).declarations();
    let declarations: Vec<(&str, &str)> = declarations
        .iter()
        .map(|(property, value)| (*property, value.as_str()))
        .collect();
    set_styles(&particle, &declarations);

    container.append_child(&particle)?;
    for (after_ms, step) in particle_lifecycle().steps() {
        if step == Step::Remove {
            let particle = particle.clone();
            Timeout::new(after_ms, move || particle.remove()).forget();
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_particles_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1_000 {
            let particle = ParticleSpec::random(&mut rng);
            assert!((0.0..100.0).contains(&particle.left_pct));
            assert!((-50.0..50.0).contains(&particle.drift_px));
            assert!((2.0..6.0).contains(&particle.size_px));
            assert!((0.0..2.0).contains(&particle.delay_s));
        }
    }

    #[test]
    fn declarations_use_css_units() {
        let particle = ParticleSpec {
            left_pct: 42.5,
            drift_px: -12.0,
            size_px: 3.5,
            delay_s: 1.25,
        };
        let declarations = particle.declarations();
        let get = |name: &str| {
            declarations
                .iter()
                .find(|(property, _)| *property == name)
                .map(|(_, value)| value.clone())
        };
        assert_eq!(get("left").as_deref(), Some("42.5%"));
        assert_eq!(get("bottom").as_deref(), Some("0"));
        assert_eq!(get("--drift").as_deref(), Some("-12px"));
        assert_eq!(get("width").as_deref(), Some("3.5px"));
        assert_eq!(get("height").as_deref(), Some("3.5px"));
        assert_eq!(get("animation-delay").as_deref(), Some("1.25s"));
    }

    #[test]
    fn each_particle_is_removed_once_within_ten_seconds() {
        let steps = particle_lifecycle().steps();
        let removals: Vec<u32> = steps
            .iter()
            .filter(|(_, step)| *step == Step::Remove)
            .map(|(after_ms, _)| *after_ms)
            .collect();
        assert_eq!(removals.len(), 1);
        assert!(removals[0] <= 10_000);
        assert_eq!(steps.last().map(|(_, step)| *step), Some(Step::Remove));
    }
}
