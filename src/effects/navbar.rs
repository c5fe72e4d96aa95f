use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::config::NAV_SOLID_AFTER_PX;
use crate::error::SiteError;
use crate::utils::dom::set_styles;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavbarTone {
    Translucent,
    Solid,
}

impl NavbarTone {
    pub fn for_offset(scroll_y: f64) -> Self {
        if scroll_y > NAV_SOLID_AFTER_PX {
            NavbarTone::Solid
        } else {
            NavbarTone::Translucent
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            NavbarTone::Solid => "rgba(0, 0, 0, 0.95)",
            NavbarTone::Translucent => "rgba(0, 0, 0, 0.8)",
        }
    }

    pub fn shadow(self) -> &'static str {
        match self {
            NavbarTone::Solid => "0 4px 20px rgba(0, 0, 0, 0.5)",
            NavbarTone::Translucent => "none",
        }
    }
}

fn recolor(window: &Window) {
    let Some(nav) = window
        .document()
        .and_then(|document| document.query_selector("nav").ok().flatten())
    else {
        return;
    };
    if let Ok(scroll_y) = window.scroll_y() {
        let tone = NavbarTone::for_offset(scroll_y);
        set_styles(
            &nav,
            &[("background-color", tone.background()), ("box-shadow", tone.shadow())],
        );
    }
}

/// Darkens the navbar once the page scrolls past the hero edge.
pub fn watch(window: &Window) -> Result<(), SiteError> {
    let callback = Closure::<dyn Fn()>::new(|| {
        if let Some(win) = web_sys::window() {
            recolor(&win);
        }
    });
    window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())?;
    callback.forget();
    // Initial call
    recolor(window);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turns_solid_strictly_past_threshold() {
        assert_eq!(NavbarTone::for_offset(0.0), NavbarTone::Translucent);
        assert_eq!(NavbarTone::for_offset(50.0), NavbarTone::Translucent);
        assert_eq!(NavbarTone::for_offset(50.5), NavbarTone::Solid);
        assert_eq!(NavbarTone::for_offset(2_000.0), NavbarTone::Solid);
    }

    #[test]
    fn solid_tone_adds_a_shadow() {
        assert_eq!(NavbarTone::Solid.shadow(), "0 4px 20px rgba(0, 0, 0, 0.5)");
        assert_eq!(NavbarTone::Translucent.shadow(), "none");
        assert_eq!(NavbarTone::Translucent.background(), "rgba(0, 0, 0, 0.8)");
    }
}
