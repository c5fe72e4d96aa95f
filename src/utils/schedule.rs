use gloo_timers::callback::Timeout;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, MouseEvent};

use crate::components::notification::{show_notification, Severity};
use crate::config;
use crate::error::SiteError;
use crate::utils::dom::{self, query_all};

/// Characters `encodeURIComponent` leaves untouched besides ASCII alphanumerics.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const SCHEDULE_KEYWORD: &str = "AGENDAR";

pub fn whatsapp_link(phone: &str, message: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        phone,
        utf8_percent_encode(message, URI_COMPONENT)
    )
}

/// Deep link for booking a session with the configured number and greeting.
pub fn schedule_link() -> String {
    whatsapp_link(config::whatsapp_phone(), config::SCHEDULE_MESSAGE)
}

/// Buttons labelled with "agendar" in any case start the booking flow.
pub fn is_schedule_button(label: &str) -> bool {
    label.trim().to_uppercase().contains(SCHEDULE_KEYWORD)
}

/// Tells the visitor what is happening, then opens WhatsApp in a new tab.
pub fn handle_schedule() {
    let url = schedule_link();
    if let Err(e) = show_notification(config::SCHEDULE_NOTICE, Severity::Success) {
        log::warn!("Failed to show schedule notice: {}", e);
    }
    Timeout::new(config::SCHEDULE_REDIRECT_DELAY_MS, move || {
        let opened = dom::window().and_then(|window| {
            window
                .open_with_url_and_target(&url, "_blank")
                .map_err(SiteError::from)
        });
        if let Err(e) = opened {
            log::error!("Failed to open WhatsApp: {}", e);
        }
    })
    .forget();
}

/// Hooks every schedule button on the page. Returns how many were found.
pub fn bind_buttons(document: &Document) -> Result<usize, SiteError> {
    let mut bound = 0;
    for button in query_all(document, "button")? {
        let label = button.text_content().unwrap_or_default();
        if !is_schedule_button(&label) {
            continue;
        }
        let callback = Closure::<dyn Fn(MouseEvent)>::new(|e: MouseEvent| {
            e.prevent_default();
            handle_schedule();
        });
        button.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())?;
        callback.forget();
        bound += 1;
    }
    Ok(bound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_WHATSAPP_PHONE, SCHEDULE_MESSAGE};

    #[test]
    fn schedule_link_matches_encoded_greeting() {
        assert_eq!(
            whatsapp_link(DEFAULT_WHATSAPP_PHONE, SCHEDULE_MESSAGE),
            "https://wa.me/5551998183087?text=Ol%C3%A1!%20Gostaria%20de%20agendar%20uma%20consulta%20para%20uma%20tatuagem."
        );
    }

    #[test]
    fn encodes_like_encode_uri_component() {
        assert_eq!(
            whatsapp_link("1", "a-b_c.d!e~f*g'h(i)j"),
            "https://wa.me/1?text=a-b_c.d!e~f*g'h(i)j"
        );
        assert_eq!(
            whatsapp_link("1", "a&b=c/d?e#f+g%"),
            "https://wa.me/1?text=a%26b%3Dc%2Fd%3Fe%23f%2Bg%25"
        );
    }

    #[test]
    fn detects_schedule_buttons() {
        assert!(is_schedule_button("AGENDAR CONSULTA"));
        assert!(is_schedule_button("  agendar agora \n"));
        assert!(is_schedule_button("Quero Agendar"));
        assert!(!is_schedule_button("Ver portfólio"));
        assert!(!is_schedule_button(""));
    }
}
