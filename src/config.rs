use crate::reveal::{RevealPolicy, Trigger};

/// Studio WhatsApp number used when no build-time override is set.
pub const DEFAULT_WHATSAPP_PHONE: &str = "5551998183087";

pub const SCHEDULE_MESSAGE: &str = "Olá! Gostaria de agendar uma consulta para uma tatuagem.";

pub const SCHEDULE_NOTICE: &str = "Redirecionando para WhatsApp...";

/// Delay between the schedule notice and opening WhatsApp
pub const SCHEDULE_REDIRECT_DELAY_MS: u32 = 1_000;

/// Height of the fixed navbar, subtracted from anchor scroll targets.
pub const NAV_HEIGHT_PX: f64 = 80.0;

/// Scroll offset past which the navbar turns solid.
pub const NAV_SOLID_AFTER_PX: f64 = 50.0;

pub const COUNTER_SELECTOR: &str = ".text-5xl.font-bold";
pub const LAZY_IMAGE_SELECTOR: &str = "img[src]";
pub const CARD_SELECTOR: &str = ".service-card, .portfolio-item";
pub const TIMELINE_SELECTOR: &str = ".timeline-item";
pub const PORTFOLIO_SELECTOR: &str = ".portfolio-item";
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const PARTICLES_CONTAINER_ID: &str = "particles";

/// Class added to timeline items once they scroll into view.
pub const TIMELINE_ACTIVE_CLASS: &str = "active";

pub const COUNTER_POLICY: RevealPolicy = RevealPolicy {
    threshold: 0.5,
    root_margin: "0px",
    trigger: Trigger::Once,
};

pub const LAZY_IMAGE_POLICY: RevealPolicy = RevealPolicy {
    threshold: 0.0,
    root_margin: "0px",
    trigger: Trigger::Once,
};

pub const CARD_POLICY: RevealPolicy = RevealPolicy {
    threshold: 0.1,
    root_margin: "0px 0px -50px 0px",
    trigger: Trigger::Repeat,
};

pub const TIMELINE_POLICY: RevealPolicy = RevealPolicy {
    threshold: 0.3,
    root_margin: "0px 0px -100px 0px",
    trigger: Trigger::Repeat,
};

/// Phone number baked in at build time, `SITE_WHATSAPP_PHONE` overrides the default.
pub fn whatsapp_phone() -> &'static str {
    option_env!("SITE_WHATSAPP_PHONE").unwrap_or(DEFAULT_WHATSAPP_PHONE)
}
