use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Element id the yew app mounts into. Everything outside it is host markup.
pub const APP_ROOT_ID: &str = "app";

/// Number the WhatsApp deep links are addressed to.
pub const WHATSAPP_NUMBER: &str = "917738961658";

/// localStorage key holding the locale preference.
pub const LOCALE_STORAGE_KEY: &str = "language";

// Booking pages by service button id. Id "4" is the one-to-one WhatsApp
// consultation and is handled separately.
pub const BOOKING_PAGES: &[(&str, &str)] = &[
    ("1", "https://superprofile.bio/vp/670c18d9d993b30013555b0d"),
    ("2", "https://superprofile.bio/vp/66cfa4430b9337001372b30b"),
    ("3", "https://superprofile.bio/vp/x1_sSJXT"),
];
pub const WHATSAPP_BOOKING_ID: &str = "4";

pub const SUBMIT_DELAY_MS: u32 = 2_000;
pub const NOTIFICATION_TIMEOUT_MS: u32 = 5_000;

pub const HEADER_SCROLLED_AFTER: f64 = 100.0;
pub const BACK_TO_TOP_AFTER: f64 = 300.0;
pub const ACTIVE_SECTION_LOOKAHEAD: f64 = 200.0;
pub const PARALLAX_SPEED: f64 = 0.5;

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
