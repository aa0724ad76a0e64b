use log::{info, warn};

use crate::browser;
use crate::config;
use crate::consultation::message::{offer_message, whatsapp_link, ONE_TO_ONE_MESSAGE};

/// Where a booking button sends the visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingTarget {
    Page(&'static str),
    Whatsapp(String),
}

impl BookingTarget {
    /// Looks up a service button id. Unknown ids have no target.
    pub fn for_service(id: &str) -> Option<Self> {
        if id == config::WHATSAPP_BOOKING_ID {
            return Some(BookingTarget::Whatsapp(whatsapp_link(ONE_TO_ONE_MESSAGE)));
        }
        config::BOOKING_PAGES
            .iter()
            .find(|(page_id, _)| *page_id == id)
            .map(|(_, url)| BookingTarget::Page(url))
    }

    pub fn for_offer(title: &str, price: &str) -> Self {
        BookingTarget::Whatsapp(whatsapp_link(&offer_message(title, price)))
    }

    pub fn url(&self) -> &str {
        match self {
            BookingTarget::Page(url) => url,
            BookingTarget::Whatsapp(url) => url,
        }
    }

    pub fn open(&self) {
        info!("Opening booking target {}", self.url());
        if let Err(e) = browser::open_external(self.url()) {
            warn!("{}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("1", "https://superprofile.bio/vp/670c18d9d993b30013555b0d")]
    #[case("2", "https://superprofile.bio/vp/66cfa4430b9337001372b30b")]
    #[case("3", "https://superprofile.bio/vp/x1_sSJXT")]
    fn known_ids_open_booking_pages(#[case] id: &str, #[case] url: &'static str) {
        assert_eq!(BookingTarget::for_service(id), Some(BookingTarget::Page(url)));
    }

    #[test]
    fn id_four_opens_whatsapp_consultation() {
        let target = BookingTarget::for_service("4").expect("whatsapp target");
        assert!(matches!(target, BookingTarget::Whatsapp(_)));
        assert!(target.url().starts_with("https://wa.me/917738961658?text="));
        assert!(target.url().contains("One-to-One%20Consultation%20Request"));
    }

    #[rstest]
    #[case("")]
    #[case("5")]
    #[case("whatsapp")]
    fn unknown_ids_have_no_target(#[case] id: &str) {
        assert_eq!(BookingTarget::for_service(id), None);
    }

    #[test]
    fn offer_target_carries_title_and_price() {
        let target = BookingTarget::for_offer("Relationship Harmony", "₹1,499");
        assert!(target.url().contains("Relationship%20Harmony"));
        assert!(target.url().contains(&*urlencoding::encode("₹1,499")));
    }
}
