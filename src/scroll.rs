//! Scroll driven page behaviour: header state, active nav link, parallax,
//! back-to-top visibility and in-page smooth scrolling.

use crate::browser;
use crate::config;

/// Page sections linked from the nav, in document order.
pub const SECTION_IDS: &[&str] = &["home", "about", "services", "offers", "contact"];

pub fn header_scrolled(scroll_y: f64) -> bool {
    scroll_y > config::HEADER_SCROLLED_AFTER
}

pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > config::BACK_TO_TOP_AFTER
}

pub fn parallax_transform(scroll_y: f64) -> String {
    format!("translateY({}px)", scroll_y * config::PARALLAX_SPEED)
}

/// Id of the section under `scroll_y` plus the look-ahead offset. When
/// sections overlap the last match wins.
pub fn active_section<'a>(scroll_y: f64, sections: &[(&'a str, f64, f64)]) -> Option<&'a str> {
    let position = scroll_y + config::ACTIVE_SECTION_LOOKAHEAD;
    sections
        .iter()
        .filter(|(_, top, height)| position >= *top && position < top + height)
        .last()
        .map(|(id, _, _)| *id)
}

/// Section id an in-page link points at, if `href` is a `#fragment`.
pub fn in_page_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll position that puts a section just below the fixed header.
pub fn anchor_target(section_top: f64, header_height: f64) -> f64 {
    section_top - header_height
}

/// Measures the nav sections in the live document.
pub fn measure_sections() -> Vec<(&'static str, f64, f64)> {
    SECTION_IDS
        .iter()
        .filter_map(|id| browser::section_bounds(id).map(|(top, height)| (*id, top, height)))
        .collect()
}

/// Smoothly scrolls to `#id`. Missing sections are ignored.
pub fn scroll_to_section(id: &str) {
    if let Some((top, _)) = browser::section_bounds(id) {
        browser::smooth_scroll_to(anchor_target(top, browser::header_height()));
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const SECTIONS: &[(&str, f64, f64)] = &[
        ("home", 0.0, 700.0),
        ("about", 700.0, 500.0),
        ("services", 1200.0, 900.0),
    ];

    #[rstest]
    #[case(0.0, Some("home"))]
    #[case(499.0, Some("home"))]
    #[case(500.0, Some("about"))]
    #[case(1000.0, Some("services"))]
    #[case(1899.0, Some("services"))]
    #[case(1900.0, None)]
    fn active_section_uses_lookahead(#[case] scroll_y: f64, #[case] expected: Option<&str>) {
        assert_eq!(active_section(scroll_y, SECTIONS), expected);
    }

    #[rstest]
    #[case(0.0, false, false)]
    #[case(100.0, false, false)]
    #[case(101.0, true, false)]
    #[case(300.0, true, false)]
    #[case(301.0, true, true)]
    fn thresholds(#[case] scroll_y: f64, #[case] scrolled: bool, #[case] back_to_top: bool) {
        assert_eq!(header_scrolled(scroll_y), scrolled);
        assert_eq!(back_to_top_visible(scroll_y), back_to_top);
    }

    #[test]
    fn parallax_moves_at_half_speed() {
        assert_eq!(parallax_transform(0.0), "translateY(0px)");
        assert_eq!(parallax_transform(300.0), "translateY(150px)");
    }

    #[test]
    fn anchor_target_clears_header() {
        assert_eq!(anchor_target(1200.0, 80.0), 1120.0);
    }

    #[rstest]
    #[case("#home", Some("home"))]
    #[case("#contact", Some("contact"))]
    #[case("#", None)]
    #[case("https://wa.me/917738961658", None)]
    fn in_page_links_resolve_to_sections(#[case] href: &str, #[case] expected: Option<&str>) {
        assert_eq!(in_page_target(href), expected);
    }
}
