use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::i18n::context::use_i18n;
use crate::i18n::translations::TranslationKey;
use crate::scroll;

const NAV_LINKS: &[(&str, TranslationKey)] = &[
    ("#home", TranslationKey::NavHome),
    ("#about", TranslationKey::NavAbout),
    ("#services", TranslationKey::NavServices),
    ("#offers", TranslationKey::NavOffers),
    ("#contact", TranslationKey::NavContact),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let i18n = use_i18n();
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();

    {
        let menu_open = menu_open.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                menu_open.set(false);
            }
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let toggle_locale = {
        let on_toggle = i18n.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };

    // Every in-page link closes the mobile menu and scrolls smoothly.
    let anchor_click = |href: &'static str| {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(id) = scroll::in_page_target(href) {
                e.prevent_default();
                menu_open.set(false);
                scroll::scroll_to_section(id);
            }
        })
    };

    let active = scroll::active_section(scroll_y, &scroll::measure_sections());

    html! {
        <header id="header" class={classes!("header", scroll::header_scrolled(scroll_y).then(|| "scrolled"))}>
            <nav class="nav-container">
                <a href="#home" class="nav-logo" onclick={anchor_click("#home")}>{"Shree Astrotalks"}</a>
                <ul id="nav-menu" class={classes!("nav-menu", (*menu_open).then(|| "active"))}>
                    { for NAV_LINKS.iter().map(|&(href, key)| {
                        let current = active.is_some() && active == scroll::in_page_target(href);
                        html! {
                            <li>
                                <a
                                    href={href}
                                    class={classes!("nav-link", current.then(|| "active"))}
                                    data-translate={key.attr()}
                                    onclick={anchor_click(href)}
                                >
                                    { i18n.t(key) }
                                </a>
                            </li>
                        }
                    }) }
                </ul>
                <button id="lang-toggle" class="lang-toggle" onclick={toggle_locale}>
                    <span id="current-lang">{ i18n.locale.indicator_label() }</span>
                </button>
                <button
                    id="nav-toggle"
                    class={classes!("nav-toggle", (*menu_open).then(|| "active"))}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </nav>
        </header>
    }
}
