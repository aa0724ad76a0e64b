use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::notification::Notifier;
use crate::components::reveal::{reveal_classes, use_reveal};
use crate::config;
use crate::consultation::booking::BookingTarget;
use crate::i18n::context::{use_i18n, I18n};
use crate::i18n::translations::TranslationKey::{self, *};
use crate::pages::contact::ContactForm;
use crate::scroll;

const SERVICES: &[(&str, TranslationKey, TranslationKey)] = &[
    ("🔢", Service1Title, Service1Desc),
    ("✍️", Service2Title, Service2Desc),
    ("💼", Service3Title, Service3Desc),
    ("💍", Service4Title, Service4Desc),
    ("🃏", Service5Title, Service5Desc),
    ("👤", Service6Title, Service6Desc),
    ("🕉️", Service7Title, Service7Desc),
    ("💎", Service8Title, Service8Desc),
    ("🏠", Service9Title, Service9Desc),
];

const BOOKINGS: &[(&str, TranslationKey)] = &[
    ("1", Booking1),
    ("2", Booking2),
    ("3", Booking3),
    (config::WHATSAPP_BOOKING_ID, Booking4),
];

#[derive(Clone, PartialEq)]
struct Offer {
    title: TranslationKey,
    price: TranslationKey,
    original: TranslationKey,
    features: [TranslationKey; 4],
}

const OFFERS: [Offer; 3] = [
    Offer {
        title: Offer1Title,
        price: Offer1Price,
        original: Offer1Original,
        features: [Offer1Feature1, Offer1Feature2, Offer1Feature3, Offer1Feature4],
    },
    Offer {
        title: Offer2Title,
        price: Offer2Price,
        original: Offer2Original,
        features: [Offer2Feature1, Offer2Feature2, Offer2Feature3, Offer2Feature4],
    },
    Offer {
        title: Offer3Title,
        price: Offer3Price,
        original: Offer3Original,
        features: [Offer3Feature1, Offer3Feature2, Offer3Feature3, Offer3Feature4],
    },
];

/// Element carrying a `data-translate` tag and its current text.
fn tagged(i18n: &I18n, tag: &'static str, key: TranslationKey) -> Html {
    html! {
        <@{tag} data-translate={key.attr()}>{ i18n.t(key) }</@>
    }
}

fn jump_to(id: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll::scroll_to_section(id);
    })
}

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <main>
            <Hero />
            <About />
            <Services />
            <Booking />
            <Offers />
            <Contact />
        </main>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    let i18n = use_i18n();
    let (_, scroll_y) = use_window_scroll();

    html! {
        <section id="home" class="hero" style={format!("transform: {};", scroll::parallax_transform(scroll_y))}>
            <div class="hero-content">
                <h1 class="hero-title">
                    { tagged(&i18n, "span", HeroTitle1) }
                    <br/>
                    <span class="gradient-text" data-translate={HeroTitle2.attr()}>{ i18n.t(HeroTitle2) }</span>
                </h1>
                { tagged(&i18n, "p", HeroSubtitle) }
                <div class="hero-buttons">
                    <a href="#services" class="btn btn-primary" data-translate={HeroBtn1.attr()} onclick={jump_to("services")}>
                        { i18n.t(HeroBtn1) }
                    </a>
                    <a href="#contact" class="btn btn-secondary" data-translate={HeroBtn2.attr()} onclick={jump_to("contact")}>
                        { i18n.t(HeroBtn2) }
                    </a>
                </div>
            </div>
        </section>
    }
}

#[function_component(About)]
fn about() -> Html {
    let i18n = use_i18n();

    html! {
        <section id="about" class="about">
            { tagged(&i18n, "h2", AboutTitle) }
            { tagged(&i18n, "p", AboutDescription) }
            <ul class="about-features">
                { for [AboutFeature1, AboutFeature2, AboutFeature3].into_iter().map(|key| tagged(&i18n, "li", key)) }
            </ul>
        </section>
    }
}

#[function_component(Services)]
fn services() -> Html {
    let i18n = use_i18n();

    html! {
        <section id="services" class="services">
            { tagged(&i18n, "h2", ServicesTitle) }
            { tagged(&i18n, "p", ServicesSubtitle) }
            <div class="services-grid">
                { for SERVICES.iter().map(|&(icon, title, desc)| html! {
                    <ServiceCard icon={icon} title={title} desc={desc} />
                }) }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ServiceCardProps {
    icon: &'static str,
    title: TranslationKey,
    desc: TranslationKey,
}

#[function_component(ServiceCard)]
fn service_card(props: &ServiceCardProps) -> Html {
    let i18n = use_i18n();
    let (node, revealed) = use_reveal();
    let hovered = use_state(|| false);

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };
    let transform = if *hovered {
        "transform: translateY(-10px) scale(1.02);"
    } else {
        "transform: translateY(0) scale(1);"
    };

    html! {
        <div ref={node} class={reveal_classes("service-card", revealed)} style={transform} onmouseenter={onmouseenter} onmouseleave={onmouseleave}>
            <div class="service-icon">{ props.icon }</div>
            { tagged(&i18n, "h3", props.title) }
            { tagged(&i18n, "p", props.desc) }
        </div>
    }
}

#[function_component(Booking)]
fn booking() -> Html {
    let i18n = use_i18n();

    html! {
        <section id="booking" class="booking">
            { tagged(&i18n, "h2", BookingTitle) }
            { tagged(&i18n, "p", BookingSubtitle) }
            <div class="booking-grid">
                { for BOOKINGS.iter().map(|&(id, title)| {
                    let onclick = Callback::from(move |_: MouseEvent| {
                        // Ids without a target do nothing.
                        if let Some(target) = BookingTarget::for_service(id) {
                            target.open();
                        }
                    });
                    html! {
                        <div class="booking-card">
                            { tagged(&i18n, "h3", title) }
                            <button class="service-book-btn" data-service={id} onclick={onclick}>
                                <span data-translate={BookingBtn.attr()}>{ i18n.t(BookingBtn) }</span>
                            </button>
                        </div>
                    }
                }) }
            </div>
        </section>
    }
}

#[function_component(Offers)]
fn offers() -> Html {
    let i18n = use_i18n();

    html! {
        <section id="offers" class="offers">
            { tagged(&i18n, "h2", OffersTitle) }
            { tagged(&i18n, "p", OffersSubtitle) }
            <div class="offers-grid">
                { for OFFERS.iter().cloned().map(|offer| html! { <OfferCard offer={offer} /> }) }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct OfferCardProps {
    offer: Offer,
}

#[function_component(OfferCard)]
fn offer_card(props: &OfferCardProps) -> Html {
    let i18n = use_i18n();
    let (node, revealed) = use_reveal();
    let offer = &props.offer;

    // The request quotes the offer as currently displayed.
    let onclick = {
        let title = i18n.t(offer.title);
        let price = i18n.t(offer.price);
        Callback::from(move |_: MouseEvent| BookingTarget::for_offer(title, price).open())
    };

    html! {
        <div ref={node} class={reveal_classes("offer-card", revealed)}>
            <h3 class="offer-title" data-translate={offer.title.attr()}>{ i18n.t(offer.title) }</h3>
            <div class="offer-price">
                <span class="discounted-price" data-translate={offer.price.attr()}>{ i18n.t(offer.price) }</span>
                <span class="original-price" data-translate={offer.original.attr()}>{ i18n.t(offer.original) }</span>
            </div>
            <ul class="offer-features">
                { for offer.features.iter().map(|&key| tagged(&i18n, "li", key)) }
            </ul>
            <button class="btn-offer" onclick={onclick}>
                <span data-translate={OfferBtn.attr()}>{ i18n.t(OfferBtn) }</span>
            </button>
        </div>
    }
}

#[function_component(Contact)]
fn contact() -> Html {
    let i18n = use_i18n();
    let notifier = use_context::<Notifier>().expect("Notifier context is provided by App");

    html! {
        <section id="contact" class="contact">
            { tagged(&i18n, "h2", ContactTitle) }
            { tagged(&i18n, "p", ContactSubtitle) }
            <div class="contact-content">
                <ContactForm i18n={i18n.clone()} notifier={notifier} />
                <div class="contact-info">
                    { tagged(&i18n, "h3", ContactInfoTitle) }
                    <ContactItem icon="📱" label={ContactWhatsapp} value="+91 77389 61658" href={Some(format!("https://wa.me/{}", config::WHATSAPP_NUMBER))} />
                    <ContactItem icon="✉️" label={ContactEmail} value="info@shreeastrotalks.com" href={Some("mailto:info@shreeastrotalks.com".to_string())} />
                    <ContactItem icon="🇺🇸" label={ContactUsa} value="New Jersey, USA" />
                    <ContactItem icon="🌐" label={ContactWebsite} value="shreeastrotalks.com" href={Some("https://shreeastrotalks.com".to_string())} />
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ContactItemProps {
    icon: &'static str,
    label: TranslationKey,
    value: AttrValue,
    #[prop_or_default]
    href: Option<String>,
}

#[function_component(ContactItem)]
fn contact_item(props: &ContactItemProps) -> Html {
    let i18n = use_i18n();
    let (node, revealed) = use_reveal();

    html! {
        <div ref={node} class={reveal_classes("contact-item", revealed)}>
            <span class="contact-icon">{ props.icon }</span>
            <div>
                { tagged(&i18n, "h4", props.label) }
                if let Some(href) = props.href.clone() {
                    <a href={href} target="_blank" rel="noopener noreferrer">{ props.value.to_string() }</a>
                } else {
                    <p>{ props.value.to_string() }</p>
                }
            </div>
        </div>
    }
}
