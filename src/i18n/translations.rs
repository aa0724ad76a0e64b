//! Static text for every supported locale.
//!
//! Each locale has a flat table of `(TranslationKey, text)` pairs. Markup
//! refers to entries through the `data-translate` attribute, whose value is
//! [`TranslationKey::attr`].

use thiserror::Error;

use crate::i18n::locale::Locale;

macro_rules! translation_keys {
    ($($variant:ident => $attr:literal,)*) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum TranslationKey {
            $($variant,)*
        }

        impl TranslationKey {
            pub const ALL: &'static [TranslationKey] = &[$(TranslationKey::$variant,)*];

            /// Value used in the `data-translate` attribute.
            pub fn attr(self) -> &'static str {
                match self {
                    $(TranslationKey::$variant => $attr,)*
                }
            }

            pub fn from_attr(attr: &str) -> Option<Self> {
                match attr {
                    $($attr => Some(TranslationKey::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

translation_keys! {
    PageTitle => "page-title",
    FooterTagline => "footer-tagline",

    NavHome => "nav-home",
    NavAbout => "nav-about",
    NavServices => "nav-services",
    NavOffers => "nav-offers",
    NavContact => "nav-contact",

    HeroTitle1 => "hero-title-1",
    HeroTitle2 => "hero-title-2",
    HeroSubtitle => "hero-subtitle",
    HeroBtn1 => "hero-btn-1",
    HeroBtn2 => "hero-btn-2",

    AboutTitle => "about-title",
    AboutDescription => "about-description",
    AboutFeature1 => "about-feature-1",
    AboutFeature2 => "about-feature-2",
    AboutFeature3 => "about-feature-3",

    ServicesTitle => "services-title",
    ServicesSubtitle => "services-subtitle",
    Service1Title => "service-1-title",
    Service1Desc => "service-1-desc",
    Service2Title => "service-2-title",
    Service2Desc => "service-2-desc",
    Service3Title => "service-3-title",
    Service3Desc => "service-3-desc",
    Service4Title => "service-4-title",
    Service4Desc => "service-4-desc",
    Service5Title => "service-5-title",
    Service5Desc => "service-5-desc",
    Service6Title => "service-6-title",
    Service6Desc => "service-6-desc",
    Service7Title => "service-7-title",
    Service7Desc => "service-7-desc",
    Service8Title => "service-8-title",
    Service8Desc => "service-8-desc",
    Service9Title => "service-9-title",
    Service9Desc => "service-9-desc",

    BookingTitle => "booking-title",
    BookingSubtitle => "booking-subtitle",
    Booking1 => "booking-1",
    Booking2 => "booking-2",
    Booking3 => "booking-3",
    Booking4 => "booking-4",
    BookingBtn => "booking-btn",

    OffersTitle => "offers-title",
    OffersSubtitle => "offers-subtitle",
    Offer1Title => "offer-1-title",
    Offer1Price => "offer-1-price",
    Offer1Original => "offer-1-original",
    Offer1Feature1 => "offer-1-feature-1",
    Offer1Feature2 => "offer-1-feature-2",
    Offer1Feature3 => "offer-1-feature-3",
    Offer1Feature4 => "offer-1-feature-4",
    Offer2Title => "offer-2-title",
    Offer2Price => "offer-2-price",
    Offer2Original => "offer-2-original",
    Offer2Feature1 => "offer-2-feature-1",
    Offer2Feature2 => "offer-2-feature-2",
    Offer2Feature3 => "offer-2-feature-3",
    Offer2Feature4 => "offer-2-feature-4",
    Offer3Title => "offer-3-title",
    Offer3Price => "offer-3-price",
    Offer3Original => "offer-3-original",
    Offer3Feature1 => "offer-3-feature-1",
    Offer3Feature2 => "offer-3-feature-2",
    Offer3Feature3 => "offer-3-feature-3",
    Offer3Feature4 => "offer-3-feature-4",
    OfferBtn => "offer-btn",

    ContactTitle => "contact-title",
    ContactSubtitle => "contact-subtitle",
    ContactFormName => "contact-form-name",
    ContactFormEmail => "contact-form-email",
    ContactFormPhone => "contact-form-phone",
    ContactFormBirthDate => "contact-form-birth-date",
    ContactFormService => "contact-form-service",
    ContactFormServicePlaceholder => "contact-form-service-placeholder",
    ContactFormMessage => "contact-form-message",
    ContactFormBtn => "contact-form-btn",
    ContactInfoTitle => "contact-info-title",
    ContactWhatsapp => "contact-whatsapp",
    ContactEmail => "contact-email",
    ContactUsa => "contact-usa",
    ContactWebsite => "contact-website",

    FormSending => "form-sending",
    FormSuccess => "form-success",
    LanguageChanged => "language-changed",
}

pub type TranslationTable = &'static [(TranslationKey, &'static str)];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslationError {
    #[error("translation `{key}` missing for locale `{locale}`")]
    Missing { locale: &'static str, key: &'static str },
    #[error("translation `{key}` is empty for locale `{locale}`")]
    Empty { locale: &'static str, key: &'static str },
}

pub fn table(locale: Locale) -> TranslationTable {
    match locale {
        Locale::En => EN,
        Locale::Hi => HI,
    }
}

/// Localized text for `key`, or `None` when the locale has no entry.
pub fn lookup(locale: Locale, key: TranslationKey) -> Option<&'static str> {
    find(table(locale), key)
}

/// Same as [`lookup`] but keyed by the raw locale code and attribute value,
/// as found in persisted storage and markup.
pub fn lookup_raw(locale_code: &str, key_attr: &str) -> Option<&'static str> {
    let locale = Locale::from_code(locale_code)?;
    let key = TranslationKey::from_attr(key_attr)?;
    lookup(locale, key)
}

/// Text for rendering: the locale's entry, else the default locale's, else
/// the attribute string itself.
pub fn translate(locale: Locale, key: TranslationKey) -> &'static str {
    lookup(locale, key)
        .or_else(|| lookup(Locale::default(), key))
        .unwrap_or_else(|| key.attr())
}

fn find(table: TranslationTable, key: TranslationKey) -> Option<&'static str> {
    table
        .iter()
        .find(|(entry, _)| *entry == key)
        .map(|(_, text)| *text)
}

/// Every key that `table` lacks (or leaves empty) for `locale`.
pub fn missing_in(locale: Locale, table: TranslationTable) -> Vec<TranslationError> {
    TranslationKey::ALL
        .iter()
        .filter_map(|&key| match find(table, key) {
            None => Some(TranslationError::Missing { locale: locale.code(), key: key.attr() }),
            Some(text) if text.trim().is_empty() => {
                Some(TranslationError::Empty { locale: locale.code(), key: key.attr() })
            }
            Some(_) => None,
        })
        .collect()
}

/// Checks that every supported locale covers every key. Run once at startup.
pub fn check_completeness() -> Result<(), Vec<TranslationError>> {
    let errors: Vec<_> = Locale::ALL
        .iter()
        .flat_map(|&locale| missing_in(locale, table(locale)))
        .collect();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

use TranslationKey::*;

static EN: TranslationTable = &[
    (PageTitle, "Shree Astrotalks - Astrology & Numerology Consultation"),
    (FooterTagline, "Guiding you with the wisdom of the stars."),

    (NavHome, "Home"),
    (NavAbout, "About"),
    (NavServices, "Services"),
    (NavOffers, "Offers"),
    (NavContact, "Contact"),

    (HeroTitle1, "Unlock Your Destiny with"),
    (HeroTitle2, "Ancient Wisdom"),
    (HeroSubtitle, "Discover your true potential through expert astrology, numerology, and spiritual guidance. Let the stars illuminate your path to success and happiness."),
    (HeroBtn1, "Explore Services"),
    (HeroBtn2, "Consult Now"),

    (AboutTitle, "About Shree Astrotalks"),
    (AboutDescription, "Welcome to Shree Astrotalks, your trusted guide in the mystical world of astrology, numerology, and spiritual healing. With years of experience in ancient Vedic sciences, we provide authentic guidance to help you navigate life's challenges and unlock your true potential."),
    (AboutFeature1, "2.5K+ Consultations Done"),
    (AboutFeature2, "Expert Astrologers"),
    (AboutFeature3, "Worldwide Service"),

    (ServicesTitle, "Our Sacred Services"),
    (ServicesSubtitle, "Transform your life with our comprehensive spiritual and astrological guidance"),
    (Service1Title, "Lucky Mobile Number"),
    (Service1Desc, "Discover the perfect mobile number that aligns with your numerological vibrations for enhanced luck and prosperity."),
    (Service2Title, "Name Correction"),
    (Service2Desc, "Optimize your name according to numerological principles to attract positive energy and success."),
    (Service3Title, "Career Consultation"),
    (Service3Desc, "Get personalized guidance on career decisions and professional growth through astrological insights."),
    (Service4Title, "Marriage Matching"),
    (Service4Desc, "Ensure compatibility and harmony in relationships through comprehensive astrological matching."),
    (Service5Title, "Tarot Card Reading"),
    (Service5Desc, "Gain clarity about your future and make informed decisions with our expert tarot card readings."),
    (Service6Title, "Face Reading"),
    (Service6Desc, "Understand your personality traits and life path through the ancient art of face reading."),
    (Service7Title, "Spiritual Healing"),
    (Service7Desc, "Experience profound healing and balance through our spiritual cleansing and energy work."),
    (Service8Title, "Gemstone Consultation"),
    (Service8Desc, "Discover which gemstones can enhance your life force and bring protection and prosperity."),
    (Service9Title, "Vastu Consultation"),
    (Service9Desc, "Harmonize your living and working spaces according to ancient Vastu principles."),

    (BookingTitle, "Book a Session"),
    (BookingSubtitle, "Choose how you would like to consult with us"),
    (Booking1, "Numerology Report"),
    (Booking2, "Name Correction Session"),
    (Booking3, "Lucky Number Session"),
    (Booking4, "One-to-One Consultation"),
    (BookingBtn, "Reserve"),

    (OffersTitle, "Special Offers"),
    (OffersSubtitle, "Limited time spiritual guidance packages designed to transform your life"),
    (Offer1Title, "Complete Life Analysis"),
    (Offer1Price, "₹999"),
    (Offer1Original, "₹1,999"),
    (Offer1Feature1, "Detailed Birth Chart Analysis"),
    (Offer1Feature2, "Career & Finance Guidance"),
    (Offer1Feature3, "Health & Wellness Predictions"),
    (Offer1Feature4, "Lucky Numbers & Colors"),
    (Offer2Title, "Relationship Harmony"),
    (Offer2Price, "₹1,499"),
    (Offer2Original, "₹2,499"),
    (Offer2Feature1, "Compatibility Analysis"),
    (Offer2Feature2, "Marriage Timing Predictions"),
    (Offer2Feature3, "Relationship Healing"),
    (Offer2Feature4, "Love Life Guidance"),
    (Offer3Title, "Business Success"),
    (Offer3Price, "₹1,999"),
    (Offer3Original, "₹3,499"),
    (Offer3Feature1, "Business Name Analysis"),
    (Offer3Feature2, "Auspicious Timing"),
    (Offer3Feature3, "Financial Growth Predictions"),
    (Offer3Feature4, "Partnership Guidance"),
    (OfferBtn, "Book Now"),

    (ContactTitle, "Connect with Us"),
    (ContactSubtitle, "Ready to transform your life? Get in touch with our expert astrologers"),
    (ContactFormName, "Full Name"),
    (ContactFormEmail, "Email Address"),
    (ContactFormPhone, "Phone Number"),
    (ContactFormBirthDate, "Birth Date"),
    (ContactFormService, "Service of Interest"),
    (ContactFormServicePlaceholder, "Select a service"),
    (ContactFormMessage, "Your Message"),
    (ContactFormBtn, "Send Message"),
    (ContactInfoTitle, "Get in Touch"),
    (ContactWhatsapp, "WhatsApp"),
    (ContactEmail, "Email"),
    (ContactUsa, "USA Office"),
    (ContactWebsite, "Website"),

    (FormSending, "Sending..."),
    (FormSuccess, "Request sent successfully! We will contact you soon."),
    (LanguageChanged, "Language changed to English"),
];

static HI: TranslationTable = &[
    (PageTitle, "श्री एस्ट्रोटॉक्स - ज्योतिष और अंक ज्योतिष परामर्श"),
    (FooterTagline, "सितारों के ज्ञान से आपका मार्गदर्शन।"),

    (NavHome, "होम"),
    (NavAbout, "हमारे बारे में"),
    (NavServices, "सेवाएं"),
    (NavOffers, "ऑफर"),
    (NavContact, "संपर्क"),

    (HeroTitle1, "प्राचीन ज्ञान से"),
    (HeroTitle2, "अपना भाग्य खोलें"),
    (HeroSubtitle, "विशेषज्ञ ज्योतिष, अंक ज्योतिष, और आध्यात्मिक मार्गदर्शन के माध्यम से अपनी सच्ची क्षमता खोजें। सितारों को सफलता और खुशी का रास्ता रोशन करने दें।"),
    (HeroBtn1, "सेवाएं देखें"),
    (HeroBtn2, "अभी सलाह लें"),

    (AboutTitle, "श्री एस्ट्रोटॉक्स के बारे में"),
    (AboutDescription, "श्री एस्ट्रोटॉक्स में आपका स्वागत है, ज्योतिष, अंक ज्योतिष, और आध्यात्मिक चिकित्सा की रहस्यमय दुनिया में आपका विश्वसनीय मार्गदर्शक। प्राचीन वैदिक विज्ञान में वर्षों के अनुभव के साथ, हम आपको जीवन की चुनौतियों से निपटने और अपनी सच्ची क्षमता को अनलॉक करने में मदद करने के लिए प्रामाणिक मार्गदर्शन प्रदान करते हैं।"),
    (AboutFeature1, "2.5K+ परामर्श पूर्ण"),
    (AboutFeature2, "विशेषज्ञ ज्योतिषी"),
    (AboutFeature3, "विश्वव्यापी सेवा"),

    (ServicesTitle, "हमारी पवित्र सेवाएं"),
    (ServicesSubtitle, "हमारे व्यापक आध्यात्मिक और ज्योतिषीय मार्गदर्शन से अपना जीवन बदलें"),
    (Service1Title, "भाग्यशाली मोबाइल नंबर"),
    (Service1Desc, "अपनी संख्या विज्ञान की कंपनों के साथ संरेखित करने वाला सही मोबाइल नंबर खोजें जो भाग्य और समृद्धि बढ़ाए।"),
    (Service2Title, "नाम सुधार"),
    (Service2Desc, "सकारात्मक ऊर्जा और सफलता आकर्षित करने के लिए अंक ज्योतिष के सिद्धांतों के अनुसार अपना नाम अनुकूलित करें।"),
    (Service3Title, "कैरियर परामर्श"),
    (Service3Desc, "ज्योतिषीय अंतर्दृष्टि के माध्यम से करियर निर्णयों और व्यावसायिक विकास पर व्यक्तिगत मार्गदर्शन प्राप्त करें।"),
    (Service4Title, "विवाह मिलान"),
    (Service4Desc, "व्यापक ज्योतिषीय मिलान के माध्यम से रिश्तों में संगतता और सामंजस्य सुनिश्चित करें।"),
    (Service5Title, "टैरो कार्ड रीडिंग"),
    (Service5Desc, "हमारे विशेषज्ञ टैरो कार्ड रीडिंग के साथ अपने भविष्य के बारे में स्पष्टता प्राप्त करें और सूचित निर्णय लें।"),
    (Service6Title, "चेहरा पढ़ना"),
    (Service6Desc, "चेहरा पढ़ने की प्राचीन कला के माध्यम से अपने व्यक्तित्व के लक्षणों और जीवन पथ को समझें।"),
    (Service7Title, "आध्यात्मिक उपचार"),
    (Service7Desc, "हमारे आध्यात्मिक शुद्धिकरण और ऊर्जा कार्य के माध्यम से गहरा उपचार और संतुलन का अनुभव करें।"),
    (Service8Title, "रत्न परामर्श"),
    (Service8Desc, "जानें कि कौन से रत्न आपकी जीवन शक्ति को बढ़ा सकते हैं और सुरक्षा और समृद्धि ला सकते हैं।"),
    (Service9Title, "वास्तु परामर्श"),
    (Service9Desc, "प्राचीन वास्तु सिद्धांतों के अनुसार अपने रहने और काम करने के स्थानों को सामंजस्यपूर्ण बनाएं।"),

    (BookingTitle, "सत्र बुक करें"),
    (BookingSubtitle, "चुनें कि आप हमसे कैसे परामर्श करना चाहते हैं"),
    (Booking1, "अंक ज्योतिष रिपोर्ट"),
    (Booking2, "नाम सुधार सत्र"),
    (Booking3, "भाग्यशाली नंबर सत्र"),
    (Booking4, "व्यक्तिगत परामर्श"),
    (BookingBtn, "आरक्षित करें"),

    (OffersTitle, "विशेष प्रस्ताव"),
    (OffersSubtitle, "सीमित समय के आध्यात्मिक मार्गदर्शन पैकेज जो आपके जीवन को बदलने के लिए डिज़ाइन किए गए हैं"),
    (Offer1Title, "पूर्ण जीवन विश्लेषण"),
    (Offer1Price, "₹999"),
    (Offer1Original, "₹1,999"),
    (Offer1Feature1, "विस्तृत जन्म चार्ट विश्लेषण"),
    (Offer1Feature2, "करियर और वित्त मार्गदर्शन"),
    (Offer1Feature3, "स्वास्थ्य और कल्याण भविष्यवाणी"),
    (Offer1Feature4, "भाग्यशाली संख्या और रंग"),
    (Offer2Title, "रिश्ता सामंजस्य"),
    (Offer2Price, "₹1,499"),
    (Offer2Original, "₹2,499"),
    (Offer2Feature1, "संगतता विश्लेषण"),
    (Offer2Feature2, "विवाह समय भविष्यवाणी"),
    (Offer2Feature3, "रिश्ता उपचार"),
    (Offer2Feature4, "प्रेम जीवन मार्गदर्शन"),
    (Offer3Title, "व्यापार सफलता"),
    (Offer3Price, "₹1,999"),
    (Offer3Original, "₹3,499"),
    (Offer3Feature1, "व्यापार नाम विश्लेषण"),
    (Offer3Feature2, "शुभ समय"),
    (Offer3Feature3, "वित्तीय वृद्धि भविष्यवाणी"),
    (Offer3Feature4, "साझेदारी मार्गदर्शन"),
    (OfferBtn, "अभी बुक करें"),

    (ContactTitle, "हमसे जुड़ें"),
    (ContactSubtitle, "अपना जीवन बदलने के लिए तैयार हैं? हमारे विशेषज्ञ ज्योतिषियों से संपर्क करें"),
    (ContactFormName, "पूरा नाम"),
    (ContactFormEmail, "ईमेल पता"),
    (ContactFormPhone, "फोन नंबर"),
    (ContactFormBirthDate, "जन्म तिथि"),
    (ContactFormService, "रुचि की सेवा"),
    (ContactFormServicePlaceholder, "सेवा चुनें"),
    (ContactFormMessage, "आपका संदेश"),
    (ContactFormBtn, "संदेश भेजें"),
    (ContactInfoTitle, "संपर्क करें"),
    (ContactWhatsapp, "व्हाट्सएप"),
    (ContactEmail, "ईमेल"),
    (ContactUsa, "यूएसए कार्यालय"),
    (ContactWebsite, "वेबसाइट"),

    (FormSending, "भेजा जा रहा है..."),
    (FormSuccess, "अनुरोध सफलतापूर्वक भेजा गया! हम जल्द ही आपसे संपर्क करेंगे।"),
    (LanguageChanged, "भाषा हिंदी में बदल गई"),
];

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn shipped_tables_are_complete() {
        assert_eq!(check_completeness(), Ok(()));
    }

    #[test]
    fn tables_have_no_duplicate_keys() {
        for locale in Locale::ALL {
            let table = table(*locale);
            assert_eq!(table.len(), TranslationKey::ALL.len(), "locale {}", locale.code());
        }
    }

    #[test]
    fn attr_round_trips_for_every_key() {
        for key in TranslationKey::ALL {
            assert_eq!(TranslationKey::from_attr(key.attr()), Some(*key));
        }
    }

    #[rstest]
    #[case("en", "nav-home", Some("Home"))]
    #[case("hi", "nav-home", Some("होम"))]
    #[case("hi", "offer-btn", Some("अभी बुक करें"))]
    #[case("fr", "nav-home", None)]
    #[case("en", "nav-blog", None)]
    #[case("", "", None)]
    fn lookup_raw_signals_missing(
        #[case] locale: &str,
        #[case] key: &str,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(lookup_raw(locale, key), expected);
    }

    #[test]
    fn missing_in_reports_absent_and_empty_entries() {
        static PARTIAL: TranslationTable = &[(NavHome, "Home"), (NavAbout, "  ")];

        let errors = missing_in(Locale::En, PARTIAL);

        assert_eq!(errors.len(), TranslationKey::ALL.len() - 1);
        assert!(errors.contains(&TranslationError::Empty { locale: "en", key: "nav-about" }));
        assert!(errors.contains(&TranslationError::Missing { locale: "en", key: "nav-contact" }));
        assert!(!errors.iter().any(|e| matches!(e, TranslationError::Missing { key: "nav-home", .. })));
    }

    #[test]
    fn language_changed_text_depends_on_locale() {
        assert_eq!(translate(Locale::En, LanguageChanged), "Language changed to English");
        assert_eq!(translate(Locale::Hi, LanguageChanged), "भाषा हिंदी में बदल गई");
    }
}
