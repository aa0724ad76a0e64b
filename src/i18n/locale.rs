use log::{debug, warn};

use crate::components::notification::{NotificationSink, Severity};
use crate::config;
use crate::i18n::translations::{self, TranslationKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    Hi,
}

impl Locale {
    pub const ALL: &'static [Locale] = &[Locale::En, Locale::Hi];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Hi => "hi",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Locale::En),
            "hi" => Some(Locale::Hi),
            _ => None,
        }
    }

    /// The other of the two supported locales.
    pub fn toggled(self) -> Self {
        match self {
            Locale::En => Locale::Hi,
            Locale::Hi => Locale::En,
        }
    }

    /// Short label shown on the language toggle button.
    pub fn indicator_label(self) -> &'static str {
        match self {
            Locale::En => "EN",
            Locale::Hi => "हिं",
        }
    }
}

/// Key-value storage that outlives the page (localStorage in the browser).
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str) -> Result<(), crate::browser::BrowserError>;
}

/// A document whose tagged elements can be rewritten for a locale.
pub trait TranslatableDocument {
    /// Calls `translate` with the `data-translate` value of every tagged
    /// element and replaces the element text when it returns `Some`.
    /// Returns how many elements were rewritten.
    fn rewrite_tagged(&mut self, translate: &dyn Fn(&str) -> Option<&'static str>) -> usize;

    /// Sets the document level language attribute.
    fn set_lang(&mut self, code: &str);
}

/// Reads the persisted locale, falling back to the default when the value
/// is absent or not a supported code.
pub fn load_locale(store: &dyn PreferenceStore) -> Locale {
    store
        .load(config::LOCALE_STORAGE_KEY)
        .as_deref()
        .and_then(Locale::from_code)
        .unwrap_or_default()
}

/// Owns the current locale and its persisted copy.
pub struct LocaleController<S: PreferenceStore> {
    store: S,
    current: Locale,
}

impl<S: PreferenceStore> LocaleController<S> {
    pub fn new(store: S) -> Self {
        let current = load_locale(&store);
        debug!("Loaded locale {}", current.code());
        Self { store, current }
    }

    pub fn current_locale(&self) -> Locale {
        self.current
    }

    pub fn apply_locale(&mut self, locale: Locale, document: &mut dyn TranslatableDocument) {
        let rewritten = document.rewrite_tagged(&|attr| translations::lookup_raw(locale.code(), attr));
        document.set_lang(locale.code());
        self.current = locale;
        debug!("Applied locale {} to {} elements", locale.code(), rewritten);
    }

    pub fn toggle_locale(
        &mut self,
        document: &mut dyn TranslatableDocument,
        notifications: &mut dyn NotificationSink,
    ) -> Locale {
        let next = self.current.toggled();
        self.apply_locale(next, document);

        // The in-memory value stays authoritative if storage is unavailable.
        if let Err(e) = self.store.save(config::LOCALE_STORAGE_KEY, next.code()) {
            warn!("Could not persist locale {}: {}", next.code(), e);
        }

        notifications.notify(
            translations::translate(next, TranslationKey::LanguageChanged).to_string(),
            Severity::Success,
        );
        next
    }
}
