use yew::prelude::*;

use crate::i18n::locale::Locale;
use crate::i18n::translations::{translate, TranslationKey};

/// Locale state shared with every component through context.
#[derive(Clone, PartialEq)]
pub struct I18n {
    pub locale: Locale,
    pub on_toggle: Callback<()>,
}

impl I18n {
    pub fn t(&self, key: TranslationKey) -> &'static str {
        translate(self.locale, key)
    }
}

#[hook]
pub fn use_i18n() -> I18n {
    use_context::<I18n>().expect("I18n context is provided by App")
}
