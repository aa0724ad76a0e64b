//! Thin wrappers over the `web_sys` calls the site needs.

use log::warn;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Storage};

use crate::config;
use crate::i18n::locale::{PreferenceStore, TranslatableDocument};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BrowserError {
    #[error("no window available")]
    NoWindow,
    #[error("storage error: {0}")]
    Storage(String),
    #[error("could not open {0}")]
    Open(String),
}

fn js_message(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

fn local_storage() -> Result<Storage, BrowserError> {
    window()
        .ok_or(BrowserError::NoWindow)?
        .local_storage()
        .map_err(|e| BrowserError::Storage(js_message(e)))?
        .ok_or_else(|| BrowserError::Storage("localStorage unavailable".to_string()))
}

/// The browser's localStorage.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorage;

impl PreferenceStore for LocalStorage {
    fn load(&self, key: &str) -> Option<String> {
        local_storage().ok()?.get_item(key).ok().flatten()
    }

    fn save(&self, key: &str, value: &str) -> Result<(), BrowserError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|e| BrowserError::Storage(js_message(e)))
    }
}

/// Markup in `index.html` that lives outside the yew root, e.g. the page
/// title and footer. Everything inside the root is rendered from the
/// current locale directly.
pub struct HostDocument {
    document: Option<Document>,
    app_root: Option<Element>,
}

impl HostDocument {
    pub fn current() -> Self {
        let document = window().and_then(|w| w.document());
        let app_root = document
            .as_ref()
            .and_then(|d| d.get_element_by_id(config::APP_ROOT_ID));
        Self { document, app_root }
    }
}

impl TranslatableDocument for HostDocument {
    fn rewrite_tagged(&mut self, translate: &dyn Fn(&str) -> Option<&'static str>) -> usize {
        let Some(document) = &self.document else {
            return 0;
        };
        let Ok(nodes) = document.query_selector_all("[data-translate]") else {
            return 0;
        };

        let mut rewritten = 0;
        for i in 0..nodes.length() {
            let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            if let Some(root) = &self.app_root {
                if root.contains(Some(element.as_ref())) {
                    continue;
                }
            }
            let text = element
                .get_attribute("data-translate")
                .and_then(|attr| translate(&attr));
            if let Some(text) = text {
                element.set_text_content(Some(text));
                rewritten += 1;
            }
        }
        rewritten
    }

    fn set_lang(&mut self, code: &str) {
        if let Some(html) = self
            .document
            .as_ref()
            .and_then(|d| d.document_element())
        {
            if let Err(e) = html.set_attribute("lang", code) {
                warn!("Could not set document lang: {}", js_message(e));
            }
        }
    }
}

/// Opens `url` in a new tab.
pub fn open_external(url: &str) -> Result<(), BrowserError> {
    window()
        .ok_or(BrowserError::NoWindow)?
        .open_with_url_and_target(url, "_blank")
        .map_err(|_| BrowserError::Open(url.to_string()))?;
    Ok(())
}

pub fn smooth_scroll_to(top: f64) {
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Top offset and height of the element with `id`.
pub fn section_bounds(id: &str) -> Option<(f64, f64)> {
    let element = window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()?;
    Some((element.offset_top() as f64, element.offset_height() as f64))
}

pub fn header_height() -> f64 {
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(".header").ok().flatten())
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
        .map(|e| e.offset_height() as f64)
        .unwrap_or_default()
}
