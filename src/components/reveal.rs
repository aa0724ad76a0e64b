use js_sys::Array;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Returns a node ref to attach to an element and whether that element has
/// scrolled into view. Once revealed it stays revealed.
#[hook]
pub fn use_reveal() -> (NodeRef, bool) {
    let node = use_node_ref();
    let revealed = use_state(|| false);

    {
        let node = node.clone();
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let observer = node
                    .cast::<Element>()
                    .and_then(|element| observe(&element, revealed));
                move || {
                    if let Some((observer, _callback)) = observer {
                        observer.disconnect();
                    }
                }
            },
            (),
        );
    }

    (node, *revealed)
}

fn observe(
    element: &Element,
    revealed: UseStateHandle<bool>,
) -> Option<(IntersectionObserver, ObserverCallback)> {
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        let visible = entries
            .iter()
            .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
            .any(|entry| entry.is_intersecting());
        if visible {
            revealed.set(true);
            observer.disconnect();
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config::REVEAL_THRESHOLD));
    options.set_root_margin(config::REVEAL_ROOT_MARGIN);

    let observer = match IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    ) {
        Ok(observer) => observer,
        Err(e) => {
            warn!("IntersectionObserver unavailable: {:?}", e);
            return None;
        }
    };
    observer.observe(element);
    Some((observer, callback))
}

/// Class list for a revealable card.
pub fn reveal_classes(base: &'static str, revealed: bool) -> Classes {
    classes!(base, "reveal", revealed.then(|| "active"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_only_once_revealed() {
        let hidden = reveal_classes("offer-card", false);
        assert!(hidden.contains("offer-card"));
        assert!(hidden.contains("reveal"));
        assert!(!hidden.contains("active"));

        assert!(reveal_classes("offer-card", true).contains("active"));
    }
}
