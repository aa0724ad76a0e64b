use log::{info, warn};
use web_sys::window;
use yew::prelude::*;

mod browser;
mod config;
mod scroll;
mod i18n {
    pub mod context;
    pub mod locale;
    pub mod translations;
}
mod consultation {
    pub mod booking;
    pub mod flow;
    pub mod message;
    pub mod request;
}
mod components {
    pub mod back_to_top;
    pub mod nav;
    pub mod notification;
    pub mod reveal;
}
mod pages {
    pub mod contact;
    pub mod home;
}

use browser::{HostDocument, LocalStorage};
use components::{
    back_to_top::BackToTop,
    nav::Nav,
    notification::{NotificationAction, NotificationCenter, NotificationHost, Notifier},
};
use i18n::{context::I18n, locale::LocaleController, translations};
use pages::home::Home;

#[function_component]
fn App() -> Html {
    let notifications = use_reducer(NotificationCenter::default);
    let controller = use_mut_ref(|| LocaleController::new(LocalStorage));
    let locale = use_state(|| controller.borrow().current_locale());

    let notifier = {
        let dispatcher = notifications.dispatcher();
        (*use_memo(
            move |_| Notifier::new(Callback::from(move |action| dispatcher.dispatch(action))),
            (),
        ))
        .clone()
    };

    // Bring the host markup in line with the stored locale on first render.
    {
        let controller = controller.clone();
        let locale = *locale;
        use_effect_with_deps(
            move |_| {
                controller.borrow_mut().apply_locale(locale, &mut HostDocument::current());
                || ()
            },
            (),
        );
    }

    let on_toggle = {
        let controller = controller.clone();
        let locale = locale.clone();
        let notifier = notifier.clone();
        use_callback(
            move |_: (), _| {
                let mut sink = notifier.clone();
                let next = controller
                    .borrow_mut()
                    .toggle_locale(&mut HostDocument::current(), &mut sink);
                info!("Locale switched to {}", next.code());
                locale.set(next);
            },
            (),
        )
    };

    let on_dismiss = {
        let dispatcher = notifications.dispatcher();
        use_callback(move |id: u64, _| dispatcher.dispatch(NotificationAction::Dismiss(id)), ())
    };

    let i18n = I18n {
        locale: *locale,
        on_toggle,
    };

    html! {
        <ContextProvider<Notifier> context={notifier}>
            <ContextProvider<I18n> context={i18n}>
                <Nav />
                <Home />
                <BackToTop />
                <NotificationHost
                    notification={notifications.current().cloned()}
                    on_dismiss={on_dismiss}
                />
            </ContextProvider<I18n>>
        </ContextProvider<Notifier>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    if let Err(errors) = translations::check_completeness() {
        for error in errors {
            warn!("{}", error);
        }
    }

    let root = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(config::APP_ROOT_ID))
        .expect("index.html provides the #app mount point");

    info!("Starting application");
    yew::Renderer::<App>::with_root(root).render();
}
