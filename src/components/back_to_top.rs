use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::browser;
use crate::scroll;

#[function_component(BackToTop)]
pub fn back_to_top() -> Html {
    let (_, scroll_y) = use_window_scroll();

    let onclick = Callback::from(|_: MouseEvent| browser::smooth_scroll_to(0.0));

    html! {
        <button
            id="back-to-top"
            class={classes!("back-to-top", scroll::back_to_top_visible(scroll_y).then(|| "show"))}
            aria-label="Back to top"
            onclick={onclick}
        >
            {"↑"}
        </button>
    }
}
