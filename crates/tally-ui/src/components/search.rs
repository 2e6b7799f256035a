//! Search box that mirrors its value into the `query` URL parameter.
//!
//! # Design
//! - Seed the input once from the URL and keep local state for what the user types,
//!   so re-renders re-apply the typed text instead of the seed.
//! - Check for a router through the navigator context only; location changes do not
//!   re-render this component.
//! - Route keystrokes through a debounced [`SearchBox`] that replaces, rather than
//!   pushes, the history entry.
//! - Cancel any pending update on unmount.

use crate::services::{BrowserNavigation, GlooTimer};
use gloo::console;
use tally_search::{SearchBox, SearchConfig};
use yew::prelude::*;
use yew_router::prelude::*;

const INPUT_ID: &str = "search";

#[derive(Properties, PartialEq)]
pub(crate) struct SearchProps {
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub config: SearchConfig,
}

#[function_component(Search)]
pub(crate) fn search(props: &SearchProps) -> Html {
    let outside_router = use_navigator().is_none();
    use_effect_with_deps(
        move |outside_router| {
            if *outside_router {
                console::error!("search box rendered outside a router");
            }
            || ()
        },
        outside_router,
    );

    let search_box = {
        let config = props.config.clone();
        use_memo(
            move |_| SearchBox::new(config, BrowserNavigation::new(), GlooTimer),
            (),
        )
    };

    let value_state = {
        let search_box = search_box.clone();
        use_state(move || search_box.value())
    };

    {
        let search_box = search_box.clone();
        use_effect_with_deps(move |_| move || search_box.teardown(), ());
    }

    let oninput = {
        let search_box = search_box.clone();
        let value_state = value_state.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                let next = input.value();
                value_state.set(next.clone());
                search_box.input(next);
            }
        })
    };

    html! {
        <div class="relative flex flex-1 flex-shrink-0">
            <label for={INPUT_ID} class="sr-only">
                {search_box.config().label.clone()}
            </label>
            <input
                id={INPUT_ID}
                class="peer block w-full rounded-md border border-gray-200 py-[9px] pl-10 text-sm outline-2 placeholder:text-gray-500"
                placeholder={props.placeholder.clone()}
                value={AttrValue::from((*value_state).clone())}
                {oninput}
            />
            <span
                class="iconify lucide--search absolute left-3 top-1/2 h-[18px] w-[18px] -translate-y-1/2 text-gray-500 peer-focus:text-gray-900"
                aria-hidden="true"
            ></span>
        </div>
    }
}
