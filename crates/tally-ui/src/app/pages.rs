//! Dashboard pages hosting the search box.

use crate::components::Search;
use tally_search::{QueryState, SearchConfig, SearchParams};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ListPageProps {
    pub title: AttrValue,
    pub placeholder: AttrValue,
}

/// Search-filtered list page; the summary follows the URL while the input does not.
#[function_component(ListPage)]
pub(crate) fn list_page(props: &ListPageProps) -> Html {
    let config = SearchConfig::default();
    let params = use_location()
        .map(|location| SearchParams::read(&QueryState::parse(location.query_str()), &config))
        .unwrap_or_default();
    let summary = params.term.as_ref().map_or_else(
        || format!("All results, page {}", params.page),
        |term| format!("Results for \u{201c}{term}\u{201d}, page {}", params.page),
    );

    html! {
        <section class="w-full">
            <h1 class="text-2xl">{props.title.clone()}</h1>
            <div class="mt-4 flex items-center justify-between gap-2 md:mt-8">
                <Search placeholder={props.placeholder.clone()} config={config} />
            </div>
            <p class="mt-6 text-sm text-gray-500" aria-live="polite">{summary}</p>
        </section>
    }
}
