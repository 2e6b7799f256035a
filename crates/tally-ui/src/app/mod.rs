use crate::app::pages::ListPage;
pub(crate) use routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

mod pages;
mod routes;

#[function_component(TallyApp)]
pub(crate) fn tally_app() -> Html {
    html! {
        <BrowserRouter>
            <main class="flex min-h-screen flex-col p-6">
                <Switch<Route> render={move |route| {
                    match route {
                        Route::Home => html! { <Redirect<Route> to={Route::Invoices} /> },
                        Route::Invoices => html! {
                            <ListPage key="invoices" title="Invoices" placeholder="Search invoices..." />
                        },
                        Route::Customers => html! {
                            <ListPage key="customers" title="Customers" placeholder="Search customers..." />
                        },
                        Route::NotFound => html! {
                            <p class="text-gray-500">{"Not found"}</p>
                        },
                    }
                }} />
            </main>
        </BrowserRouter>
    }
}

/// Mount the Tally app on `#root`, or on `<body>` when no root element exists.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<TallyApp>::with_root(root).render();
    } else {
        yew::Renderer::<TallyApp>::new().render();
    }
}
