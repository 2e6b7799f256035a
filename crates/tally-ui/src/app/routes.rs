//! Routing definitions for the Tally UI.
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Home,
    #[at("/dashboard/invoices")]
    Invoices,
    #[at("/dashboard/customers")]
    Customers,
    #[not_found]
    #[at("/404")]
    NotFound,
}
