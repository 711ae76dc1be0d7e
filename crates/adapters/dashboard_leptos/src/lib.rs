use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

pub mod api;
mod components;
mod pages;

use components::Nav;
use pages::{Charts, Home, NotFound, Stations};

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Nav/>
            <main>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=Home/>
                    <Route path=path!("stations") view=Stations/>
                    <Route path=path!("charts") view=Charts/>
                </Routes>
            </main>
        </Router>
    }
}
