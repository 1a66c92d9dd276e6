//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::pages::{login::LoginPage, register::RegisterPage};
use crate::routes::AppRoute;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// `/` redirects to the login screen; `/login` and `/register` render their
/// pages. There are no guards.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/bankgate.css"/>
        <Title text="Banking App"/>

        <Router>
            <div class="App">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=RootRedirect/>
                    <Route path=StaticSegment(AppRoute::Login.segment()) view=LoginPage/>
                    <Route path=StaticSegment(AppRoute::Register.segment()) view=RegisterPage/>
                </Routes>
            </div>
        </Router>
    }
}

#[component]
fn RootRedirect() -> impl IntoView {
    view! { <Redirect path=AppRoute::Login.path()/> }
}
