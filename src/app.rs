//! Root application component with routing and the auth context provider.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::auth::context::AuthProvider;
use crate::pages::{
    login::LoginPage, players::PlayersPage, scores::ScoresPage, stadiums::StadiumsPage,
};

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
/// Wraps the router in [`AuthProvider`] so every page and guard below it can
/// reach the shared session state through context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/courtside.css"/>
        <Title text="Courtside"/>

        <AuthProvider>
            <Router>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("") view=ScoresPage/>
                    <Route path=StaticSegment("players") view=PlayersPage/>
                    <Route path=StaticSegment("stadiums") view=StadiumsPage/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}
