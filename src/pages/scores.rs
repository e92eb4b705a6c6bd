//! Scores page: per-sport game results behind the auth guard.

use leptos::prelude::*;

use crate::auth::guards::use_require_auth;
use crate::components::nav_bar::NavBar;
use crate::components::score_card::ScoreCard;
use crate::net::api;
use crate::net::types::Sport;

/// Landing page after login. One tab per sport; switching tabs refetches
/// the matching results feed.
#[component]
pub fn ScoresPage() -> impl IntoView {
    use_require_auth();

    let sport = RwSignal::new(Sport::Nba);
    let results = LocalResource::new(move || api::fetch_results(sport.get()));

    view! {
        <div class="scores-page">
            <NavBar/>
            <div class="scores-page__tabs">
                {Sport::all()
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <button
                                class="btn scores-page__tab"
                                class:scores-page__tab--active=move || sport.get() == tab
                                on:click=move |_| sport.set(tab)
                            >
                                {tab.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <Suspense fallback=move || {
                view! { <p class="scores-page__notice">"Loading results..."</p> }
            }>
                {move || {
                    results
                        .get()
                        .map(|games| match games {
                            Some(games) if !games.is_empty() => {
                                view! {
                                    <div class="scores-page__grid">
                                        {games
                                            .into_iter()
                                            .map(|game| view! { <ScoreCard game=game/> })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                    .into_any()
                            }
                            Some(_) => {
                                view! {
                                    <p class="scores-page__notice">"No games in this feed yet."</p>
                                }
                                    .into_any()
                            }
                            None => {
                                view! {
                                    <p class="scores-page__notice scores-page__notice--error">
                                        "Could not load results."
                                    </p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
