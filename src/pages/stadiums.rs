//! Stadiums page: venue cards behind the auth guard.

use leptos::prelude::*;

use crate::auth::guards::use_require_auth;
use crate::components::nav_bar::NavBar;
use crate::components::stadium_card::StadiumCard;
use crate::net::api;

#[component]
pub fn StadiumsPage() -> impl IntoView {
    use_require_auth();

    let stadiums = LocalResource::new(|| api::fetch_stadiums());

    view! {
        <div class="stadiums-page">
            <NavBar/>
            <h2>"Stadiums"</h2>
            <Suspense fallback=move || {
                view! { <p class="stadiums-page__notice">"Loading stadiums..."</p> }
            }>
                {move || {
                    stadiums
                        .get()
                        .map(|venues| match venues {
                            Some(venues) if !venues.is_empty() => {
                                view! {
                                    <div class="stadiums-page__grid">
                                        {venues
                                            .into_iter()
                                            .map(|stadium| view! { <StadiumCard stadium=stadium/> })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                    .into_any()
                            }
                            Some(_) => {
                                view! {
                                    <p class="stadiums-page__notice">"No stadiums on file."</p>
                                }
                                    .into_any()
                            }
                            None => {
                                view! {
                                    <p class="stadiums-page__notice stadiums-page__notice--error">
                                        "Could not load stadiums."
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
