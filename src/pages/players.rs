//! Players page: NBA roster table plus an admin-only add-player form.
//!
//! DESIGN
//! ======
//! The add form is gated on the advisory `is_admin` flag, so hiding it is a
//! UI convenience only. The backend re-checks the role on `POST /api/player`
//! and a tampered client gets a 403 there, which surfaces through the same
//! info line as any other failure.

#[cfg(test)]
#[path = "players_test.rs"]
mod players_test;

use leptos::prelude::*;

use crate::auth::context::use_auth;
use crate::auth::guards::use_require_auth;
use crate::components::nav_bar::NavBar;
use crate::net::api;
use crate::net::types::NewPlayer;

/// Positions offered in the add-player form.
const POSITIONS: [&str; 5] = [
    "Point Guard",
    "Shooting Guard",
    "Small Forward",
    "Power Forward",
    "Center",
];

/// Validate form fields into a request body. Height and weight are optional;
/// blank entries are omitted rather than sent as empty strings.
fn validate_new_player(
    name: &str,
    team: &str,
    position: &str,
    height: &str,
    weight: &str,
) -> Result<NewPlayer, &'static str> {
    let name = name.trim();
    let team = team.trim();
    if name.len() < 2 {
        return Err("Player name must be at least 2 characters.");
    }
    if team.len() < 2 {
        return Err("Team name must be at least 2 characters.");
    }
    if !POSITIONS.contains(&position) {
        return Err("Pick a position from the list.");
    }
    let optional = |raw: &str| {
        let raw = raw.trim();
        (!raw.is_empty()).then(|| raw.to_owned())
    };
    Ok(NewPlayer {
        name: name.to_owned(),
        team: team.to_owned(),
        position: position.to_owned(),
        height: optional(height),
        weight: optional(weight),
    })
}

#[component]
pub fn PlayersPage() -> impl IntoView {
    use_require_auth();

    let state = use_auth().state;
    let is_admin = move || state.get().is_admin();

    let players = LocalResource::new(|| api::fetch_players());

    let name = RwSignal::new(String::new());
    let team = RwSignal::new(String::new());
    let position = RwSignal::new(POSITIONS[0].to_owned());
    let height = RwSignal::new(String::new());
    let weight = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let player = match validate_new_player(
            &name.get(),
            &team.get(),
            &position.get(),
            &height.get(),
            &weight.get(),
        ) {
            Ok(player) => player,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match api::create_player(&player).await {
                    Ok(created) => {
                        info.set(format!("Added {}.", created.name));
                        name.set(String::new());
                        team.set(String::new());
                        height.set(String::new());
                        weight.set(String::new());
                        players.refetch();
                    }
                    Err(e) => info.set(format!("Could not add player: {e}")),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&player, &players);
        }
    };

    view! {
        <div class="players-page">
            <NavBar/>
            <h2>"Players"</h2>
            <Show when=is_admin>
                <form class="player-form" on:submit=on_submit>
                    <input
                        class="player-form__input"
                        type="text"
                        placeholder="Name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        class="player-form__input"
                        type="text"
                        placeholder="Team"
                        prop:value=move || team.get()
                        on:input=move |ev| team.set(event_target_value(&ev))
                    />
                    <select
                        class="player-form__input"
                        on:change=move |ev| position.set(event_target_value(&ev))
                    >
                        {POSITIONS
                            .into_iter()
                            .map(|label| view! { <option value=label>{label}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                    <input
                        class="player-form__input"
                        type="text"
                        placeholder="Height (optional)"
                        prop:value=move || height.get()
                        on:input=move |ev| height.set(event_target_value(&ev))
                    />
                    <input
                        class="player-form__input"
                        type="text"
                        placeholder="Weight (optional)"
                        prop:value=move || weight.get()
                        on:input=move |ev| weight.set(event_target_value(&ev))
                    />
                    <button class="btn player-form__submit" type="submit">
                        "Add Player"
                    </button>
                </form>
            </Show>
            <Show when=move || !info.get().is_empty()>
                <p class="players-page__info">{move || info.get()}</p>
            </Show>
            <Suspense fallback=move || {
                view! { <p class="players-page__notice">"Loading roster..."</p> }
            }>
                {move || {
                    players
                        .get()
                        .map(|roster| match roster {
                            Some(roster) if !roster.is_empty() => {
                                view! {
                                    <table class="players-table">
                                        <thead>
                                            <tr>
                                                <th>"Name"</th>
                                                <th>"Team"</th>
                                                <th>"Position"</th>
                                                <th>"Height"</th>
                                                <th>"Weight"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {roster
                                                .into_iter()
                                                .map(|player| {
                                                    view! {
                                                        <tr>
                                                            <td>{player.name}</td>
                                                            <td>{player.team}</td>
                                                            <td>{player.position}</td>
                                                            <td>{player.height}</td>
                                                            <td>{player.weight}</td>
                                                        </tr>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </tbody>
                                    </table>
                                }
                                    .into_any()
                            }
                            Some(_) => {
                                view! {
                                    <p class="players-page__notice">"No players on file."</p>
                                }
                                    .into_any()
                            }
                            None => {
                                view! {
                                    <p class="players-page__notice players-page__notice--error">
                                        "Could not load the roster."
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
