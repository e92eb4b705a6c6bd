//! Card component for a single game result.

use leptos::prelude::*;

use crate::net::types::Game;
use crate::util::score::{Side, parse_final_result};

/// One game from a results feed: away team, final score, home team.
/// The winning side (when the final parses numerically) gets a highlight
/// class; otherwise the raw result string is shown as-is.
#[component]
pub fn ScoreCard(game: Game) -> impl IntoView {
    let winner = parse_final_result(&game.event_final_result).and_then(|line| line.winner());
    let home_won = winner == Some(Side::Home);
    let away_won = winner == Some(Side::Away);

    view! {
        <div class="score-card">
            <div class="score-card__team" class:score-card__team--winner=away_won>
                {game
                    .event_away_team_logo
                    .map(|src| view! { <img class="score-card__logo" src=src alt=""/> })}
                <span class="score-card__name">{game.event_away_team}</span>
            </div>
            <div class="score-card__center">
                <span class="score-card__final">{game.event_final_result}</span>
                <span class="score-card__status">{game.event_status}</span>
                <span class="score-card__date">{game.event_date}</span>
            </div>
            <div class="score-card__team" class:score-card__team--winner=home_won>
                {game
                    .event_home_team_logo
                    .map(|src| view! { <img class="score-card__logo" src=src alt=""/> })}
                <span class="score-card__name">{game.event_home_team}</span>
            </div>
        </div>
    }
}
