//! Card component for a stadium entry.

use leptos::prelude::*;

use crate::net::types::Stadium;

#[component]
pub fn StadiumCard(stadium: Stadium) -> impl IntoView {
    view! {
        <div class="stadium-card">
            <span class="stadium-card__name">{stadium.name}</span>
            <span class="stadium-card__team">{stadium.team}</span>
            <span class="stadium-card__city">{stadium.city}</span>
            <span class="stadium-card__capacity">{format!("Capacity: {}", stadium.capacity)}</span>
        </div>
    }
}
