//! REST API helpers for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, decorated with the
//! session headers by [`crate::net::request`].
//! Server-side (SSR): stubs returning `None`/error since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so fetch failures
//! degrade page state without crashing hydration. Non-2xx login responses
//! surface the backend's own `{"error": ...}` message when present.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Game, LoginResponse, NewPlayer, Player, Sport, Stadium};
#[cfg(feature = "hydrate")]
use crate::net::request;

#[cfg(any(test, feature = "hydrate"))]
fn results_endpoint(sport: Sport) -> &'static str {
    match sport {
        Sport::Nba => "/api/nba-results",
        Sport::Football => "/api/football-results",
        Sport::Cricket => "/api/cricket-results",
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn login_failed_message(status: u16) -> String {
    format!("login failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn create_player_failed_message(status: u16) -> String {
    format!("create player failed: {status}")
}

/// The results feeds wrap their game list in a `result` envelope.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, serde::Deserialize)]
struct ResultsEnvelope {
    result: Vec<Game>,
}

/// Error body the backend ships with non-2xx responses.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    error: String,
}

/// Authenticate against `POST /api/auth/login`.
///
/// On success the caller receives the token + user pair; persisting it (and
/// refreshing the auth context) is the login page's job.
///
/// # Errors
///
/// Returns the backend's error message on rejected credentials, or a
/// transport/status description otherwise.
pub async fn login(username: &str, password: &str) -> Result<LoginResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "username": username, "password": password });
        let resp = request::post("/api/auth/login")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            if let Ok(body) = resp.json::<ErrorBody>().await {
                return Err(body.error);
            }
            return Err(login_failed_message(status));
        }
        resp.json::<LoginResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err("not available on server".to_owned())
    }
}

/// Fetch the game results feed for `sport`.
/// Returns `None` on any failure or on the server.
pub async fn fetch_results(sport: Sport) -> Option<Vec<Game>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = request::get(results_endpoint(sport)).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        let body: ResultsEnvelope = resp.json().await.ok()?;
        Some(body.result)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = sport;
        None
    }
}

/// Fetch the roster from `GET /api/player-info`.
pub async fn fetch_players() -> Option<Vec<Player>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = request::get("/api/player-info").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<Player>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch stadium information from `GET /api/stadiums`.
pub async fn fetch_stadiums() -> Option<Vec<Stadium>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = request::get("/api/stadiums").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<Stadium>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Create a roster entry via `POST /api/player`. Requires a session; the
/// bearer header comes from the request wrapper.
///
/// # Errors
///
/// Returns the backend's error message (e.g. duplicate name, validation
/// failure) or a transport/status description.
pub async fn create_player(player: &NewPlayer) -> Result<Player, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = request::post("/api/player")
            .json(player)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            if let Ok(body) = resp.json::<ErrorBody>().await {
                return Err(body.error);
            }
            return Err(create_player_failed_message(status));
        }
        resp.json::<Player>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = player;
        Err("not available on server".to_owned())
    }
}
