//! Wire DTOs for the backend REST API.
//!
//! DESIGN
//! ======
//! These types mirror the backend JSON payloads field-for-field so serde can
//! decode responses without adapter glue. Field names that look odd in Rust
//! (`event_away_team`, ...) are the backend's own.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Authorization role carried inside the stored user record.
///
/// Client-side role checks derived from this value are advisory only: the
/// role comes from client-controlled storage with no signature verification.
/// Real enforcement happens on the server.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

/// The authenticated user as returned by `POST /api/auth/login` and persisted
/// alongside the session token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: i64,
    /// Login / display name.
    pub username: String,
    /// Authorization role (`"admin"` or `"user"` on the wire).
    pub role: Role,
}

/// Successful login payload: a bearer token plus the matching user record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Opaque JWT; the client never inspects or validates it.
    pub access_token: String,
    pub user: User,
}

/// Sports with a results feed on the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Sport {
    #[default]
    Nba,
    Football,
    Cricket,
}

impl Sport {
    /// Tab label shown on the scores page.
    pub fn label(self) -> &'static str {
        match self {
            Self::Nba => "NBA",
            Self::Football => "Football",
            Self::Cricket => "Cricket",
        }
    }

    /// All sports in display order.
    pub fn all() -> [Self; 3] {
        [Self::Nba, Self::Football, Self::Cricket]
    }
}

/// A finished (or scheduled) game from one of the results feeds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// Unique game identifier.
    pub id: String,
    pub event_away_team: String,
    pub event_home_team: String,
    /// Away team logo URL, when the feed provides one.
    #[serde(default)]
    pub event_away_team_logo: Option<String>,
    /// Home team logo URL, when the feed provides one.
    #[serde(default)]
    pub event_home_team_logo: Option<String>,
    /// Final score rendered by the feed, e.g. `"112 - 108"` (home first).
    pub event_final_result: String,
    /// ISO 8601 start date.
    pub event_date: String,
    /// Feed status string, e.g. `"Finished"`.
    pub event_status: String,
}

/// A roster entry from `GET /api/player-info`.
///
/// The backend substitutes `"N/A"` for missing height/weight, so these stay
/// plain strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub team: String,
    pub weight: String,
    pub height: String,
    pub position: String,
}

/// Request body for `POST /api/player` (admin form).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPlayer {
    pub name: String,
    pub position: String,
    pub team: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
}

/// A stadium entry from `GET /api/stadiums`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stadium {
    pub id: i64,
    pub name: String,
    /// Home team playing at this stadium.
    pub team: String,
    pub city: String,
    /// Seating capacity.
    pub capacity: i64,
}
