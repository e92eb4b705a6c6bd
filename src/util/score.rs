//! Final-score parsing for result feed strings.
//!
//! Feeds render finals as `"<home> - <away>"` (e.g. `"112 - 108"`). Parsing
//! them back into numbers lets the score cards highlight the winning side.
//! Formats that do not fit (cricket innings notation, scheduled games with no
//! score yet) simply yield no score line and the card shows the raw string.

#[cfg(test)]
#[path = "score_test.rs"]
mod score_test;

/// A final score split into home and away points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreLine {
    pub home: u32,
    pub away: u32,
}

/// The side that won a parsed score line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Home,
    Away,
}

impl ScoreLine {
    /// The winning side, or `None` for a tie.
    pub fn winner(self) -> Option<Side> {
        match self.home.cmp(&self.away) {
            std::cmp::Ordering::Greater => Some(Side::Home),
            std::cmp::Ordering::Less => Some(Side::Away),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Parse a feed result string such as `"112 - 108"`; home side first.
pub fn parse_final_result(raw: &str) -> Option<ScoreLine> {
    let (home, away) = raw.split_once('-')?;
    let home = home.trim().parse().ok()?;
    let away = away.trim().parse().ok()?;
    Some(ScoreLine { home, away })
}
