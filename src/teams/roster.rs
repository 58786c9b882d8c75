//! Team roster: team name to member count.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Mapping from team name to member count.
///
/// Keys are unique; iteration order is unspecified.
///
/// ## Example
///
/// ```
/// use game_guess::teams::TeamRoster;
///
/// let roster = TeamRoster::new()
///     .with_team("a", 5)
///     .with_team("b", 1);
///
/// assert_eq!(roster.count_larger_than(2), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamRoster {
    teams: FxHashMap<String, u32>,
}

impl TeamRoster {
    /// Create an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The fixed roster used when a session is not configured otherwise.
    #[must_use]
    pub fn reference() -> Self {
        Self::new()
            .with_team("team1", 1)
            .with_team("team2", 10)
            .with_team("team3", 20)
            .with_team("team4", 7)
    }

    /// Add or replace a team (builder pattern).
    #[must_use]
    pub fn with_team(mut self, name: impl Into<String>, members: u32) -> Self {
        self.set(name, members);
        self
    }

    /// Add or replace a team.
    pub fn set(&mut self, name: impl Into<String>, members: u32) {
        self.teams.insert(name.into(), members);
    }

    /// Member count for a team.
    #[must_use]
    pub fn members(&self, name: &str) -> Option<u32> {
        self.teams.get(name).copied()
    }

    /// Count teams with strictly more than `min_members` members.
    #[must_use]
    pub fn count_larger_than(&self, min_members: u32) -> usize {
        self.teams.values().filter(|&&m| m > min_members).count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.teams.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Iterate over `(name, members)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.teams.iter().map(|(name, &members)| (name.as_str(), members))
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for TeamRoster {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        Self {
            teams: iter.into_iter().map(|(name, m)| (name.into(), m)).collect(),
        }
    }
}
