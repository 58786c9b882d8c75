//! Session configuration.
//!
//! Everything classification depends on besides the user's input: the
//! team roster, the rule table, and how the session behaves. Every field
//! has a default, so a configuration file only needs the fields it
//! changes.
//!
//! ```json
//! {
//!   "roster": { "team1": 1, "team2": 10 },
//!   "exit_word": "вихід",
//!   "reclassify_on_exit": true
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::rules::Classifier;
use crate::teams::TeamRoster;

/// Word that ends item entry unless configured otherwise.
pub const DEFAULT_EXIT_WORD: &str = "exit";

/// Configuration for one interactive session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Team reference data passed to the classifier.
    pub roster: TeamRoster,

    /// Rule table, first match wins.
    pub rules: Classifier,

    /// Entering this word as an item title (any case) ends the session.
    pub exit_word: String,

    /// Classify again after item entry ends.
    ///
    /// Off by default: the title is then the one derived when the game
    /// was created, before any item was entered.
    pub reclassify_on_exit: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            roster: TeamRoster::reference(),
            rules: Classifier::standard(),
            exit_word: DEFAULT_EXIT_WORD.to_string(),
            reclassify_on_exit: false,
        }
    }
}

impl SessionConfig {
    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Set the exit word (builder pattern).
    #[must_use]
    pub fn with_exit_word(mut self, word: impl Into<String>) -> Self {
        self.exit_word = word.into();
        self
    }

    /// Enable or disable classifying again at exit (builder pattern).
    #[must_use]
    pub fn with_reclassify_on_exit(mut self, enabled: bool) -> Self {
        self.reclassify_on_exit = enabled;
        self
    }

    /// Replace the roster (builder pattern).
    #[must_use]
    pub fn with_roster(mut self, roster: TeamRoster) -> Self {
        self.roster = roster;
        self
    }

    /// Whether a title line ends item entry.
    #[must_use]
    pub fn is_exit(&self, line: &str) -> bool {
        line.to_lowercase() == self.exit_word.to_lowercase()
    }
}
