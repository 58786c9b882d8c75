//! # game-guess
//!
//! Guess which game is being set up from its play area and the items
//! placed into it.
//!
//! ## Design
//!
//! 1. **Pure core**: `Item`, `Game` and the classifier never fail and
//!    never perform I/O. Only the session boundary returns errors.
//!
//! 2. **Rules as data**: classification is an ordered table of guarded
//!    rules, first match wins. Only golf is built in.
//!
//! 3. **Explicit inputs**: the team roster is passed to the classifier,
//!    never read from global state.
//!
//! ## Classification Timing
//!
//! A game's title is derived once, when the game is created. Items added
//! afterwards do not change it unless [`Game::reclassify`] is called. The
//! interactive session creates the game before any item is entered, so by
//! default it always reports an empty title; set
//! `SessionConfig::reclassify_on_exit` to classify the entered items.
//!
//! ## Modules
//!
//! - `items`: Item value type
//! - `teams`: Team roster reference data
//! - `rules`: Guards, rules and the classifier
//! - `game`: Game aggregate
//! - `config`: Session configuration
//! - `session`: Interactive console dialogue
//! - `error`: Boundary error types

pub mod config;
pub mod error;
pub mod game;
pub mod items;
pub mod rules;
pub mod session;
pub mod teams;

// Re-export commonly used types
pub use crate::config::SessionConfig;
pub use crate::error::{ConfigError, SessionError};
pub use crate::game::{Game, Items};
pub use crate::items::Item;
pub use crate::rules::{
    classify, Classifier, ConditionContext, ConditionEvaluator, Rule, RuleCondition,
};
pub use crate::session::Session;
pub use crate::teams::TeamRoster;
