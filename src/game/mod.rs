//! The game being set up.
//!
//! A `Game` collects an area and a set of items. Its title is derived
//! once, when the game is built, by running a classifier over whatever
//! items existed at that moment. Later mutations leave the title alone;
//! call [`Game::reclassify`] to derive it again.

mod state;

pub use state::{Game, Items};
