//! Interactive session controller.
//!
//! Drives the console dialogue: asks for an area, builds the game, then
//! collects items until the exit word or end of input, and finally
//! reports the game's title. Generic over the reader and writer so tests
//! can script the dialogue.

mod controller;

pub use controller::{item_prompt, Session, AREA_PROMPT, SHAPE_PROMPT};
