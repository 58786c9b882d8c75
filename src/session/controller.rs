//! Line-driven session over any `BufRead`/`Write` pair.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::config::SessionConfig;
use crate::error::SessionError;
use crate::game::Game;
use crate::items::Item;

/// Prompt for the game area.
pub const AREA_PROMPT: &str = "Enter the game area: ";
/// Prompt for an item shape.
pub const SHAPE_PROMPT: &str = "Enter item shape: ";

/// Prompt for an item title, naming the word that ends entry.
#[must_use]
pub fn item_prompt(exit_word: &str) -> String {
    format!("Enter item title (or '{}' to quit): ", exit_word)
}

/// One interactive session.
///
/// ## Example
///
/// ```
/// use game_guess::config::SessionConfig;
/// use game_guess::session::Session;
///
/// let input = "Приміщення\nм'яч\nкруглий\nexit\n".as_bytes();
/// let mut output = Vec::new();
///
/// let game = Session::new(input, &mut output, SessionConfig::default())
///     .run()
///     .unwrap();
///
/// assert_eq!(game.items().len(), 1);
/// // Classified before the ball was entered.
/// assert_eq!(game.title(), "");
/// ```
pub struct Session<R, W> {
    input: R,
    output: W,
    config: SessionConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session reading from `input` and writing to `output`.
    pub fn new(input: R, output: W, config: SessionConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Run the dialogue to completion and return the final game.
    pub fn run(mut self) -> Result<Game, SessionError> {
        writeln!(self.output, "Welcome!")?;
        info!("session started");

        self.prompt(AREA_PROMPT)?;
        let area = self.read_line()?.unwrap_or_default();
        let mut game = Game::with_classifier(
            area,
            std::iter::empty(),
            &self.config.rules,
            &self.config.roster,
        );
        debug!(area = game.area(), title = game.title(), "game created");

        while let Some(item) = self.read_item()? {
            writeln!(
                self.output,
                "Item '{}' with shape '{}' added to the game.",
                item.title(),
                item.shape()
            )?;
            game.add_item(item);
        }

        if self.config.reclassify_on_exit {
            game.reclassify(&self.config.rules, &self.config.roster);
        }

        writeln!(self.output, "Game title: {}", game.title())?;
        writeln!(self.output, "Thank you for using program!")?;
        self.output.flush()?;
        info!(items = game.items().len(), title = game.title(), "session finished");

        Ok(game)
    }

    /// Ask for one item. `None` once the user quits or input ends.
    fn read_item(&mut self) -> Result<Option<Item>, SessionError> {
        let prompt = item_prompt(&self.config.exit_word);
        self.prompt(&prompt)?;

        let Some(title) = self.read_line()? else {
            return Ok(None);
        };
        if self.config.is_exit(&title) {
            return Ok(None);
        }

        self.prompt(SHAPE_PROMPT)?;
        let Some(shape) = self.read_line()? else {
            debug!(%title, "input ended before shape");
            return Ok(None);
        };

        Ok(Some(Item::new(title, shape)))
    }

    fn prompt(&mut self, text: &str) -> Result<(), SessionError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    /// Read one line without its terminator. `None` at end of input.
    ///
    /// Invalid UTF-8 is replaced with U+FFFD instead of failing.
    fn read_line(&mut self) -> Result<Option<String>, SessionError> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
    }
}
