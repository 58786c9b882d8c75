//! Item value type.

use serde::{Deserialize, Serialize};

/// A named physical object with a shape.
///
/// Neither field is validated: any string is accepted for the shape,
/// and rejecting empty titles is left to whoever collects the input.
///
/// ## Example
///
/// ```
/// use game_guess::items::Item;
///
/// let ball = Item::new("м'яч", "круглий");
/// assert_eq!(ball.title(), "м'яч");
/// assert_eq!(ball.shape(), "круглий");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    title: String,
    shape: String,
}

impl Item {
    /// Create a new item.
    #[must_use]
    pub fn new(title: impl Into<String>, shape: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            shape: shape.into(),
        }
    }

    /// Item title. Used as the key inside a game.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn shape(&self) -> &str {
        &self.shape
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' ({})", self.title, self.shape)
    }
}
