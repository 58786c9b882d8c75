//! Game aggregate: area, items, derived title.

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::items::Item;
use crate::rules::Classifier;
use crate::teams::TeamRoster;

/// Items of a game, keyed by item title.
pub type Items = FxHashMap<String, Item>;

/// One game setup.
///
/// ## Example
///
/// ```
/// use game_guess::game::Game;
/// use game_guess::items::Item;
///
/// let mut game = Game::new("Приміщення", [Item::new("м'яч", "круглий")]);
/// assert_eq!(game.title(), "гольф");
///
/// // Later items do not change the title.
/// game.add_item(Item::new("дерев'яний молот", "довгий"));
/// assert_eq!(game.title(), "гольф");
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    area: String,
    items: Items,
    title: String,
}

impl Game {
    /// Create a game and classify it with the built-in rules and the
    /// reference roster.
    #[must_use]
    pub fn new(area: impl Into<String>, items: impl IntoIterator<Item = Item>) -> Self {
        Self::with_classifier(area, items, &Classifier::standard(), &TeamRoster::reference())
    }

    /// Create a game with no items. Its title is always empty.
    #[must_use]
    pub fn with_area(area: impl Into<String>) -> Self {
        Self::new(area, std::iter::empty())
    }

    /// Create a game and classify it with the given rules and roster.
    #[must_use]
    pub fn with_classifier(
        area: impl Into<String>,
        items: impl IntoIterator<Item = Item>,
        classifier: &Classifier,
        roster: &TeamRoster,
    ) -> Self {
        let mut game = Self {
            area: area.into(),
            items: Items::default(),
            title: String::new(),
        };
        game.add_items(items);
        game.reclassify(classifier, roster);
        game
    }

    #[must_use]
    pub fn area(&self) -> &str {
        &self.area
    }

    /// All items, keyed by title.
    #[must_use]
    pub fn items(&self) -> &Items {
        &self.items
    }

    /// Look up an item by title.
    #[must_use]
    pub fn item(&self, title: &str) -> Option<&Item> {
        self.items.get(title)
    }

    /// Derived title. Empty when no rule matched.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn is_classified(&self) -> bool {
        !self.title.is_empty()
    }

    /// Insert an item, replacing any item with the same title.
    ///
    /// Does not touch the title.
    pub fn add_item(&mut self, item: Item) {
        trace!(item = %item, "adding item");
        self.items.insert(item.title().to_owned(), item);
    }

    /// Replace all items with the given ones.
    ///
    /// Later items win over earlier ones with the same title. Does not
    /// touch the title.
    pub fn add_items(&mut self, items: impl IntoIterator<Item = Item>) {
        self.items = items
            .into_iter()
            .map(|item| (item.title().to_owned(), item))
            .collect();
        trace!(count = self.items.len(), "replaced items");
    }

    /// Run the classifier over the current items and store the result.
    ///
    /// Returns the new title.
    pub fn reclassify(&mut self, classifier: &Classifier, roster: &TeamRoster) -> &str {
        self.title = classifier
            .classify(self, roster)
            .map(str::to_owned)
            .unwrap_or_default();
        &self.title
    }
}
