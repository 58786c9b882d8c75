//! Classification rules.
//!
//! A [`Classifier`] is an ordered table of [`Rule`]s. Each rule is a
//! title plus a chain of [`RuleCondition`] guards over the game and the
//! team roster. The first rule whose guards all pass names the game.
//!
//! Rules are plain data and serialize with serde, so the table can be
//! extended from configuration without touching the classifier.
//!
//! ## Example Usage
//!
//! ```
//! use game_guess::game::Game;
//! use game_guess::items::Item;
//! use game_guess::rules::{Classifier, Rule, RuleCondition};
//! use game_guess::teams::TeamRoster;
//!
//! let classifier = Classifier::standard()
//!     .with_rule(Rule::new("крокет")
//!         .with_condition(RuleCondition::has_item("дерев'яний молот"))
//!         .with_condition(RuleCondition::has_item("м'яч")));
//!
//! let game = Game::with_classifier(
//!     "Приміщення",
//!     [Item::new("м'яч", "круглий"), Item::new("дерев'яний молот", "довгий")],
//!     &classifier,
//!     &TeamRoster::reference(),
//! );
//!
//! // Golf is ruled out by the mallet, so the next rule wins.
//! assert_eq!(game.title(), "крокет");
//! ```

mod classifier;
mod condition;

pub use classifier::{classify, Classifier, Rule, BALL, GOLF, INDOOR, ROUND, WOODEN_MALLET};
pub use condition::{ConditionContext, ConditionEvaluator, RuleCondition};
