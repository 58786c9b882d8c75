//! Ordered decision table of game rules.
//!
//! Each `Rule` pairs a title with a chain of guards. The classifier walks
//! its rules top to bottom and returns the title of the first rule whose
//! guards all hold. Guards inside a rule short-circuit on the first
//! failure.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::game::Game;
use crate::teams::TeamRoster;

use super::condition::{ConditionContext, ConditionEvaluator, RuleCondition};

/// Item title of the ball.
pub const BALL: &str = "м'яч";
/// Item title of the wooden mallet.
pub const WOODEN_MALLET: &str = "дерев'яний молот";
/// Shape a golf ball must have.
pub const ROUND: &str = "круглий";
/// Area golf is played in (compared ignoring case).
pub const INDOOR: &str = "приміщення";
/// Title produced by the golf rule.
pub const GOLF: &str = "гольф";

/// A titled chain of guards.
///
/// ## Example
///
/// ```
/// use game_guess::rules::{Rule, RuleCondition};
///
/// let rule = Rule::new("теніс")
///     .with_condition(RuleCondition::has_item("ракетка"))
///     .with_condition(RuleCondition::has_item("сітка"));
///
/// assert_eq!(rule.conditions().len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    title: String,
    conditions: SmallVec<[RuleCondition; 5]>,
}

impl Rule {
    /// Create a rule with no guards (matches everything).
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            conditions: SmallVec::new(),
        }
    }

    /// Append a guard (builder pattern).
    #[must_use]
    pub fn with_condition(mut self, condition: RuleCondition) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Title assigned when every guard passes.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Guards, in the order they are checked.
    #[must_use]
    pub fn conditions(&self) -> &[RuleCondition] {
        &self.conditions
    }

    /// The golf rule.
    ///
    /// A round ball, an indoor area, no wooden mallet, and anything other
    /// than exactly two teams of more than two members.
    #[must_use]
    pub fn golf() -> Self {
        Self::new(GOLF)
            .with_condition(RuleCondition::has_item(BALL))
            .with_condition(RuleCondition::large_team_count(2, 2).negate())
            .with_condition(RuleCondition::area_is(INDOOR))
            .with_condition(RuleCondition::item_shape(BALL, ROUND))
            .with_condition(RuleCondition::lacks_item(WOODEN_MALLET))
    }

    /// Check every guard, stopping at the first that fails.
    #[must_use]
    pub fn matches(&self, ctx: &ConditionContext) -> bool {
        for condition in &self.conditions {
            if !ConditionEvaluator::evaluate(condition, ctx) {
                debug!(rule = %self.title, guard = %condition, "guard failed");
                return false;
            }
        }
        true
    }
}

/// Ordered rule table. First full match wins.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Classifier {
    rules: Vec<Rule>,
}

impl Classifier {
    /// Create a classifier with no rules. Classifies nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in table: golf only.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_rules([Rule::golf()])
    }

    /// Build from rules, keeping their order.
    #[must_use]
    pub fn from_rules(rules: impl IntoIterator<Item = Rule>) -> Self {
        Self {
            rules: rules.into_iter().collect(),
        }
    }

    /// Append a rule after the existing ones (builder pattern).
    #[must_use]
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.push(rule);
        self
    }

    /// Append a rule after the existing ones.
    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Title of the first rule the game satisfies, if any.
    #[must_use]
    pub fn classify(&self, game: &Game, roster: &TeamRoster) -> Option<&str> {
        let ctx = ConditionContext::new(game, roster);
        let title = self
            .rules
            .iter()
            .find(|rule| rule.matches(&ctx))
            .map(Rule::title);

        match title {
            Some(title) => debug!(title, "game classified"),
            None => debug!(rules = self.rules.len(), "no rule matched"),
        }
        title
    }
}

/// Classify a game with the built-in table.
///
/// Pure: reads the game and roster, changes nothing.
///
/// ```
/// use game_guess::game::Game;
/// use game_guess::items::Item;
/// use game_guess::rules::classify;
/// use game_guess::teams::TeamRoster;
///
/// let game = Game::new("Приміщення", [Item::new("м'яч", "круглий")]);
/// assert_eq!(classify(&game, &TeamRoster::reference()).as_deref(), Some("гольф"));
/// ```
#[must_use]
pub fn classify(game: &Game, roster: &TeamRoster) -> Option<String> {
    Classifier::standard()
        .classify(game, roster)
        .map(str::to_owned)
}
