//! Rule conditions (guards).
//!
//! A condition is one test over the game being classified and the team
//! roster. Rules chain conditions together; the first one that fails
//! stops the rule.

use serde::{Deserialize, Serialize};

use crate::game::Game;
use crate::teams::TeamRoster;

/// A guard that must hold for a rule to match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleCondition {
    // === Item Filters ===

    /// The game must contain an item with this title.
    HasItem(String),

    /// The game must not contain an item with this title.
    LacksItem(String),

    /// The item must be present and have exactly this shape.
    ItemShape { item: String, shape: String },

    // === Area Filters ===

    /// The area must match, ignoring case.
    AreaIs(String),

    // === Roster Filters ===

    /// Exactly `count` teams have more than `min_members` members.
    LargeTeamCount { min_members: u32, count: usize },

    // === Combinators ===

    /// All conditions must be true.
    All(Vec<RuleCondition>),

    /// At least one condition must be true.
    Any(Vec<RuleCondition>),

    /// Condition must be false.
    Not(Box<RuleCondition>),

    // === Special ===

    /// Always matches.
    Always,

    /// Never matches (disabled rule).
    Never,
}

impl RuleCondition {
    /// Create an item presence condition.
    pub fn has_item(title: impl Into<String>) -> Self {
        Self::HasItem(title.into())
    }

    /// Create an item absence condition.
    pub fn lacks_item(title: impl Into<String>) -> Self {
        Self::LacksItem(title.into())
    }

    /// Create an item shape condition.
    pub fn item_shape(item: impl Into<String>, shape: impl Into<String>) -> Self {
        Self::ItemShape {
            item: item.into(),
            shape: shape.into(),
        }
    }

    /// Create a case-insensitive area condition.
    pub fn area_is(area: impl Into<String>) -> Self {
        Self::AreaIs(area.into())
    }

    /// Create a large-team count condition.
    pub fn large_team_count(min_members: u32, count: usize) -> Self {
        Self::LargeTeamCount { min_members, count }
    }

    /// Create an AND condition.
    pub fn all(conditions: impl IntoIterator<Item = RuleCondition>) -> Self {
        Self::All(conditions.into_iter().collect())
    }

    /// Create an OR condition.
    pub fn any(conditions: impl IntoIterator<Item = RuleCondition>) -> Self {
        Self::Any(conditions.into_iter().collect())
    }

    /// Negate this condition.
    pub fn negate(self) -> Self {
        Self::Not(Box::new(self))
    }
}

impl std::fmt::Display for RuleCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HasItem(title) => write!(f, "has item '{}'", title),
            Self::LacksItem(title) => write!(f, "lacks item '{}'", title),
            Self::ItemShape { item, shape } => write!(f, "item '{}' is {}", item, shape),
            Self::AreaIs(area) => write!(f, "area is '{}'", area),
            Self::LargeTeamCount { min_members, count } => {
                write!(f, "{} teams larger than {}", count, min_members)
            }
            Self::All(conditions) => write!(f, "all of {} conditions", conditions.len()),
            Self::Any(conditions) => write!(f, "any of {} conditions", conditions.len()),
            Self::Not(inner) => write!(f, "not ({})", inner),
            Self::Always => f.write_str("always"),
            Self::Never => f.write_str("never"),
        }
    }
}

/// Inputs a condition is evaluated against.
#[derive(Clone, Copy)]
pub struct ConditionContext<'a> {
    /// The game being classified.
    pub game: &'a Game,
    /// Team reference data.
    pub roster: &'a TeamRoster,
}

impl<'a> ConditionContext<'a> {
    /// Create a new context.
    pub fn new(game: &'a Game, roster: &'a TeamRoster) -> Self {
        Self { game, roster }
    }
}

/// Evaluator for rule conditions.
pub struct ConditionEvaluator;

impl ConditionEvaluator {
    /// Check if a condition is satisfied.
    pub fn evaluate(condition: &RuleCondition, ctx: &ConditionContext) -> bool {
        match condition {
            RuleCondition::HasItem(title) => ctx.game.items().contains_key(title),

            RuleCondition::LacksItem(title) => !ctx.game.items().contains_key(title),

            RuleCondition::ItemShape { item, shape } => ctx
                .game
                .item(item)
                .is_some_and(|found| found.shape() == shape),

            RuleCondition::AreaIs(area) => {
                ctx.game.area().to_lowercase() == area.to_lowercase()
            }

            RuleCondition::LargeTeamCount { min_members, count } => {
                ctx.roster.count_larger_than(*min_members) == *count
            }

            RuleCondition::All(conditions) => {
                conditions.iter().all(|c| Self::evaluate(c, ctx))
            }

            RuleCondition::Any(conditions) => {
                conditions.iter().any(|c| Self::evaluate(c, ctx))
            }

            RuleCondition::Not(inner) => !Self::evaluate(inner, ctx),

            RuleCondition::Always => true,

            RuleCondition::Never => false,
        }
    }
}
