//! Classification integration tests.
//!
//! These tests check the golf rule guard by guard, the construction-time
//! timing of a game's title, and rule tables loaded from JSON.

use game_guess::game::Game;
use game_guess::items::Item;
use game_guess::rules::{classify, Classifier, Rule, RuleCondition};
use game_guess::teams::TeamRoster;
use proptest::prelude::*;

const BALL: &str = "м'яч";
const MALLET: &str = "дерев'яний молот";

fn round_ball() -> Item {
    Item::new(BALL, "круглий")
}

// =============================================================================
// Golf Rule
// =============================================================================

/// Test the reference roster scenario: three large teams, golf matches.
#[test]
fn test_reference_roster_indoor_ball_is_golf() {
    let teams: TeamRoster = [("team1", 1), ("team2", 10), ("team3", 20), ("team4", 7)]
        .into_iter()
        .collect();
    assert_eq!(teams.count_larger_than(2), 3);

    let game = Game::with_classifier("Приміщення", [round_ball()], &Classifier::standard(), &teams);
    assert_eq!(game.title(), "гольф");
}

/// Test that exactly two large teams rule golf out.
#[test]
fn test_two_large_teams_is_unclassified() {
    let teams: TeamRoster = [("a", 5), ("b", 6), ("c", 1), ("d", 1)].into_iter().collect();

    let game = Game::with_classifier("Приміщення", [round_ball()], &Classifier::standard(), &teams);
    assert_eq!(game.title(), "");
}

/// Test that an outdoor area is never golf.
#[test]
fn test_outdoor_is_unclassified() {
    let game = Game::new("вулиця", [round_ball()]);
    assert_eq!(game.title(), "");
}

/// Test that a mallet present at construction rules golf out.
#[test]
fn test_mallet_at_construction_is_unclassified() {
    let game = Game::new("Приміщення", [round_ball(), Item::new(MALLET, "довгий")]);
    assert_eq!(game.title(), "");
}

/// Test that a game without items is never classified.
#[test]
fn test_no_items_is_unclassified() {
    let game = Game::with_area("Приміщення");
    assert_eq!(game.title(), "");
}

/// Test that the free function agrees with the game's own title.
#[test]
fn test_classify_is_pure() {
    let game = Game::new("Приміщення", [round_ball()]);
    let roster = TeamRoster::reference();

    assert_eq!(classify(&game, &roster).as_deref(), Some("гольф"));
    assert_eq!(classify(&game, &roster).as_deref(), Some("гольф"));
    assert_eq!(game.items().len(), 1);
}

// =============================================================================
// Classification Timing
// =============================================================================

/// Test that items added after construction never change the title.
#[test]
fn test_title_fixed_at_construction() {
    let mut unclassified = Game::with_area("Приміщення");
    unclassified.add_item(round_ball());
    assert_eq!(unclassified.title(), "");

    unclassified.add_items([round_ball()]);
    assert_eq!(unclassified.title(), "");

    let mut golf = Game::new("Приміщення", [round_ball()]);
    golf.add_item(Item::new(MALLET, "довгий"));
    golf.add_items(Vec::<Item>::new());
    assert_eq!(golf.title(), "гольф");
}

/// Test the on-demand reclassification path.
#[test]
fn test_reclassify_uses_current_items() {
    let mut game = Game::with_area("приміщення");
    game.add_item(round_ball());

    let title = game
        .reclassify(&Classifier::standard(), &TeamRoster::reference())
        .to_string();
    assert_eq!(title, "гольф");
}

// =============================================================================
// Rule Tables
// =============================================================================

/// Test a rule table loaded from JSON alongside the built-in golf rule.
#[test]
fn test_rule_table_from_json() {
    let extra: Classifier = serde_json::from_str(
        r#"[
            {
                "title": "крокет",
                "conditions": [
                    { "HasItem": "дерев'яний молот" },
                    { "AreaIs": "поле" }
                ]
            }
        ]"#,
    )
    .unwrap();

    let mut classifier = Classifier::standard();
    for rule in extra.rules() {
        classifier.push(rule.clone());
    }

    let roster = TeamRoster::reference();
    let croquet = Game::with_classifier("Поле", [Item::new(MALLET, "довгий")], &classifier, &roster);
    assert_eq!(croquet.title(), "крокет");

    let golf = Game::with_classifier("Приміщення", [round_ball()], &classifier, &roster);
    assert_eq!(golf.title(), "гольф");
}

/// Test that rule order decides between overlapping rules.
#[test]
fn test_rule_order() {
    let broad = Rule::new("м'ячева гра").with_condition(RuleCondition::has_item(BALL));

    let golf_first = Classifier::standard().with_rule(broad.clone());
    let broad_first = Classifier::from_rules([broad, Rule::golf()]);

    let mut game = Game::with_area("Приміщення");
    game.add_item(round_ball());
    let roster = TeamRoster::reference();

    assert_eq!(golf_first.classify(&game, &roster), Some("гольф"));
    assert_eq!(broad_first.classify(&game, &roster), Some("м'ячева гра"));
}

// =============================================================================
// Properties
// =============================================================================

/// Mixed-case spellings of the indoor area.
fn indoor_spelling() -> impl Strategy<Value = String> {
    proptest::collection::vec(any::<bool>(), 10).prop_map(|upper| {
        "приміщення"
            .chars()
            .zip(upper)
            .map(|(c, up)| if up { c.to_uppercase().next().unwrap_or(c) } else { c })
            .collect()
    })
}

proptest! {
    /// Area casing never changes the result.
    #[test]
    fn prop_area_case_insensitive(area in indoor_spelling()) {
        let game = Game::new(area, [round_ball()]);
        prop_assert_eq!(game.title(), "гольф");
    }

    /// Golf matches unless exactly two teams are larger than two.
    #[test]
    fn prop_team_size_guard(members in proptest::collection::vec(0u32..30, 0..8)) {
        let roster: TeamRoster = members
            .iter()
            .enumerate()
            .map(|(i, &m)| (format!("team{}", i), m))
            .collect();
        let large = members.iter().filter(|&&m| m > 2).count();

        let game = Game::with_classifier("Приміщення", [round_ball()], &Classifier::standard(), &roster);
        if large == 2 {
            prop_assert_eq!(game.title(), "");
        } else {
            prop_assert_eq!(game.title(), "гольф");
        }
    }

    /// Any title added after construction leaves the title as it was.
    #[test]
    fn prop_add_item_never_reclassifies(title in "\\PC{1,12}", shape in "\\PC{0,12}") {
        let mut golf = Game::new("Приміщення", [round_ball()]);
        golf.add_item(Item::new(title.clone(), shape.clone()));
        prop_assert_eq!(golf.title(), "гольф");

        let mut empty = Game::with_area("Приміщення");
        empty.add_item(Item::new(title, shape));
        prop_assert_eq!(empty.title(), "");
    }

    /// Bulk replacement keeps the last item for each title.
    #[test]
    fn prop_add_items_last_write_wins(shapes in proptest::collection::vec("[a-z]{1,6}", 1..6)) {
        let mut game = Game::with_area("поле");
        game.add_items(shapes.iter().map(|s| Item::new(BALL, s.clone())));

        prop_assert_eq!(game.items().len(), 1);
        prop_assert_eq!(game.item(BALL).map(Item::shape), shapes.last().map(String::as_str));
    }
}
