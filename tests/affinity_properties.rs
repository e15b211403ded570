use proptest::prelude::*;
use team_affinity::{
    AffinityConfig, AffinityEngine, AffinityError, QuestionnaireSession, SeededRandom, Step,
    Style, TeamCatalog, TeamCode,
};

const CITIES: [&str; 5] = ["Bangalore", "Chennai", "Mumbai", "Kolkata", "Delhi"];

fn engine(seed: u64) -> AffinityEngine {
    AffinityEngine::with_adapters(
        TeamCatalog::ipl(),
        AffinityConfig::default(),
        Box::new(SeededRandom::new(seed)),
    )
    .unwrap()
}

fn other_style(style: Style) -> Style {
    match style {
        Style::Balanced => Style::Aggressive,
        Style::Aggressive => Style::Balanced,
    }
}

/// Runs the three answers; returns the final session and the city's team
fn complete(
    engine: &mut AffinityEngine,
    city: &str,
    color: &str,
    style: Style,
) -> (QuestionnaireSession, TeamCode) {
    let s = engine.start();
    let s = engine.submit_city(&s, city).unwrap();
    let s = engine.submit_color(&s, color).unwrap();
    let s = engine.submit_style(&s, style.as_str()).unwrap();
    let target = engine.catalog().team_for_city(city).cloned().unwrap();
    (s, target)
}

proptest! {
    #[test]
    fn city_always_sets_three(city_idx in 0usize..5, seed in any::<u64>()) {
        let engine = engine(seed);
        let s = engine.submit_city(&engine.start(), CITIES[city_idx]).unwrap();
        prop_assert_eq!(s.score(), 3);
        prop_assert_eq!(s.step(), Step::Color);
    }

    #[test]
    fn full_match_scores_six_and_keeps_city_team(city_idx in 0usize..5, seed in any::<u64>()) {
        let mut engine = engine(seed);
        let catalog = TeamCatalog::ipl();
        let team = catalog.team_for_city(CITIES[city_idx]).cloned().unwrap();
        let color = catalog.preferred_color(&team).to_string();
        let style = catalog.preferred_style(&team);

        let (s, target) = complete(&mut engine, CITIES[city_idx], &color, style);

        prop_assert_eq!(s.score(), 6);
        prop_assert_eq!(s.assigned_team(), Some(&target));
    }

    #[test]
    fn double_mismatch_scores_zero_and_draws_any_team(
        city_idx in 0usize..5,
        color in "[a-z]{0,10}",
        seed in any::<u64>(),
    ) {
        let mut engine = engine(seed);
        let catalog = TeamCatalog::ipl();
        let team = catalog.team_for_city(CITIES[city_idx]).cloned().unwrap();
        prop_assume!(color != catalog.preferred_color(&team));
        let style = other_style(catalog.preferred_style(&team));

        let (s, _) = complete(&mut engine, CITIES[city_idx], &color, style);

        prop_assert_eq!(s.score(), 0);
        let assigned = s.assigned_team().cloned().unwrap();
        prop_assert!(catalog.team_codes().contains(&assigned));
    }

    #[test]
    fn single_mismatch_is_deterministic(
        city_idx in 0usize..5,
        wrong_color in any::<bool>(),
        seed in any::<u64>(),
    ) {
        let mut engine = engine(seed);
        let catalog = TeamCatalog::ipl();
        let team = catalog.team_for_city(CITIES[city_idx]).cloned().unwrap();
        let preferred_color = catalog.preferred_color(&team);
        let preferred_style = catalog.preferred_style(&team);

        let (color, style, expected) = if wrong_color {
            ("green", preferred_style, 2)
        } else {
            (preferred_color, other_style(preferred_style), 4)
        };

        let (s, target) = complete(&mut engine, CITIES[city_idx], color, style);

        prop_assert_eq!(s.score(), expected);
        prop_assert_eq!(s.assigned_team(), Some(&target));
    }

    #[test]
    fn score_stays_in_bounds(
        city_idx in 0usize..5,
        color in prop::sample::select(vec!["red", "yellow", "blue", "purple", "green"]),
        balanced in any::<bool>(),
        seed in any::<u64>(),
    ) {
        let mut engine = engine(seed);
        let style = if balanced { Style::Balanced } else { Style::Aggressive };

        let (s, _) = complete(&mut engine, CITIES[city_idx], color, style);

        prop_assert!((0..=6).contains(&s.score()));
        prop_assert_eq!(s.step(), Step::Result);
    }

    #[test]
    fn out_of_order_leaves_session_unmutated(
        city_idx in 0usize..5,
        input in "[a-z]{1,10}",
        seed in any::<u64>(),
    ) {
        let mut engine = engine(seed);
        let at_color = engine.submit_city(&engine.start(), CITIES[city_idx]).unwrap();
        let before = at_color.clone();

        let city_again = engine.submit_city(&at_color, CITIES[city_idx]);
        let style_early = engine.submit_style(&at_color, &input);
        let finalize_early = engine.finalize(&at_color, &input);

        let is_step_error = |r: &Result<_, AffinityError>| matches!(r, Err(AffinityError::InvalidStep { .. }));
        prop_assert!(is_step_error(&city_again));
        prop_assert!(is_step_error(&style_early));
        prop_assert!(matches!(finalize_early, Err(AffinityError::InvalidStep { .. })), "expected InvalidStep error");
        prop_assert_eq!(at_color, before);
    }

    #[test]
    fn finalize_twice_agrees(city_idx in 0usize..5, seed in any::<u64>()) {
        let mut engine = engine(seed);
        let (s, _) = complete(&mut engine, CITIES[city_idx], "purple", Style::Aggressive);
        let score = s.score();

        let first = engine.finalize(&s, "fan").unwrap();
        let second = engine.finalize(&s, "fan").unwrap();

        prop_assert_eq!(first, second);
        prop_assert_eq!(s.score(), score);
    }
}

#[test]
fn chennai_scenario() {
    let mut engine = engine(0);

    let (s, _) = complete(&mut engine, "Chennai", "yellow", Style::Balanced);

    assert_eq!(s.score(), 6);
    assert_eq!(engine.finalize(&s, "ravi").unwrap().team, "CSK");
}

#[test]
fn mumbai_scenario() {
    let mut engine = engine(0);
    let teams: Vec<TeamCode> = ["RCB", "CSK", "MI", "KKR", "DC"]
        .into_iter()
        .map(TeamCode::from)
        .collect();

    for _ in 0..50 {
        let (s, _) = complete(&mut engine, "Mumbai", "red", Style::Balanced);
        assert_eq!(s.score(), 0);
        assert!(teams.contains(s.assigned_team().unwrap()));
    }
}

#[test]
fn session_survives_host_round_trip() {
    let mut engine = engine(5);
    let s = engine.submit_city(&engine.start(), "Kolkata").unwrap();

    let parked = serde_json::to_string(&s).unwrap();
    let resumed: QuestionnaireSession = serde_json::from_str(&parked).unwrap();

    let s = engine.submit_color(&resumed, "purple").unwrap();
    let s = engine.submit_style(&s, "balanced").unwrap();
    assert_eq!(s.score(), 6);
    assert_eq!(s.assigned_team(), Some(&TeamCode::new("KKR")));
}

#[test]
fn resumed_session_on_same_seed_draws_same_team() {
    let mut straight = engine(77);
    let (uninterrupted, _) = complete(&mut straight, "Mumbai", "red", Style::Balanced);

    let parked = {
        let first = engine(77);
        let s = first.submit_city(&first.start(), "Mumbai").unwrap();
        let s = first.submit_color(&s, "red").unwrap();
        serde_json::to_string(&s).unwrap()
    };
    let resumed: QuestionnaireSession = serde_json::from_str(&parked).unwrap();
    let mut second = engine(77);
    let s = second.submit_style(&resumed, "balanced").unwrap();

    assert_eq!(s.score(), 0);
    assert_eq!(s.assigned_team(), uninterrupted.assigned_team());
}
