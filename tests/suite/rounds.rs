//! Whole rounds played through the `App` controller.

use periodle_engine::{
    App, AtomicNumber, Block, Catalog, Clue, GameError, GuessEngine, Hint, MAX_ATTEMPTS, NoticeKind, Outcome, Phase,
    TranscriptEntry, UiOptions, resolve_guess,
};

use crate::common::{app_with_target, record, submit};

#[test]
fn carbon_round_is_won_on_third_guess() {
    let mut app = app_with_target("Carbon");

    let first = app.guess("Gold").unwrap();
    assert_eq!(first.outcome(), Outcome::Continue);
    assert_eq!(first.summary(), "Go LOWER (Target < 79)");
    assert_eq!(app.status().current_hint, Hint::Block(Block::P));

    let second = app.guess("Oxygen").unwrap();
    assert_eq!(
        second.feedback(),
        [
            Clue::GoLower {
                guessed: AtomicNumber::new(8).unwrap()
            },
            Clue::CorrectPeriod
        ]
    );
    assert_eq!(app.hint_line().text, "Hint: It is a Nonmetal.");

    let third = app.guess("Carbon").unwrap();
    assert_eq!(third.outcome(), Outcome::Win);
    assert_eq!(third.attempts(), 3);
    assert_eq!(third.summary(), "CORRECT MATCH!");

    let status = app.status();
    assert!(status.won && status.game_over);
    assert_eq!(app.phase(), Phase::Won);
    assert_eq!(
        app.notice().unwrap().body,
        "Congratulations! You found Carbon in 3 attempts."
    );

    let lines: Vec<String> = app.transcript().iter().map(ToString::to_string).collect();
    assert_eq!(
        lines,
        [
            "TARGET LOCKED. Range: 1-79".to_string(),
            "-".repeat(40),
            "[1] Au (Gold): Go LOWER (Target < 79)".to_string(),
            "[2] O (Oxygen): Go LOWER (Target < 8) | MATCH: Correct Period".to_string(),
            "[3] C (Carbon): CORRECT MATCH!".to_string(),
        ]
    );
}

#[test]
fn six_misses_lose_and_seventh_is_rejected() {
    let mut app = app_with_target("Iron");
    let misses = ["H", "He", "C", "O", "Au", "Gold"];

    for (i, guess) in misses.iter().enumerate() {
        let verdict = app.guess(guess).unwrap();
        let expected = if i + 1 == usize::from(MAX_ATTEMPTS) {
            Outcome::Lose
        } else {
            Outcome::Continue
        };
        assert_eq!(verdict.outcome(), expected, "guess {guess}");
    }

    assert!(app.status().game_over);
    assert!(!app.status().won);
    assert_eq!(app.notice().unwrap().kind, NoticeKind::GameOver);
    assert_eq!(app.guess("Fe"), Err(GameError::GameAlreadyOver));
    assert_eq!(app.status().attempts, MAX_ATTEMPTS);
}

#[test]
fn hints_escalate_through_every_stage() {
    let mut app = app_with_target("Gold");
    let expected = [
        "Hint: This element belongs to the d-block.",
        "Hint: It is a Transition Metal.",
        "Hint: Electron config ends in 6s1.",
        "Hint: Approx Atomic Mass is 197.0.",
        "Hint: Think about the Atomic Number!",
    ];

    assert_eq!(app.status().current_hint.to_string(), "Guess to unlock hints.");
    for text in expected {
        submit(&mut app, "H");
        assert_eq!(app.status().current_hint.to_string(), text);
    }
}

#[test]
fn period_clue_without_group_clue() {
    let mut app = app_with_target("Helium");
    let verdict = app.guess("hydrogen").unwrap();
    assert_eq!(verdict.summary(), "Go HIGHER (Target > 1) | MATCH: Correct Period");
}

#[test]
fn group_clue_follows_direction_on_full_table() {
    let catalog = periodle_engine::catalog::bundled().unwrap();
    let gold = record(&catalog, "Gold");
    let mut app = App::with_parts(catalog, GuessEngine::seeded(5), UiOptions::default()).unwrap();
    app.start_new_game_with(gold);

    let verdict = app.guess("Cu").unwrap();
    assert_eq!(verdict.summary(), "Go HIGHER (Target > 29) | MATCH: Correct Group");

    // Platinum shares the period, not the group.
    let verdict = app.guess("Platinum").unwrap();
    assert_eq!(verdict.summary(), "Go HIGHER (Target > 78) | MATCH: Correct Period");
}

#[test]
fn groupless_elements_match_on_group() {
    let catalog = periodle_engine::catalog::bundled().unwrap();
    let cerium = record(&catalog, "Cerium");
    let mut app = App::with_parts(catalog, GuessEngine::seeded(5), UiOptions::default()).unwrap();
    app.start_new_game_with(cerium);

    let verdict = app.guess("Pr").unwrap();
    assert_eq!(
        verdict.feedback(),
        [
            Clue::GoLower {
                guessed: AtomicNumber::new(59).unwrap()
            },
            Clue::CorrectGroup,
            Clue::CorrectPeriod
        ]
    );
    assert_eq!(
        verdict.summary(),
        "Go LOWER (Target < 59) | MATCH: Correct Group | MATCH: Correct Period"
    );

    // Hafnium has a group, Cerium does not.
    let verdict = app.guess("Hf").unwrap();
    assert!(!verdict.feedback().contains(&Clue::CorrectGroup));
}

#[test]
fn misspelled_guess_costs_nothing() {
    let mut app = app_with_target("Oxygen");
    submit(&mut app, "Oxygenn");

    assert_eq!(app.status().attempts, 0);
    assert_eq!(app.notice().unwrap().kind, NoticeKind::Error);
    assert_eq!(app.transcript().len(), 2);
    assert!(matches!(
        app.transcript().last(),
        Some(TranscriptEntry::Divider)
    ));
}

#[test]
fn resolve_guess_normalizes_input() {
    let catalog = Catalog::minimal();
    assert_eq!(resolve_guess(&catalog, "  au ").unwrap().name, "Gold");
    assert_eq!(resolve_guess(&catalog, "OXYGEN").unwrap().symbol, "O");
    assert_eq!(
        resolve_guess(&catalog, "Unobtainium"),
        Err(GameError::NotFound {
            input: "Unobtainium".to_string()
        })
    );
}

#[test]
fn reset_after_loss_starts_clean_round() {
    let mut app = app_with_target("Iron");
    for _ in 0..MAX_ATTEMPTS {
        submit(&mut app, "H");
    }
    app.dismiss_notice();
    submit(&mut app, "/reset");

    assert_eq!(app.phase(), Phase::InProgress);
    assert_eq!(app.attempts_label(), "Attempts: 0/6");
    assert_eq!(app.hint_line().text, "System Ready. Enter your first guess.");
}

#[test]
fn seeded_engines_pick_the_same_targets() {
    let catalog = Catalog::minimal();
    let mut a = GuessEngine::seeded(99);
    let mut b = GuessEngine::seeded(99);
    for _ in 0..10 {
        let left = a.start_game(&catalog).unwrap().target().clone();
        let right = b.start_game(&catalog).unwrap().target().clone();
        assert_eq!(left, right);
    }
}

#[test]
fn engine_without_round_reports_not_started() {
    let catalog = Catalog::minimal();
    let mut engine = GuessEngine::seeded(1);
    assert_eq!(engine.phase(), Phase::NotStarted);
    assert_eq!(engine.get_hint(), Hint::Locked);
    assert_eq!(
        engine.evaluate_guess(&record(&catalog, "Gold")),
        Err(GameError::NotStarted)
    );
}

#[test]
fn app_over_empty_catalog_fails_to_start() {
    let err = App::with_parts(Catalog::default(), GuessEngine::seeded(1), UiOptions::default());
    assert_eq!(err.unwrap_err(), GameError::EmptyCatalog);
}
