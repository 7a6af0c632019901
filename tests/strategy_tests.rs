//! Computer player integration tests.
//!
//! Whole games between computer players, driven only through the public
//! engine API.

use rust_scrabble::{
    Action, ActionKind, ComputerStrategy, Dictionary, GameConfig, GameState, Participant,
    StrategyConfig, TurnEngine,
};

const WORDS: &[&str] = &[
    "AA", "AB", "AD", "AE", "AG", "AH", "AI", "AL", "AM", "AN", "AR", "AS", "AT", "AW", "AX", "AY",
    "BA", "BE", "BI", "BO", "BY", "DA", "DE", "DO", "ED", "EF", "EH", "EL", "EM", "EN", "ER", "ES",
    "EX", "FA", "FE", "GO", "HA", "HE", "HI", "HM", "HO", "ID", "IF", "IN", "IS", "IT", "JO", "KA",
    "KI", "LA", "LI", "LO", "MA", "ME", "MI", "MO", "MU", "MY", "NA", "NE", "NO", "NU", "OD", "OE",
    "OF", "OH", "OI", "OM", "ON", "OP", "OR", "OS", "OW", "OX", "OY", "PA", "PE", "PI", "QI", "RE",
    "SH", "SI", "SO", "TA", "TI", "TO", "UH", "UM", "UN", "UP", "US", "UT", "WE", "WO", "XI", "XU",
    "YA", "YE", "YO", "ZA", "ACE", "ACT", "AND", "ANT", "APE", "ARE", "ART", "ATE", "BAT", "BED",
    "BET", "CAT", "DOG", "EAR", "EAT", "END", "ERA", "ETA", "HAT", "HEN", "ICE", "INN", "ION",
    "NET", "NOT", "OAT", "ONE", "ORE", "RAN", "RAT", "RED", "ROT", "SAT", "SEA", "SET", "SIT",
    "TAN", "TEA", "TEN", "TIN", "TOE", "TON", "TOO", "NOTE", "TONE", "RATE", "TEAR", "STAR",
];

fn engine() -> TurnEngine {
    TurnEngine::new(Dictionary::from_words(WORDS).shared())
}

fn strategy() -> ComputerStrategy {
    ComputerStrategy::new(StrategyConfig::default().with_max_evaluations(5_000))
}

/// Show engine events with `RUST_LOG=rust_scrabble=debug cargo test`.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Play computer turns until the game ends.
fn play_out(engine: &TurnEngine, mut game: GameState) -> GameState {
    init_tracing();
    let strategy = strategy();
    for _ in 0..1_000 {
        if game.is_finished() {
            break;
        }
        let outcome = engine.play_computer_turn(&game, &strategy).unwrap();
        assert_eq!(outcome.game.tiles_accounted(), outcome.game.total_tiles());
        game = outcome.game;
    }
    game
}

fn bots() -> [Participant; 2] {
    [Participant::computer("Bot A"), Participant::computer("Bot B")]
}

/// Test that two computer players finish a game.
#[test]
fn test_computer_game_finishes() {
    let engine = engine();
    let game = engine.new_game(&bots(), GameConfig::default().with_seed(1)).unwrap();

    let finished = play_out(&engine, game);

    assert!(finished.is_finished());
    let placements = finished
        .history()
        .iter()
        .filter(|m| m.kind == ActionKind::PlaceWord)
        .count();
    assert!(placements > 0);
    assert!(finished.board().tile_count() > 0);
}

/// Test that the same seed and dictionary replay the same game.
#[test]
fn test_computer_game_is_deterministic() {
    let engine = engine();
    let config = GameConfig::default().with_seed(99);

    let first = play_out(&engine, engine.new_game(&bots(), config.clone()).unwrap());
    let second = play_out(&engine, engine.new_game(&bots(), config).unwrap());

    assert_eq!(first, second);
}

/// Test that the chosen placement is the best-scoring legal candidate.
#[test]
fn test_chosen_placement_is_best() {
    let engine = engine();
    let game = engine.new_game(&bots(), GameConfig::default().with_seed(4)).unwrap();
    let strategy = strategy();
    let player = game.current_player();

    let candidates = strategy.candidates(&engine, &game, player);
    let action = strategy.choose_action(&engine, &game, player);

    match candidates.iter().map(|c| c.score()).max() {
        Some(top) => {
            let outcome = engine.apply_action(&game, player, &action).unwrap();
            assert_eq!(outcome.result.score, top);
        }
        None => assert_ne!(action.kind(), ActionKind::PlaceWord),
    }
}

/// Test that every candidate passes the engine's own validation.
#[test]
fn test_candidates_are_legal() {
    let engine = engine();
    let game = engine.new_game(&bots(), GameConfig::default().with_seed(8)).unwrap();
    let player = game.current_player();

    for candidate in strategy().candidates(&engine, &game, player) {
        let outcome = engine.apply_action(&game, player, &candidate.action()).unwrap();
        assert_eq!(outcome.result.score, candidate.score());
    }
}

/// Test that a computer player with no playable word exchanges.
#[test]
fn test_stuck_computer_exchanges() {
    let engine = TurnEngine::new(Dictionary::empty().shared());
    let game = engine.new_game(&bots(), GameConfig::default()).unwrap();

    let outcome = engine.play_computer_turn(&game, &strategy()).unwrap();

    assert_eq!(outcome.result.kind, ActionKind::Exchange);
    assert_eq!(outcome.game.scoreless_turns(), 1);
}

/// Test that a stuck computer player passes once exchanging is not allowed.
#[test]
fn test_stuck_computer_passes() {
    let engine = TurnEngine::new(Dictionary::empty().shared());
    let game = engine.new_game(&bots(), GameConfig::default()).unwrap();
    let passive = ComputerStrategy::new(StrategyConfig::default().with_exchange_when_stuck(false));

    let action = passive.choose_action(&engine, &game, game.current_player());

    assert_eq!(action, Action::Pass);
}
