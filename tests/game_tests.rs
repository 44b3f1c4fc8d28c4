mod common;

use common::*;
use keyhop::error::KeyHopError;
use keyhop::game::{Game, TapOutcome};
use keyhop::keyboard::Keyboard;

#[test]
fn test_spell_tree() {
    let mut game = Game::new("tree", Keyboard::qwerty()).unwrap();

    assert_eq!(game.tap(T), TapOutcome::Matched('t'));
    assert_eq!(game.tap(R), TapOutcome::Matched('r'));
    assert_eq!(game.tap(E), TapOutcome::Matched('e'));
    // pressing the selected key again is allowed
    assert_eq!(game.tap(E), TapOutcome::Completed('e'));

    assert!(game.is_complete());
    assert_eq!(game.filled(), "tree");
    assert_eq!(game.unfilled(), "");
    assert_eq!(game.tap(W), TapOutcome::Finished);
}

#[test]
fn test_wrong_letter_is_rejected_without_pressing() {
    let mut game = Game::new("tree", Keyboard::qwerty()).unwrap();
    game.tap(T);

    // 'y' is pressable but not the next letter
    assert!(game.keyboard().key_if_pressed(Y).is_some());
    assert_eq!(game.tap(Y), TapOutcome::Rejected);
    assert_eq!(game.keyboard().last_pressed(), Some(T));
    assert_eq!(game.letters_filled(), 1);
    assert_eq!(game.next_letter(), Some('r'));
}

#[test]
fn test_right_letter_out_of_reach_is_rejected() {
    let mut game = Game::new("tm", Keyboard::qwerty()).unwrap();
    game.tap(T);
    assert_eq!(game.tap(M), TapOutcome::Rejected);
    assert_eq!(game.filled(), "t");
    assert_eq!(game.unfilled(), "m");
}

#[test]
fn test_scramble_keeps_progress() {
    let mut game = Game::new("we", Keyboard::qwerty()).unwrap();
    game.tap(W);
    game.scramble_with(&mut fastrand::Rng::with_seed(8));

    assert_eq!(game.letters_filled(), 1);
    assert_eq!(game.keyboard().last_pressed(), None);

    // Any 'e' is reachable right after a scramble.
    let e = find_key(game.keyboard(), 'e').unwrap();
    assert_eq!(game.tap(e), TapOutcome::Completed('e'));
}

#[test]
fn test_empty_word_is_an_error() {
    let result = Game::new("  ", Keyboard::qwerty());
    assert!(matches!(result, Err(KeyHopError::Config(_))));
}

#[test]
fn test_unwinnable_word_is_accepted() {
    let mut game = Game::new("a1", Keyboard::qwerty()).unwrap();
    assert_eq!(game.tap(A), TapOutcome::Matched('a'));
    assert!(!game.is_complete());
}
