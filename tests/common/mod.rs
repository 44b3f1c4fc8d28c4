#![allow(dead_code)]

use keyhop::keyboard::{Keyboard, Position};

// Qwerty grid coordinates
pub const Q: Position = Position::new(0, 0);
pub const W: Position = Position::new(0, 2);
pub const E: Position = Position::new(0, 4);
pub const R: Position = Position::new(0, 6);
pub const T: Position = Position::new(0, 8);
pub const Y: Position = Position::new(0, 10);
pub const P: Position = Position::new(0, 18);
pub const A: Position = Position::new(1, 1);
pub const S: Position = Position::new(1, 3);
pub const D: Position = Position::new(1, 5);
pub const F: Position = Position::new(1, 7);
pub const G: Position = Position::new(1, 9);
pub const H: Position = Position::new(1, 11);
pub const L: Position = Position::new(1, 17);
pub const Z: Position = Position::new(2, 3);
pub const X: Position = Position::new(2, 5);
pub const V: Position = Position::new(2, 9);
pub const M: Position = Position::new(2, 15);

pub const SPACED_ROW: &str = "q w e r t y u i o p";

/// Position of the first key labelled `c`.
pub fn find_key(kb: &Keyboard, c: char) -> Option<Position> {
    kb.occupied_positions()
        .into_iter()
        .find(|&pos| kb.key_at(pos) == Some(c))
}

/// Keys in row-major order.
pub fn key_values(kb: &Keyboard) -> Vec<char> {
    kb.occupied_positions()
        .into_iter()
        .filter_map(|pos| kb.key_at(pos))
        .collect()
}

pub fn sorted(mut v: Vec<Position>) -> Vec<Position> {
    v.sort();
    v
}
