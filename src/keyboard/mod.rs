pub mod row;

pub use row::{KeyRow, Slot, BLANK};

use crate::error::{KeyHopError, KhResult};
use fastrand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Grid coordinate, scoped to one keyboard.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Visual state of a key for a presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyStatus {
    Normal,
    Pressable,
    Pressed,
}

/// Serialisable view of a keyboard's current state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyboardSnapshot {
    pub rows: Vec<String>,
    pub last_pressed: Option<Position>,
    pub pressable: Vec<Position>,
}

/// Adjacency-constrained keyboard.
///
/// After the first press, only keys adjacent to the last pressed key may be
/// pressed. On the same row "adjacent" means up to two columns away, or the
/// row's first and last key. Between neighbouring rows (and between the top
/// and bottom row) it means at most one column away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyboard {
    rows: Vec<KeyRow>,
    last_pressed: Option<Position>,
    num_columns: usize,
}

impl Keyboard {
    /// Builds a keyboard from equal-length text rows. Spaces become gaps.
    pub fn build<S: AsRef<str>>(rows: &[S]) -> KhResult<Self> {
        let first = rows.first().ok_or(KeyHopError::EmptyLayout)?;
        let num_columns = first.as_ref().chars().count();

        let mut key_rows = Vec::with_capacity(rows.len());
        for (i, line) in rows.iter().enumerate() {
            let row = KeyRow::parse(line.as_ref());
            if row.len() != num_columns {
                return Err(KeyHopError::RaggedRows {
                    row: i,
                    expected: num_columns,
                    found: row.len(),
                });
            }
            key_rows.push(row);
        }

        Ok(Self {
            rows: key_rows,
            last_pressed: None,
            num_columns,
        })
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn num_columns(&self) -> usize {
        self.num_columns
    }

    pub fn last_pressed(&self) -> Option<Position> {
        self.last_pressed
    }

    pub fn rows(&self) -> &[KeyRow] {
        &self.rows
    }

    fn last_row(&self) -> usize {
        self.rows.len() - 1
    }

    pub fn key_at(&self, pos: Position) -> Option<char> {
        self.rows.get(pos.row)?.slot(pos.col)?.key()
    }

    /// Every occupied position, row-major.
    pub fn occupied_positions(&self) -> Vec<Position> {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(r, row)| {
                row.slots()
                    .iter()
                    .enumerate()
                    .filter(|(_, slot)| slot.is_occupied())
                    .map(move |(c, _)| Position::new(r, c))
            })
            .collect()
    }

    /// Occupied positions that may legally be pressed next, row-major.
    pub fn pressable_keys(&self) -> Vec<Position> {
        self.occupied_positions()
            .into_iter()
            .filter(|&pos| self.can_press(pos))
            .collect()
    }

    fn can_press(&self, pos: Position) -> bool {
        let Some(selected) = self.last_pressed else {
            return true;
        };

        if pos.row == selected.row {
            return self.rows[pos.row].can_reach(pos.col, selected.col);
        }

        let last = self.last_row();
        let touching_rows = pos.row.abs_diff(selected.row) == 1
            || (pos.row == 0 && selected.row == last)
            || (pos.row == last && selected.row == 0);

        touching_rows && pos.col.abs_diff(selected.col) <= 1
    }

    /// The key that pressing `pos` would produce, without pressing it.
    pub fn key_if_pressed(&self, pos: Position) -> Option<char> {
        let key = self.key_at(pos)?;
        self.can_press(pos).then_some(key)
    }

    /// Presses `pos` if it is currently pressable and returns its key.
    /// Otherwise returns `None` and leaves the selection untouched.
    pub fn try_press(&mut self, pos: Position) -> Option<char> {
        let key = self.key_if_pressed(pos)?;
        debug!("Pressed '{}' at {}", key, pos);
        self.last_pressed = Some(pos);
        Some(key)
    }

    pub fn key_status(&self, pos: Position) -> KeyStatus {
        match self.last_pressed {
            Some(selected) if selected == pos => KeyStatus::Pressed,
            Some(_) if self.key_if_pressed(pos).is_some() => KeyStatus::Pressable,
            _ => KeyStatus::Normal,
        }
    }

    /// Shuffles key values across the occupied slots using a fresh generator.
    pub fn scramble(&mut self) {
        let mut rng = Rng::new();
        self.scramble_with(&mut rng);
    }

    /// Shuffles key values across the occupied slots. Which slots hold keys
    /// is unchanged; the selection is cleared.
    pub fn scramble_with(&mut self, rng: &mut Rng) {
        let positions = self.occupied_positions();
        let mut values: Vec<char> = positions
            .iter()
            .filter_map(|&pos| self.key_at(pos))
            .collect();

        rng.shuffle(&mut values);

        for (pos, value) in positions.iter().zip(values) {
            self.rows[pos.row].set_key(pos.col, value);
        }

        self.last_pressed = None;
        debug!("Scrambled {} keys", positions.len());
    }

    pub fn snapshot(&self) -> KeyboardSnapshot {
        KeyboardSnapshot {
            rows: self.rows.iter().map(KeyRow::to_line).collect(),
            last_pressed: self.last_pressed,
            pressable: self.pressable_keys(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_records_dimensions() {
        let kb = Keyboard::build(&["ab", "cd"]).unwrap();
        assert_eq!(kb.num_rows(), 2);
        assert_eq!(kb.num_columns(), 2);
        assert_eq!(kb.last_pressed(), None);
    }

    #[test]
    fn test_build_counts_chars_not_bytes() {
        let kb = Keyboard::build(&["é ü", "a b"]).unwrap();
        assert_eq!(kb.num_columns(), 3);
        assert_eq!(kb.key_at(Position::new(0, 2)), Some('ü'));
    }

    #[test]
    fn test_ragged_rows_report_offender() {
        match Keyboard::build(&["ab", "ab", "abc"]) {
            Err(KeyHopError::RaggedRows {
                row,
                expected,
                found,
            }) => {
                assert_eq!((row, expected, found), (2, 2, 3));
            }
            other => panic!("Expected RaggedRows, got {:?}", other),
        }
    }

    #[test]
    fn test_key_status_before_and_after_press() {
        let mut kb = Keyboard::build(&["a b c d"]).unwrap();
        let a = Position::new(0, 0);
        let b = Position::new(0, 2);
        let d = Position::new(0, 6);

        assert_eq!(kb.key_status(a), KeyStatus::Normal);

        kb.try_press(a).unwrap();
        assert_eq!(kb.key_status(a), KeyStatus::Pressed);
        assert_eq!(kb.key_status(b), KeyStatus::Pressable);
        // first and last key wrap
        assert_eq!(kb.key_status(d), KeyStatus::Pressable);
        assert_eq!(kb.key_status(Position::new(0, 4)), KeyStatus::Normal);
        assert_eq!(kb.key_status(Position::new(0, 1)), KeyStatus::Normal);
    }
}
