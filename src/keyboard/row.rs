use serde::{Deserialize, Serialize};

/// Character that marks a gap in a textual layout row.
pub const BLANK: char = ' ';

/// One addressable cell of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    Empty,
    Filled(char),
}

impl Slot {
    pub fn from_char(c: char) -> Self {
        if c == BLANK {
            Slot::Empty
        } else {
            Slot::Filled(c)
        }
    }

    pub fn key(&self) -> Option<char> {
        match self {
            Slot::Empty => None,
            Slot::Filled(c) => Some(*c),
        }
    }

    pub fn is_occupied(&self) -> bool {
        matches!(self, Slot::Filled(_))
    }

    pub fn to_char(&self) -> char {
        self.key().unwrap_or(BLANK)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyRow {
    slots: Vec<Slot>,
    // (first, last) occupied column, used for end-to-start wrapping.
    // Occupancy never changes, so this is computed once.
    bounds: Option<(usize, usize)>,
}

impl KeyRow {
    pub fn parse(line: &str) -> Self {
        let slots: Vec<Slot> = line.chars().map(Slot::from_char).collect();
        Self::from_slots(slots)
    }

    pub fn from_slots(slots: Vec<Slot>) -> Self {
        let first = slots.iter().position(Slot::is_occupied);
        let last = slots.iter().rposition(Slot::is_occupied);
        let bounds = first.zip(last);
        Self { slots, bounds }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn slot(&self, column: usize) -> Option<Slot> {
        self.slots.get(column).copied()
    }

    /// First and last occupied column, absent for a row with no keys.
    pub fn bounds(&self) -> Option<(usize, usize)> {
        self.bounds
    }

    /// Same-row reachability of `column` from `selected`.
    ///
    /// Keys up to two columns apart count as adjacent (staggered layouts put
    /// a gap column between neighbours). The first and last keys of the row
    /// also touch each other.
    pub fn can_reach(&self, column: usize, selected: usize) -> bool {
        let Some((start, end)) = self.bounds else {
            return false;
        };

        let adjacent = column.abs_diff(selected) <= 2;
        let wrapped =
            (column == start && selected == end) || (column == end && selected == start);

        adjacent || wrapped
    }

    pub(crate) fn set_key(&mut self, column: usize, value: char) {
        if let Some(slot) = self.slots.get_mut(column) {
            if slot.is_occupied() {
                *slot = Slot::Filled(value);
            }
        }
    }

    pub fn to_line(&self) -> String {
        self.slots.iter().map(Slot::to_char).collect()
    }
}
