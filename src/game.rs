use crate::error::{KeyHopError, KhResult};
use crate::keyboard::{Keyboard, Position};
use fastrand::Rng;
use tracing::{debug, warn};

/// Result of tapping a key during a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// The key was the next letter of the word.
    Matched(char),
    /// The key was the final letter of the word.
    Completed(char),
    /// Wrong letter, unpressable or missing key. Nothing changed.
    Rejected,
    /// The word was already complete.
    Finished,
}

/// A single round: spell `word` on an adjacency-constrained keyboard.
#[derive(Debug, Clone)]
pub struct Game {
    word: Vec<char>,
    letters_filled: usize,
    keyboard: Keyboard,
}

impl Game {
    pub fn new(word: &str, keyboard: Keyboard) -> KhResult<Self> {
        let word: Vec<char> = word.trim().chars().collect();
        if word.is_empty() {
            return Err(KeyHopError::Config("target word is empty".into()));
        }

        let keys: Vec<char> = keyboard
            .occupied_positions()
            .into_iter()
            .filter_map(|pos| keyboard.key_at(pos))
            .collect();
        let missing: String = word.iter().filter(|c| !keys.contains(*c)).collect();
        if !missing.is_empty() {
            warn!(
                "Word '{}' uses letters not on the keyboard ('{}'); it cannot be completed",
                word.iter().collect::<String>(),
                missing
            );
        }

        Ok(Self {
            word,
            letters_filled: 0,
            keyboard,
        })
    }

    pub fn tap(&mut self, pos: Position) -> TapOutcome {
        let Some(&expected) = self.word.get(self.letters_filled) else {
            return TapOutcome::Finished;
        };

        match self.keyboard.key_if_pressed(pos) {
            Some(key) if key == expected => {
                self.keyboard.try_press(pos);
                self.letters_filled += 1;
                debug!("Matched '{}' ({}/{})", key, self.letters_filled, self.word.len());
                if self.is_complete() {
                    TapOutcome::Completed(key)
                } else {
                    TapOutcome::Matched(key)
                }
            }
            _ => TapOutcome::Rejected,
        }
    }

    pub fn scramble(&mut self) {
        self.keyboard.scramble();
    }

    pub fn scramble_with(&mut self, rng: &mut Rng) {
        self.keyboard.scramble_with(rng);
    }

    pub fn word(&self) -> String {
        self.word.iter().collect()
    }

    pub fn letters_filled(&self) -> usize {
        self.letters_filled
    }

    pub fn is_complete(&self) -> bool {
        self.letters_filled >= self.word.len()
    }

    pub fn filled(&self) -> String {
        self.word[..self.letters_filled].iter().collect()
    }

    pub fn unfilled(&self) -> String {
        self.word[self.letters_filled..].iter().collect()
    }

    /// Next letter to spell, absent once the word is complete.
    pub fn next_letter(&self) -> Option<char> {
        self.word.get(self.letters_filled).copied()
    }

    pub fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }
}
