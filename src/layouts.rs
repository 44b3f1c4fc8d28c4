use crate::error::{KeyHopError, KhResult};
use crate::keyboard::Keyboard;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::info;

#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum KnownLayout {
    Qwerty,
    Qwertz,
    Alphabetical,
}

impl KnownLayout {
    // Letters per row: 10 top, 9 home, 7 bottom.
    pub fn get_str(&self) -> [&'static str; 3] {
        match self {
            Self::Qwerty => ["qwertyuiop", "asdfghjkl", "zxcvbnm"],
            Self::Qwertz => ["qwertzuiop", "asdfghjkl", "yxcvbnm"],
            Self::Alphabetical => ["abcdefghij", "klmnopqrs", "tuvwxyz"],
        }
    }

    /// Staggered text rows: keys sit on every other column, the home row is
    /// shifted by one and the bottom row by three.
    pub fn rows(&self) -> Vec<String> {
        let [top, home, bottom] = self.get_str();
        vec![
            stagger(top, 0, STAGGER_WIDTH),
            stagger(home, 1, STAGGER_WIDTH),
            stagger(bottom, 3, STAGGER_WIDTH),
        ]
    }

    pub fn keyboard(&self) -> Keyboard {
        // Built-in rows are all STAGGER_WIDTH wide.
        Keyboard::build(self.rows().as_slice())
            .unwrap_or_else(|e| panic!("{} layout: {}", self, e))
    }
}

const STAGGER_WIDTH: usize = 19;

fn stagger(keys: &str, offset: usize, width: usize) -> String {
    let mut line = vec![' '; width];
    for (i, c) in keys.chars().enumerate() {
        if let Some(slot) = line.get_mut(offset + 2 * i) {
            *slot = c;
        }
    }
    line.into_iter().collect()
}

pub fn get_all_layouts() -> Vec<(KnownLayout, Keyboard)> {
    KnownLayout::iter().map(|l| (l, l.keyboard())).collect()
}

impl Keyboard {
    pub fn qwerty() -> Self {
        KnownLayout::Qwerty.keyboard()
    }
}

/// A custom layout stored as JSON: `{"name": "...", "rows": ["...", ...]}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutFile {
    #[serde(default)]
    pub name: String,
    pub rows: Vec<String>,
}

impl LayoutFile {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> KhResult<Self> {
        let path = path.as_ref();
        info!("📂 Loading layout file: {}", path.display());
        let content = fs::read_to_string(path)?;
        let layout: LayoutFile = serde_json::from_str(&content)?;
        if layout.rows.is_empty() {
            return Err(KeyHopError::Validation(format!(
                "layout file '{}' has no rows",
                path.display()
            )));
        }
        Ok(layout)
    }

    pub fn keyboard(&self) -> KhResult<Keyboard> {
        Keyboard::build(self.rows.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_qwerty_rows_match_staggered_grid() {
        assert_eq!(
            KnownLayout::Qwerty.rows(),
            vec![
                "q w e r t y u i o p".to_string(),
                " a s d f g h j k l ".to_string(),
                "   z x c v b n m   ".to_string(),
            ]
        );
    }

    #[test]
    fn test_every_layout_builds() {
        for (layout, kb) in get_all_layouts() {
            assert_eq!(kb.num_rows(), 3, "{}", layout);
            assert_eq!(kb.num_columns(), STAGGER_WIDTH, "{}", layout);
            assert_eq!(kb.occupied_positions().len(), 26, "{}", layout);
        }
    }

    #[test]
    fn test_layout_names_parse() {
        assert_eq!(KnownLayout::from_str("qwertz").unwrap(), KnownLayout::Qwertz);
        assert_eq!(KnownLayout::Alphabetical.to_string(), "alphabetical");
        assert!(KnownLayout::from_str("dvorak").is_err());
    }
}
