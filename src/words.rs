use crate::error::{KeyHopError, KhResult};
use fastrand::Rng;
use std::fs::File;
use std::path::Path;
use tracing::{debug, info};

/// Loads target words from a tab-separated file.
///
/// Only the first field of each record is used, so frequency lists
/// (`word\tcount`) load as-is. Blank lines and `#` comments are skipped.
pub fn load_word_list<P: AsRef<Path>>(path: P) -> KhResult<Vec<String>> {
    let path = path.as_ref();
    info!("📚 Loading word list: {}", path.display());

    let file = File::open(path)?;
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .from_reader(file);

    let mut words = Vec::new();
    let mut skipped = 0;

    for result in rdr.records() {
        let rec = result?;
        let word = rec.get(0).map(str::trim).unwrap_or_default();
        if word.is_empty() || word.contains(char::is_whitespace) {
            skipped += 1;
            continue;
        }
        words.push(word.to_lowercase());
    }

    if skipped > 0 {
        debug!("Skipped {} blank or multi-word entries", skipped);
    }

    if words.is_empty() {
        return Err(KeyHopError::Validation(format!(
            "word list '{}' contains no words",
            path.display()
        )));
    }

    Ok(words)
}

pub fn pick_word<'a>(rng: &mut Rng, words: &'a [String]) -> Option<&'a str> {
    if words.is_empty() {
        return None;
    }
    Some(words[rng.usize(..words.len())].as_str())
}
