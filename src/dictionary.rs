use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::SolverError;
use crate::trie::Trie;

/// Words shorter than this never make it into the trie, so the solver can
/// never report them.
pub const MIN_WORD_LEN: usize = 3;

/// Shape of the JSON dictionary document: `{ "words": ["cat", ...] }`.
#[derive(Debug, Deserialize)]
struct WordListDoc {
    words: Vec<String>,
}

/// Reads a newline-separated word list. Blank lines are skipped; no other
/// filtering happens here, that is `build_trie`'s job.
pub fn load_words_txt<P: AsRef<Path>>(path: P) -> Result<Vec<String>, SolverError> {
    let io_err = |source| SolverError::Io {
        path: path.as_ref().to_path_buf(),
        source,
    };
    let file = File::open(path.as_ref()).map_err(io_err)?;
    let reader = BufReader::new(file);

    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(io_err)?;
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        words.push(word.to_string());
    }
    Ok(words)
}

/// Reads a `{ "words": [...] }` JSON dictionary document.
pub fn load_words_json<P: AsRef<Path>>(path: P) -> Result<Vec<String>, SolverError> {
    let data = fs::read_to_string(path.as_ref()).map_err(|source| SolverError::Io {
        path: path.as_ref().to_path_buf(),
        source,
    })?;
    let doc: WordListDoc = serde_json::from_str(&data)?;
    Ok(doc.words)
}

/// Normalizes and inserts a word list into a fresh trie: words are trimmed
/// and lowercased, anything shorter than [`MIN_WORD_LEN`] or containing
/// characters outside `a..=z` is dropped. The returned trie is meant to be
/// built once and shared read-only with every subsequent solve.
pub fn build_trie<I>(words: I) -> Result<Trie, SolverError>
where
    I: IntoIterator<Item = String>,
{
    let mut trie = Trie::new();
    let mut skipped = 0usize;
    for raw in words {
        let word = raw.trim().to_lowercase();
        if word.chars().count() < MIN_WORD_LEN {
            skipped += 1;
            continue;
        }
        if !word.chars().all(|c| c.is_ascii_lowercase()) {
            debug!(word = %raw, "skipping word with characters outside a-z");
            skipped += 1;
            continue;
        }
        trie.insert(&word)?;
    }
    debug!(inserted = trie.len(), skipped, "dictionary trie built");
    Ok(trie)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trie::QueryResult;

    fn owned(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_build_trie_filters_short_words() {
        let trie = build_trie(owned(&["a", "at", "cat", "cats"])).unwrap();
        assert_eq!(trie.len(), 2);
        assert_eq!(trie.query("at"), QueryResult::Absent);
        assert_eq!(trie.query("cat"), QueryResult::Found);
    }

    #[test]
    fn test_build_trie_normalizes_case_and_whitespace() {
        let trie = build_trie(owned(&["  CAT\n", "Dog"])).unwrap();
        assert_eq!(trie.query("cat"), QueryResult::Found);
        assert_eq!(trie.query("dog"), QueryResult::Found);
    }

    #[test]
    fn test_build_trie_drops_non_alphabetic_words() {
        let trie = build_trie(owned(&["don't", "re-up", "cat"])).unwrap();
        assert_eq!(trie.len(), 1);
        assert_eq!(trie.query("don"), QueryResult::Absent);
    }

    #[test]
    fn test_load_words_json() {
        let path = std::env::temp_dir().join("boggle_words_test.json");
        fs::write(&path, r#"{ "words": ["cat", "dog"] }"#).unwrap();
        let words = load_words_json(&path).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(words, vec!["cat", "dog"]);
    }

    #[test]
    fn test_load_words_txt() {
        let path = std::env::temp_dir().join("boggle_words_test.txt");
        fs::write(&path, "cat\n\n  dog  \n").unwrap();
        let words = load_words_txt(&path).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(words, vec!["cat", "dog"]);
    }
}
