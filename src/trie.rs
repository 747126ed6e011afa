use crate::error::SolverError;

const ALPHABET_SIZE: usize = 26;

/// Maps a letter to its child slot, or `None` for anything outside `a..=z`.
fn letter_index(c: char) -> Option<usize> {
    if c.is_ascii_lowercase() {
        Some(c as usize - 'a' as usize)
    } else {
        None
    }
}

/// Outcome of walking the trie along a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryResult {
    /// No dictionary word starts with this string.
    Absent,
    /// The path exists but no word ends here; some longer word starts this way.
    Prefix,
    /// The string is itself a dictionary word.
    Found,
}

/// Prefix tree node. A node carries no letter of its own; its identity is
/// its slot in the parent's child array.
#[derive(Debug, Default)]
struct TrieNode {
    is_word_end: bool,
    children: [Option<Box<TrieNode>>; ALPHABET_SIZE],
}

/// Dictionary stored as a prefix tree over `a..=z`. Built once by repeated
/// `insert`, then treated as read-only for the lifetime of the search.
#[derive(Debug, Default)]
pub struct Trie {
    root: TrieNode,
    len: usize,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct words inserted so far.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Adds a word to the trie, creating any missing nodes along its path.
    /// Inserting the same word twice leaves the trie unchanged. The word
    /// must be non-empty and contain only `a..=z`; the whole insert is
    /// rejected before any node is created otherwise.
    pub fn insert(&mut self, word: &str) -> Result<(), SolverError> {
        if word.is_empty() {
            return Err(SolverError::InvalidInput("cannot insert an empty word".into()));
        }
        if let Some(c) = word.chars().find(|c| letter_index(*c).is_none()) {
            return Err(SolverError::InvalidInput(format!(
                "word {word:?} contains {c:?}, expected only a-z"
            )));
        }

        let mut node = &mut self.root;
        for c in word.chars() {
            // Safe to index directly, the whole word was validated above.
            let idx = c as usize - 'a' as usize;
            node = &mut **node.children[idx].get_or_insert_with(Default::default);
        }
        if !node.is_word_end {
            node.is_word_end = true;
            self.len += 1;
        }
        Ok(())
    }

    /// Walks the trie along `word`. Returns `Absent` the moment a required
    /// edge is missing, otherwise `Found` or `Prefix` depending on the
    /// terminal node's word-end marker. The empty string lands on the root,
    /// which is never a word end, so it always reports `Prefix`.
    pub fn query(&self, word: &str) -> QueryResult {
        let mut node = &self.root;
        for c in word.chars() {
            let idx = match letter_index(c) {
                Some(idx) => idx,
                None => return QueryResult::Absent,
            };
            match node.children[idx].as_deref() {
                Some(child) => node = child,
                None => return QueryResult::Absent,
            }
        }
        if node.is_word_end {
            QueryResult::Found
        } else {
            QueryResult::Prefix
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_trie() -> Trie {
        let mut trie = Trie::new();
        for w in ["cat", "cats", "dog", "moose"] {
            trie.insert(w).unwrap();
        }
        trie
    }

    #[test]
    fn test_three_way_query() {
        let trie = sample_trie();
        assert_eq!(trie.query("cat"), QueryResult::Found);
        assert_eq!(trie.query("cats"), QueryResult::Found);
        assert_eq!(trie.query("ca"), QueryResult::Prefix);
        assert_eq!(trie.query("moos"), QueryResult::Prefix);
        assert_eq!(trie.query("catsup"), QueryResult::Absent);
        assert_eq!(trie.query("zebra"), QueryResult::Absent);
    }

    #[test]
    fn test_empty_query_is_prefix() {
        assert_eq!(sample_trie().query(""), QueryResult::Prefix);
        // The root exists even before any insert.
        assert_eq!(Trie::new().query(""), QueryResult::Prefix);
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut trie = Trie::new();
        trie.insert("cat").unwrap();
        trie.insert("cat").unwrap();
        assert_eq!(trie.len(), 1);
        assert_eq!(trie.query("cat"), QueryResult::Found);
    }

    #[test]
    fn test_prefix_word_can_be_added_later() {
        let mut trie = Trie::new();
        trie.insert("cats").unwrap();
        assert_eq!(trie.query("cat"), QueryResult::Prefix);
        trie.insert("cat").unwrap();
        assert_eq!(trie.query("cat"), QueryResult::Found);
        assert_eq!(trie.len(), 2);
    }

    #[test]
    fn test_insert_rejects_bad_input() {
        let mut trie = Trie::new();
        assert!(trie.insert("").is_err());
        assert!(trie.insert("Cat").is_err());
        assert!(trie.insert("c-t").is_err());
        assert!(trie.insert("caté").is_err());
        // Nothing was marked by the rejected inserts.
        assert!(trie.is_empty());
    }

    #[test]
    fn test_query_out_of_alphabet_is_absent() {
        let trie = sample_trie();
        assert_eq!(trie.query("c@t"), QueryResult::Absent);
        assert_eq!(trie.query("CAT"), QueryResult::Absent);
    }
}
