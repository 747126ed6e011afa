use std::collections::HashSet;

use ndarray::Array2;
use tracing::debug;

use crate::board::Board;
use crate::trie::{QueryResult, Trie};

/// Words in first-discovery order with set-membership dedup. A plain
/// `HashSet` alone would lose the traversal order.
#[derive(Debug, Default)]
struct FoundWords {
    words: Vec<String>,
    seen: HashSet<String>,
}

impl FoundWords {
    fn insert(&mut self, word: &str) {
        if self.seen.insert(word.to_string()) {
            self.words.push(word.to_string());
        }
    }
}

/// Mutable state for one solve call: the visited mask and the in-progress
/// word buffer are shared across the whole recursion and restored on every
/// exit path, so no per-call allocation happens while backtracking.
struct Search<'a> {
    board: &'a Board,
    trie: &'a Trie,
    visited: Array2<bool>,
    current: String,
    found: FoundWords,
}

impl Search<'_> {
    /// Recursive step. `current` already ends with the letter at
    /// `(row, col)` and that cell is marked visited.
    fn extend(&mut self, row: usize, col: usize) {
        match self.trie.query(&self.current) {
            // No dictionary word has this prefix, so no extension can help.
            QueryResult::Absent => return,
            QueryResult::Found => self.found.insert(&self.current),
            QueryResult::Prefix => {}
        }

        let side = self.board.side();
        for dr in -1isize..=1 {
            for dc in -1isize..=1 {
                let r = row as isize + dr;
                let c = col as isize + dc;
                if r < 0 || c < 0 || r as usize >= side || c as usize >= side {
                    continue;
                }
                let (r, c) = (r as usize, c as usize);
                // The zero delta lands on a visited cell, so it is skipped
                // here along with every other cell already on the path.
                if self.visited[(r, c)] {
                    continue;
                }

                self.visited[(r, c)] = true;
                self.current.push(self.board[(r, c)]);
                self.extend(r, c);
                self.current.pop();
                self.visited[(r, c)] = false;
            }
        }
    }
}

/// Enumerates every trie word traceable on the board as a simple path of
/// 8-connected cells, in first-discovery order and without duplicates.
/// Starting cells are tried in row-major order; neighbors are explored
/// row-delta first, then column-delta, so the result is deterministic.
pub fn solve(board: &Board, trie: &Trie) -> Vec<String> {
    let side = board.side();
    let mut search = Search {
        board,
        trie,
        visited: Array2::from_elem((side, side), false),
        current: String::new(),
        found: FoundWords::default(),
    };

    for row in 0..side {
        for col in 0..side {
            search.visited[(row, col)] = true;
            search.current.push(board[(row, col)]);
            search.extend(row, col);
            search.current.pop();
            search.visited[(row, col)] = false;
        }
    }

    debug!(side, found = search.found.words.len(), "board solved");
    search.found.words
}
