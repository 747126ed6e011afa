pub mod board;
pub mod dictionary;
pub mod error;
pub mod solver;
pub mod trie;

pub use board::Board;
pub use error::SolverError;
pub use solver::solve;
pub use trie::{QueryResult, Trie};
