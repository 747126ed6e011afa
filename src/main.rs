use std::env;
use std::path::Path;
use std::process;

use tracing_subscriber::EnvFilter;

use boggle::dictionary;
use boggle::{solve, Board, SolverError};

#[macro_use]
extern crate text_io;

/// Prompts for a board on stdin, one row of letters per line.
fn read_board() -> Result<Board, SolverError> {
    println!("Board size:");
    let side: usize = read!("{}\n");

    let mut rows = Vec::with_capacity(side);
    for i in 0..side {
        println!("Row {} ({} letters):", i + 1, side);
        let line: String = read!("{}\n");
        rows.push(line.trim().to_lowercase().chars().collect());
    }
    Board::from_rows(rows)
}

fn run(dict_path: &str, board_path: Option<&str>) -> Result<(), SolverError> {
    let words = if Path::new(dict_path).extension().map_or(false, |e| e == "json") {
        dictionary::load_words_json(dict_path)?
    } else {
        dictionary::load_words_txt(dict_path)?
    };
    let trie = dictionary::build_trie(words)?;
    println!("Number of Words: {}", trie.len());

    let board = match board_path {
        Some(path) => Board::from_file(path)?,
        None => read_board()?,
    };

    let found = solve(&board, &trie);
    for (i, word) in found.iter().enumerate() {
        println!("{}. {}", i + 1, word);
    }
    println!("Found {} words", found.len());
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("usage: {} <words.txt|words.json> [board.json]", args[0]);
        process::exit(2);
    }

    if let Err(e) = run(&args[1], args.get(2).map(String::as_str)) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
