use conway_life::{
    draw::{self, App},
    Board, SeedPolicy,
};

use std::io::stdin;

const WIDTH: usize = 50;
const HEIGHT: usize = 50;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut board = Board::new(WIDTH, HEIGHT);

    if let Err(errors) = board.seed_from_text(readlines()?, SeedPolicy::default()) {
        for e in &errors {
            eprintln!("seed: {e}");
        }
        return Err(format!("{} seed line(s) rejected", errors.len()).into());
    }

    draw::run(App::new(board))
}

fn readlines() -> Result<Vec<String>, std::io::Error> {
    let mut lines = vec![];
    for w in stdin().lines() {
        let w = w?;
        if w.is_empty() {
            break;
        }
        lines.push(w);
    }
    Ok(lines)
}
