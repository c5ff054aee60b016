//! Conway's Game of Life on a fixed-size board, plus a terminal
//! front end.
//!
//! [`Board`] is the whole automaton: construction, cell edits,
//! neighbor counting, the generation step, and bulk seeding from
//! `x,y` coordinate text. [`draw`] renders it in the terminal and
//! never touches the rules.

pub mod board;
pub mod draw;
pub mod seed;

pub use board::Board;
pub use seed::{SeedError, SeedPolicy};
