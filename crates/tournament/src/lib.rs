//! Tournament Runner for Mancala engines
//!
//! This crate provides infrastructure for:
//! - Running matches between engines (minimax vs random, or any `Engine`)
//! - Seeded random openings so side-swapped pairs start from the same board
//! - Tallying wins and store margins
//!
//! # Usage
//!
//! ```bash
//! # Run a match between minimax and random play
//! cargo run -p tournament -- match minimax random --games 20 --depth 4
//!
//! # Ask for the best move on a given board
//! cargo run -p tournament -- analyze --board 4,4,0,5,5,5,1/4,4,4,4,4,4,0 --player b
//! ```

mod config;
mod engines;
mod error;
mod match_runner;

pub use config::*;
pub use engines::*;
pub use error::*;
pub use match_runner::*;
