//! Tournament Runner for Othello engines
//!
//! This crate provides infrastructure for:
//! - Running matches between engines, with optional random opening plies
//! - Tracking Elo ratings across engines and settings
//! - Generating reports to check that engine changes are improvements
//!
//! # Usage
//!
//! ```bash
//! # Alpha-beta against the random baseline on a 6x6 board
//! cargo run -p tournament -- match alphabeta random --games 20 --depth 3 --size 6
//!
//! # One engine against every other known engine
//! cargo run -p tournament -- gauntlet alphabeta --games 10 --save gauntlet.json
//! ```

mod config;
mod elo;
mod engines;
mod error;
mod match_runner;
mod results;

pub use config::*;
pub use elo::*;
pub use engines::*;
pub use error::*;
pub use match_runner::*;
pub use results::*;
