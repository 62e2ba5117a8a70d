//! Twisty Puzzle Core
//!
//! Models the facelet state of N×N cubes (2×2 through 7×7), applies WCA-style
//! move notation to it, and generates randomized scrambles with the usual
//! anti-cancellation constraints. Everything is synchronous and allocation-light;
//! a [`cube::CubeState`] is a plain value owned by its caller.

pub mod cube;
pub mod moves;
pub mod net;
pub mod puzzles;
pub mod scramble;

pub use cube::CubeState;
pub use moves::{Face, Move};
pub use puzzles::PuzzleKind;
