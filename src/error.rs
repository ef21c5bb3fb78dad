use thiserror::Error;

use crate::grid::Pos;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by environment and agent construction, plus invalid
/// action indices at step time. Illegal moves and episode timeouts are not
/// errors; they flow through the normal reward/terminal channel.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    #[error("grid must have at least one row and one column")]
    EmptyGrid,

    #[error("grid must be rectangular: row {row} has {got} cells, expected {expected}")]
    RaggedGrid {
        row: usize,
        got: usize,
        expected: usize,
    },

    #[error("{name} coordinate {pos:?} is outside the {rows}x{cols} grid")]
    OutOfBounds {
        name: &'static str,
        pos: Pos,
        rows: usize,
        cols: usize,
    },

    #[error("{name} coordinate {pos:?} is a blocked cell")]
    BlockedCell { name: &'static str, pos: Pos },

    #[error("invalid value for `{name}`: {value} must be between {min} and {max}")]
    Interval {
        name: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },

    #[error("invalid action index {index}: expected 0..{n_actions}")]
    InvalidAction { index: usize, n_actions: usize },
}
