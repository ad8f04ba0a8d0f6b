use std::{io, path::PathBuf};

use thiserror::Error;

/// Malformed grid text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseGridError {
    #[error("empty input")]
    Empty,

    #[error("first row is empty")]
    EmptyRow,

    #[error("row {row} has {found} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid character {ch:?} at row {row}, column {col}")]
    InvalidChar { ch: char, row: usize, col: usize },
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("could not read file: {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not read stdin")]
    Stdin(#[source] io::Error),

    #[error("no input file given and stdin is a terminal")]
    NoInput,
}
