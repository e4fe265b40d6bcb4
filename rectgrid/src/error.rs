use std::{num::ParseIntError, str::Utf8Error};
use thiserror::Error;

/// Reasons a [`Grid`](crate::Grid) refuses a rectangle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Another rectangle with the same name is already stored.
    #[error("a rectangle named {0} already exists in this grid")]
    NameConflict(String),
    /// The corners are swapped or the rectangle reaches outside of the grid.
    #[error("{0}")]
    IllegalSize(String),
}

/// A line of a bulk-load source that does not follow the
/// `NAME;(x,y);(x,y)` layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("expected 3 fields separated by ';', found {0}")]
    FieldCount(usize),
    #[error("name {0:?} must be exactly 4 characters long")]
    NameLength(String),
    #[error("point {0:?} must be written as (x,y)")]
    Point(String),
    #[error("coordinate {value:?} is not an integer: {source}")]
    Coordinate {
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("line is not valid UTF-8: {0}")]
    Encoding(#[source] Utf8Error),
}

/// A name that breaks the four lowercase letters rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("rectangle name length must be four characters long, got {0}")]
    Length(usize),
    #[error("character '{0}' in rectangle name must be a lowercase letter")]
    Character(char),
}

/// Why a single line of a bulk load was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadErrorKind {
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// A skipped bulk-load line together with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {kind}")]
pub struct LoadError {
    pub line: usize,
    pub kind: LoadErrorKind,
}

impl LoadError {
    pub(crate) fn new<K: Into<LoadErrorKind>>(line: usize, kind: K) -> Self {
        Self {
            line,
            kind: kind.into(),
        }
    }
}
