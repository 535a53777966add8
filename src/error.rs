use std::collections::TryReserveError;

use crate::key::{Key, ParseKeyError};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A dictionary word contains a code point with no key in `1`..`9`.
    #[error("invalid word {word:?}: character {character:?} at position {position} has no letter key")]
    InvalidWord {
        word: String,
        character: char,
        position: usize,
    },
    #[error("empty words cannot be encoded")]
    EmptyWord,
    /// A lookup sequence contains `0`, `*` or `#`.
    #[error("unexpected key '{0}' in lookup sequence")]
    UnexpectedKey(Key),
    #[error(transparent)]
    Parse(#[from] ParseKeyError),
    #[error("out of memory")]
    OutOfMemory(#[from] TryReserveError),
}
