//! Predictive-text lookup for a 9-key telephone keypad.
//!
//! A [`Dictionary`] is built into an immutable [`Trie`] keyed by the keypad
//! key of each letter; looking up a pressed [`Key`] sequence returns every
//! word typed by exactly that sequence.

pub mod dictionary;
pub mod error;
pub mod key;
pub mod trie;

pub use dictionary::{Dictionary, LoadOptions, LoadReport};
pub use error::{Error, Result};
pub use key::{classify, encode, parse_sequence, Key, ParseKeyError};
pub use trie::Trie;
