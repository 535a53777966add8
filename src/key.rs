use std::fmt;

use crate::error::{Error, Result};

/// A key on a 12-key telephone keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    Zero,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Star,
    Hash,
}

/// Keys `1`..`9` in slot order.
const LETTER_KEYS: [Key; 9] = [
    Key::One,
    Key::Two,
    Key::Three,
    Key::Four,
    Key::Five,
    Key::Six,
    Key::Seven,
    Key::Eight,
    Key::Nine,
];

impl Key {
    /// Maps a keypad symbol (`'0'..='9'`, `'*'`, `'#'`) to its key.
    pub fn from_symbol(symbol: char) -> Option<Key> {
        let key = match symbol {
            '0' => Key::Zero,
            '1'..='9' => LETTER_KEYS[symbol as usize - '1' as usize],
            '*' => Key::Star,
            '#' => Key::Hash,
            _ => return None,
        };
        Some(key)
    }

    pub fn symbol(self) -> char {
        match self {
            Key::Zero => '0',
            Key::One => '1',
            Key::Two => '2',
            Key::Three => '3',
            Key::Four => '4',
            Key::Five => '5',
            Key::Six => '6',
            Key::Seven => '7',
            Key::Eight => '8',
            Key::Nine => '9',
            Key::Star => '*',
            Key::Hash => '#',
        }
    }

    /// Zero-based child slot of a letter key: `1` -> 0, ..., `9` -> 8.
    /// `0`, `*` and `#` never index the trie.
    pub fn slot(self) -> Option<usize> {
        LETTER_KEYS.iter().position(|&k| k == self)
    }

    pub fn from_slot(slot: usize) -> Option<Key> {
        LETTER_KEYS.get(slot).copied()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Classifies a single code point to the keypad key it is typed with.
///
/// Letters are case-insensitive. Anything outside the fixed table yields
/// `None`; there is no fallback.
pub fn classify(c: char) -> Option<Key> {
    let c = if c.is_uppercase() {
        let mut lower = c.to_lowercase();
        match (lower.next(), lower.next()) {
            (Some(l), None) => l,
            _ => return None,
        }
    } else {
        c
    };

    let key = match c {
        '0'..='9' => return Key::from_symbol(c),
        ' ' => Key::Zero,
        '.' | ',' | '!' | '"' | '?' | ':' | ';' | '\'' | '-' | '/' | '\\' | '&' => Key::One,
        'a' | 'b' | 'c' | 'ä' | 'å' | 'á' | 'â' | 'à' | 'æ' | 'ã' | 'ç' => Key::Two,
        'd' | 'e' | 'f' | 'é' | 'è' | 'ê' | 'ë' | 'ð' => Key::Three,
        'g' | 'h' | 'i' | 'í' | 'ì' | 'î' | 'ï' => Key::Four,
        'j' | 'k' | 'l' => Key::Five,
        'm' | 'n' | 'o' | 'ñ' | 'ö' | 'ø' | 'ó' | 'ò' | 'ô' | 'õ' => Key::Six,
        'p' | 'q' | 'r' | 's' | 'ß' => Key::Seven,
        't' | 'u' | 'v' | 'ü' | 'ú' | 'ù' | 'û' => Key::Eight,
        'w' | 'x' | 'y' | 'z' | 'ý' | 'ÿ' | 'þ' => Key::Nine,
        _ => return None,
    };
    Some(key)
}

/// Classifies `c` and returns its child slot, or `None` if it is not typed
/// with one of the letter keys `1`..`9`.
pub(crate) fn letter_slot(c: char) -> Option<usize> {
    classify(c).and_then(Key::slot)
}

/// Encodes a word into the key sequence that types it.
pub fn encode(word: &str) -> Result<Vec<Key>> {
    if word.is_empty() {
        return Err(Error::EmptyWord);
    }

    word.chars()
        .enumerate()
        .map(|(position, character)| {
            classify(character)
                .filter(|key| key.slot().is_some())
                .ok_or_else(|| Error::InvalidWord {
                    word: word.to_string(),
                    character,
                    position,
                })
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{character:?} at position {position} is not a keypad symbol")]
pub struct ParseKeyError {
    pub character: char,
    pub position: usize,
}

/// Parses typed keypad symbols such as `"4663"` into keys. Whitespace is
/// ignored.
pub fn parse_sequence(text: &str) -> std::result::Result<Vec<Key>, ParseKeyError> {
    text.chars()
        .enumerate()
        .filter(|(_, c)| !c.is_whitespace())
        .map(|(position, character)| {
            Key::from_symbol(character).ok_or(ParseKeyError {
                character,
                position,
            })
        })
        .collect()
}
