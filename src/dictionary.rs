use std::{
    collections::{hash_set, HashSet},
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use anyhow::Context;

use crate::{error::Result, key};

/// An unordered set of distinct words.
///
/// Words are not validated against the keypad table here; `Trie::build`
/// does that.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// Adds `word` if absent. Returns `true` if it was newly inserted.
    pub fn insert(&mut self, word: &str) -> Result<bool> {
        if self.words.contains(word) {
            return Ok(false);
        }
        self.words.try_reserve(1)?;
        let mut owned = String::new();
        owned.try_reserve_exact(word.len())?;
        owned.push_str(word);
        Ok(self.words.insert(owned))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Reads a word list: one word per line, whitespace trimmed, blank lines
    /// skipped.
    pub fn from_reader<R: BufRead>(
        reader: R,
        options: LoadOptions,
    ) -> anyhow::Result<(Dictionary, LoadReport)> {
        let mut dictionary = Dictionary::new();
        let mut report = LoadReport::default();

        for (idx, line) in reader.lines().enumerate() {
            let line_num = idx + 1;
            let line = line.with_context(|| format!("Read dictionary line {}", line_num))?;
            report.lines += 1;

            let word = line.trim();
            if word.is_empty() {
                report.blank += 1;
                continue;
            }

            if !options.strict {
                if let Err(err) = key::encode(word) {
                    log::warn!("Skipping dictionary line {}: {}", line_num, err);
                    report.skipped += 1;
                    continue;
                }
            }

            if dictionary
                .insert(word)
                .with_context(|| format!("Insert dictionary line {}", line_num))?
            {
                report.accepted += 1;
            } else {
                report.duplicates += 1;
            }
        }

        log::info!(
            "Loaded {} words from {} lines ({} skipped, {} duplicates, {} blank)",
            report.accepted,
            report.lines,
            report.skipped,
            report.duplicates,
            report.blank
        );
        Ok((dictionary, report))
    }

    pub fn load<P: AsRef<Path>>(
        path: P,
        options: LoadOptions,
    ) -> anyhow::Result<(Dictionary, LoadReport)> {
        let path = path.as_ref();
        let file =
            File::open(path).with_context(|| format!("Open dictionary {}", path.display()))?;
        Self::from_reader(BufReader::new(file), options)
            .with_context(|| format!("Load dictionary {}", path.display()))
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a String;
    type IntoIter = hash_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

impl FromIterator<String> for Dictionary {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a str> for Dictionary {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(str::to_string).collect()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    /// Keep lines with unsupported characters so that the trie build rejects
    /// the whole dictionary, instead of skipping them with a warning.
    pub strict: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub lines: usize,
    pub accepted: usize,
    pub duplicates: usize,
    pub blank: usize,
    pub skipped: usize,
}
