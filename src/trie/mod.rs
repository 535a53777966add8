//! The keypad trie.
//!
//! Construction runs in two passes. Words are first inserted into a scratch
//! tree of boxed nodes (see [`builder`]); that tree is then frozen into a
//! single arena owned by [`Trie`] and dropped. After `build` returns nothing
//! in the trie is ever mutated, so a `&Trie` can be shared across threads
//! for lookups.

use crate::{
    dictionary::Dictionary,
    error::{Error, Result},
    key::{parse_sequence, Key},
};

use self::builder::{ScratchNode, ScratchTrie, SLOTS};

mod builder;
mod dot;

type NodeId = usize;

const ROOT: NodeId = 0;

#[derive(Debug, Clone, Default)]
struct Node {
    children: [Option<NodeId>; SLOTS], // keys 1..9
    words: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<Node>,
    word_count: usize,
    max_depth: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Self {
            nodes: vec![Node::default()],
            word_count: 0,
            max_depth: 0,
        }
    }
}

impl Trie {
    /// Builds a trie from every word of `dictionary`.
    ///
    /// All-or-nothing: a single word with a character that is not typed on
    /// keys `1`..`9` fails the whole build with [`Error::InvalidWord`], and an
    /// empty word fails it with [`Error::EmptyWord`].
    pub fn build(dictionary: &Dictionary) -> Result<Trie> {
        let mut scratch = ScratchTrie::new();
        for word in dictionary.iter() {
            scratch.insert(word)?;
        }
        log::debug!(
            "Inserted {} words into {} scratch nodes",
            scratch.word_count,
            scratch.node_count
        );

        let trie = Self::freeze(scratch)?;
        log::info!(
            "Built trie: {} words, {} nodes, max depth {}",
            trie.word_count,
            trie.node_count(),
            trie.max_depth
        );
        Ok(trie)
    }

    /// Moves the scratch tree into the arena, depth first with an explicit
    /// stack. Word lists are sorted so the result does not depend on the
    /// dictionary's iteration order.
    fn freeze(scratch: ScratchTrie) -> Result<Trie> {
        let mut nodes: Vec<Node> = Vec::new();
        nodes.try_reserve_exact(scratch.node_count)?;
        nodes.push(Node::default());

        let mut max_depth = 0;
        let mut stack: Vec<(ScratchNode, NodeId, usize)> = vec![(scratch.root, ROOT, 0)];
        while let Some((mut scratch_node, id, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);

            let mut words = std::mem::take(&mut scratch_node.words);
            words.sort();
            nodes[id].words = words;

            for (slot, child) in scratch_node.take_children() {
                let child_id = nodes.len();
                nodes.push(Node::default());
                nodes[id].children[slot] = Some(child_id);
                stack.push((*child, child_id, depth + 1));
            }
        }
        log::debug!("Froze {} nodes", nodes.len());

        Ok(Trie {
            nodes,
            word_count: scratch.word_count,
            max_depth,
        })
    }

    /// Returns the words typed by exactly `keys`.
    ///
    /// A sequence with no matching path yields an empty slice. Any `0`, `*`
    /// or `#` in `keys` is an [`Error::UnexpectedKey`], wherever it occurs.
    pub fn lookup(&self, keys: &[Key]) -> Result<&[String]> {
        if let Some(&key) = keys.iter().find(|key| key.slot().is_none()) {
            return Err(Error::UnexpectedKey(key));
        }

        let mut node = &self.nodes[ROOT];
        for slot in keys.iter().filter_map(|key| key.slot()) {
            node = match node.children[slot] {
                Some(child) => &self.nodes[child],
                None => return Ok(&[]),
            };
        }

        Ok(&node.words)
    }

    /// Parses typed keypad symbols (e.g. `"4663"`) and looks them up.
    pub fn lookup_str(&self, sequence: &str) -> Result<&[String]> {
        let keys = parse_sequence(sequence)?;
        self.lookup(&keys)
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }
}
