use crate::{
    error::{Error, Result},
    key::letter_slot,
};

pub(super) const SLOTS: usize = 9;

/// Scratch node of the first build pass: freely mutable and boxed.
pub(super) struct ScratchNode {
    pub(super) children: [Option<Box<Self>>; SLOTS], // keys 1..9
    pub(super) words: Vec<String>,
}

impl ScratchNode {
    fn new() -> Self {
        Self {
            children: std::array::from_fn(|_| None),
            words: Vec::new(),
        }
    }

    pub(super) fn take_children(&mut self) -> impl Iterator<Item = (usize, Box<Self>)> + '_ {
        self.children
            .iter_mut()
            .enumerate()
            .filter_map(|(slot, child)| child.take().map(|child| (slot, child)))
    }
}

impl Drop for ScratchNode {
    // Iterative, so a very long word cannot overflow the stack when a failed
    // build drops its scratch tree.
    fn drop(&mut self) {
        let mut stack = self
            .take_children()
            .map(|(_, child)| child)
            .collect::<Vec<_>>();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.take_children().map(|(_, child)| child));
        }
    }
}

pub(super) struct ScratchTrie {
    pub(super) root: ScratchNode,
    pub(super) node_count: usize,
    pub(super) word_count: usize,
}

impl ScratchTrie {
    pub(super) fn new() -> Self {
        Self {
            root: ScratchNode::new(),
            node_count: 1,
            word_count: 0,
        }
    }

    /// Walks `word` from the root, creating missing children, and appends a
    /// copy of it to the node reached by its last code point.
    pub(super) fn insert(&mut self, word: &str) -> Result<()> {
        if word.is_empty() {
            return Err(Error::EmptyWord);
        }

        let mut node = &mut self.root;
        for (position, character) in word.chars().enumerate() {
            let idx = letter_slot(character).ok_or_else(|| Error::InvalidWord {
                word: word.to_string(),
                character,
                position,
            })?;
            node = node.children[idx].get_or_insert_with(|| {
                self.node_count += 1;
                Box::new(ScratchNode::new())
            });
        }

        node.words.try_reserve(1)?;
        let mut owned = String::new();
        owned.try_reserve_exact(word.len())?;
        owned.push_str(word);
        node.words.push(owned);
        self.word_count += 1;
        Ok(())
    }
}
