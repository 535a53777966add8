use std::io::{self, Write};

use super::Trie;
use crate::key::Key;

fn escape(word: &str) -> String {
    word.replace('\\', "\\\\").replace('"', "\\\"")
}

impl Trie {
    /// Writes the node/edge structure as a GraphViz digraph. Nodes holding
    /// words are labeled with them, the rest are drawn as points; edges are
    /// labeled with their key.
    pub fn write_dot<W: Write>(&self, mut out: W) -> io::Result<()> {
        writeln!(out, "digraph t9 {{")?;
        for (id, node) in self.nodes.iter().enumerate() {
            if node.words.is_empty() {
                writeln!(out, "    n{} [shape=point];", id)?;
            } else {
                let label = node
                    .words
                    .iter()
                    .map(|w| escape(w))
                    .collect::<Vec<_>>()
                    .join("\\n");
                writeln!(out, "    n{} [label=\"{}\"];", id, label)?;
            }

            for (slot, child) in node.children.iter().enumerate() {
                if let (Some(child), Some(key)) = (child, Key::from_slot(slot)) {
                    writeln!(out, "    n{} -> n{} [label=\"{}\"];", id, child, key)?;
                }
            }
        }
        writeln!(out, "}}")
    }

    pub fn to_dot(&self) -> String {
        let mut buf = Vec::new();
        self.write_dot(&mut buf)
            .expect("Writing to a Vec<u8> does not fail");
        String::from_utf8(buf).expect("Dot output is UTF-8")
    }
}

#[cfg(test)]
mod tests {
    use crate::{dictionary::Dictionary, trie::Trie};

    #[test]
    fn test_dot_empty_trie() {
        let trie = Trie::build(&Dictionary::new()).unwrap();
        assert_eq!(trie.to_dot(), "digraph t9 {\n    n0 [shape=point];\n}\n");
    }

    #[test]
    fn test_dot_nodes_and_edges() {
        let dict: Dictionary = ["a", "b", "ad"].into_iter().collect();
        let trie = Trie::build(&dict).unwrap();

        let expected = "digraph t9 {\n\
            \x20   n0 [shape=point];\n\
            \x20   n0 -> n1 [label=\"2\"];\n\
            \x20   n1 [label=\"a\\nb\"];\n\
            \x20   n1 -> n2 [label=\"3\"];\n\
            \x20   n2 [label=\"ad\"];\n\
            }\n";
        assert_eq!(trie.to_dot(), expected);
    }

    #[test]
    fn test_dot_escapes_labels() {
        let dict: Dictionary = ["\"", "\\"].into_iter().collect();
        let trie = Trie::build(&dict).unwrap();
        let dot = trie.to_dot();
        assert!(dot.contains(r#"n1 [label="\"\n\\"];"#), "{dot}");
    }
}
