use std::io::Cursor;

use t9::{encode, parse_sequence, Dictionary, Error, Key, LoadOptions, Trie};

const WORDS: &str = "\
home
good
gone
hold
hole
in
go
café!
it's

ice cream
jalapeño
";

fn load(options: LoadOptions) -> anyhow::Result<Trie> {
    let (dict, _) = Dictionary::from_reader(Cursor::new(WORDS), options)?;
    Ok(Trie::build(&dict)?)
}

#[test]
fn test_load_build_lookup() {
    let trie = load(LoadOptions::default()).expect("Lenient load skips 'ice cream'");

    assert_eq!(trie.lookup_str("4663").unwrap(), ["gone", "good", "home"]);
    assert_eq!(trie.lookup_str("46").unwrap(), ["go", "in"]);
    assert_eq!(trie.lookup_str("22331").unwrap(), ["café!"]);
    assert_eq!(trie.lookup_str("4817").unwrap(), ["it's"]);
    assert_eq!(
        trie.lookup(&encode("jalapeño").unwrap()).unwrap(),
        ["jalapeño"]
    );
    assert_eq!(trie.lookup_str("4653").unwrap(), ["hold", "hole"]);
    assert!(trie.lookup_str("99").unwrap().is_empty());
    assert_eq!(trie.word_count(), 10);
}

#[test]
fn test_strict_load_fails_build() {
    let err = load(LoadOptions { strict: true }).unwrap_err();
    match err.downcast_ref::<Error>() {
        Some(Error::InvalidWord { word, .. }) => assert_eq!(word, "ice cream"),
        other => panic!("Expected InvalidWord, found {:?}", other),
    }
}

#[test]
fn test_unexpected_key_leaves_trie_usable() {
    let trie = load(LoadOptions::default()).unwrap();
    let keys = parse_sequence("46*").unwrap();
    assert!(matches!(
        trie.lookup(&keys),
        Err(Error::UnexpectedKey(Key::Star))
    ));
    assert_eq!(trie.lookup_str("46").unwrap(), ["go", "in"]);
}

#[test]
fn test_concurrent_lookups() {
    let trie = load(LoadOptions::default()).unwrap();
    let sequences = ["4663", "46", "22331", "99", "4"];

    std::thread::scope(|s| {
        let handles = (0..4)
            .map(|_| {
                s.spawn(|| {
                    sequences
                        .iter()
                        .map(|seq| trie.lookup_str(seq).unwrap().len())
                        .collect::<Vec<_>>()
                })
            })
            .collect::<Vec<_>>();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), vec![3, 2, 1, 0, 0]);
        }
    });
}

#[test]
fn test_dot_export_lists_every_word() {
    let trie = load(LoadOptions::default()).unwrap();
    let dot = trie.to_dot();
    assert!(dot.starts_with("digraph t9 {\n"));
    assert!(dot.ends_with("}\n"));
    assert!(dot.contains("[label=\"gone\\ngood\\nhome\"]"));
    assert_eq!(dot.matches(" -> ").count(), trie.node_count() - 1);
}
