//! Character trie with deterministic prefix enumeration.

use rustc_hash::FxHashMap;

#[derive(Default)]
struct TrieNode {
    children: FxHashMap<char, TrieNode>,
    terminal: bool,
}

/// Insertion-only prefix index.
///
/// Callers insert *cleaned* strings (see [`clean`](crate::clean)); the trie
/// itself is encoding-agnostic and stores whatever characters it is given.
#[derive(Default)]
pub struct Trie {
    root: TrieNode,
    len:  usize,
}

impl Trie {
    pub fn new() -> Trie {
        Trie::default()
    }

    /// Number of distinct words stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert a word.  Idempotent: re-inserting an existing word changes
    /// nothing.
    pub fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;
        for c in word.chars() {
            node = node.children.entry(c).or_default();
        }
        if !node.terminal {
            node.terminal = true;
            self.len += 1;
        }
    }

    /// `true` if `word` was inserted exactly (not merely as a prefix of
    /// another word).
    pub fn contains(&self, word: &str) -> bool {
        self.descend(word).is_some_and(|n| n.terminal)
    }

    /// All stored words starting with `prefix`, in lexicographic order
    /// (children are visited in sorted character order, so enumeration is
    /// deterministic and exhaustive).
    ///
    /// A prefix whose path does not exist yields an empty vec; a prefix
    /// that is itself a stored word appears in its own results.
    pub fn suggest(&self, prefix: &str) -> Vec<String> {
        let Some(node) = self.descend(prefix) else {
            return Vec::new();
        };

        let mut matches = Vec::new();
        let mut word = String::from(prefix);
        collect(node, &mut word, &mut matches);
        matches
    }

    fn descend(&self, path: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for c in path.chars() {
            node = node.children.get(&c)?;
        }
        Some(node)
    }
}

/// Depth-first enumeration of every terminal in `node`'s subtree, with
/// `word` holding the path from the root.
fn collect(node: &TrieNode, word: &mut String, matches: &mut Vec<String>) {
    if node.terminal {
        matches.push(word.clone());
    }

    let mut keys: Vec<char> = node.children.keys().copied().collect();
    keys.sort_unstable();

    for c in keys {
        word.push(c);
        collect(&node.children[&c], word, matches);
        word.pop();
    }
}
