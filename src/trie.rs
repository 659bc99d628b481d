//! Prefix tree over the dictionary.
//!
//! The trie answers two questions during a search: is this string a word, and
//! could it still grow into one. Children are kept in a `BTreeMap` so walks
//! (and the `Display` dump) come out in alphabetical order.

use std::collections::BTreeMap;
use std::fmt;

/// A node in the dictionary trie
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrieNode {
    children: BTreeMap<char, TrieNode>,
    is_terminal: bool,
}

impl TrieNode {
    /// Child reached by appending `c` to this node's prefix
    pub fn child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }

    /// True if the prefix leading here is a complete word
    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    fn collect_words(&self, prefix: &mut String, out: &mut Vec<String>) {
        if self.is_terminal {
            out.push(prefix.clone());
        }
        for (&c, child) in &self.children {
            prefix.push(c);
            child.collect_words(prefix, out);
            prefix.pop();
        }
    }
}

/// Dictionary of words stored as a prefix tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trie {
    root: TrieNode,
    len: usize,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a trie from a list of words.
    ///
    /// An empty list gives a valid but useless trie, so it is logged rather
    /// than rejected.
    pub fn build<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let trie: Self = words.into_iter().collect();
        if trie.is_empty() {
            log::warn!("building trie from an empty word list; every search will find nothing");
        } else {
            log::debug!("built trie with {} words", trie.len());
        }
        trie
    }

    /// Insert a word. The empty string marks the root as terminal.
    pub fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;
        for c in word.chars() {
            node = node.children.entry(c).or_default();
        }
        if !node.is_terminal {
            node.is_terminal = true;
            self.len += 1;
        }
    }

    /// Node for `prefix`, if any inserted word starts with it
    pub fn node(&self, prefix: &str) -> Option<&TrieNode> {
        prefix
            .chars()
            .try_fold(&self.root, |node, c| node.child(c))
    }

    /// True if `term` was inserted as a word
    pub fn search(&self, term: &str) -> bool {
        self.node(term).is_some_and(TrieNode::is_terminal)
    }

    /// True if some inserted word starts with `prefix` (or equals it)
    pub fn child_exists(&self, prefix: &str) -> bool {
        self.node(prefix).is_some()
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Number of distinct words stored
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// All stored words in alphabetical order
    pub fn words(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.len);
        self.root.collect_words(&mut String::new(), &mut out);
        out
    }

    /// Remove every word
    pub fn clear(&mut self) {
        self.root = TrieNode::default();
        self.len = 0;
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

/// Dumps one word per line, alphabetically
impl fmt::Display for Trie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", word)?;
        }
        Ok(())
    }
}
