/// Ordered prefix trie over dictionary words.
use std::collections::BTreeMap;

/// A prefix tree over lowercase words.
///
/// Children are kept in a `BTreeMap`, so every traversal visits them in
/// ascending character order and completions come out in the same order on
/// every run.
///
/// # Example
/// ```
/// use wordpredict_core::trie::TrieNode;
///
/// let mut trie = TrieNode::new();
/// trie.insert("cat");
/// trie.insert("car");
/// trie.insert("cart");
///
/// assert!(trie.contains_word("car"));
/// assert!(!trie.contains_word("ca"));
///
/// let node = trie.descend("ca").unwrap();
/// assert_eq!(node.collect_words("ca"), vec!["car", "cart", "cat"]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct TrieNode {
    children: BTreeMap<char, Box<TrieNode>>,
    is_end: bool,
}

impl TrieNode {
    /// Create a new empty trie root.
    pub fn new() -> Self {
        Self {
            children: BTreeMap::new(),
            is_end: false,
        }
    }

    /// Insert a word, creating any missing nodes along its path.
    ///
    /// Inserting the same word twice has no further effect.
    pub fn insert(&mut self, word: &str) {
        let mut node = self;
        for ch in word.chars() {
            node = node
                .children
                .entry(ch)
                .or_insert_with(|| Box::new(TrieNode::new()));
        }
        node.is_end = true;
    }

    /// Walk `prefix` from this node.
    ///
    /// Returns `None` as soon as a character has no matching child. The empty
    /// prefix returns `self`.
    pub fn descend(&self, prefix: &str) -> Option<&TrieNode> {
        let mut node = self;
        for ch in prefix.chars() {
            node = node.children.get(&ch)?;
        }
        Some(node)
    }

    /// Check whether the trie contains exactly the given word.
    ///
    /// Returns `true` only if `word` was inserted as a complete word,
    /// not when it is merely a prefix of one.
    pub fn contains_word(&self, word: &str) -> bool {
        self.descend(word).is_some_and(|node| node.is_end)
    }

    /// True for a root that holds no words at all.
    pub fn is_empty(&self) -> bool {
        !self.is_end && self.children.is_empty()
    }

    /// Number of complete words at or below this node.
    pub fn word_count(&self) -> usize {
        let own = usize::from(self.is_end);
        own + self
            .children
            .values()
            .map(|child| child.word_count())
            .sum::<usize>()
    }

    /// Lazily enumerate every complete word reachable from this node.
    ///
    /// Each word is reported as `prefix` followed by the path taken below
    /// this node. A node's own word comes before the words of its children,
    /// and children are visited in ascending character order. Calling this
    /// again restarts the enumeration from the beginning.
    ///
    /// # Example
    /// ```
    /// use wordpredict_core::trie::TrieNode;
    ///
    /// let mut trie = TrieNode::new();
    /// for w in ["dog", "do", "dot"] {
    ///     trie.insert(w);
    /// }
    ///
    /// let first_two: Vec<String> = trie.words("").take(2).collect();
    /// assert_eq!(first_two, vec!["do", "dog"]);
    /// ```
    pub fn words(&self, prefix: &str) -> Words<'_> {
        Words {
            stack: vec![(self, prefix.to_string())],
        }
    }

    /// Eager form of [`TrieNode::words`].
    pub fn collect_words(&self, prefix: &str) -> Vec<String> {
        self.words(prefix).collect()
    }
}

/// Depth-first iterator over the complete words below a trie node.
///
/// Created by [`TrieNode::words`].
#[derive(Debug)]
pub struct Words<'a> {
    // Pending nodes with the text spelled out to reach them. Children are
    // pushed in reverse so the smallest character is popped first.
    stack: Vec<(&'a TrieNode, String)>,
}

impl Iterator for Words<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while let Some((node, text)) = self.stack.pop() {
            for (ch, child) in node.children.iter().rev() {
                let mut child_text = String::with_capacity(text.len() + ch.len_utf8());
                child_text.push_str(&text);
                child_text.push(*ch);
                self.stack.push((child, child_text));
            }
            if node.is_end {
                return Some(text);
            }
        }
        None
    }
}
