//! Word list loading and suggestion ranking.
//!
//! A `Dictionary` holds an immutable snapshot (trie + ordered word list)
//! behind a swappable `Arc`. Loading builds a complete new snapshot off to
//! the side and publishes it with a single pointer swap, so a concurrent
//! query sees either the old or the new word list, never a half-built trie.
//!
//! Suggestions are ranked in three stages feeding one capped accumulator:
//! 1. the typed prefix itself, when it is a word
//! 2. trie completions below the prefix, in ascending character order
//! 3. an edit-distance scan over the word list, only when stages 1 and 2
//!    came up short

use std::collections::HashSet;
use std::io::Read;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, RwLock};
use std::thread::JoinHandle;

use anyhow::{Context, Result};
use lru::LruCache;
use tracing::{debug, error, warn};

use crate::candidate::{Suggestion, SuggestionList, SuggestionSource};
use crate::composer::WordComposer;
use crate::fuzzy::EditDistanceMatcher;
use crate::trie::TrieNode;
use crate::{utils, Config};

/// Immutable dictionary state published by a load.
#[derive(Debug)]
struct Snapshot {
    trie: TrieNode,
    /// Every indexed word once, in load order (scanned by the fuzzy stage)
    words: Vec<String>,
    loaded: bool,
    cache: Option<Mutex<LruCache<String, Vec<Suggestion>>>>,
    cache_hits: AtomicUsize,
    cache_misses: AtomicUsize,
}

impl Snapshot {
    fn empty(cache_size: usize) -> Self {
        Self::build(Vec::new(), false, cache_size)
    }

    /// Index already-normalized words. Repeats are kept once.
    fn build(words: Vec<String>, loaded: bool, cache_size: usize) -> Self {
        let mut trie = TrieNode::new();
        let mut seen = HashSet::with_capacity(words.len());
        let mut list = Vec::with_capacity(words.len());
        for word in words {
            if seen.insert(word.clone()) {
                trie.insert(&word);
                list.push(word);
            }
        }

        Self {
            trie,
            words: list,
            loaded,
            cache: NonZeroUsize::new(cache_size).map(|n| Mutex::new(LruCache::new(n))),
            cache_hits: AtomicUsize::new(0),
            cache_misses: AtomicUsize::new(0),
        }
    }
}

/// Word-prediction dictionary.
///
/// Construct it once, share it behind an `Arc`, and load it (possibly in the
/// background). Queries before the first load completes return no
/// suggestions rather than blocking.
#[derive(Debug)]
pub struct Dictionary {
    config: Config,
    matcher: EditDistanceMatcher,
    current: RwLock<Arc<Snapshot>>,
}

impl Dictionary {
    /// Create an empty, unloaded dictionary with the default configuration.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        let matcher = config.matcher();
        let current = RwLock::new(Arc::new(Snapshot::empty(config.max_cache_size)));
        Self {
            config,
            matcher,
            current,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn snapshot(&self) -> Arc<Snapshot> {
        // A poisoned lock still guards a complete snapshot: the only writer
        // replaces the Arc in one assignment.
        match self.current.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    fn publish(&self, snapshot: Snapshot) {
        let snapshot = Arc::new(snapshot);
        match self.current.write() {
            Ok(mut guard) => *guard = snapshot,
            Err(poisoned) => *poisoned.into_inner() = snapshot,
        }
    }

    /// Replace the dictionary contents with `words`.
    ///
    /// Each entry is trimmed and lowercased; entries that end up empty are
    /// skipped. Calling this again discards the previous contents. Returns
    /// the number of distinct words indexed.
    pub fn load<I, S>(&self, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let cleaned: Vec<String> = words
            .into_iter()
            .filter_map(|w| utils::normalize_word(w.as_ref()))
            .collect();
        let snapshot = Snapshot::build(cleaned, true, self.config.max_cache_size);
        let count = snapshot.words.len();
        self.publish(snapshot);
        debug!(words = count, "dictionary loaded");
        count
    }

    /// Load a word list stored as a JSON array of strings.
    ///
    /// Unreadable or malformed input leaves the dictionary empty and returns
    /// 0; the failure is logged, not returned.
    pub fn load_json<R: Read>(&self, reader: R) -> usize {
        self.load_or_clear(read_word_list(reader))
    }

    pub fn load_json_str(&self, json: &str) -> usize {
        self.load_json(json.as_bytes())
    }

    /// Load a JSON word list from a file. Same failure handling as
    /// [`Dictionary::load_json`].
    pub fn load_json_file<P: AsRef<Path>>(&self, path: P) -> usize {
        let path = path.as_ref();
        let words = std::fs::File::open(path)
            .map_err(anyhow::Error::from)
            .and_then(|f| read_word_list(std::io::BufReader::new(f)))
            .with_context(|| format!("load word list {}", path.display()));
        self.load_or_clear(words)
    }

    fn load_or_clear(&self, words: Result<Vec<String>>) -> usize {
        match words {
            Ok(words) => self.load(words),
            Err(e) => {
                warn!("failed to load word list, dictionary left empty: {e:#}");
                self.publish(Snapshot::empty(self.config.max_cache_size));
                0
            }
        }
    }

    /// Run [`Dictionary::load`] on a worker thread.
    ///
    /// Queries issued before the returned handle finishes see the previous
    /// contents (or nothing, for a fresh dictionary).
    pub fn load_in_background(self: &Arc<Self>, words: Vec<String>) -> LoadHandle {
        let dict = Arc::clone(self);
        LoadHandle {
            worker: std::thread::spawn(move || dict.load(words)),
        }
    }

    /// Run [`Dictionary::load_json_file`] on a worker thread.
    pub fn load_json_file_in_background(self: &Arc<Self>, path: impl Into<PathBuf>) -> LoadHandle {
        let dict = Arc::clone(self);
        let path = path.into();
        LoadHandle {
            worker: std::thread::spawn(move || dict.load_json_file(path)),
        }
    }

    /// True once a load has succeeded.
    pub fn is_loaded(&self) -> bool {
        self.snapshot().loaded
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.snapshot().words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `word` (case-insensitive) is in the dictionary.
    pub fn contains(&self, word: &str) -> bool {
        self.snapshot().trie.contains_word(&utils::fold_prefix(word))
    }

    /// All words in load order.
    pub fn words(&self) -> Vec<String> {
        self.snapshot().words.clone()
    }

    /// Ranked suggestions for the typed `prefix`.
    ///
    /// At most `Config::max_suggestions` words, no repeats, exact match first.
    pub fn suggestions(&self, prefix: &str) -> Vec<String> {
        self.ranked(prefix).into_iter().map(|s| s.text).collect()
    }

    /// Suggestions for whatever the composer currently holds.
    pub fn suggestions_for(&self, composer: &WordComposer) -> Vec<String> {
        self.suggestions(&composer.current_word())
    }

    /// Like [`Dictionary::suggestions`], also reporting which stage produced
    /// each word.
    pub fn ranked(&self, prefix: &str) -> Vec<Suggestion> {
        let snap = self.snapshot();
        let prefix = utils::fold_prefix(prefix);

        if let Some(cache) = &snap.cache {
            if let Ok(mut cache) = cache.lock() {
                if let Some(hit) = cache.get(&prefix) {
                    snap.cache_hits.fetch_add(1, Ordering::Relaxed);
                    return hit.clone();
                }
            }
        }
        snap.cache_misses.fetch_add(1, Ordering::Relaxed);

        let ranked = self.rank(&snap, &prefix);

        if let Some(cache) = &snap.cache {
            if let Ok(mut cache) = cache.lock() {
                cache.put(prefix, ranked.clone());
            }
        }
        ranked
    }

    fn rank(&self, snap: &Snapshot, prefix: &str) -> Vec<Suggestion> {
        let mut list = SuggestionList::with_capacity(self.config.max_suggestions);

        if snap.trie.contains_word(prefix) {
            list.push(prefix, SuggestionSource::Exact);
        }

        if !list.is_full() {
            if let Some(node) = snap.trie.descend(prefix) {
                for word in node.words(prefix) {
                    list.push(&word, SuggestionSource::Completion);
                    if list.is_full() {
                        break;
                    }
                }
            }
        }

        // The fallback scans the whole list, so only pay for it when
        // structural matching came up short.
        if list.len() < self.config.fuzzy_trigger {
            for word in &snap.words {
                if list.is_full() {
                    break;
                }
                if list.contains(word) {
                    continue;
                }
                if let Some(distance) = self.matcher.match_distance(prefix, word) {
                    list.push(word, SuggestionSource::Fuzzy { distance });
                }
            }
        }

        list.into_suggestions()
    }

    /// Cache (hits, misses) for the current snapshot.
    pub fn cache_stats(&self) -> (usize, usize) {
        let snap = self.snapshot();
        (
            snap.cache_hits.load(Ordering::Relaxed),
            snap.cache_misses.load(Ordering::Relaxed),
        )
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a JSON array of strings.
fn read_word_list<R: Read>(reader: R) -> Result<Vec<String>> {
    serde_json::from_reader(reader).context("parse word list as a JSON array of strings")
}

/// Completion handle for a background load.
#[derive(Debug)]
pub struct LoadHandle {
    worker: JoinHandle<usize>,
}

impl LoadHandle {
    /// Whether the load has finished (successfully or not).
    pub fn is_finished(&self) -> bool {
        self.worker.is_finished()
    }

    /// Block until the load is done and return the number of words loaded.
    pub fn wait(self) -> usize {
        match self.worker.join() {
            Ok(count) => count,
            Err(_) => {
                error!("dictionary load thread panicked");
                0
            }
        }
    }
}
