// core/tests/suggestion_ranking.rs
//
// Integration tests for the suggestion pipeline.
//
// Tests cover:
// - Exact match, trie completion and fuzzy fallback precedence
// - Result cap and duplicate freedom
// - Reload idempotence and soft load failures
// - Background loading and queries issued before it completes

use std::sync::Arc;

use proptest::prelude::*;
use wordpredict_core::fuzzy::distance;
use wordpredict_core::{Config, Dictionary, SuggestionSource, WordComposer};

const SAMPLE: [&str; 4] = ["cat", "car", "cart", "dog"];

fn loaded(words: &[&str]) -> Dictionary {
    let dict = Dictionary::new();
    dict.load(words);
    dict
}

#[test]
fn test_completions_in_ascending_character_order() {
    let dict = loaded(&SAMPLE);
    assert_eq!(dict.suggestions("ca"), vec!["car", "cart", "cat"]);
}

#[test]
fn test_far_query_yields_nothing() {
    let dict = loaded(&SAMPLE);
    assert!(dict.suggestions("xyz").is_empty());
}

#[test]
fn test_unloaded_dictionary_yields_nothing() {
    let dict = Dictionary::new();
    for q in ["", "a", "cat", "xyz"] {
        assert!(dict.suggestions(q).is_empty(), "query {q:?}");
    }
}

#[test]
fn test_every_word_is_its_own_first_suggestion() {
    let words = ["The", " quick ", "brown", "fox", "jumps", "over", "the", "lazy", "dog", "do", "dot"];
    let dict = loaded(&words);
    for w in words {
        let w = w.trim().to_lowercase();
        assert_eq!(dict.suggestions(&w).first(), Some(&w));
    }
}

#[test]
fn test_decomposed_word_comes_back_unchanged() {
    // "e" followed by a combining acute, not the precomposed U+00E9
    let word = "cafe\u{301}";
    let dict = loaded(&[word, "cafes"]);

    assert_eq!(dict.words(), vec![word.to_string(), "cafes".to_string()]);
    assert_eq!(dict.suggestions(word).first().map(String::as_str), Some(word));
    // 's' (U+0073) sorts before the combining mark (U+0301)
    assert_eq!(dict.suggestions("cafe"), vec!["cafes", word]);
    assert!(dict.contains(word));
    assert!(!dict.contains("caf\u{e9}"));
}

#[test]
fn test_fuzzy_only_when_structural_matches_starve() {
    let dict = loaded(&["help", "hello", "helm", "hold"]);

    // three completions already: fallback must not run
    let ranked = dict.ranked("hel");
    assert_eq!(ranked.len(), 3);
    assert!(ranked.iter().all(|s| s.source == SuggestionSource::Completion));

    // one completion: fallback tops up in load order ("hello" is three edits away)
    let ranked = dict.ranked("hol");
    let texts: Vec<&str> = ranked.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(texts, vec!["hold", "help", "helm"]);
    assert_eq!(ranked[1].source, SuggestionSource::Fuzzy { distance: 2 });
}

#[test]
fn test_fuzzy_fallback_stops_at_cap() {
    let dict = loaded(&["ab", "ac", "ad", "ae", "af", "ag", "ah"]);
    // "zz" has no completions; every word is two substitutions away
    assert_eq!(dict.suggestions("zz"), vec!["ab", "ac", "ad", "ae", "af"]);
}

#[test]
fn test_reload_is_idempotent() {
    let dict = loaded(&SAMPLE);
    let queries = ["", "c", "ca", "car", "do", "dgo", "xyz"];
    let before: Vec<Vec<String>> = queries.iter().map(|q| dict.suggestions(q)).collect();

    dict.load(SAMPLE);
    let after: Vec<Vec<String>> = queries.iter().map(|q| dict.suggestions(q)).collect();

    assert_eq!(before, after);
    assert_eq!(dict.len(), 4);
}

#[test]
fn test_suggestions_for_composer() {
    let dict = loaded(&SAMPLE);
    let mut composer = WordComposer::new();
    composer.append('d', Vec::new());
    composer.append('o', Vec::new());
    assert_eq!(dict.suggestions_for(&composer), vec!["dog"]);

    composer.reset();
    assert_eq!(dict.suggestions_for(&composer), dict.suggestions(""));
}

#[test]
fn test_json_file_load() {
    let path = std::env::temp_dir().join(format!("wordpredict_words_{}.json", std::process::id()));
    std::fs::write(&path, r#"["Cat", "car", "  cart", "dog", ""]"#).unwrap();

    let dict = Dictionary::new();
    let n = dict.load_json_file(&path);
    let _ = std::fs::remove_file(&path);

    assert_eq!(n, 4);
    assert!(dict.is_loaded());
    assert_eq!(dict.suggestions("ca"), vec!["car", "cart", "cat"]);
}

#[test]
fn test_failed_reload_clears_previous_words() {
    let dict = loaded(&SAMPLE);
    assert_eq!(dict.load_json_str("[\"unterminated"), 0);
    assert!(dict.is_empty());
    assert!(dict.suggestions("ca").is_empty());
}

#[test]
fn test_background_json_load() {
    let path = std::env::temp_dir().join(format!("wordpredict_bg_{}.json", std::process::id()));
    std::fs::write(&path, r#"["alpha", "alps", "beta"]"#).unwrap();

    let dict = Arc::new(Dictionary::new());
    let handle = dict.load_json_file_in_background(path.clone());
    // whatever the timing, an early query never fails
    let early = dict.suggestions("al");
    assert!(early.is_empty() || early == vec!["alpha", "alps"]);

    assert_eq!(handle.wait(), 3);
    let _ = std::fs::remove_file(&path);
    assert_eq!(dict.suggestions("al"), vec!["alpha", "alps"]);
}

#[test]
fn test_query_before_background_load_is_empty_then_filled() {
    let dict = Arc::new(Dictionary::new());
    // nothing loaded yet: empty, and not cached past the load
    assert!(dict.suggestions("al").is_empty());

    let words = vec!["alpha".to_string(), "alps".to_string(), "beta".to_string()];
    let handle = dict.load_in_background(words);
    assert_eq!(handle.wait(), 3);
    assert_eq!(dict.suggestions("al"), vec!["alpha", "alps"]);
}

#[test]
fn test_concurrent_queries_during_reload() {
    let dict = Arc::new(loaded(&["one", "only", "onset"]));
    let readers: Vec<_> = (0..4)
        .map(|_| {
            let dict = Arc::clone(&dict);
            std::thread::spawn(move || {
                for _ in 0..200 {
                    let s = dict.suggestions("on");
                    // either the old list or the new one, never a mix
                    assert!(
                        s == vec!["one", "only", "onset"] || s == vec!["onion", "onward"],
                        "unexpected {s:?}"
                    );
                }
            })
        })
        .collect();

    for i in 0..50 {
        if i % 2 == 0 {
            dict.load(["onion", "onward"]);
        } else {
            dict.load(["one", "only", "onset"]);
        }
    }
    for r in readers {
        r.join().unwrap();
    }
}

#[test]
fn test_custom_config_from_toml() {
    let cfg = Config::from_toml_str("max_suggestions = 2\nfuzzy_trigger = 1\n").unwrap();
    let dict = Dictionary::with_config(cfg);
    dict.load(SAMPLE);
    assert_eq!(dict.suggestions("ca"), vec!["car", "cart"]);
    // one completion satisfies the trigger, so no fuzzy top-up
    assert_eq!(dict.suggestions("do"), vec!["dog"]);
}

fn word_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-e]{1,5}", 0..40)
}

proptest! {
    #[test]
    fn prop_capped_and_unique(words in word_list(), prefix in "[a-f]{0,4}") {
        let dict = Dictionary::new();
        dict.load(&words);
        let s = dict.suggestions(&prefix);

        prop_assert!(s.len() <= 5);
        let mut seen = std::collections::HashSet::new();
        for w in &s {
            prop_assert!(seen.insert(w.clone()), "duplicate {}", w);
            prop_assert!(dict.contains(w));
        }
    }

    #[test]
    fn prop_results_are_prefix_or_near(words in word_list(), prefix in "[a-e]{1,4}") {
        let dict = Dictionary::new();
        dict.load(&words);
        for w in dict.suggestions(&prefix) {
            prop_assert!(w.starts_with(&prefix) || distance(&prefix, &w) <= 2);
        }
    }

    #[test]
    fn prop_loaded_word_comes_first(words in prop::collection::vec("[a-e]{1,5}", 1..40)) {
        let dict = Dictionary::new();
        dict.load(&words);
        for w in &words {
            let s = dict.suggestions(w);
            prop_assert_eq!(s.first(), Some(w));
        }
    }
}
