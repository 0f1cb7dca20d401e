//! Edit-distance matching for typo-tolerant suggestions.

/// Levenshtein distance between `a` and `b`, counted in `char`s.
///
/// The minimum number of single-character insertions, deletions or
/// substitutions that turn `a` into `b`. Only two rows of the DP table are
/// kept, sized by the shorter string.
pub fn distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    // Iterate over the longer string so the rows track the shorter one.
    let (long, short) = if a.len() >= b.len() { (&a, &b) } else { (&b, &a) };

    if short.is_empty() {
        return long.len();
    }

    // prev[j] = dp[i-1][j], curr[j] = dp[i][j]
    let mut prev: Vec<usize> = (0..=short.len()).collect();
    let mut curr = vec![0; short.len() + 1];

    for (i, lc) in long.iter().enumerate() {
        curr[0] = i + 1;
        for (j, sc) in short.iter().enumerate() {
            curr[j + 1] = if lc == sc {
                prev[j]
            } else {
                1 + prev[j].min(prev[j + 1]).min(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[short.len()]
}

/// Accepts candidates within a fixed edit distance of the typed word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditDistanceMatcher {
    max_distance: usize,
}

impl EditDistanceMatcher {
    pub fn new(max_distance: usize) -> Self {
        Self { max_distance }
    }

    pub fn max_distance(&self) -> usize {
        self.max_distance
    }

    /// Edit distance between `a` and `b`.
    pub fn distance(&self, a: &str, b: &str) -> usize {
        distance(a, b)
    }

    /// Distance between `typed` and `candidate` if it is within the limit.
    ///
    /// Words whose lengths differ by more than the limit are rejected without
    /// running the DP, since each extra character costs at least one edit.
    pub fn match_distance(&self, typed: &str, candidate: &str) -> Option<usize> {
        let la = typed.chars().count();
        let lb = candidate.chars().count();
        if la.abs_diff(lb) > self.max_distance {
            return None;
        }
        let d = distance(typed, candidate);
        (d <= self.max_distance).then_some(d)
    }

    /// Whether `candidate` is within the limit of `typed`.
    pub fn is_match(&self, typed: &str, candidate: &str) -> bool {
        self.match_distance(typed, candidate).is_some()
    }
}

impl Default for EditDistanceMatcher {
    fn default() -> Self {
        Self::new(2)
    }
}
