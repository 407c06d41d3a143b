//! Invalidation Pattern Matching
//!
//! Glob matching for cache invalidation patterns, mirroring the subset of
//! Redis `KEYS`/`SCAN MATCH` glob syntax this layer relies on: `*` matches
//! any run of characters (including empty), `?` matches exactly one
//! character, everything else is literal. The in-memory store uses this
//! matcher so both backends invalidate the same set of keys for a given
//! pattern.

/// Returns true if `key` matches the glob `pattern`.
pub fn key_matches(pattern: &str, key: &str) -> bool {
    let p: Vec<char> = pattern.chars().collect();
    let k: Vec<char> = key.chars().collect();

    let mut pi = 0;
    let mut ki = 0;
    // Position of the last `*` seen and the key index it was tried at,
    // for backtracking when a literal run after the star fails to match.
    let mut star: Option<usize> = None;
    let mut mark = 0;

    while ki < k.len() {
        if pi < p.len() && (p[pi] == '?' || p[pi] == k[ki]) {
            pi += 1;
            ki += 1;
        } else if pi < p.len() && p[pi] == '*' {
            star = Some(pi);
            mark = ki;
            pi += 1;
        } else if let Some(star_pi) = star {
            // Let the star absorb one more character and retry.
            pi = star_pi + 1;
            mark += 1;
            ki = mark;
        } else {
            return false;
        }
    }

    // Trailing stars match the empty suffix.
    while pi < p.len() && p[pi] == '*' {
        pi += 1;
    }

    pi == p.len()
}
