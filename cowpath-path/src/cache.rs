//! Process-wide cache of parsed paths.
//!
//! Entries are keyed by the path string and never evicted: paths come from a
//! small, fixed set of call sites, so the cache stops growing once each of
//! them has run. Callers only ever see `Arc<ParsedPath>`, so cached entries
//! cannot be mutated.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;

use crate::{ParsedPath, PathParseError, parse};

static CACHE: OnceLock<RwLock<HashMap<String, Arc<ParsedPath>>>> = OnceLock::new();

fn cache() -> &'static RwLock<HashMap<String, Arc<ParsedPath>>> {
    CACHE.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Get the parsed form of `path`, parsing and caching it on first use.
///
/// Every call with the same string returns the same `Arc`. Paths that fail
/// to parse are not cached.
pub fn resolve(path: &str) -> Result<Arc<ParsedPath>, PathParseError> {
    // Fast path: check read lock first
    if let Some(parsed) = cache().read().get(path) {
        trace!(path, "path cache hit");
        return Ok(Arc::clone(parsed));
    }

    trace!(path, "path cache miss");
    let parsed = Arc::new(parse(path)?);

    let mut cache = cache().write();
    // Another thread may have inserted the same path while we were parsing;
    // keep the first entry so every caller shares it.
    let entry = cache
        .entry(path.to_owned())
        .or_insert_with(|| {
            debug!(
                path,
                placeholders = parsed.placeholder_count(),
                "cached new path"
            );
            Arc::clone(&parsed)
        });
    Ok(Arc::clone(entry))
}

/// Number of distinct paths currently cached.
#[must_use]
pub fn cached_paths() -> usize {
    CACHE.get().map_or(0, |cache| cache.read().len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_string_same_entry() {
        let a = resolve("cache.test.{}.same").unwrap();
        let b = resolve("cache.test.{}.same").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert!(cached_paths() >= 1);
    }

    #[test]
    fn failures_are_not_cached() {
        assert!(resolve("cache..failure").is_err());
        assert!(resolve("cache..failure").is_err());
        assert!(!cache().read().contains_key("cache..failure"));
    }

    #[test]
    fn concurrent_resolution_shares_one_entry() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| resolve("cache.concurrent.{}.x").unwrap()))
            .collect();
        let parsed: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for p in &parsed[1..] {
            assert!(Arc::ptr_eq(&parsed[0], p));
        }
    }
}
