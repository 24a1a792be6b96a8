//! URL merging across discovery sources.
//!
//! Each discovery source contributes an independent list of URLs; a
//! failed or skipped source simply contributes an empty list. Merging is
//! a pure set union with exact-string deduplication, so source order
//! never matters downstream.

use std::collections::HashSet;

/// Union the per-source URL lists into one deduplicated set.
pub fn merge_urls<I>(sources: I) -> HashSet<String>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut merged = HashSet::new();
    for urls in sources {
        merged.extend(urls);
    }
    merged
}
