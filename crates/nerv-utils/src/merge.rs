//! Shallow map merging.

use indexmap::IndexMap;
use std::hash::Hash;

/// Returns a new map holding every entry of `base` overridden by `overrides`.
///
/// Keys keep the position they first appeared at in `base`; keys only present
/// in `overrides` are appended in their own order. Neither input is modified.
pub fn extend<K, V>(base: &IndexMap<K, V>, overrides: &IndexMap<K, V>) -> IndexMap<K, V>
where
	K: Hash + Eq + Clone,
	V: Clone,
{
	let mut merged = base.clone();
	for (key, value) in overrides {
		merged.insert(key.clone(), value.clone());
	}
	merged
}
