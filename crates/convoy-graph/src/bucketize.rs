//! Stable per-component bucketing of a sorted order.

use crate::error::{Error, Result};
use std::collections::BTreeMap;

/// Regroup an already-sorted order by equivalence root.
///
/// Walks `order` once and appends each name to the bucket keyed by its
/// root in `roots`. Within a bucket the relative order of the master
/// `order` is preserved untouched, so each bucket remains a valid
/// topological order of its component.
///
/// # Errors
///
/// Returns [`Error::UnknownRoot`] when a name in `order` has no entry in
/// `roots` — an internal-consistency violation between upstream
/// artifacts, not user error.
pub fn bucketize(
    order: &[String],
    roots: &BTreeMap<String, String>,
) -> Result<BTreeMap<String, Vec<String>>> {
    let mut buckets: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for name in order {
        let root = roots
            .get(name)
            .ok_or_else(|| Error::UnknownRoot(name.clone()))?;
        buckets.entry(root.clone()).or_default().push(name.clone());
    }
    Ok(buckets)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roots(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    fn order(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn splits_order_by_root() {
        let order = order(&["c", "b", "a", "y", "x"]);
        let roots = roots(&[("a", "a"), ("b", "a"), ("c", "a"), ("x", "x"), ("y", "x")]);
        let buckets = bucketize(&order, &roots).unwrap();
        assert_eq!(buckets["a"], ["c", "b", "a"]);
        assert_eq!(buckets["x"], ["y", "x"]);
        assert_eq!(buckets.len(), 2);
    }

    #[test]
    fn within_bucket_order_matches_master_order() {
        let order = order(&["e", "d", "c", "b", "a"]);
        let roots = roots(&[("a", "r"), ("b", "r"), ("c", "r"), ("d", "r"), ("e", "r")]);
        let buckets = bucketize(&order, &roots).unwrap();
        assert_eq!(buckets["r"], ["e", "d", "c", "b", "a"]);
    }

    #[test]
    fn missing_root_entry_is_an_error() {
        let order = order(&["a", "b"]);
        let roots = roots(&[("a", "a")]);
        assert_eq!(
            bucketize(&order, &roots),
            Err(Error::UnknownRoot("b".to_string()))
        );
    }

    #[test]
    fn empty_order_yields_no_buckets() {
        assert!(bucketize(&[], &BTreeMap::new()).unwrap().is_empty());
    }
}
