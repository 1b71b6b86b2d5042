//! Hash collections keyed by tab ids.
//!
//! Tab ids are already hashes, so AHash is enough when diffing tab lists
//! or tracking per-tab overrides.

pub use ahash::{AHashMap as HashMap, AHashSet as HashSet};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_difference_by_id() {
        let old: HashSet<u64> = [1, 2, 3].into_iter().collect();
        let new: HashSet<u64> = [2, 3, 4].into_iter().collect();
        let mut removed: Vec<u64> = old.difference(&new).copied().collect();
        removed.sort_unstable();
        assert_eq!(removed, vec![1]);
    }

    #[test]
    fn test_map_overrides() {
        let mut widths: HashMap<u64, f32> = HashMap::new();
        widths.insert(7, 120.0);
        widths.insert(7, 80.0);
        assert_eq!(widths.get(&7), Some(&80.0));
        assert_eq!(widths.len(), 1);
    }
}
