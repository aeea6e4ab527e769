// ABOUTME: Immutable ordered set of gear keys used by the outfit rule stages
// ABOUTME: Every transform consumes the set and returns a new one
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use runcast_core::GearKey;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Set of gear keys with value semantics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GearSet(BTreeSet<GearKey>);

impl GearSet {
    /// Empty set
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Whether the key is present
    #[must_use]
    pub fn contains(&self, key: GearKey) -> bool {
        self.0.contains(&key)
    }

    /// Whether any of the keys is present
    #[must_use]
    pub fn contains_any(&self, keys: &[GearKey]) -> bool {
        keys.iter().any(|key| self.0.contains(key))
    }

    /// Number of keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Set with `key` added
    #[must_use]
    pub fn with(mut self, key: GearKey) -> Self {
        self.0.insert(key);
        self
    }

    /// Set with all `keys` added
    #[must_use]
    pub fn with_all(mut self, keys: &[GearKey]) -> Self {
        self.0.extend(keys.iter().copied());
        self
    }

    /// Set with `key` added when `condition` holds
    #[must_use]
    pub fn with_if(self, condition: bool, key: GearKey) -> Self {
        if condition {
            self.with(key)
        } else {
            self
        }
    }

    /// Set with `key` removed
    #[must_use]
    pub fn without(mut self, key: GearKey) -> Self {
        self.0.remove(&key);
        self
    }

    /// Set with all `keys` removed
    #[must_use]
    pub fn without_all(mut self, keys: &[GearKey]) -> Self {
        for key in keys {
            self.0.remove(key);
        }
        self
    }

    /// Swap `from` for `to` when `from` is present; otherwise unchanged
    #[must_use]
    pub fn replacing(self, from: GearKey, to: GearKey) -> Self {
        if self.contains(from) {
            self.without(from).with(to)
        } else {
            self
        }
    }

    /// Keys in catalog order
    pub fn iter(&self) -> impl Iterator<Item = GearKey> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<GearKey> for GearSet {
    fn from_iter<I: IntoIterator<Item = GearKey>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[GearKey; N]> for GearSet {
    fn from(keys: [GearKey; N]) -> Self {
        keys.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transforms_do_not_alias() {
        let base = GearSet::from([GearKey::LongSleeve, GearKey::Tights]);
        let swapped = base.clone().replacing(GearKey::LongSleeve, GearKey::ShortSleeve);
        assert!(base.contains(GearKey::LongSleeve));
        assert!(swapped.contains(GearKey::ShortSleeve));
        assert!(!swapped.contains(GearKey::LongSleeve));
    }

    #[test]
    fn test_replacing_missing_key_is_noop() {
        let base = GearSet::from([GearKey::Shorts]);
        assert_eq!(base.clone().replacing(GearKey::Vest, GearKey::LightJacket), base);
    }

    #[test]
    fn test_with_if() {
        let set = GearSet::new()
            .with_if(true, GearKey::Cap)
            .with_if(false, GearKey::Sunglasses);
        assert_eq!(set.len(), 1);
        assert!(set.contains_any(&[GearKey::Sunglasses, GearKey::Cap]));
    }
}
