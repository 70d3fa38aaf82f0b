//! Merchant directory with Apple Pay support flags

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Normalize a merchant name into a directory key: lowercase, spaces to
/// underscores. `"Gas Station"` and `"gas_station"` resolve to the same key.
pub fn normalize_key(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}

/// A merchant known to the directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MerchantEntry {
    /// Display name
    pub name: String,
    /// Spending category, e.g. "Coffee & Food"
    pub category: String,
    /// Whether the merchant accepts Apple Pay
    pub supported: bool,
}

impl MerchantEntry {
    pub fn new(name: impl Into<String>, category: impl Into<String>, supported: bool) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            supported,
        }
    }
}

/// Static lookup table of known merchants, keyed by normalized name.
///
/// Seeded once at startup; entries are never modified afterwards. A miss is
/// a valid business outcome ("no data on this merchant"), not an error.
#[derive(Debug, Clone, Default)]
pub struct MerchantDirectory {
    entries: IndexMap<String, MerchantEntry>,
}

impl MerchantDirectory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a directory seeded with the demo merchants
    pub fn with_mock_data() -> Self {
        let mut directory = Self::new();
        directory.insert("amazon", MerchantEntry::new("Amazon", "Online Shopping", true));
        directory.insert("starbucks", MerchantEntry::new("Starbucks", "Coffee & Food", true));
        directory.insert("walmart", MerchantEntry::new("Walmart", "Retail", true));
        directory.insert("uber", MerchantEntry::new("Uber", "Transportation", true));
        directory.insert("mcdonalds", MerchantEntry::new("McDonald's", "Fast Food", true));
        directory.insert("target", MerchantEntry::new("Target", "Retail", true));
        directory.insert(
            "gas_station",
            MerchantEntry::new("Shell Gas Station", "Gas & Fuel", false),
        );
        directory
    }

    /// Insert a merchant under an already-normalized key
    pub fn insert(&mut self, key: impl Into<String>, entry: MerchantEntry) {
        self.entries.insert(key.into(), entry);
    }

    /// Look up a merchant by name. The name is normalized first; only exact
    /// key matches are returned, no fuzzy matching.
    pub fn lookup(&self, name: &str) -> Option<&MerchantEntry> {
        self.entries.get(&normalize_key(name))
    }

    /// Number of known merchants
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the directory has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_key() {
        assert_eq!(normalize_key("Starbucks"), "starbucks");
        assert_eq!(normalize_key("Gas Station"), "gas_station");
        assert_eq!(normalize_key("McDonalds"), "mcdonalds");
        assert_eq!(normalize_key("gas_station"), "gas_station");
    }

    #[test]
    fn test_lookup_normalizes_name() {
        let directory = MerchantDirectory::with_mock_data();

        let entry = directory.lookup("Starbucks").unwrap();
        assert_eq!(entry.name, "Starbucks");
        assert_eq!(entry.category, "Coffee & Food");
        assert!(entry.supported);

        let entry = directory.lookup("Gas Station").unwrap();
        assert_eq!(entry.name, "Shell Gas Station");
        assert!(!entry.supported);
    }

    #[test]
    fn test_lookup_is_exact_match_only() {
        let directory = MerchantDirectory::with_mock_data();

        assert!(directory.lookup("starbuck").is_none());
        assert!(directory.lookup("star bucks").is_none());
        assert!(directory.lookup("local_bakery").is_none());
    }

    #[test]
    fn test_mock_data_seed() {
        let directory = MerchantDirectory::with_mock_data();
        assert_eq!(directory.len(), 7);
        assert!(directory.lookup("amazon").unwrap().supported);
    }
}
