//! Serializable fixture record shapes.
//!
//! Field names and nesting here are the wire contract with the external
//! indicator test suite; renaming anything means regenerating and
//! re-pinning every consumer fixture.

use reflab_core::stats::PriceStats;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// The five reference series plus the tag of the backend that produced them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorResults {
    pub sma_5: Vec<f64>,
    pub sma_10: Vec<f64>,
    pub sma_20: Vec<f64>,
    pub rsi_5: Vec<f64>,
    pub rsi_14: Vec<f64>,
    /// `"builtin"` or `"ta"`.
    pub source: String,
}

/// One fully computed test case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceRecord {
    pub description: String,
    pub size: usize,
    pub prices: Vec<f64>,
    pub price_stats: PriceStats,
    pub indicators: IndicatorResults,
}

/// The assembled catalog: case name → record, in catalog order.
///
/// Serialization walks the underlying Vec directly, so JSON key order
/// always matches the catalog no matter what map type a consumer uses.
#[derive(Debug, Clone, Default)]
pub struct ReferenceSet {
    cases: Vec<(String, ReferenceRecord)>,
}

impl ReferenceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record. Case names must be unique.
    pub fn insert(&mut self, name: impl Into<String>, record: ReferenceRecord) {
        let name = name.into();
        assert!(self.get(&name).is_none(), "duplicate case name: {name}");
        self.cases.push((name, record));
    }

    pub fn get(&self, name: &str) -> Option<&ReferenceRecord> {
        self.cases.iter().find(|(n, _)| n == name).map(|(_, r)| r)
    }

    /// Cases in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ReferenceRecord)> {
        self.cases.iter().map(|(name, record)| (name.as_str(), record))
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Total data points across all cases.
    pub fn total_points(&self) -> usize {
        self.cases.iter().map(|(_, record)| record.size).sum()
    }
}

impl Serialize for ReferenceSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cases.len()))?;
        for (name, record) in &self.cases {
            map.serialize_entry(name, record)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dummy_record(tag: &str) -> ReferenceRecord {
        ReferenceRecord {
            description: tag.to_string(),
            size: 3,
            prices: vec![1.0, 2.0, 3.0],
            price_stats: PriceStats::compute(&[1.0, 2.0, 3.0]),
            indicators: IndicatorResults {
                sma_5: Vec::new(),
                sma_10: Vec::new(),
                sma_20: Vec::new(),
                rsi_5: Vec::new(),
                rsi_14: Vec::new(),
                source: "builtin".to_string(),
            },
        }
    }

    #[test]
    fn insertion_order_survives_serialization() {
        let mut set = ReferenceSet::new();
        set.insert("zebra", dummy_record("z"));
        set.insert("alpha", dummy_record("a"));
        set.insert("mid", dummy_record("m"));

        let json = serde_json::to_string(&set).unwrap();
        let zebra = json.find("\"zebra\"").unwrap();
        let alpha = json.find("\"alpha\"").unwrap();
        let mid = json.find("\"mid\"").unwrap();
        assert!(zebra < alpha && alpha < mid, "keys reordered: {json}");
    }

    #[test]
    fn lookup_by_name() {
        let mut set = ReferenceSet::new();
        set.insert("one", dummy_record("first"));
        assert_eq!(set.get("one").unwrap().description, "first");
        assert!(set.get("two").is_none());
        assert_eq!(set.len(), 1);
        assert_eq!(set.total_points(), 3);
    }

    #[test]
    #[should_panic(expected = "duplicate case name")]
    fn duplicate_names_are_rejected() {
        let mut set = ReferenceSet::new();
        set.insert("one", dummy_record("a"));
        set.insert("one", dummy_record("b"));
    }
}
