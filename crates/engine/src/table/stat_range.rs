//! Dataset-wide min/max per numeric column.
//!
//! Ranges are collected once when a roster is built and then only read, so a
//! realm switch recolors cells against the same scale.

use std::collections::BTreeMap;

use serde_json::Value;

use ffrkdb_shared::{TableRow, SORT_PREFIX};

/// Inclusive bounds seen for one column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatRange {
    pub min: f64,
    pub max: f64,
}

impl StatRange {
    pub fn new(value: f64) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    pub fn include(&mut self, value: f64) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    /// Position of `value` in the range. A range with a single value maps
    /// everything to 1.0.
    pub fn fraction(&self, value: f64) -> f64 {
        if self.max == self.min {
            return 1.0;
        }
        rlerp(self.min, self.max, value)
    }
}

/// Inverse linear interpolation: where `value` sits between `low` and `high`.
pub fn rlerp(low: f64, high: f64, value: f64) -> f64 {
    (value - low) / (high - low)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatRanges {
    ranges: BTreeMap<String, StatRange>,
}

impl StatRanges {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, key: &str, value: f64) {
        if value.is_nan() {
            return;
        }
        match self.ranges.get_mut(key) {
            Some(range) => range.include(value),
            None => {
                self.ranges.insert(key.to_string(), StatRange::new(value));
            }
        }
    }

    /// Observes every numeric field of a row, skipping the `sort-` shadows.
    pub fn observe_row(&mut self, row: &TableRow) {
        for (key, value) in row {
            if key.starts_with(SORT_PREFIX) {
                continue;
            }
            if let Some(number) = value.as_f64() {
                self.observe(key, number);
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&StatRange> {
        self.ranges.get(key)
    }

    /// Fraction of a JSON value within its column's range, if both exist.
    pub fn fraction(&self, key: &str, value: &Value) -> Option<f64> {
        let number = value.as_f64()?;
        self.get(key).map(|range| range.fraction(number))
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tracks_min_and_max() {
        let mut ranges = StatRanges::new();
        for hp in [2921.0, 1850.0, 3340.0] {
            ranges.observe("hp", hp);
        }

        let range = ranges.get("hp").unwrap();
        assert_eq!(range.min, 1850.0);
        assert_eq!(range.max, 3340.0);
        assert_eq!(range.fraction(1850.0), 0.0);
        assert_eq!(range.fraction(3340.0), 1.0);
    }

    #[test]
    fn degenerate_range_maps_to_top() {
        let mut ranges = StatRanges::new();
        ranges.observe("spd", 100.0);
        ranges.observe("spd", 100.0);
        assert_eq!(ranges.fraction("spd", &json!(100)), Some(1.0));
    }

    #[test]
    fn observe_row_skips_sort_shadows_and_text() {
        let mut ranges = StatRanges::new();
        let row = json!({"atk": 120, "sort-atk": 999, "name": "Vivi"});
        ranges.observe_row(row.as_object().unwrap());

        assert!(ranges.get("atk").is_some());
        assert!(ranges.get("sort-atk").is_none());
        assert!(ranges.get("name").is_none());
        assert_eq!(ranges.len(), 1);
    }

    #[test]
    fn unknown_key_has_no_fraction() {
        let ranges = StatRanges::new();
        assert_eq!(ranges.fraction("hp", &json!(10)), None);
        assert_eq!(rlerp(0.0, 10.0, 5.0), 0.5);
    }
}
