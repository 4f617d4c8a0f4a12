use std::collections::HashMap;

use tracing::info;

/// Stock levels below this are flagged as low. The threshold itself is NOT
/// low stock (strict less-than).
pub const LOW_STOCK_THRESHOLD: i32 = 10;

/// Assumed stock level for parts absent from the reference table.
pub const DEFAULT_STOCK_LEVEL: i32 = 25;

const KNOWN_PART_STOCK: &[(&str, i32)] = &[
    ("abc-123", 5),  // low stock
    ("xyz-789", 50), // normal stock
    ("def-456", 8),  // low stock
];

/// Read-only reference table of known part stock levels. Built once at
/// startup and shared behind an Arc; never mutated afterwards.
#[derive(Debug)]
pub struct StockCatalog {
    known_parts: HashMap<String, i32>,
}

impl StockCatalog {
    pub fn new() -> Self {
        Self {
            known_parts: KNOWN_PART_STOCK
                .iter()
                .map(|(id, stock)| (id.to_string(), *stock))
                .collect(),
        }
    }

    /// Stock level for a part: the mapped value for known parts, the
    /// default for everything else.
    pub fn stock_level(&self, part_id: &str) -> i32 {
        let stock_level = self
            .known_parts
            .get(part_id)
            .copied()
            .unwrap_or(DEFAULT_STOCK_LEVEL);

        info!(part_id = %part_id, stock_level, "Resolved stock level");

        stock_level
    }

    pub fn is_low_stock(&self, stock_level: i32) -> bool {
        stock_level < LOW_STOCK_THRESHOLD
    }
}

impl Default for StockCatalog {
    fn default() -> Self {
        Self::new()
    }
}
