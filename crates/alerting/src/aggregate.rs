use printerp_catalog::StockRecord;
use printerp_core::ValueObject;

/// Summed view of all stock records for one material.
///
/// Derived, never persisted: recomputed whenever the source records are
/// refetched. `min_threshold` is `+∞` when no record contributed a threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregatedStock {
    pub total_quantity: f64,
    pub min_threshold: f64,
}

impl ValueObject for AggregatedStock {}

impl AggregatedStock {
    /// True when at least one stock record contributed a threshold.
    ///
    /// An infinite `min_threshold` means "no threshold configured", and the
    /// classifier must report `unknown` rather than comparing against it.
    pub fn has_threshold(&self) -> bool {
        self.min_threshold.is_finite()
    }
}

/// Fold a material's stock records into one aggregated reading.
///
/// The sum seeds at 0 and the min seeds at `+∞`, so an empty record set yields
/// `{ total_quantity: 0, min_threshold: ∞ }` instead of short-circuiting the
/// min to 0 and spuriously reading as out of stock.
pub fn aggregate_stocks(records: &[StockRecord]) -> AggregatedStock {
    records.iter().fold(
        AggregatedStock {
            total_quantity: 0.0,
            min_threshold: f64::INFINITY,
        },
        |acc, record| AggregatedStock {
            total_quantity: acc.total_quantity + record.quantity_in_stock,
            min_threshold: acc.min_threshold.min(record.alert_threshold),
        },
    )
}
