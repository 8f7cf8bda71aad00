use crate::types::band::BandTable;
use tracing::debug;

/// Maps an aggregate score to its rating label. The first closed interval that
/// contains `value` wins; values past either end take the nearest end label.
pub fn map_aggregate(value: f64, table: &BandTable) -> &str {
    if let Some(band) = table.bands().iter().find(|band| band.contains(value)) {
        debug!(value, label = %band.label, "aggregate band matched");
        return &band.label;
    }
    if value < table.first().lower {
        return &table.first().label;
    }
    &table.last().label
}
