use crate::model::DateRange;
use serde::{Deserialize, Serialize};

/// Complete description of one report request: which property to query,
/// which dimensions and metrics to break down by and over which date range.
/// Built once from config and never mutated afterwards; the declaration
/// order of dimensions and metrics fixes the column order of the output.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ReportSpecification {
    pub property_id: String,
    pub dimensions: Vec<String>,
    pub metrics: Vec<String>,
    pub date_range: DateRange,
}

impl ReportSpecification {
    pub fn new(
        property_id: String,
        dimensions: Vec<String>,
        metrics: Vec<String>,
        date_range: DateRange,
    ) -> Self {
        Self {
            property_id,
            dimensions,
            metrics,
            date_range,
        }
    }

    /// Column names in output order: all dimensions first, then all metrics.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.dimensions
            .iter()
            .chain(self.metrics.iter())
            .map(|name| name.as_str())
    }

    pub fn column_count(&self) -> usize {
        self.dimensions.len() + self.metrics.len()
    }
}
