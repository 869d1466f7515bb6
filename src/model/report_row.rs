use serde::{Deserialize, Serialize};

/// One result row, positionally aligned to the requested dimensions and
/// metrics. Values arrive as text from the API and stay text.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    pub dimension_values: Vec<String>,
    pub metric_values: Vec<String>,
}

impl ReportRow {
    pub fn new(dimension_values: Vec<String>, metric_values: Vec<String>) -> Self {
        Self {
            dimension_values,
            metric_values,
        }
    }

    /// Values in output order: dimension values first, then metric values.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.dimension_values
            .iter()
            .chain(self.metric_values.iter())
            .map(|value| value.as_str())
    }

    pub fn value_count(&self) -> usize {
        self.dimension_values.len() + self.metric_values.len()
    }
}
