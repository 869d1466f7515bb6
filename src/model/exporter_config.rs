use crate::config_client::SetDefaults;
use crate::model::{DateRange, ReportSpecification};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Report parameters read from the config file: which property to query,
/// which dimensions and metrics, and the reporting window. Dimensions and
/// metrics left empty fall back to the standard event report.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ExporterConfig {
    pub property_id: String,
    #[serde(default)]
    pub dimensions: Vec<String>,
    #[serde(default)]
    pub metrics: Vec<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl ExporterConfig {
    pub fn to_report_specification(&self) -> ReportSpecification {
        ReportSpecification::new(
            self.property_id.clone(),
            self.dimensions.clone(),
            self.metrics.clone(),
            DateRange::new(self.start_date, self.end_date),
        )
    }
}

impl SetDefaults for ExporterConfig {
    fn set_defaults(&mut self) {
        if self.dimensions.is_empty() {
            self.dimensions = vec![
                "eventName".to_string(),
                "date".to_string(),
                "city".to_string(),
                "country".to_string(),
                "deviceCategory".to_string(),
                "browser".to_string(),
                "sessionSourceMedium".to_string(),
                "pagePath".to_string(),
            ];
        }

        if self.metrics.is_empty() {
            self.metrics = vec![
                "eventCount".to_string(),
                "userEngagementDuration".to_string(),
                "engagedSessions".to_string(),
                "screenPageViews".to_string(),
            ];
        }
    }
}
