mod date_range;
mod exporter_config;
mod report_row;
mod report_spec;
mod result_set;

pub use crate::model::date_range::DateRange;
pub use crate::model::exporter_config::ExporterConfig;
pub use crate::model::report_row::ReportRow;
pub use crate::model::report_spec::ReportSpecification;
pub use crate::model::result_set::ResultSet;

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config_client::SetDefaults;
  use chrono::NaiveDate;
  use serde_json;
  use serde_yaml;

  #[test]
  fn column_names_returns_dimensions_then_metrics_in_declaration_order() {
    let spec = ReportSpecification::new(
      "485718616".into(),
      vec!["eventName".into(), "date".into()],
      vec!["eventCount".into()],
      DateRange::new(
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2025, 4, 22).unwrap(),
      ),
    );

    let columns: Vec<&str> = spec.column_names().collect();

    assert_eq!(columns, vec!["eventName", "date", "eventCount"]);
    assert_eq!(spec.column_count(), 3);
  }

  #[test]
  fn values_returns_dimension_values_then_metric_values() {
    let row = ReportRow::new(
      vec!["login".into(), "20250101".into()],
      vec!["42".into()],
    );

    let values: Vec<&str> = row.values().collect();

    assert_eq!(values, vec!["login", "20250101", "42"]);
    assert_eq!(row.value_count(), 3);
  }

  #[test]
  fn to_json() {
    assert_eq!(
      serde_json::to_string_pretty(&ExporterConfig {
        property_id: "485718616".into(),
        dimensions: vec!["eventName".into(), "date".into()],
        metrics: vec!["eventCount".into()],
        start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2025, 4, 22).unwrap(),
      })
      .unwrap(),
      r#"{
  "propertyId": "485718616",
  "dimensions": [
    "eventName",
    "date"
  ],
  "metrics": [
    "eventCount"
  ],
  "startDate": "2025-01-01",
  "endDate": "2025-04-22"
}"#
    );
  }

  #[test]
  fn from_yaml() {
    let config = serde_yaml::from_str::<ExporterConfig>(
      r#"---
propertyId: "485718616"
dimensions:
  - eventName
  - date
metrics:
  - eventCount
startDate: 2025-01-01
endDate: 2025-04-22
"#,
    )
    .unwrap();

    assert_eq!(config.property_id, "485718616");
    assert_eq!(config.dimensions, vec!["eventName", "date"]);
    assert_eq!(config.metrics, vec!["eventCount"]);
    assert_eq!(
      config.start_date,
      NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    );
    assert_eq!(
      config.end_date,
      NaiveDate::from_ymd_opt(2025, 4, 22).unwrap()
    );
  }

  #[test]
  fn set_defaults_fills_standard_event_report_when_unset() {
    let mut config = serde_yaml::from_str::<ExporterConfig>(
      r#"---
propertyId: "485718616"
startDate: 2025-01-01
endDate: 2025-04-22
"#,
    )
    .unwrap();

    config.set_defaults();

    assert_eq!(config.dimensions.len(), 8);
    assert_eq!(config.dimensions.first().unwrap(), "eventName");
    assert_eq!(config.dimensions.last().unwrap(), "pagePath");
    assert_eq!(config.metrics.len(), 4);
    assert_eq!(config.metrics.first().unwrap(), "eventCount");
    assert_eq!(config.metrics.last().unwrap(), "screenPageViews");
  }

  #[test]
  fn set_defaults_keeps_explicit_dimensions_and_metrics() {
    let mut config = ExporterConfig {
      property_id: "485718616".into(),
      dimensions: vec!["country".into()],
      metrics: vec!["engagedSessions".into()],
      start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
      end_date: NaiveDate::from_ymd_opt(2025, 4, 22).unwrap(),
    };

    config.set_defaults();

    assert_eq!(config.dimensions, vec!["country"]);
    assert_eq!(config.metrics, vec!["engagedSessions"]);
  }
}
