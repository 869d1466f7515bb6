use crate::error::ExporterError;
use crate::model::{ReportSpecification, ResultSet};
use std::env;
use std::fs;
use tracing::{debug, info};

pub struct CsvWriterClientConfig {
    output_path: String,
}

impl CsvWriterClientConfig {
    pub fn new(output_path: String) -> Result<Self, ExporterError> {
        debug!("CsvWriterClientConfig::new(output_path: {})", output_path);

        if output_path.is_empty() {
            return Err(ExporterError::config("output path is required"));
        }

        Ok(Self { output_path })
    }

    pub fn from_env() -> Result<Self, ExporterError> {
        let output_path =
            env::var("OUTPUT_PATH").unwrap_or_else(|_| "ga4-report.csv".to_string());

        Self::new(output_path)
    }
}

pub struct CsvWriterClient {
    config: CsvWriterClientConfig,
}

impl CsvWriterClient {
    pub fn new(config: CsvWriterClientConfig) -> CsvWriterClient {
        CsvWriterClient { config }
    }

    /// Writes the header (dimensions then metrics, in request order) and one
    /// record per row to a temp file, then renames it onto the output path,
    /// so the destination never holds a half-written report.
    pub fn write_report(
        &self,
        spec: &ReportSpecification,
        result_set: &ResultSet,
    ) -> Result<(), ExporterError> {
        let temp_path = format!("{}.tmp", self.config.output_path);

        let result = self.write_to_path(&temp_path, spec, result_set);
        if result.is_err() {
            let _ = fs::remove_file(&temp_path);
            return result;
        }

        fs::rename(&temp_path, &self.config.output_path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            ExporterError::OutputIo {
                path: self.config.output_path.clone(),
                source: e,
            }
        })?;

        info!(
            "Exported {} rows to {}",
            result_set.len(),
            self.config.output_path
        );

        Ok(())
    }

    fn write_to_path(
        &self,
        path: &str,
        spec: &ReportSpecification,
        result_set: &ResultSet,
    ) -> Result<(), ExporterError> {
        let mut writer = csv::Writer::from_path(path).map_err(|e| match e.into_kind() {
            csv::ErrorKind::Io(io_error) => ExporterError::OutputIo {
                path: path.to_string(),
                source: io_error,
            },
            other => ExporterError::service(format!("failed to open csv writer: {:?}", other)),
        })?;

        let expected_columns = spec.column_count();
        writer.write_record(spec.column_names())?;

        for (row_index, row) in result_set.rows.iter().enumerate() {
            if row.value_count() != expected_columns {
                return Err(ExporterError::RowShape {
                    row_index,
                    expected: expected_columns,
                    actual: row.value_count(),
                });
            }

            writer.write_record(row.values())?;
        }

        writer.flush().map_err(|e| ExporterError::OutputIo {
            path: path.to_string(),
            source: e,
        })?;

        Ok(())
    }
}
