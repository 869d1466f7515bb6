use crate::error::ExporterError;
use crate::model::{ReportSpecification, ResultSet};
use async_trait::async_trait;

/// Narrow seam to the reporting backend: submit one specification, get the
/// full result set back. Lets the export pipeline run against a fake backend
/// in tests.
#[async_trait]
pub trait ReportClient {
    async fn run_report(&self, spec: &ReportSpecification) -> Result<ResultSet, ExporterError>;
}
