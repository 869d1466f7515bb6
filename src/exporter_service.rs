use crate::config_client::ConfigClient;
use crate::csv_writer_client::CsvWriterClient;
use crate::error::ExporterError;
use crate::model::ExporterConfig;
use crate::report_client::ReportClient;
use tracing::info;

pub struct ExporterServiceConfig {
    config_client: ConfigClient,
    report_client: Box<dyn ReportClient>,
    csv_writer_client: CsvWriterClient,
}

impl ExporterServiceConfig {
    pub fn new(
        config_client: ConfigClient,
        report_client: Box<dyn ReportClient>,
        csv_writer_client: CsvWriterClient,
    ) -> Result<Self, ExporterError> {
        Ok(Self {
            config_client,
            report_client,
            csv_writer_client,
        })
    }
}

pub struct ExporterService {
    config: ExporterServiceConfig,
}

impl ExporterService {
    pub fn new(config: ExporterServiceConfig) -> Self {
        Self { config }
    }

    pub async fn run(&self) -> Result<(), ExporterError> {
        let config: ExporterConfig = self.config.config_client.read_config_from_file()?;
        let spec = config.to_report_specification();

        info!(
            "Running report for property {} from {} to {}",
            spec.property_id, spec.date_range.start_date, spec.date_range.end_date
        );

        let result_set = self.config.report_client.run_report(&spec).await?;

        self.config.csv_writer_client.write_report(&spec, &result_set)
    }
}
