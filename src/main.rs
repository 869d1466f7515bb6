use jarvis_ga4_exporter::analytics_data_client::{
    AnalyticsDataClient, AnalyticsDataClientConfig,
};
use jarvis_ga4_exporter::config_client::{ConfigClient, ConfigClientConfig};
use jarvis_ga4_exporter::csv_writer_client::{CsvWriterClient, CsvWriterClientConfig};
use jarvis_ga4_exporter::error::ExporterError;
use jarvis_ga4_exporter::exporter_service::{ExporterService, ExporterServiceConfig};
use tracing::error;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jarvis_ga4_exporter=info".into()),
        )
        .init();

    if let Err(e) = run().await {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ExporterError> {
    let config_client = ConfigClient::new(ConfigClientConfig::from_env()?);

    let analytics_data_client =
        AnalyticsDataClient::new(AnalyticsDataClientConfig::from_env()?).await?;

    let csv_writer_client = CsvWriterClient::new(CsvWriterClientConfig::from_env()?);

    let exporter_service = ExporterService::new(ExporterServiceConfig::new(
        config_client,
        Box::new(analytics_data_client),
        csv_writer_client,
    )?);

    exporter_service.run().await
}
