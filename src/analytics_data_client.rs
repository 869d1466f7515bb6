use crate::error::ExporterError;
use crate::model::{ReportRow, ReportSpecification, ResultSet};
use crate::report_client::ReportClient;
use async_trait::async_trait;
use google_cloud_auth::credentials::CredentialsFile;
use google_cloud_token::{TokenSource, TokenSourceProvider};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;
use tracing::{debug, info, warn};

const ANALYTICS_READONLY_SCOPE: &str = "https://www.googleapis.com/auth/analytics.readonly";

/// Maximum row count the Data API serves in one response.
const SINGLE_PAGE_ROW_LIMIT: i64 = 250000;

pub struct AnalyticsDataClientConfig {
    pub key_file_path: String,
    pub endpoint: String,
    pub timeout_seconds: u64,
}

impl AnalyticsDataClientConfig {
    pub fn new(
        key_file_path: String,
        endpoint: String,
        timeout_seconds: u64,
    ) -> Result<Self, ExporterError> {
        debug!(
            "AnalyticsDataClientConfig::new(key_file_path: {}, endpoint: {}, timeout_seconds: {})",
            key_file_path, endpoint, timeout_seconds
        );

        if key_file_path.is_empty() {
            return Err(ExporterError::config(
                "service account key file path is required",
            ));
        }

        Ok(Self {
            key_file_path,
            endpoint,
            timeout_seconds,
        })
    }

    pub fn from_env() -> Result<Self, ExporterError> {
        let key_file_path = env::var("GOOGLE_APPLICATION_CREDENTIALS").map_err(|_| {
            ExporterError::config("GOOGLE_APPLICATION_CREDENTIALS environment variable is required")
        })?;
        let endpoint = env::var("ANALYTICS_DATA_ENDPOINT")
            .unwrap_or_else(|_| "https://analyticsdata.googleapis.com".to_string());
        let timeout_seconds = env::var("REQUEST_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .map_err(|e| {
                ExporterError::config(format!("invalid REQUEST_TIMEOUT_SECONDS value: {}", e))
            })?;

        Self::new(key_file_path, endpoint, timeout_seconds)
    }
}

pub struct AnalyticsDataClient {
    config: AnalyticsDataClientConfig,
    http_client: reqwest::Client,
    key_file_contents: String,
}

impl AnalyticsDataClient {
    /// Reads the service account key eagerly, so a missing or unreadable key
    /// file fails before any network traffic happens.
    pub async fn new(config: AnalyticsDataClientConfig) -> Result<Self, ExporterError> {
        let key_file_contents = tokio::fs::read_to_string(&config.key_file_path)
            .await
            .map_err(|e| ExporterError::Credential {
                key_file_path: config.key_file_path.clone(),
                message: format!("failed to read service account key file: {}", e),
            })?;

        let http_client = reqwest::Client::builder().build().map_err(|e| {
            ExporterError::service(format!("failed to build http client: {}", e))
        })?;

        Ok(Self {
            config,
            http_client,
            key_file_contents,
        })
    }

    async fn fetch_token(&self) -> Result<String, ExporterError> {
        let credentials: CredentialsFile =
            serde_json::from_str(&self.key_file_contents).map_err(|e| {
                ExporterError::Credential {
                    key_file_path: self.config.key_file_path.clone(),
                    message: format!("failed to parse service account key file: {}", e),
                }
            })?;

        let config = google_cloud_auth::project::Config::default()
            .with_scopes(&[ANALYTICS_READONLY_SCOPE]);

        let token_source_provider =
            google_cloud_auth::token::DefaultTokenSourceProvider::new_with_credentials(
                config,
                Box::new(credentials),
            )
            .await
            .map_err(|e| ExporterError::Credential {
                key_file_path: self.config.key_file_path.clone(),
                message: format!("failed to create token source: {}", e),
            })?;

        token_source_provider
            .token_source()
            .token()
            .await
            .map_err(|e| ExporterError::Credential {
                key_file_path: self.config.key_file_path.clone(),
                message: format!("failed to obtain access token: {}", e),
            })
    }

    fn response_error(
        &self,
        status: reqwest::StatusCode,
        body: &str,
        property_id: &str,
    ) -> ExporterError {
        let envelope: ApiErrorEnvelope = serde_json::from_str(body).unwrap_or_default();
        let message = if envelope.error.message.is_empty() {
            body.to_string()
        } else {
            envelope.error.message
        };

        match status {
            reqwest::StatusCode::UNAUTHORIZED => ExporterError::Credential {
                key_file_path: self.config.key_file_path.clone(),
                message: format!("credentials rejected: {}", message),
            },
            reqwest::StatusCode::FORBIDDEN => ExporterError::Authorization {
                property_id: property_id.to_string(),
                message,
            },
            reqwest::StatusCode::BAD_REQUEST => ExporterError::InvalidRequest { message },
            _ => ExporterError::Service {
                message: format!("{}: {}", status, message),
            },
        }
    }
}

#[async_trait]
impl ReportClient for AnalyticsDataClient {
    async fn run_report(&self, spec: &ReportSpecification) -> Result<ResultSet, ExporterError> {
        let token = self.fetch_token().await?;

        let url = format!(
            "{}/v1beta/properties/{}:runReport",
            self.config.endpoint.trim_end_matches('/'),
            spec.property_id
        );
        let request = RunReportRequest::from_spec(spec);

        debug!("Running report against {}", url);

        let response = self
            .http_client
            .post(&url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", token))
            .timeout(Duration::from_secs(self.config.timeout_seconds))
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                ExporterError::service(format!("report request to {} failed: {}", url, e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.response_error(status, &body, &spec.property_id));
        }

        let report: RunReportResponse = response.json().await.map_err(|e| {
            ExporterError::service(format!("failed to decode report response: {}", e))
        })?;

        if report.row_count > report.rows.len() as i64 {
            warn!(
                "Report matched {} rows but a single page holds {}; narrow the date range to export everything",
                report.row_count,
                report.rows.len()
            );
        }

        info!(
            "Report for property {} returned {} rows",
            spec.property_id,
            report.rows.len()
        );

        Ok(report.into_result_set())
    }
}

#[derive(Serialize, Debug)]
struct ApiDimension {
    name: String,
}

#[derive(Serialize, Debug)]
struct ApiMetric {
    name: String,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct ApiDateRange {
    start_date: String,
    end_date: String,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct RunReportRequest {
    dimensions: Vec<ApiDimension>,
    metrics: Vec<ApiMetric>,
    date_ranges: Vec<ApiDateRange>,
    limit: i64,
}

impl RunReportRequest {
    fn from_spec(spec: &ReportSpecification) -> Self {
        Self {
            dimensions: spec
                .dimensions
                .iter()
                .map(|name| ApiDimension { name: name.clone() })
                .collect(),
            metrics: spec
                .metrics
                .iter()
                .map(|name| ApiMetric { name: name.clone() })
                .collect(),
            date_ranges: vec![ApiDateRange {
                start_date: spec.date_range.start_date.to_string(),
                end_date: spec.date_range.end_date.to_string(),
            }],
            limit: SINGLE_PAGE_ROW_LIMIT,
        }
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
struct RunReportResponse {
    // absent instead of empty when the report matches nothing
    rows: Vec<ApiRow>,
    row_count: i64,
}

impl RunReportResponse {
    fn into_result_set(self) -> ResultSet {
        ResultSet::new(
            self.rows
                .into_iter()
                .map(|row| {
                    ReportRow::new(
                        row.dimension_values.into_iter().map(|v| v.value).collect(),
                        row.metric_values.into_iter().map(|v| v.value).collect(),
                    )
                })
                .collect(),
        )
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
struct ApiRow {
    dimension_values: Vec<ApiValue>,
    metric_values: Vec<ApiValue>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct ApiValue {
    value: String,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct ApiErrorEnvelope {
    error: ApiErrorStatus,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct ApiErrorStatus {
    message: String,
    status: String,
}
