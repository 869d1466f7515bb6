#![allow(dead_code)]

pub mod analytics_data_client;
pub mod config_client;
pub mod csv_writer_client;
pub mod error;
pub mod exporter_service;
pub mod model;
pub mod report_client;
