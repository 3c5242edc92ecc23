//! Reads a list of bills from a JSON file for bulk sync.
//!
//! The file is a JSON array of bill objects with the camelCase field names
//! used by the frontend, e.g.
//! `[{"id":"a1","billName":"Rent","amount":900,"date":"2024-05-01","status":"paid"}]`.

use std::path::{Path, PathBuf};
use tracing::info;

use crate::domain::models::bill::Bill;

#[derive(Debug, thiserror::Error)]
pub enum BulkSourceError {
    #[error("failed to read bill file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse bill file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub async fn load_bills(path: &Path) -> Result<Vec<Bill>, BulkSourceError> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| BulkSourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let bills = parse_bills(&contents).map_err(|source| BulkSourceError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Loaded {} bills from {}", bills.len(), path.display());
    Ok(bills)
}

pub fn parse_bills(json: &str) -> Result<Vec<Bill>, serde_json::Error> {
    let dtos: Vec<shared::Bill> = serde_json::from_str(json)?;
    Ok(dtos.into_iter().map(Bill::from).collect())
}
