// JSON-file report source - loads the comparison payload once at startup
use crate::domain::report::ComparisonData;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportStoreError {
    #[error("failed to read comparison payload at {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed comparison payload at {path}")]
    Malformed {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Where the load-time `{ transactions, comparisons }` payload comes from.
/// Whatever produced the reports owns the data; this side only reads it.
#[async_trait]
pub trait ReportSource: Send + Sync {
    async fn load(&self) -> Result<ComparisonData, ReportStoreError>;
}

pub struct JsonReportStore {
    path: PathBuf,
}

impl JsonReportStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl ReportSource for JsonReportStore {
    async fn load(&self) -> Result<ComparisonData, ReportStoreError> {
        let path = self.path.display().to_string();
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| ReportStoreError::Read {
                path: path.clone(),
                source,
            })?;
        let data: ComparisonData = serde_json::from_slice(&bytes)
            .map_err(|source| ReportStoreError::Malformed { path, source })?;

        tracing::info!(
            "loaded {} reports over {} transactions from {}",
            data.comparisons.len(),
            data.transactions.len(),
            self.path.display()
        );
        Ok(data)
    }
}
