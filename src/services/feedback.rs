use std::{
    fs::OpenOptions,
    path::{Path, PathBuf},
    sync::Arc,
};

use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::{FeedbackRecord, FeedbackSummary},
};

/// Append-only store of satisfaction feedback
///
/// Never consulted by the ranker; only used for history and summary views.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait FeedbackLedger: Send + Sync {
    /// Appends one record. Repeated calls append repeated rows.
    async fn append(&self, record: FeedbackRecord) -> AppResult<()>;

    /// Returns every record in append order
    async fn load_all(&self) -> AppResult<Vec<FeedbackRecord>>;
}

/// Builds the summary from the ledger's full history
pub async fn summarize(ledger: &dyn FeedbackLedger) -> AppResult<FeedbackSummary> {
    let records = ledger.load_all().await?;
    Ok(FeedbackSummary::from_records(&records))
}

/// Ledger kept in process memory
#[derive(Clone, Default)]
pub struct InMemoryFeedbackLedger {
    records: Arc<RwLock<Vec<FeedbackRecord>>>,
}

impl InMemoryFeedbackLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl FeedbackLedger for InMemoryFeedbackLedger {
    async fn append(&self, record: FeedbackRecord) -> AppResult<()> {
        self.records.write().await.push(record);
        Ok(())
    }

    async fn load_all(&self) -> AppResult<Vec<FeedbackRecord>> {
        Ok(self.records.read().await.clone())
    }
}

/// Ledger persisted as a CSV file with columns
/// `timestamp,before_mood,after_mood,satisfied`
#[derive(Clone)]
pub struct CsvFeedbackLedger {
    path: PathBuf,
    /// Serializes writers within this process so rows never interleave
    write_lock: Arc<tokio::sync::Mutex<()>>,
}

impl CsvFeedbackLedger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Arc::new(tokio::sync::Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append_blocking(path: &Path, record: &FeedbackRecord) -> AppResult<()> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let needs_header = file.metadata()?.len() == 0;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(needs_header)
            .from_writer(file);
        writer.serialize(record)?;
        writer.flush()?;
        Ok(())
    }

    fn load_blocking(path: &Path) -> AppResult<Vec<FeedbackRecord>> {
        if !path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::Reader::from_path(path)?;
        let mut records = Vec::new();
        for row in reader.deserialize() {
            records.push(row?);
        }
        Ok(records)
    }
}

#[async_trait::async_trait]
impl FeedbackLedger for CsvFeedbackLedger {
    async fn append(&self, record: FeedbackRecord) -> AppResult<()> {
        let _guard = self.write_lock.lock().await;
        let path = self.path.clone();

        tokio::task::spawn_blocking(move || Self::append_blocking(&path, &record))
            .await
            .map_err(|e| AppError::Internal(e.to_string()))??;

        tracing::debug!(path = %self.path.display(), "Appended feedback record");
        Ok(())
    }

    async fn load_all(&self) -> AppResult<Vec<FeedbackRecord>> {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || Self::load_blocking(&path))
            .await
            .map_err(|e| AppError::Internal(e.to_string()))?
    }
}
