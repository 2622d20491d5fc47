use serde::de::DeserializeOwned;
use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub(crate) enum OnDiskStorageError {
    #[error("Unable to read from data directory: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unable to decode stored document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Data directory is not a directory: {0}")]
    NotADirectory(String),
}

/// JSON documents stored as files in a single directory.
pub(crate) struct OnDiskStorage {
    path: String,
}

impl OnDiskStorage {
    pub(crate) fn create(path: String) -> Self {
        Self { path }
    }

    fn document_path(&self, name: &str) -> PathBuf {
        PathBuf::from(&self.path).join(name)
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        name: &str,
    ) -> Result<Option<T>, OnDiskStorageError> {
        let content = match tokio::fs::read_to_string(self.document_path(name)).await {
            Ok(content) => content,
            Err(error) if matches!(error.kind(), std::io::ErrorKind::NotFound) => return Ok(None),
            Err(error) => return Err(error.into()),
        };

        Ok(Some(serde_json::from_str(&content)?))
    }

    pub(crate) async fn check_readable(&self) -> Result<(), OnDiskStorageError> {
        let metadata = tokio::fs::metadata(&self.path).await?;

        if !metadata.is_dir() {
            return Err(OnDiskStorageError::NotADirectory(self.path.clone()));
        }

        Ok(())
    }
}
