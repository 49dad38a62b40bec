//! A storage adapter backed by the local filesystem

use std::{
    error, io,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use tokio::fs::OpenOptions;

use super::StorageAdapter;

/// A storage adapter that keeps each key in its own file
///
/// Keys are sanitized into file names, so distinct keys must remain
/// distinct after sanitization. Files are created with mode `0o600` on
/// Unix hosts because the stored values may be credentials.
#[derive(Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Constructs a file store rooted at `dir`
    ///
    /// The directory is created on first write if it does not exist.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory backing this store
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(name)
    }

    async fn read_item(&self, key: &str) -> Result<Option<String>, io::Error> {
        use tokio::io::AsyncReadExt;

        let mut file = match OpenOptions::new().read(true).open(self.path_for(key)).await {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err),
        };

        let mut data = String::new();
        file.read_to_string(&mut data).await?;
        Ok(Some(data))
    }

    async fn write_item(&self, key: &str, value: &str) -> Result<(), io::Error> {
        use tokio::io::AsyncWriteExt;

        tokio::fs::create_dir_all(&self.dir).await?;

        let mut file_opts = OpenOptions::new();

        file_opts.create(true).truncate(true).write(true);

        #[cfg(unix)]
        file_opts.mode(0o600);

        let mut file = file_opts.open(self.path_for(key)).await?;
        file.write_all(value.as_bytes()).await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), io::Error> {
        match tokio::fs::remove_file(self.path_for(key)).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err),
        }
    }
}

#[async_trait]
impl StorageAdapter for FileStorage {
    async fn get_item(
        &self,
        key: &str,
    ) -> Result<Option<String>, Box<dyn error::Error + Send + Sync + 'static>> {
        Ok(self.read_item(key).await?)
    }

    async fn set_item(
        &self,
        key: &str,
        value: &str,
    ) -> Result<(), Box<dyn error::Error + Send + Sync + 'static>> {
        Ok(self.write_item(key, value).await?)
    }

    async fn remove_item(
        &self,
        key: &str,
    ) -> Result<(), Box<dyn error::Error + Send + Sync + 'static>> {
        Ok(self.remove(key).await?)
    }
}
