//! File system abstraction so the downloader can be tested without a disk.

use std::path::Path;

use async_trait::async_trait;
use tokio::io::AsyncWrite;

/// Writable handle returned by [`FileSystem::create_file`].
pub type FileWriter = Box<dyn AsyncWrite + Send + Unpin>;

/// Disk operations used by the downloader.
#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Checks if a file exists at the given path.
    async fn file_exists(&self, path: &Path) -> bool;

    /// Returns the size of a file if it exists.
    async fn file_size(&self, path: &Path) -> Option<u64>;

    /// Creates all directories in the given path.
    async fn create_dir_all(&self, path: &Path) -> std::io::Result<()>;

    /// Creates (or truncates) the file at `path` for writing.
    async fn create_file(&self, path: &Path) -> std::io::Result<FileWriter>;

    /// Renames `from` to `to`, replacing `to` if it exists.
    async fn rename_file(&self, from: &Path, to: &Path) -> std::io::Result<()>;

    /// Removes the file at `path`.
    async fn remove_file(&self, path: &Path) -> std::io::Result<()>;
}

/// Default file system implementation using `tokio::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioFileSystem;

impl TokioFileSystem {
    /// Creates a new `TokioFileSystem` instance.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FileSystem for TokioFileSystem {
    async fn file_exists(&self, path: &Path) -> bool {
        tokio::fs::metadata(path).await.is_ok()
    }

    async fn file_size(&self, path: &Path) -> Option<u64> {
        tokio::fs::metadata(path).await.ok().map(|m| m.len())
    }

    async fn create_dir_all(&self, path: &Path) -> std::io::Result<()> {
        tokio::fs::create_dir_all(path).await
    }

    async fn create_file(&self, path: &Path) -> std::io::Result<FileWriter> {
        let file = tokio::fs::File::create(path).await?;
        Ok(Box::new(tokio::io::BufWriter::new(file)))
    }

    async fn rename_file(&self, from: &Path, to: &Path) -> std::io::Result<()> {
        tokio::fs::rename(from, to).await
    }

    async fn remove_file(&self, path: &Path) -> std::io::Result<()> {
        tokio::fs::remove_file(path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use tokio::io::AsyncWriteExt;

    #[tokio::test]
    async fn exists_and_size() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("001.mp3");
        std::fs::write(&path, b"ID3").unwrap();

        let fs = TokioFileSystem::new();
        assert!(fs.file_exists(&path).await);
        assert_eq!(fs.file_size(&path).await, Some(3));
        assert!(!fs.file_exists(&dir.path().join("002.mp3")).await);
        assert_eq!(fs.file_size(&dir.path().join("002.mp3")).await, None);
    }

    #[tokio::test]
    async fn create_rename_remove() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("ar.alafasy");
        let part = nested.join("001.mp3.part");
        let done = nested.join("001.mp3");

        let fs = TokioFileSystem::new();
        fs.create_dir_all(&nested).await.unwrap();
        let mut file = fs.create_file(&part).await.unwrap();
        file.write_all(b"aud").await.unwrap();
        file.write_all(b"io").await.unwrap();
        file.shutdown().await.unwrap();
        drop(file);
        fs.rename_file(&part, &done).await.unwrap();

        assert!(!part.exists());
        assert_eq!(std::fs::read(&done).unwrap(), b"audio");

        fs.remove_file(&done).await.unwrap();
        assert!(!done.exists());
    }
}
