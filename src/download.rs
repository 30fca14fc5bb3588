//! Batch downloading of reciter audio and ayah images.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::BoxStream;
use futures::{StreamExt, stream};
use tokio::io::AsyncWriteExt;
use tokio_util::sync::CancellationToken;

use crate::ayah::ayah_count;
use crate::config::DownloadConfig;
use crate::error::{Error, Result};
use crate::fs::{FileSystem, TokioFileSystem};
use crate::reciter::Reciter;
use crate::stats::{FileStats, SessionStats, SessionStatsBuilder};
use crate::url::{AssetKind, AssetUrls, file_name};

/// Classification of an asset's current state on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    /// Final file exists and is non-empty.
    Complete,
    /// A `.part` file exists from an interrupted run.
    Partial,
    /// Nothing on disk yet.
    Missing,
}

/// Trait for receiving download progress updates.
///
/// All methods have default no-op implementations.
pub trait DownloadProgress: Send + Sync {
    /// Called when an asset download starts.
    fn on_file_start(&self, _name: &str) {}

    /// Called after each chunk is written with the number of bytes it held.
    fn on_progress(&self, _name: &str, _bytes_delta: u64) {}

    /// Called when an asset has been fetched and stored.
    fn on_file_complete(&self, _name: &str, _stats: &FileStats) {}

    /// Called when an asset download fails.
    fn on_error(&self, _name: &str, _error: &str) {}

    /// Called when a `.part` file from a previous run is found.
    fn on_partial_detected(&self, _name: &str, _existing_size: u64) {}
}

/// A null progress implementation that ignores all events.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl DownloadProgress for NoProgress {}

/// Response body delivered chunk by chunk.
pub type ByteStream = BoxStream<'static, Result<Bytes>>;

/// Where remote assets come from.
#[async_trait]
pub trait AssetSource: Send + Sync {
    /// Opens `url` and returns its body as a stream of chunks.
    ///
    /// Status errors are reported here, before any chunk is read.
    async fn fetch(&self, url: &str) -> Result<ByteStream>;
}

/// [`AssetSource`] backed by a `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
}

impl HttpSource {
    /// Builds an HTTP client configured from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialised.
    pub fn new(config: &DownloadConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("hifz/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(Duration::from_secs(config.timeout_secs))
            .read_timeout(Duration::from_secs(config.timeout_secs))
            .pool_idle_timeout(Duration::from_secs(60))
            .pool_max_idle_per_host(config.concurrent_files.max(1))
            .tcp_keepalive(Duration::from_secs(30))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl AssetSource for HttpSource {
    async fn fetch(&self, url: &str) -> Result<ByteStream> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Download(format!("{url}: HTTP {status}")));
        }
        Ok(response
            .bytes_stream()
            .map(|chunk| chunk.map_err(Error::from))
            .boxed())
    }
}

/// One remote asset and where it goes on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadItem {
    /// Remote URL.
    pub url: String,
    /// Local destination path.
    pub path: PathBuf,
}

impl DownloadItem {
    /// Short display name (the file name).
    #[must_use]
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map_or_else(|| self.url.clone(), |n| n.to_string_lossy().into_owned())
    }
}

/// Result of checking planned items against the disk.
#[derive(Debug, Default)]
pub struct CollectedFiles {
    /// Items that need to be downloaded.
    pub to_download: Vec<DownloadItem>,
    /// Number of items skipped (already complete).
    pub skipped: usize,
    /// Number of items with a leftover `.part` file.
    pub partial: usize,
}

impl CollectedFiles {
    /// Returns true if there is nothing to download.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.to_download.is_empty()
    }
}

/// Returns the `.part` file path for a given final path.
fn part_path(path: &Path) -> PathBuf {
    let mut s = path.as_os_str().to_owned();
    s.push(".part");
    PathBuf::from(s)
}

/// Lists the assets of `kind` for `surahs` and their destinations under `dest`.
///
/// Audio lands in `{dest}/{reciter id}/`, images in `{dest}/images/`.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] if any surah is invalid.
pub fn plan(
    urls: &AssetUrls,
    reciter: &Reciter,
    surahs: &[u16],
    kind: AssetKind,
    dest: &Path,
) -> Result<Vec<DownloadItem>> {
    let dir = match kind {
        AssetKind::AyahImage => dest.join("images"),
        AssetKind::AyahAudio | AssetKind::SurahAudio => dest.join(reciter.id),
    };

    let mut items = Vec::new();
    for &surah in surahs {
        if kind == AssetKind::SurahAudio {
            items.push(DownloadItem {
                url: urls.surah_audio(reciter, surah)?,
                path: dir.join(file_name(kind, surah, 0)),
            });
            continue;
        }
        for ayah in 1..=ayah_count(surah)? {
            items.push(DownloadItem {
                url: urls.url_for(kind, reciter, surah, ayah)?,
                path: dir.join(file_name(kind, surah, ayah)),
            });
        }
    }
    Ok(items)
}

/// Fetches planned assets and writes them to disk.
pub struct Downloader<S: AssetSource = HttpSource, F: FileSystem = TokioFileSystem> {
    source: S,
    config: DownloadConfig,
    fs: F,
}

impl<S: AssetSource> Downloader<S, TokioFileSystem> {
    /// Creates a new downloader with the default file system.
    #[must_use]
    pub const fn new(source: S, config: DownloadConfig) -> Self {
        Self {
            source,
            config,
            fs: TokioFileSystem,
        }
    }
}

impl<S: AssetSource, F: FileSystem> Downloader<S, F> {
    /// Creates a new downloader with a custom file system implementation.
    #[must_use]
    pub const fn with_fs(source: S, config: DownloadConfig, fs: F) -> Self {
        Self { source, config, fs }
    }

    /// Classifies an asset's current status on disk.
    async fn classify_file(&self, path: &Path) -> FileStatus {
        if self.config.force_overwrite {
            return FileStatus::Missing;
        }
        if self.fs.file_size(path).await.is_some_and(|size| size > 0) {
            return FileStatus::Complete;
        }
        if self.fs.file_exists(&part_path(path)).await {
            return FileStatus::Partial;
        }
        FileStatus::Missing
    }

    /// Splits `items` into those still needed and those already on disk.
    pub async fn collect_files(
        &self,
        items: Vec<DownloadItem>,
        progress: &Arc<dyn DownloadProgress>,
    ) -> CollectedFiles {
        let mut collected = CollectedFiles::default();

        for item in items {
            match self.classify_file(&item.path).await {
                FileStatus::Complete => collected.skipped += 1,
                FileStatus::Partial => {
                    let existing = self.fs.file_size(&part_path(&item.path)).await.unwrap_or(0);
                    progress.on_partial_detected(&item.name(), existing);
                    collected.partial += 1;
                    collected.to_download.push(item);
                }
                FileStatus::Missing => collected.to_download.push(item),
            }
        }

        collected
    }

    /// Ensures the parent directory exists for a file path.
    async fn ensure_parent_dir(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.fs.create_dir_all(parent).await?;
        }
        Ok(())
    }

    /// Streams `item` into `part`, then renames it into place.
    async fn transfer(
        &self,
        item: &DownloadItem,
        part: &Path,
        name: &str,
        progress: &Arc<dyn DownloadProgress>,
    ) -> Result<u64> {
        let mut body = self.source.fetch(&item.url).await?;
        let mut file = self.fs.create_file(part).await?;

        let mut written = 0u64;
        while let Some(chunk) = body.next().await {
            let chunk = chunk?;
            file.write_all(&chunk).await?;
            let len = chunk.len() as u64;
            written += len;
            progress.on_progress(name, len);
        }
        file.shutdown().await?;
        drop(file);

        if written == 0 {
            return Err(Error::Download(format!("{}: empty response", item.url)));
        }
        self.fs.rename_file(part, &item.path).await?;
        Ok(written)
    }

    /// Downloads a single asset.
    ///
    /// The body is streamed into `{path}.part` and renamed to `{path}` on
    /// success. On failure the `.part` file is removed if
    /// `cleanup_on_error` is set. A token that is already cancelled stops
    /// the download before anything is fetched.
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch fails, the body is empty, the file
    /// cannot be written, or the token is cancelled first.
    pub async fn download_file(
        &self,
        item: &DownloadItem,
        progress: &Arc<dyn DownloadProgress>,
        cancellation_token: Option<CancellationToken>,
    ) -> Result<FileStats> {
        if cancellation_token
            .as_ref()
            .is_some_and(CancellationToken::is_cancelled)
        {
            return Err(Error::Cancelled);
        }
        self.ensure_parent_dir(&item.path).await?;

        let name = item.name();
        let part = part_path(&item.path);
        let start = Instant::now();
        progress.on_file_start(&name);

        let transfer = self.transfer(item, &part, &name, progress);
        let result = if let Some(token) = cancellation_token {
            tokio::select! {
                biased;
                () = token.cancelled() => Err(Error::Cancelled),
                res = transfer => res,
            }
        } else {
            transfer.await
        };

        match result {
            Ok(size) => {
                let stats = FileStats {
                    size,
                    elapsed: start.elapsed(),
                };
                log::debug!("Downloaded {} ({size} bytes)", item.url);
                progress.on_file_complete(&name, &stats);
                Ok(stats)
            }
            Err(e) => {
                if self.config.cleanup_on_error && self.fs.file_exists(&part).await {
                    let _ = self.fs.remove_file(&part).await;
                }
                if !matches!(e, Error::Cancelled) {
                    progress.on_error(&name, &e.to_string());
                }
                Err(e)
            }
        }
    }

    /// Downloads all items, `concurrent_files` at a time.
    ///
    /// # Errors
    ///
    /// Individual failures are logged and counted in the returned stats;
    /// they never abort the batch. Items stopped by the token are counted
    /// as cancelled, not failed.
    pub async fn download_all(
        &self,
        files: &[DownloadItem],
        progress: &Arc<dyn DownloadProgress>,
        skipped_count: usize,
        cancellation_token: Option<CancellationToken>,
    ) -> Result<SessionStats> {
        let mut builder = SessionStatsBuilder::new();
        builder.set_skipped(skipped_count);

        if files.is_empty() {
            return Ok(builder.build());
        }

        let results: Vec<_> = stream::iter(files)
            .map(|item| {
                let token = cancellation_token.clone();
                async move { (item, self.download_file(item, progress, token).await) }
            })
            .buffer_unordered(self.config.concurrent_files.max(1))
            .collect()
            .await;

        for (item, result) in results {
            match result {
                Ok(file_stats) => builder.add_download(&file_stats),
                Err(Error::Cancelled) => builder.add_cancelled(),
                Err(e) => {
                    log::error!("Download failed: {}: {e}", item.url);
                    builder.add_failure();
                }
            }
        }

        Ok(builder.build())
    }
}
