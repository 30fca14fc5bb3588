//! hifz-assets - surah/ayah indexing and asset URLs for Quran memorization.
//!
//! The core is the global ayah index: every ayah has a 1-based position in
//! the sequence of all 6236 ayahs, which is how per-ayah audio is addressed
//! on the CDN. Around it sit the surah and reciter tables, URL builders and
//! a batch downloader.
//!
//! # Example
//!
//! ```
//! use hifz_assets::{AssetUrls, find_reciter, surah_ayah_range, surah_ayah_to_global};
//!
//! # fn main() -> hifz_assets::Result<()> {
//! assert_eq!(surah_ayah_to_global(2, 1)?, 8);
//!
//! let range = surah_ayah_range(114)?;
//! assert_eq!((range.start, range.end, range.total), (6231, 6236, 6));
//!
//! let reciter = find_reciter("ar.alafasy")?;
//! let url = AssetUrls::default().ayah_audio(reciter, 1, 1)?;
//! assert!(url.ends_with("/ar.alafasy/1.mp3"));
//! # Ok(())
//! # }
//! ```

#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod ayah;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod format;
pub mod fs;
pub mod reciter;
pub mod stats;
pub mod surah;
pub mod url;

// Re-export main types for convenience
pub use ayah::{
    AyahRef, SURAH_COUNT, SurahRange, TOTAL_AYAHS, ayah_count, global_to_surah_ayah,
    surah_ayah_range, surah_ayah_to_global,
};
pub use config::{AppConfig, CdnConfig, DownloadConfig, PathConfig};
pub use download::{
    AssetSource, ByteStream, CollectedFiles, DownloadItem, DownloadProgress, Downloader, HttpSource,
    NoProgress, plan,
};
pub use error::{Error, Result};
pub use format::{format_bytes, format_duration, format_surah};
pub use fs::{FileSystem, FileWriter, TokioFileSystem};
pub use reciter::{Reciter, Style, default_reciter, find_reciter, reciters};
pub use stats::{FileStats, SessionStats, SessionStatsBuilder};
pub use surah::{Revelation, SurahInfo, parse_surah, parse_surah_list, surah_info, surahs};
pub use url::{AssetKind, AssetUrls, file_name};
