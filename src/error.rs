//! Error types for the hifz-assets library.

use thiserror::Error;

/// Errors that can occur during lookups, URL construction and downloads.
#[derive(Error, Debug)]
pub enum Error {
    /// A surah, ayah or global index fell outside its valid domain.
    #[error("{what} {value} out of range (expected {min}..={max})")]
    OutOfRange {
        /// Which argument was rejected ("surah", "ayah", "global ayah").
        what: &'static str,
        /// The rejected value.
        value: i64,
        /// Smallest accepted value.
        min: i64,
        /// Largest accepted value.
        max: i64,
    },

    /// No reciter with the given identifier exists in the catalog.
    #[error("Unknown reciter: {0}")]
    UnknownReciter(String),

    /// A surah list such as `1-3,36` could not be parsed.
    #[error("Invalid surah list: {0}")]
    InvalidSurahList(String),

    /// Configuration file could not be parsed.
    #[error("Config error: {0}")]
    Config(String),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Download operation failed.
    #[error("Download failed: {0}")]
    Download(String),

    /// HTTP request error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Download was cancelled.
    #[error("Download cancelled")]
    Cancelled,
}

impl Error {
    /// Builds an [`Error::OutOfRange`] for `value` rejected against `min..=max`.
    pub(crate) fn out_of_range(what: &'static str, value: i64, min: i64, max: i64) -> Self {
        Self::OutOfRange {
            what,
            value,
            min,
            max,
        }
    }

    /// Returns true if this is an [`Error::OutOfRange`].
    #[must_use]
    pub const fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::Config(e.to_string())
    }
}

/// A specialized `Result` type for hifz-assets operations.
pub type Result<T> = std::result::Result<T, Error>;
