//! Download statistics types.

use std::time::{Duration, Instant};

/// Statistics for a single downloaded asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStats {
    /// Size of the asset in bytes.
    pub size: u64,
    /// Time taken to fetch and store the asset.
    pub elapsed: Duration,
}

/// Statistics for an entire batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStats {
    /// Number of assets successfully downloaded.
    pub files_downloaded: usize,
    /// Number of assets skipped (already on disk).
    pub files_skipped: usize,
    /// Number of assets that failed.
    pub files_failed: usize,
    /// Number of assets stopped by cancellation before they finished.
    pub files_cancelled: usize,
    /// Total bytes downloaded.
    pub total_bytes: u64,
    /// Total elapsed time for the batch.
    pub elapsed: Duration,
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStats {
    /// Creates a new empty session stats.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            files_downloaded: 0,
            files_skipped: 0,
            files_failed: 0,
            files_cancelled: 0,
            total_bytes: 0,
            elapsed: Duration::ZERO,
        }
    }

    /// Returns the average download speed in bytes per second.
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn average_speed(&self) -> u64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            (self.total_bytes as f64 / secs) as u64
        } else {
            0
        }
    }

    /// Returns true if every planned asset is now on disk.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.files_failed == 0 && self.files_cancelled == 0
    }
}

/// Builder for accumulating session statistics during downloads.
#[derive(Debug)]
pub struct SessionStatsBuilder {
    stats: SessionStats,
    start_time: Instant,
}

impl Default for SessionStatsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStatsBuilder {
    /// Creates a new builder; the session clock starts now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stats: SessionStats::new(),
            start_time: Instant::now(),
        }
    }

    /// Sets the number of skipped files.
    pub const fn set_skipped(&mut self, count: usize) {
        self.stats.files_skipped = count;
    }

    /// Records a completed download.
    pub const fn add_download(&mut self, file_stats: &FileStats) {
        self.stats.files_downloaded += 1;
        self.stats.total_bytes += file_stats.size;
    }

    /// Records a failed download.
    pub const fn add_failure(&mut self) {
        self.stats.files_failed += 1;
    }

    /// Records a download stopped by cancellation.
    pub const fn add_cancelled(&mut self) {
        self.stats.files_cancelled += 1;
    }

    /// Builds the final session statistics.
    #[must_use]
    pub fn build(self) -> SessionStats {
        SessionStats {
            elapsed: self.start_time.elapsed(),
            ..self.stats
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_stats_default() {
        let stats = SessionStats::default();
        assert_eq!(stats.files_downloaded, 0);
        assert_eq!(stats.files_skipped, 0);
        assert_eq!(stats.files_failed, 0);
        assert!(stats.is_complete());
    }

    #[test]
    fn average_speed_zero_elapsed() {
        let stats = SessionStats {
            total_bytes: 1000,
            ..SessionStats::new()
        };
        assert_eq!(stats.average_speed(), 0);
    }

    #[test]
    fn average_speed() {
        let stats = SessionStats {
            files_downloaded: 1,
            total_bytes: 1000,
            elapsed: Duration::from_secs(2),
            ..SessionStats::new()
        };
        assert_eq!(stats.average_speed(), 500);
    }

    #[test]
    fn builder_accumulates() {
        let mut builder = SessionStatsBuilder::new();
        builder.set_skipped(2);
        builder.add_download(&FileStats {
            size: 500,
            elapsed: Duration::from_millis(10),
        });
        builder.add_download(&FileStats {
            size: 250,
            elapsed: Duration::from_millis(10),
        });
        builder.add_failure();

        let stats = builder.build();
        assert_eq!(stats.files_downloaded, 2);
        assert_eq!(stats.files_skipped, 2);
        assert_eq!(stats.files_failed, 1);
        assert_eq!(stats.total_bytes, 750);
        assert!(!stats.is_complete());
    }

    #[test]
    fn cancelled_is_not_a_failure() {
        let mut builder = SessionStatsBuilder::new();
        builder.add_cancelled();
        builder.add_cancelled();

        let stats = builder.build();
        assert_eq!(stats.files_cancelled, 2);
        assert_eq!(stats.files_failed, 0);
        assert!(!stats.is_complete());
    }
}
