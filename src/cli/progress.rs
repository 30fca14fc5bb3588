//! Progress bars and tables for the CLI.

use std::sync::atomic::{AtomicU64, Ordering};

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    CollectedFiles, DownloadProgress, FileStats, Reciter, SessionStats, SurahInfo, format_bytes,
    format_duration, format_surah,
};

const SEPARATOR: &str = "────────────────────────────────────────────────────────────";

/// Counts finished assets on a single bar, with received bytes as prefix.
pub struct BarProgress {
    bar: ProgressBar,
    received: AtomicU64,
}

impl BarProgress {
    /// Creates a hidden bar; [`Self::start`] sets its length.
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(
            ProgressStyle::with_template(
                "{spinner:.cyan} [{bar:40.cyan/blue}] {pos}/{len} files {prefix} ({eta}) {msg}",
            )
            .expect("progress template is valid")
            .progress_chars("━━╌"),
        );
        Self {
            bar,
            received: AtomicU64::new(0),
        }
    }

    /// Sizes the bar for `total` assets and starts the spinner.
    pub fn start(&self, total: u64) {
        self.bar.set_length(total);
        self.bar.enable_steady_tick(std::time::Duration::from_millis(250));
    }

    /// Clears the bar from the terminal.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl DownloadProgress for BarProgress {
    fn on_file_start(&self, name: &str) {
        self.bar.set_message(name.to_string());
    }

    fn on_progress(&self, _name: &str, bytes_delta: u64) {
        let total = self.received.fetch_add(bytes_delta, Ordering::Relaxed) + bytes_delta;
        self.bar.set_prefix(format_bytes(total));
    }

    fn on_file_complete(&self, _name: &str, _stats: &FileStats) {
        self.bar.inc(1);
    }

    fn on_error(&self, name: &str, error: &str) {
        self.bar.inc(1);
        self.bar
            .println(format!("  {} {name}: {error}", style("failed").red().bold()));
    }

    fn on_partial_detected(&self, name: &str, existing_size: u64) {
        log::info!(
            "Found partial download {name} ({}), will re-download",
            format_bytes(existing_size)
        );
    }
}

/// Prints what is about to be downloaded.
pub fn print_plan(reciter: &Reciter, collected: &CollectedFiles) {
    println!("\n{SEPARATOR}");
    println!("Reciter: {} ({})", reciter.name, reciter.id);
    println!("{SEPARATOR}");
    println!("  {} file(s) to download", collected.to_download.len());
    if collected.skipped > 0 {
        println!("  {} file(s) skipped (already exist)", collected.skipped);
    }
    if collected.partial > 0 {
        println!(
            "  {} file(s) with partial downloads (will re-download)",
            collected.partial
        );
    }
    println!("{SEPARATOR}\n");
}

/// Prints a summary of download statistics.
pub fn print_summary(stats: &SessionStats) {
    println!("\n{SEPARATOR}");
    println!("Download Summary");
    println!("{SEPARATOR}");
    println!("  Files downloaded:  {}", stats.files_downloaded);
    if stats.files_downloaded > 0 {
        println!("  Total size:        {}", format_bytes(stats.total_bytes));
        println!("  Total time:        {}", format_duration(stats.elapsed));
        println!(
            "  Average speed:     {}/s",
            format_bytes(stats.average_speed())
        );
    }
    if stats.files_skipped > 0 {
        println!("  Files skipped:     {}", stats.files_skipped);
    }
    if stats.files_failed > 0 {
        println!(
            "  Files failed:      {}",
            style(stats.files_failed).red().bold()
        );
    }
    if stats.files_cancelled > 0 {
        println!(
            "  Files cancelled:   {}",
            style(stats.files_cancelled).yellow()
        );
    }
    println!("{SEPARATOR}");
}

/// Prints the surah table.
pub fn print_surahs(surahs: impl Iterator<Item = SurahInfo>) {
    for info in surahs {
        println!(
            "{:<45} {:>4} ayahs  {}",
            format_surah(&info),
            info.ayahs,
            style(info.revelation).dim()
        );
    }
}

/// Prints the reciter catalog.
pub fn print_reciters(reciters: &[Reciter]) {
    for r in reciters {
        println!(
            "{:<24} {:<30} {:<9} {} kbps",
            style(r.id).bold(),
            r.name,
            r.style,
            r.bitrate
        );
    }
}
