//! CLI mode for hifz - lookups, asset URLs and batch downloads.

mod progress;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tokio_util::sync::CancellationToken;

use crate::{
    AppConfig, AssetKind, AssetUrls, DownloadProgress, Downloader, Error, HttpSource, Reciter,
    default_reciter, find_reciter, format_surah, global_to_surah_ayah, parse_surah,
    parse_surah_list, plan, reciters, surah_ayah_range, surah_ayah_to_global, surah_info, surahs,
};

use progress::{BarProgress, print_plan, print_reciters, print_summary, print_surahs};

#[derive(Parser, Debug)]
#[command(name = "hifz")]
#[command(about = "Quran ayah indexing, asset URLs and audio downloads")]
#[command(version)]
pub struct Cli {
    /// Config file (default: the platform config dir's hifz/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the global index of an ayah
    Index {
        /// Surah number or name
        surah: String,
        /// Ayah number within the surah
        ayah: u16,
    },
    /// Print the surah:ayah at a global index
    Locate {
        /// Global ayah index (1-6236)
        global: u16,
    },
    /// Print the global index range of a surah
    Range {
        /// Surah number or name
        surah: String,
    },
    /// List all surahs
    Surahs,
    /// List available reciters
    Reciters,
    /// Print the CDN URL of an asset
    Url {
        /// Surah number or name
        surah: String,
        /// Ayah number; omit for whole-surah audio
        ayah: Option<u16>,
        /// Reciter id (see `hifz reciters`)
        #[arg(long)]
        reciter: Option<String>,
        /// Print the ayah image URL instead of audio
        #[arg(long, requires = "ayah")]
        image: bool,
    },
    /// Download audio or images for a set of surahs
    Download {
        /// Surahs, e.g. `1-3,36,mulk` or `all`
        #[arg(long)]
        surahs: String,
        /// Reciter id (see `hifz reciters`)
        #[arg(long)]
        reciter: Option<String>,
        /// Asset kind: surah, ayah or image
        #[arg(long, default_value = "surah")]
        kind: AssetKind,
        /// Output directory (default from config)
        #[arg(long)]
        out: Option<PathBuf>,
        /// Concurrent downloads (default from config)
        #[arg(long)]
        concurrency: Option<usize>,
        /// Re-download files that already exist
        #[arg(long)]
        force: bool,
    },
}

/// Initialises `env_logger`; `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .try_init();
}

/// Resolves `--reciter`, using the default only when the flag is absent.
fn resolve_reciter(id: Option<&str>) -> crate::Result<&'static Reciter> {
    id.map_or_else(|| Ok(default_reciter()), find_reciter)
}

fn load_config(path: Option<&PathBuf>) -> crate::Result<AppConfig> {
    match path {
        Some(path) => AppConfig::load(path),
        None => AppConfig::load_default(),
    }
}

/// Parses arguments and runs the selected command.
///
/// # Errors
///
/// Returns an error if the command fails.
pub async fn run() -> crate::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = load_config(cli.config.as_ref())?;
    execute(cli.command, &config).await
}

async fn execute(command: Command, config: &AppConfig) -> crate::Result<()> {
    match command {
        Command::Index { surah, ayah } => {
            let surah = parse_surah(&surah)?;
            println!("{}", surah_ayah_to_global(surah, ayah)?);
        }
        Command::Locate { global } => {
            let r = global_to_surah_ayah(global)?;
            println!("{r} {}", format_surah(&surah_info(r.surah)?));
        }
        Command::Range { surah } => {
            let surah = parse_surah(&surah)?;
            let range = surah_ayah_range(surah)?;
            println!(
                "{}: {}..={} ({} ayahs)",
                format_surah(&surah_info(surah)?),
                range.start,
                range.end,
                range.total
            );
        }
        Command::Surahs => print_surahs(surahs()),
        Command::Reciters => print_reciters(reciters()),
        Command::Url {
            surah,
            ayah,
            reciter,
            image,
        } => {
            let surah = parse_surah(&surah)?;
            let reciter = resolve_reciter(reciter.as_deref())?;
            let urls = AssetUrls::new(&config.cdn);
            let url = match ayah {
                Some(ayah) if image => urls.ayah_image(surah, ayah)?,
                Some(ayah) => urls.ayah_audio(reciter, surah, ayah)?,
                None => urls.surah_audio(reciter, surah)?,
            };
            println!("{url}");
        }
        Command::Download {
            surahs,
            reciter,
            kind,
            out,
            concurrency,
            force,
        } => {
            let reciter = resolve_reciter(reciter.as_deref())?;
            let surahs = parse_surah_list(&surahs)?;
            let mut download = config.download.clone();
            if let Some(n) = concurrency {
                download.concurrent_files = n;
            }
            download.force_overwrite |= force;
            let dest = out.unwrap_or_else(|| config.paths.download_dir.clone());
            run_download(config, download, reciter, &surahs, kind, dest).await?;
        }
    }
    Ok(())
}

async fn run_download(
    config: &AppConfig,
    download: crate::DownloadConfig,
    reciter: &Reciter,
    surahs: &[u16],
    kind: AssetKind,
    dest: PathBuf,
) -> crate::Result<()> {
    let urls = AssetUrls::new(&config.cdn);
    let items = plan(&urls, reciter, surahs, kind, &dest)?;
    log::info!(
        "Planned {} {kind} asset(s) for {} surah(s) into {}",
        items.len(),
        surahs.len(),
        dest.display()
    );

    let source = HttpSource::new(&download)?;
    let downloader = Downloader::new(source, download);

    let bars = Arc::new(BarProgress::new());
    let progress: Arc<dyn DownloadProgress> = bars.clone();
    let collected = downloader.collect_files(items, &progress).await;
    print_plan(reciter, &collected);

    if collected.is_empty() {
        println!("All files already downloaded.");
        return Ok(());
    }

    bars.start(collected.to_download.len() as u64);

    let token = CancellationToken::new();
    let ctrl_c_token = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            log::warn!("Received SIGINT, cancelling downloads");
            ctrl_c_token.cancel();
        }
    });

    let stats = downloader
        .download_all(
            &collected.to_download,
            &progress,
            collected.skipped,
            Some(token.clone()),
        )
        .await?;

    bars.finish();
    print_summary(&stats);

    if token.is_cancelled() {
        return Err(Error::Cancelled);
    }
    if !stats.is_complete() {
        return Err(Error::Download(format!(
            "{} file(s) failed",
            stats.files_failed
        )));
    }
    Ok(())
}
