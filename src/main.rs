use anyhow::Context;
use clap::{CommandFactory, Parser};
use m3ucat::{catalog::Catalog, fetch::PlaylistFetcher, load_catalog, render, settings::Settings};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Browse and resolve channels from M3U/M3U8 playlists",
    after_help = "Examples:\n  \
                  m3ucat --playlist playlist.m3u --list\n  \
                  m3ucat --playlist https://example.com/playlist.m3u --groups\n  \
                  m3ucat --playlist playlist.m3u --play \"Channel Name\""
)]
struct Args {
    /// Path or URL to M3U playlist file
    #[arg(short, long)]
    playlist: String,

    /// Configuration file path
    #[arg(short, long, default_value = "config.ini")]
    config: PathBuf,

    /// List all channels
    #[arg(short, long)]
    list: bool,

    /// List all channel groups
    #[arg(short, long)]
    groups: bool,

    /// Filter channels by group
    #[arg(long)]
    group: Option<String>,

    /// Play a specific channel by name
    #[arg(long)]
    play: Option<String>,

    /// Show information about a specific channel
    #[arg(long)]
    info: Option<String>,

    /// Print listings and channel info as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let settings = Settings::load(Some(args.config.as_path()))?;
    tracing::debug!("Settings: {:?}", settings);

    let fetcher = PlaylistFetcher::new(&settings.fetch_config())
        .context("Failed to build HTTP client")?;

    if !args.json {
        println!("Loading playlist from: {}", args.playlist);
    }
    let catalog = load_catalog(&fetcher, &args.playlist).await?;
    if !args.json {
        println!("Loaded {} channels", catalog.len());
    }

    // Empty values count as not given.
    let group = non_empty(args.group.as_deref());
    let play = non_empty(args.play.as_deref());
    let info = non_empty(args.info.as_deref());

    if args.groups {
        let groups = catalog.list_groups();
        emit(&groups, render::group_list(&groups, catalog.is_empty()), args.json)
    } else if args.list || group.is_some() {
        let channels = catalog.list(group);
        emit(&channels, render::channel_list(&channels, catalog.is_empty()), args.json)
    } else if let Some(name) = play {
        let channel = catalog.play(name)?;
        println!();
        print!("{}", render::playback(channel));
        Ok(())
    } else if let Some(name) = info {
        show_info(&catalog, name, args.json)
    } else {
        Args::command().print_help()?;
        Ok(())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn show_info(catalog: &Catalog, name: &str, json: bool) -> anyhow::Result<()> {
    let channel = catalog.find_by_name(name)?;
    emit(channel, render::channel_info(channel), json)
}

fn emit<T: serde::Serialize + ?Sized>(value: &T, text: String, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", render::json(value)?);
    } else {
        println!();
        print!("{}", text);
    }
    Ok(())
}
