use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spocli::{
    cli, config, error,
    spotify::SpotifyClient,
    types::{ArtistsEndpoint, BrowseEndpoint, SearchKind},
    utils, warning,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Search for artists, albums, and tracks
    Search(SearchOptions),

    /// Get playlists and album release info
    Browse(BrowseOptions),

    /// Interact with the Artists resource
    Artists(ArtistsOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    /// The search query
    #[clap(long)]
    pub query: String,

    /// The resource to search through
    #[clap(long = "type", value_enum)]
    pub kind: SearchKind,
}

#[derive(Parser, Debug, Clone)]
pub struct BrowseOptions {
    /// Select the resource's endpoint
    #[clap(long, value_enum)]
    pub endpoint: Option<BrowseEndpoint>,

    /// The Spotify category ID
    #[clap(long)]
    pub id: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct ArtistsOptions {
    /// The Spotify artist ID
    #[clap(long)]
    pub id: String,

    /// Select the resource's endpoint
    #[clap(long, value_enum)]
    pub endpoint: Option<ArtistsEndpoint>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    utils::init_tracing();

    if let Err(e) = config::load_env().await {
        warning!("Cannot load .env file. Err: {}", e);
    }

    let cli = Cli::parse();

    if let Command::Completions(opt) = &cli.command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    let settings = match config::Settings::from_env() {
        Ok(s) => s,
        Err(e) => error!("{}", e),
    };

    let client = match SpotifyClient::from_settings(&settings) {
        Ok(c) => c,
        Err(e) => error!("{}", e),
    };

    match cli.command {
        Command::Search(opt) => cli::search(&client, &opt.query, opt.kind).await,
        Command::Browse(opt) => cli::browse(&client, opt.endpoint, opt.id).await,
        Command::Artists(opt) => cli::artists(&client, &opt.id, opt.endpoint).await,
        Command::Completions(_) => {}
    }
}
