//! CLI frontend for the Wegweiser exploration engine.

mod commands;
mod input;

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use wg_content::Pack;
use wg_core::Locale;

#[derive(Parser)]
#[command(
    name = "wg",
    about = "Wegweiser: explore text worlds one direction at a time",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log engine activity to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

// Where the world comes from.
#[derive(Args)]
struct WorldArgs {
    /// Built-in pack to load (default: water-temple)
    #[arg(short, long, conflicts_with = "world")]
    pack: Option<Pack>,

    /// JSON world file to load instead of a built-in pack
    #[arg(short, long)]
    world: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session
    Play {
        #[command(flatten)]
        source: WorldArgs,

        /// Player name (prompted for when omitted)
        #[arg(short, long)]
        name: Option<String>,

        /// Language of the session: fr or en
        #[arg(short, long, default_value = "fr")]
        lang: Locale,

        /// Remember at most this many visited locations
        #[arg(long)]
        history_limit: Option<usize>,
    },

    /// List the built-in world packs
    Packs,

    /// List every location of a world with its exits
    Rooms {
        #[command(flatten)]
        source: WorldArgs,

        /// Language used for direction codes: fr or en
        #[arg(short, long, default_value = "fr")]
        lang: Locale,

        /// Print the world as a JSON world file instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Validate a JSON world file
    Check {
        /// Path to the world file
        file: PathBuf,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Play {
            source,
            name,
            lang,
            history_limit,
        } => commands::load_world(source.pack, source.world.as_deref()).and_then(|world| {
            commands::play::run(world, name.as_deref(), lang, history_limit)
        }),
        Commands::Packs => commands::packs::run(),
        Commands::Rooms { source, lang, json } => {
            commands::load_world(source.pack, source.world.as_deref()).and_then(|world| {
                if json {
                    commands::rooms::export(&world)
                } else {
                    commands::rooms::run(&world, lang)
                }
            })
        }
        Commands::Check { file } => commands::check::run(&file),
    };

    if let Err(e) = result {
        eprintln!("{} {e}", "error:".red().bold());
        process::exit(1);
    }
}
