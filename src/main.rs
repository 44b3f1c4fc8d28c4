use clap::{Parser, Subcommand};
use keyhop::config::GameConfig;
use std::process;
use tracing::{error, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    config: GameConfig,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the keyboard
    Show(cmd::show::ShowArgs),
    /// Scramble the keyboard once and print it
    Scramble(cmd::show::ShowArgs),
    /// Spell a word, reading taps from stdin
    Play(cmd::play::PlayArgs),
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let kb = cli.config.build_keyboard().unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(1);
    });

    let result = match cli.command {
        Commands::Show(args) => cmd::show::run(args, &kb),
        Commands::Scramble(args) => cmd::show::run_scramble(args, kb, &cli.config),
        Commands::Play(args) => cmd::play::run(args, kb, &cli.config),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
