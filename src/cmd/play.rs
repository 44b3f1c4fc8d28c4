use crate::reports;
use clap::Args;
use fastrand::Rng;
use keyhop::config::GameConfig;
use keyhop::error::{KeyHopError, KhResult};
use keyhop::game::{Game, TapOutcome};
use keyhop::keyboard::{Keyboard, Position};
use keyhop::words;
use std::io::{self, BufRead};
use std::path::PathBuf;
use tracing::info;

const DEFAULT_WORD: &str = "tree";

#[derive(Args, Debug, Clone)]
pub struct PlayArgs {
    /// Word to spell
    #[arg(short, long)]
    pub word: Option<String>,

    /// Tab-separated word list to draw the word from
    #[arg(long, conflicts_with = "word")]
    pub words: Option<PathBuf>,
}

enum Command {
    Tap(Position),
    Scramble,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    match line {
        "scramble" | "s" => return Some(Command::Scramble),
        "quit" | "q" => return Some(Command::Quit),
        _ => {}
    }

    let mut parts = line.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Command::Tap(Position::new(row, col)))
}

pub fn run(args: PlayArgs, kb: Keyboard, config: &GameConfig) -> KhResult<()> {
    let mut rng = config.rng();

    let word = match (&args.word, &args.words) {
        (Some(w), _) => w.clone(),
        (None, Some(path)) => {
            let list = words::load_word_list(path)?;
            words::pick_word(&mut rng, &list)
                .map(str::to_string)
                .ok_or_else(|| KeyHopError::Validation("word list is empty".into()))?
        }
        (None, None) => DEFAULT_WORD.to_string(),
    };

    let mut game = Game::new(&word, kb)?;
    info!("🎯 Spell a {}-letter word", game.word().chars().count());

    let stdin = io::stdin();
    play_session(&mut game, stdin.lock(), &mut rng)
}

fn play_session<R: BufRead>(game: &mut Game, input: R, rng: &mut Rng) -> KhResult<()> {
    reports::print_keyboard("start", game.keyboard());
    reports::print_progress(game);

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_command(line) {
            Some(Command::Tap(pos)) => match game.tap(pos) {
                TapOutcome::Matched(c) => println!("✅ '{}'", c),
                TapOutcome::Completed(c) => {
                    println!("✅ '{}'", c);
                    reports::print_progress(game);
                    println!("🏁 Solved: {}", game.word());
                    return Ok(());
                }
                TapOutcome::Rejected => println!("❌ Nothing at {} can be pressed now", pos),
                TapOutcome::Finished => return Ok(()),
            },
            Some(Command::Scramble) => {
                game.scramble_with(rng);
                println!("🔀 Scrambled");
            }
            Some(Command::Quit) => break,
            None => {
                println!("❓ Unknown command '{}' (use '<row> <col>', 'scramble' or 'quit')", line);
                continue;
            }
        }

        reports::print_keyboard("current", game.keyboard());
        reports::print_progress(game);
    }

    println!("👋 Stopped at {}/{}", game.letters_filled(), game.word().chars().count());
    Ok(())
}
