use crate::reports;
use clap::Args;
use keyhop::config::GameConfig;
use keyhop::error::KhResult;
use keyhop::keyboard::Keyboard;

#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    /// Print a JSON snapshot instead of the grid
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: ShowArgs, kb: &Keyboard) -> KhResult<()> {
    emit("layout", kb, args.json)
}

pub fn run_scramble(args: ShowArgs, mut kb: Keyboard, config: &GameConfig) -> KhResult<()> {
    let mut rng = config.rng();
    kb.scramble_with(&mut rng);
    emit("scrambled", &kb, args.json)
}

fn emit(title: &str, kb: &Keyboard, json: bool) -> KhResult<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&kb.snapshot())?);
    } else {
        reports::print_keyboard(title, kb);
    }
    Ok(())
}
