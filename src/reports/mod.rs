use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table};
use keyhop::game::Game;
use keyhop::keyboard::{KeyStatus, Keyboard, Position};

/// Renders the grid: `[k]` is the last pressed key, `(k)` a pressable one.
pub fn keyboard_table(kb: &Keyboard) -> Table {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    for (r, row) in kb.rows().iter().enumerate() {
        let cells: Vec<Cell> = row
            .slots()
            .iter()
            .enumerate()
            .map(|(c, slot)| {
                let Some(key) = slot.key() else {
                    return Cell::new(" ");
                };
                let cell = match kb.key_status(Position::new(r, c)) {
                    KeyStatus::Pressed => Cell::new(format!("[{}]", key))
                        .fg(Color::Yellow)
                        .add_attribute(Attribute::Bold),
                    KeyStatus::Pressable => Cell::new(format!("({})", key)).fg(Color::Green),
                    KeyStatus::Normal => Cell::new(key),
                };
                cell.set_alignment(CellAlignment::Center)
            })
            .collect();
        table.add_row(cells);
    }
    table
}

pub fn print_keyboard(title: &str, kb: &Keyboard) {
    println!("\nKeyboard: {}", title);
    println!("{}", keyboard_table(kb));
}

pub fn print_progress(game: &Game) {
    println!(
        "Word: {}|{} ({}/{})",
        game.filled(),
        game.unfilled(),
        game.letters_filled(),
        game.word().chars().count()
    );
}
