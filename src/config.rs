use crate::error::KhResult;
use crate::keyboard::Keyboard;
use crate::layouts::{KnownLayout, LayoutFile};
use clap::Args;
use fastrand::Rng;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct GameConfig {
    /// Built-in layout to play on
    #[arg(global = true, short, long, default_value_t = KnownLayout::Qwerty)]
    pub layout: KnownLayout,

    /// JSON layout file (`{"name": ..., "rows": [...]}`); overrides --layout
    #[arg(global = true, long)]
    pub layout_file: Option<PathBuf>,

    /// Seed for scrambling and word choice
    #[arg(global = true, long)]
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            layout: KnownLayout::Qwerty,
            layout_file: None,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn build_keyboard(&self) -> KhResult<Keyboard> {
        match &self.layout_file {
            Some(path) => {
                let file = LayoutFile::load_from_file(path)?;
                let kb = file.keyboard()?;
                info!(
                    "⌨️  Layout '{}': {}x{}",
                    file.name,
                    kb.num_rows(),
                    kb.num_columns()
                );
                Ok(kb)
            }
            None => {
                info!("⌨️  Layout '{}'", self.layout);
                Ok(self.layout.keyboard())
            }
        }
    }

    pub fn rng(&self) -> Rng {
        match self.seed {
            Some(seed) => Rng::with_seed(seed),
            None => Rng::new(),
        }
    }
}
