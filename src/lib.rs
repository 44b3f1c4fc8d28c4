pub mod config;
pub mod error;
pub mod game;
pub mod keyboard;
pub mod layouts;
pub mod words;
// cmd and reports are binary modules (see main.rs).

pub use error::{KeyHopError, KhResult};
pub use keyboard::{KeyStatus, Keyboard, Position};
