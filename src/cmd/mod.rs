pub mod play;
pub mod show;
