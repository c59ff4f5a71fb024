//! Frontends over the game engine: a line-based text adapter and a
//! full-screen terminal UI.

mod app;
mod game_view;
pub mod text;

pub use app::App;
pub use text::TextUi;
