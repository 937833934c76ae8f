//! Presentation adapters: a plain-text board renderer and a terminal entry
//! screen. Both only read the board through snapshots.

mod app;
pub mod board_widget;
mod entry_view;
pub mod text;

pub use app::App;
