//! Terminal UI: the host loop, drop animation and game view.

mod animation;
mod app;
pub mod board_widget;
mod game_view;

pub use animation::DropAnimation;
pub use app::App;
