mod app;
mod game;
mod menu;

pub use app::SnakeApp;
