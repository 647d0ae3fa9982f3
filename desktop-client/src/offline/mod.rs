mod broadcaster;
mod snake_runner;

pub use broadcaster::LocalObserver;
pub use snake_runner::{SessionHandle, SessionSettings, spawn_session};
