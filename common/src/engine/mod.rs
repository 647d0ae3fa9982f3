mod frame_driver;
pub mod session;
mod stop;

pub use frame_driver::{FrameDriver, FrameReport};
pub use stop::{StopHandle, StopToken, stop_channel};
