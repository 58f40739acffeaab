mod app;
mod dom;
mod net;
mod palette;
mod render;
mod state;
mod util;

pub use app::{mount_blackboard, run, unmount_blackboard};
