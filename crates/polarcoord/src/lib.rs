pub mod coords;
pub mod ipc;
pub mod wm;
