pub mod app;
pub mod status;
pub mod theme;
pub mod window;
