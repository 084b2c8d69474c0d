pub mod model;
pub mod view;

pub use model::{ClickAction, Status};
pub use view::StatusMenu;
