mod console;
mod menu;
mod ops;
pub mod stubs;

pub use console::{Console, StdConsole};
pub use menu::run;
pub use ops::{add_movie, delete_movie, list_movies, update_movie};
