mod config;
mod parse_grid;
mod traits;

pub use config::Config;
pub use parse_grid::{is_alive, parse_grid, read_grid};
pub use traits::Engine;
