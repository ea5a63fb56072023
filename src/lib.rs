mod error;
mod grid;
mod lookup;
mod naive;
pub mod table;
mod utils;

pub use error::{Error, Result};
pub use grid::Grid;
pub use lookup::LookupEngine;
pub use naive::NaiveEngine;
pub use table::{build_table, neighborhood_code, transition_table, TABLE_SIZE};
pub use utils::{is_alive, parse_grid, read_grid, Config, Engine};

pub type DefaultEngine = LookupEngine;
