pub mod grid;
pub mod xlsx;

pub use grid::{CellValue, Grid};
pub use xlsx::read_grid;
