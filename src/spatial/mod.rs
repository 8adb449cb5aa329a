pub mod grid;

pub use grid::{Grid, SwatchGrid};
