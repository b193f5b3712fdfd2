pub use self::{population_grid::PopulationDisplay, swatch::SwatchDisplay};

mod population_grid;
mod swatch;
