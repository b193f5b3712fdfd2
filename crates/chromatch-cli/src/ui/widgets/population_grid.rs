use chromatch_engine::Population;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::Widget,
};

use crate::ui::widgets::SwatchDisplay;

/// Number of swatch columns in the population grid.
const GRID_COLUMNS: usize = 8;

/// Fixed grid of colour swatches, one per individual, in population order.
///
/// Individual `n` occupies column `n % 8`, row `n / 8`.
#[derive(Debug)]
pub struct PopulationDisplay<'a> {
    population: &'a Population,
}

impl<'a> PopulationDisplay<'a> {
    #[must_use]
    pub fn new(population: &'a Population) -> Self {
        Self { population }
    }
}

impl Widget for PopulationDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &PopulationDisplay<'_> {
    #[expect(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let row_count = self.population.len().div_ceil(GRID_COLUMNS).max(1);
        let rows = Layout::vertical(vec![
            Constraint::Ratio(1, row_count as u32);
            row_count
        ])
        .split(area);
        let cells: Vec<_> = rows
            .iter()
            .flat_map(|row| {
                Layout::horizontal(vec![
                    Constraint::Ratio(1, GRID_COLUMNS as u32);
                    GRID_COLUMNS
                ])
                .split(*row)
                .iter()
                .copied()
                .collect::<Vec<_>>()
            })
            .collect();

        for (ind, cell) in self.population.individuals().iter().zip(&cells) {
            SwatchDisplay::new(ind.genome()).render(*cell, buf);
        }
    }
}
