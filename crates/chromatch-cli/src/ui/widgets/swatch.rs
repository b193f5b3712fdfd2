use chromatch_engine::Genome;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

/// Solid colour block showing a genome's RGB interpretation.
#[derive(Debug, Clone, Copy)]
pub struct SwatchDisplay {
    color: Color,
}

impl SwatchDisplay {
    #[must_use]
    pub fn new(genome: Genome) -> Self {
        let (r, g, b) = genome.channels();
        Self {
            color: Color::Rgb(r, g, b),
        }
    }
}

impl Widget for SwatchDisplay {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &SwatchDisplay {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        buf.set_style(area, Style::default().bg(self.color));
    }
}
