//! Grid widget: one snapshot, rendered with half-block glyphs.
//!
//! Each terminal cell carries two vertically stacked grid cells: the upper
//! half-block's foreground is the even row, its background the odd row.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Widget};

use petri_data::GlobalGrid;

const LIVE_COLOR: Color = Color::Green;
const DEAD_COLOR: Color = Color::Black;

pub struct GridWidget<'a> {
    grid: &'a GlobalGrid,
    iteration: u64,
}

impl<'a> GridWidget<'a> {
    pub fn new(grid: &'a GlobalGrid, iteration: u64) -> Self {
        Self { grid, iteration }
    }

    fn color_for_cell(&self, row: usize, col: usize) -> Color {
        if row < self.grid.rows() && self.grid.is_alive(row, col) {
            LIVE_COLOR
        } else {
            DEAD_COLOR
        }
    }
}

impl Widget for GridWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(
                " petri — {}x{} — iteration {} — q to quit ",
                self.grid.rows(),
                self.grid.cols(),
                self.iteration
            ));
        let inner = block.inner(area);
        block.render(area, buf);

        let visible_cols = (self.grid.cols()).min(inner.width as usize);
        let visible_rows = (self.grid.rows().div_ceil(2)).min(inner.height as usize);

        for y in 0..visible_rows {
            for x in 0..visible_cols {
                let top = self.color_for_cell(2 * y, x);
                let bottom = self.color_for_cell(2 * y + 1, x);
                buf[(inner.x + x as u16, inner.y + y as u16)]
                    .set_symbol("▀")
                    .set_style(Style::default().fg(top).bg(bottom));
            }
        }
    }
}
