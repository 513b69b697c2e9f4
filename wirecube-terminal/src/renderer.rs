//! Prints an occupancy grid as rows of characters
use crossterm::{queue, style::Print};
use std::io::Write;
use wirecube_core::Grid;

/// Glyph used for filled cells unless configured otherwise
pub const DEFAULT_GLYPH: char = '■';

/// Turns grids into text, one terminal row per grid row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AsciiRenderer {
    filled: char,
    empty: char,
}

impl AsciiRenderer {
    pub fn new(filled: char, empty: char) -> Self {
        Self { filled, empty }
    }

    pub fn draw<W: Write>(&self, grid: &Grid, writer: &mut W) -> std::io::Result<()> {
        let mut line = String::with_capacity(grid.size() * self.filled.len_utf8() + 1);
        for row in grid.rows() {
            line.clear();
            line.extend(row.iter().map(|&set| if set { self.filled } else { self.empty }));
            line.push('\n');
            queue!(writer, Print(&line))?;
        }
        Ok(())
    }
}

impl Default for AsciiRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_GLYPH, ' ')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use wirecube_core::raster::draw_cells;

    fn render(renderer: &AsciiRenderer, grid: &Grid) -> String {
        let mut out = Vec::new();
        renderer.draw(grid, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_draws_rows_with_newlines() {
        let mut grid = Grid::new(4);
        draw_cells(&mut grid, (0, 1), (3, 1));
        draw_cells(&mut grid, (2, 3), (2, 3));

        let text = render(&AsciiRenderer::default(), &grid);
        assert_eq!(text, "    \n■■■■\n    \n  ■ \n");
    }

    #[test]
    fn test_custom_glyphs() {
        let mut grid = Grid::new(2);
        grid.set(1, 0);

        let text = render(&AsciiRenderer::new('#', '.'), &grid);
        assert_eq!(text, ".#\n..\n");
    }

    #[test]
    fn test_empty_grid_is_all_blank() {
        let text = render(&AsciiRenderer::default(), &Grid::new(3));
        assert_eq!(text.lines().count(), 3);
        assert!(text.chars().all(|c| c == ' ' || c == '\n'));
    }
}
