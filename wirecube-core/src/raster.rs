//! Square occupancy grid and integer line rasterization
use crate::projection::ProjectedPoint;

/// A `size × size` occupancy buffer, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<bool>,
}

impl Grid {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![false; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        let size = self.size as i64;
        if x < 0 || y < 0 || x >= size || y >= size {
            return None;
        }
        Some(y as usize * self.size + x as usize)
    }

    /// Mark a cell; coordinates outside the grid are ignored
    pub fn set(&mut self, x: i64, y: i64) {
        if let Some(idx) = self.index(x, y) {
            self.cells[idx] = true;
        }
    }

    pub fn get(&self, x: i64, y: i64) -> bool {
        self.index(x, y).map_or(false, |idx| self.cells[idx])
    }

    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        // `max(1)` keeps `chunks` happy for an empty grid
        self.cells.chunks(self.size.max(1))
    }

    /// Render as text, one line per row, each line ending in `\n`
    pub fn to_text(&self, filled: char, empty: char) -> String {
        let mut out = String::with_capacity(self.size * (self.size + 1));
        for row in self.rows() {
            out.extend(row.iter().map(|&c| if c { filled } else { empty }));
            out.push('\n');
        }
        out
    }
}

/// Mark every cell on the straight line between `from` and `to`
///
/// Endpoints are truncated toward zero. Cells outside the grid are skipped,
/// so a segment may leave the screen partially or entirely. Segments are
/// first cut down to a box one grid wide around the screen; endpoints that
/// are NaN or infinite drop the whole segment.
pub fn draw_line(grid: &mut Grid, from: &ProjectedPoint, to: &ProjectedPoint) {
    let size = grid.size() as f64;
    if let Some((start, end)) = clip((from.x, from.y), (to.x, to.y), -size, 2.0 * size) {
        draw_cells(grid, (start.0 as i64, start.1 as i64), (end.0 as i64, end.1 as i64));
    }
}

type Point2 = (f64, f64);

/// Liang-Barsky clip of a segment against the square [lo, hi]²
///
/// Endpoints already inside the square come back bit-for-bit unchanged.
fn clip(from: Point2, to: Point2, lo: f64, hi: f64) -> Option<(Point2, Point2)> {
    if ![from.0, from.1, to.0, to.1].iter().all(|c| c.is_finite()) {
        return None;
    }

    let dx = to.0 - from.0;
    let dy = to.1 - from.1;
    let (mut t0, mut t1) = (0.0_f64, 1.0_f64);

    for (p, q) in [
        (-dx, from.0 - lo),
        (dx, hi - from.0),
        (-dy, from.1 - lo),
        (dy, hi - from.1),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }

        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    let start = if t0 > 0.0 {
        (from.0 + t0 * dx, from.1 + t0 * dy)
    } else {
        from
    };
    let end = if t1 < 1.0 {
        (from.0 + t1 * dx, from.1 + t1 * dy)
    } else {
        to
    };

    // dx/dy can overflow for enormous finite endpoints
    if [start.0, start.1, end.0, end.1].iter().all(|c| c.is_finite()) {
        Some((start, end))
    } else {
        None
    }
}

/// Bresenham between two integer cells
pub fn draw_cells(grid: &mut Grid, start: (i64, i64), end: (i64, i64)) {
    let (x1, y1) = end;
    let dx = (x1 - start.0).abs();
    let dy = (y1 - start.1).abs();
    let sx = if start.0 < x1 { 1 } else { -1 };
    let sy = if start.1 < y1 { 1 } else { -1 };

    let mut err = dx - dy;
    let (mut x, mut y) = start;

    loop {
        grid.set(x, y);
        if x == x1 && y == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn point(x: f64, y: f64) -> ProjectedPoint {
        ProjectedPoint { x, y, z: 0.0 }
    }

    fn marked(grid: &Grid) -> Vec<(i64, i64)> {
        let size = grid.size() as i64;
        let mut cells = Vec::new();
        for y in 0..size {
            for x in 0..size {
                if grid.get(x, y) {
                    cells.push((x, y));
                }
            }
        }
        cells
    }

    #[test]
    fn test_single_point() {
        let mut grid = Grid::new(10);
        draw_line(&mut grid, &point(3.7, 4.2), &point(3.1, 4.9));
        assert_eq!(marked(&grid), vec![(3, 4)]);
    }

    #[test]
    fn test_horizontal_segment() {
        let mut grid = Grid::new(8);
        draw_line(&mut grid, &point(0.0, 0.0), &point(5.0, 0.0));
        assert_eq!(marked(&grid), (0..=5).map(|x| (x, 0)).collect::<Vec<_>>());
    }

    #[test]
    fn test_direction_does_not_matter_for_axis_lines() {
        let mut forward = Grid::new(8);
        let mut backward = Grid::new(8);
        draw_cells(&mut forward, (1, 6), (1, 2));
        draw_cells(&mut backward, (1, 2), (1, 6));
        assert_eq!(forward, backward);
        assert_eq!(forward.filled(), 5);
    }

    #[test]
    fn test_diagonal() {
        let mut grid = Grid::new(5);
        draw_cells(&mut grid, (4, 0), (0, 4));
        assert_eq!(marked(&grid), vec![(4, 0), (3, 1), (2, 2), (1, 3), (0, 4)]);
    }

    #[test]
    fn test_shallow_slope_is_connected() {
        let mut grid = Grid::new(12);
        draw_cells(&mut grid, (0, 0), (10, 3));
        assert_eq!(grid.filled(), 11);
        assert!(grid.get(0, 0) && grid.get(10, 3));
    }

    #[test]
    fn test_entirely_outside_marks_nothing() {
        let mut grid = Grid::new(6);
        draw_line(&mut grid, &point(-20.0, -3.0), &point(-2.0, -9.0));
        draw_line(&mut grid, &point(7.0, 10.0), &point(30.0, 8.0));
        draw_line(&mut grid, &point(6.0, 0.0), &point(6.0, 5.0));
        assert_eq!(grid.filled(), 0);
    }

    #[test]
    fn test_partially_outside_is_clipped() {
        let mut grid = Grid::new(4);
        draw_cells(&mut grid, (-2, 1), (5, 1));
        assert_eq!(marked(&grid), vec![(0, 1), (1, 1), (2, 1), (3, 1)]);
    }

    #[test]
    fn test_far_away_endpoints_are_clipped() {
        let mut grid = Grid::new(5);
        draw_line(&mut grid, &point(-1e15, 2.0), &point(1e15, 2.0));
        assert_eq!(marked(&grid), (0..5).map(|x| (x, 2)).collect::<Vec<_>>());

        // only grazes the corner; must return rather than walk 1e300 cells
        let mut grid = Grid::new(5);
        draw_line(&mut grid, &point(1e300, -1e300), &point(-1e300, 1e300));
        assert!(grid.filled() <= 1);
    }

    #[test]
    fn test_non_finite_endpoints_mark_nothing() {
        let mut grid = Grid::new(5);
        draw_line(&mut grid, &point(f64::INFINITY, 1.0), &point(2.0, 2.0));
        draw_line(&mut grid, &point(1.0, 1.0), &point(f64::NEG_INFINITY, f64::INFINITY));
        draw_line(&mut grid, &point(f64::NAN, 0.0), &point(3.0, 3.0));
        assert_eq!(grid.filled(), 0);
    }

    #[test]
    fn test_clip_keeps_inner_endpoints() {
        let from = (1.25, 3.5);
        let to = (4.75, 0.5);
        assert_eq!(clip(from, to, -5.0, 10.0), Some((from, to)));
        assert_eq!(clip((-20.0, -20.0), (-6.0, 40.0), -5.0, 10.0), None);
    }

    #[test]
    fn test_overlapping_lines_are_idempotent() {
        let mut grid = Grid::new(6);
        draw_cells(&mut grid, (0, 2), (5, 2));
        draw_cells(&mut grid, (5, 2), (0, 2));
        assert_eq!(grid.filled(), 6);
    }

    #[test]
    fn test_to_text() {
        let mut grid = Grid::new(3);
        draw_cells(&mut grid, (0, 0), (2, 2));
        assert_eq!(grid.to_text('#', '.'), "#..\n.#.\n..#\n");
    }
}
