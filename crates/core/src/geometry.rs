//! Screen/grid coordinate mapping.
//!
//! Tiles are laid out as fixed-size rectangles starting at an origin. The same
//! geometry drives both drawing and click hit-testing so they cannot disagree.

use crate::types::GridPos;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TileGeometry {
    /// Screen column of the top-left tile.
    pub origin_x: u16,
    /// Screen row of the top-left tile.
    pub origin_y: u16,
    pub tile_w: u16,
    pub tile_h: u16,
}

impl TileGeometry {
    pub fn new(origin_x: u16, origin_y: u16, tile_w: u16, tile_h: u16) -> Self {
        Self {
            origin_x,
            origin_y,
            tile_w,
            tile_h,
        }
    }

    /// Map a screen point to the grid cell under it.
    ///
    /// Returns None for points left of or above the origin, past the last
    /// column/row, or when the tile size is degenerate.
    pub fn cell_at(&self, px: u16, py: u16, cols: u16, rows: u16) -> Option<GridPos> {
        if self.tile_w == 0 || self.tile_h == 0 {
            return None;
        }
        let dx = px.checked_sub(self.origin_x)?;
        let dy = py.checked_sub(self.origin_y)?;
        let x = dx / self.tile_w;
        let y = dy / self.tile_h;
        if x >= cols || y >= rows {
            return None;
        }
        Some(GridPos::new(x, y))
    }

    /// Top-left screen cell of the tile at `pos`.
    ///
    /// Saturates instead of wrapping for grids larger than the screen space.
    pub fn cell_origin(&self, pos: GridPos) -> (u16, u16) {
        (
            self.origin_x.saturating_add(pos.x.saturating_mul(self.tile_w)),
            self.origin_y.saturating_add(pos.y.saturating_mul(self.tile_h)),
        )
    }

    /// Screen size of a `cols` x `rows` grid.
    pub fn extent(&self, cols: u16, rows: u16) -> (u16, u16) {
        (
            cols.saturating_mul(self.tile_w),
            rows.saturating_mul(self.tile_h),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_points_inside_wide_tiles() {
        let g = TileGeometry::new(1, 1, 2, 1);
        assert_eq!(g.cell_at(1, 1, 5, 5), Some(GridPos::new(0, 0)));
        assert_eq!(g.cell_at(2, 1, 5, 5), Some(GridPos::new(0, 0)));
        assert_eq!(g.cell_at(3, 1, 5, 5), Some(GridPos::new(1, 0)));
        assert_eq!(g.cell_at(10, 5, 5, 5), Some(GridPos::new(4, 4)));
    }

    #[test]
    fn rejects_points_outside_grid() {
        let g = TileGeometry::new(4, 2, 2, 1);
        assert_eq!(g.cell_at(3, 2, 5, 5), None);
        assert_eq!(g.cell_at(4, 1, 5, 5), None);
        assert_eq!(g.cell_at(14, 2, 5, 5), None);
        assert_eq!(g.cell_at(4, 7, 5, 5), None);
    }

    #[test]
    fn zero_tile_size_maps_nothing() {
        let g = TileGeometry::new(0, 0, 0, 1);
        assert_eq!(g.cell_at(0, 0, 5, 5), None);
    }

    #[test]
    fn cell_origin_is_inverse_of_cell_at() {
        let g = TileGeometry::new(3, 2, 3, 2);
        for y in 0..4 {
            for x in 0..6 {
                let pos = GridPos::new(x, y);
                let (px, py) = g.cell_origin(pos);
                assert_eq!(g.cell_at(px, py, 6, 4), Some(pos));
                assert_eq!(g.cell_at(px + 2, py + 1, 6, 4), Some(pos));
            }
        }
    }
}
