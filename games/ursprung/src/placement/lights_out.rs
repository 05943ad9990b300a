//! Lights-Out toggle grid.

use glam::Vec2;
use kosmos_engine::Rng;

/// Rows × cols switches. Toggling a cell also flips its orthogonal neighbours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightsOut {
    cols: usize,
    rows: usize,
    cells: Vec<bool>,
}

/// Gives up re-scrambling after this many solved results.
const MAX_SCRAMBLES: usize = 32;

impl LightsOut {
    /// Every cell on.
    pub fn new_lit(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![true; cols * rows],
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn get(&self, x: usize, y: usize) -> Option<bool> {
        (x < self.cols && y < self.rows).then(|| self.cells[y * self.cols + x])
    }

    /// Flip (x, y) and its in-bounds orthogonal neighbours.
    /// Returns how many cells changed; 0 when (x, y) is off the grid.
    pub fn toggle(&mut self, x: usize, y: usize) -> usize {
        if x >= self.cols || y >= self.rows {
            return 0;
        }
        let mut flipped = 0;
        let neighbours = [
            Some((x, y)),
            x.checked_sub(1).map(|l| (l, y)),
            (x + 1 < self.cols).then_some((x + 1, y)),
            y.checked_sub(1).map(|u| (x, u)),
            (y + 1 < self.rows).then_some((x, y + 1)),
        ];
        for (cx, cy) in neighbours.into_iter().flatten() {
            let cell = &mut self.cells[cy * self.cols + cx];
            *cell = !*cell;
            flipped += 1;
        }
        flipped
    }

    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(|&on| on)
    }

    pub fn lit_count(&self) -> usize {
        self.cells.iter().filter(|&&on| on).count()
    }

    /// Apply `moves` random toggles, repeating while the result is still solved.
    pub fn scramble(&mut self, rng: &mut Rng, moves: usize) {
        if moves == 0 || self.cells.is_empty() {
            return;
        }
        for _ in 0..MAX_SCRAMBLES {
            for _ in 0..moves {
                let x = rng.next_int(self.cols as u32) as usize;
                let y = rng.next_int(self.rows as u32) as usize;
                self.toggle(x, y);
            }
            if !self.is_solved() {
                return;
            }
        }
        log::warn!("lights-out grid {}x{} stayed solved after scrambling", self.cols, self.rows);
    }

    /// Cells in row-major order with their coordinates.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &on)| (i % self.cols, i / self.cols, on))
    }
}

/// Placement of the grid on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    /// Top-left corner of cell (0, 0).
    pub origin: Vec2,
    /// Distance between cell origins.
    pub tile: f32,
    pub cols: usize,
    pub rows: usize,
}

impl GridLayout {
    /// Grid centred in `world`, shifted down by `y_offset`.
    pub fn centered(world: Vec2, cols: usize, rows: usize, tile: f32, y_offset: f32) -> Self {
        let size = Vec2::new(cols as f32, rows as f32) * tile;
        Self {
            origin: (world - size) * 0.5 + Vec2::new(0.0, y_offset),
            tile,
            cols,
            rows,
        }
    }

    pub fn cell_center(&self, x: usize, y: usize) -> Vec2 {
        self.origin + (Vec2::new(x as f32, y as f32) + 0.5) * self.tile
    }

    /// Cell under a world point.
    pub fn world_to_grid(&self, p: Vec2) -> Option<(usize, usize)> {
        let local = (p - self.origin) / self.tile;
        if local.x < 0.0 || local.y < 0.0 {
            return None;
        }
        let (x, y) = (local.x as usize, local.y as usize);
        (x < self.cols && y < self.rows).then_some((x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kosmos_engine::Rng;
    use proptest::prelude::*;

    #[test]
    fn corner_toggle_on_lit_grid() {
        let mut grid = LightsOut::new_lit(6, 6);
        assert_eq!(grid.toggle(0, 0), 3);
        assert!(!grid.is_solved());
        assert_eq!(grid.get(0, 0), Some(false));
        assert_eq!(grid.get(1, 0), Some(false));
        assert_eq!(grid.get(0, 1), Some(false));
        assert_eq!(grid.get(1, 1), Some(true));
        assert_eq!(grid.lit_count(), 33);
    }

    #[test]
    fn edge_and_inner_counts() {
        let mut grid = LightsOut::new_lit(6, 6);
        assert_eq!(grid.toggle(3, 0), 4);
        assert_eq!(grid.toggle(2, 3), 5);
        assert_eq!(grid.toggle(6, 0), 0);
    }

    #[test]
    fn scramble_never_leaves_a_solved_grid() {
        for seed in 1..40 {
            let mut grid = LightsOut::new_lit(6, 6);
            grid.scramble(&mut Rng::new(seed), 4);
            assert!(!grid.is_solved(), "seed {seed}");
        }
    }

    #[test]
    fn scramble_gives_up_on_a_single_cell() {
        let mut grid = LightsOut::new_lit(1, 1);
        grid.scramble(&mut Rng::new(5), 4);
        assert!(grid.is_solved());
    }

    #[test]
    fn layout_maps_points_to_cells() {
        let layout = GridLayout::centered(Vec2::new(1000.0, 600.0), 6, 6, 56.0, 20.0);
        assert_eq!(layout.origin, Vec2::new(332.0, 152.0));
        assert_eq!(layout.world_to_grid(Vec2::new(333.0, 153.0)), Some((0, 0)));
        assert_eq!(layout.world_to_grid(layout.cell_center(4, 2)), Some((4, 2)));
        assert_eq!(layout.world_to_grid(Vec2::new(331.0, 200.0)), None);
        assert_eq!(layout.world_to_grid(Vec2::new(668.0, 200.0)), None);
    }

    proptest! {
        #[test]
        fn toggle_twice_is_identity(x in 0usize..6, y in 0usize..6, seed in 1u64..1000) {
            let mut grid = LightsOut::new_lit(6, 6);
            grid.scramble(&mut Rng::new(seed), 4);
            let before = grid.clone();
            grid.toggle(x, y);
            grid.toggle(x, y);
            prop_assert_eq!(grid, before);
        }

        #[test]
        fn toggle_flips_cell_and_in_bounds_neighbours(
            cols in 1usize..9,
            rows in 1usize..9,
            x in 0usize..9,
            y in 0usize..9,
        ) {
            prop_assume!(x < cols && y < rows);
            let mut grid = LightsOut::new_lit(cols, rows);
            let neighbours = [x > 0, x + 1 < cols, y > 0, y + 1 < rows]
                .iter()
                .filter(|&&b| b)
                .count();
            let flipped = grid.toggle(x, y);
            prop_assert_eq!(flipped, (neighbours + 1).min(5));
            prop_assert_eq!(grid.lit_count(), cols * rows - flipped);
            prop_assert!(!grid.is_solved());
        }
    }
}
