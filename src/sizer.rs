use data::{Cell, Direction};
use disjoint_set::DisjointSet;
use error::GridError;
use grid::{GMap, Grid, DEFAULT_VALID_MARKER};

/// Union-find over every cell of a square grid, answering "how big is the
/// island containing this cell" once `build` has run.
///
/// Invalid cells stay singleton roots with weight 0 for the life of the
/// sizer. Queries take `&self` and never compress paths, so a built sizer can
/// be read from several threads at once.
#[derive(Debug, Clone)]
pub struct ComponentSizer {
    grid: Grid,
    forest: DisjointSet,
    built: bool,
}

impl ComponentSizer {
    pub fn new(rows: Vec<Vec<i64>>) -> Result<ComponentSizer, GridError> {
        ComponentSizer::with_marker(rows, DEFAULT_VALID_MARKER)
    }

    pub fn with_marker(rows: Vec<Vec<i64>>, marker: i64) -> Result<ComponentSizer, GridError> {
        Ok(ComponentSizer::from_grid(Grid::new(rows, marker)?))
    }

    pub fn from_grid(grid: Grid) -> ComponentSizer {
        let weights: Vec<usize> = grid.cells().iter()
            .map(|&c| if grid.is_valid_unchecked(c) { 1 } else { 0 })
            .collect();
        info!("sizer: {}x{} grid, marker {}, {} valid cells",
            grid.dim(), grid.dim(), grid.marker(), grid.num_valid());
        ComponentSizer {
            forest: DisjointSet::with_weights(weights),
            grid,
            built: false,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn is_built(&self) -> bool {
        self.built
    }

    pub fn num_valid(&self) -> usize {
        self.grid.num_valid()
    }

    /// Representative of `element`'s set. Compresses the path it walks.
    pub fn find(&mut self, element: usize) -> Result<usize, GridError> {
        self.grid.from_1d(element)?;
        Ok(self.forest.find(element))
    }

    /// Merges the sets of two linear indices. Does nothing and returns
    /// `Ok(false)` if either cell is invalid or both already share a root.
    pub fn union(&mut self, a: usize, b: usize) -> Result<bool, GridError> {
        let cell_a = self.grid.from_1d(a)?;
        let cell_b = self.grid.from_1d(b)?;
        Ok(self.merge(cell_a, cell_b))
    }

    fn merge(&mut self, a: Cell, b: Cell) -> bool {
        if !self.grid.is_valid_unchecked(a) || !self.grid.is_valid_unchecked(b) {
            debug!("ignoring union {:?} ~ {:?}: invalid cell", a, b);
            return false;
        }
        let merged = self.forest.unite(self.grid.to_1d(a), self.grid.to_1d(b));
        if merged {
            trace!("merged {:?} ~ {:?}, area now {}", a, b, self.forest.weight(self.grid.to_1d(a)));
        }
        merged
    }

    /// Single row-major pass joining every valid cell with its valid down and
    /// right neighbours. Running it again only repeats no-op unions.
    pub fn build(&mut self) {
        let scan = Direction::scan_directions();
        let mut merges = 0;
        for cell in self.grid.cells() {
            if !self.grid.is_valid_unchecked(cell) {
                continue;
            }
            for n in self.grid.valid_neighbors(cell, &scan) {
                if self.merge(cell, n) {
                    merges += 1;
                }
            }
        }
        self.built = true;
        info!("build: {} merges, {} components, largest area {}",
            merges, self.component_count(), self.largest_area());
    }

    pub fn is_tile(&self, row: usize, col: usize) -> Result<bool, GridError> {
        self.grid.is_valid(Cell::new(row, col))
    }

    pub fn area_of(&self, row: usize, col: usize) -> Result<usize, GridError> {
        let cell = Cell::new(row, col);
        self.grid.check(cell)?;
        Ok(self.forest.weight(self.grid.to_1d(cell)))
    }

    pub fn area_of_index(&self, element: usize) -> Result<usize, GridError> {
        self.grid.from_1d(element)?;
        Ok(self.forest.weight(element))
    }

    pub fn areas(&self) -> GMap<usize> {
        let dim = self.grid.dim();
        let mut areas = GMap::filled(dim, 0);
        for cell in self.grid.cells() {
            *areas.get_mut(cell) = self.forest.weight(self.grid.to_1d(cell));
        }
        areas
    }

    /// Sizes of all islands, largest first.
    pub fn component_sizes(&self) -> Vec<usize> {
        let mut sizes: Vec<usize> = self.forest.roots()
            .map(|r| self.forest.raw_weight(r))
            .filter(|&w| w > 0)
            .collect();
        sizes.sort_by(|a, b| b.cmp(a));
        sizes
    }

    pub fn component_count(&self) -> usize {
        self.component_sizes().len()
    }

    pub fn largest_area(&self) -> usize {
        self.component_sizes().first().cloned().unwrap_or(0)
    }
}
