//! # Wraparound Grid
//!
//! The element grid objects are drawn onto. Every coordinate is folded into
//! the grid with `((x % w) + w) % w` before it is used, so reads and writes
//! can never go out of bounds. Historical caves rely on this: join objects with
//! large displacements write across the cave edges.

use crate::cave::{Coordinate, Element};
use serde::{Deserialize, Serialize};

/// A toroidal element grid with a per-cell record of the object that last
/// wrote each cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<Element>,
    /// Order index of the object that last stored each cell
    order: Vec<Option<usize>>,
}

impl Grid {
    /// Creates a grid with every cell set to `fill`.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero. That is a caller bug, not a content
    /// problem; cave definitions are validated before rendering.
    ///
    /// # Examples
    ///
    /// ```
    /// use bdcave::{Element, Grid};
    ///
    /// let mut grid = Grid::new(4, 3, Element::Space);
    /// grid.store(-1, 5, Element::Boulder, 0);
    /// assert_eq!(grid.read(3, 2), Element::Boulder);
    /// ```
    pub fn new(width: u32, height: u32, fill: Element) -> Self {
        assert!(
            width > 0 && height > 0,
            "grid dimensions must be positive, got {width}x{height}"
        );
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![fill; size],
            order: vec![None; size],
        }
    }

    /// Width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; a grid has at least one cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Folds a coordinate into the grid.
    pub fn wrap(&self, pos: Coordinate) -> Coordinate {
        Coordinate::new(
            pos.x.rem_euclid(self.width as i32),
            pos.y.rem_euclid(self.height as i32),
        )
    }

    fn index(&self, x: i32, y: i32) -> usize {
        let x = x.rem_euclid(self.width as i32) as usize;
        let y = y.rem_euclid(self.height as i32) as usize;
        y * self.width as usize + x
    }

    /// Writes `element` at (x, y) after wraparound and records which object
    /// wrote it.
    pub fn store(&mut self, x: i32, y: i32, element: Element, order_idx: usize) {
        let index = self.index(x, y);
        self.cells[index] = element;
        self.order[index] = Some(order_idx);
    }

    /// Reads the element at (x, y) after wraparound.
    pub fn read(&self, x: i32, y: i32) -> Element {
        self.cells[self.index(x, y)]
    }

    /// Reads the element at a coordinate.
    pub fn get(&self, pos: Coordinate) -> Element {
        self.read(pos.x, pos.y)
    }

    /// Order index of the object that last wrote (x, y), if any did.
    pub fn order_at(&self, x: i32, y: i32) -> Option<usize> {
        self.order[self.index(x, y)]
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Element]> {
        self.cells.chunks(self.width as usize)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Element] {
        &self.cells
    }

    /// Counts cells holding `element`.
    pub fn count(&self, element: Element) -> usize {
        self.cells.iter().filter(|&&e| e == element).count()
    }

    /// Text picture using element glyphs, one line per row.
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.height as usize);
        for row in self.rows() {
            out.extend(row.iter().map(|e| e.glyph()));
            out.push('\n');
        }
        out
    }
}
