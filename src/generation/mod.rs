//! # Generation Module
//!
//! Deterministic materialization of cave object lists into element grids.
//!
//! A render pass allocates a fresh grid, seeds a fresh generator and applies
//! every object visible on the requested level in list order. Nothing is
//! shared between passes, so different levels of a cave may be rendered on
//! different threads as long as each call owns its own config and output.

pub mod mazegen;
pub mod random;

pub use mazegen::*;
pub use random::*;

use crate::cave::{Coordinate, Element, Grid};
use crate::config::{DEFAULT_CAVE_HEIGHT, DEFAULT_CAVE_WIDTH};
use crate::objects::CaveObject;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

/// Settings of one render pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Grid width in cells
    pub width: u32,
    /// Grid height in cells
    pub height: u32,
    /// Seed of the render generator
    pub seed: u32,
    /// Element every cell holds before drawing starts
    pub initial_fill: Element,
}

impl RenderConfig {
    /// Creates a render configuration with a space-filled grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use bdcave::{Element, RenderConfig};
    ///
    /// let config = RenderConfig::new(40, 22, 7).with_initial_fill(Element::Dirt);
    /// assert_eq!(config.width, 40);
    /// assert_eq!(config.initial_fill, Element::Dirt);
    /// ```
    pub fn new(width: u32, height: u32, seed: u32) -> Self {
        Self {
            width,
            height,
            seed,
            initial_fill: Element::Space,
        }
    }

    /// Small grid for tests.
    pub fn for_testing(seed: u32) -> Self {
        Self::new(10, 10, seed)
    }

    /// Replaces the initial fill element.
    pub fn with_initial_fill(mut self, element: Element) -> Self {
        self.initial_fill = element;
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CAVE_WIDTH, DEFAULT_CAVE_HEIGHT, 0)
    }
}

/// State an object draws against: the grid under construction, the render
/// generator and the level being rendered.
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub grid: Grid,
    /// Render generator; consumed by objects whose own seed is unset
    pub random: GdRandom,
    /// 0-based difficulty level
    pub level: usize,
}

impl RenderContext {
    /// Creates a context for one render pass.
    pub fn new(grid: Grid, seed: u32, level: usize) -> Self {
        Self {
            grid,
            random: GdRandom::new(seed),
            level,
        }
    }

    /// Grid width as a signed value for coordinate arithmetic.
    pub fn width(&self) -> i32 {
        self.grid.width() as i32
    }

    /// Grid height as a signed value for coordinate arithmetic.
    pub fn height(&self) -> i32 {
        self.grid.height() as i32
    }

    pub fn store(&mut self, x: i32, y: i32, element: Element, order_idx: usize) {
        self.grid.store(x, y, element, order_idx);
    }

    pub fn read(&self, x: i32, y: i32) -> Element {
        self.grid.read(x, y)
    }

    pub fn wrap(&self, pos: Coordinate) -> Coordinate {
        self.grid.wrap(pos)
    }

    /// Finishes the pass.
    pub fn into_grid(self) -> Grid {
        self.grid
    }
}

/// Applies an ordered object list onto a fresh grid for one level.
///
/// Objects are drawn in list order and each object's order index is its
/// position in `objects`. Later objects overwrite earlier ones. Objects not
/// seen on `level` are skipped, and a level outside the five difficulty levels
/// leaves the grid at its initial fill.
///
/// # Examples
///
/// ```
/// use bdcave::{materialize, CaveObject, Coordinate, Element, FillRect, RenderConfig};
///
/// let objects = vec![CaveObject::new(FillRect::new(
///     Coordinate::new(0, 0),
///     Coordinate::new(3, 3),
///     Element::Wall,
///     Element::Dirt,
/// ))];
/// let grid = materialize(&objects, &RenderConfig::new(4, 4, 0), 0);
/// assert_eq!(grid.count(Element::Wall), 12);
/// assert_eq!(grid.count(Element::Dirt), 4);
/// ```
pub fn materialize(objects: &[CaveObject], config: &RenderConfig, level: usize) -> Grid {
    debug!(
        "materializing {} objects on a {}x{} grid, level {}, seed {}",
        objects.len(),
        config.width,
        config.height,
        level,
        config.seed
    );

    let grid = Grid::new(config.width, config.height, config.initial_fill);
    let mut ctx = RenderContext::new(grid, config.seed, level);

    for (order_idx, object) in objects.iter().enumerate() {
        if object.is_seen_on(level) {
            trace!("drawing #{order_idx}: {}", object.description());
            object.draw(&mut ctx, order_idx);
        }
    }

    ctx.into_grid()
}
