//! # Cave Module
//!
//! Coordinates, the wraparound element grid and the cave definition that owns
//! an ordered object list.
//!
//! The cave definition is the consumer context of the object system: it holds
//! the objects, the global dimensions and the render seed, and a couple of
//! display substitutions that only the view layer cares about.

pub mod element;
pub mod grid;

pub use element::*;
pub use grid::*;

use crate::config::{DEFAULT_CAVE_HEIGHT, DEFAULT_CAVE_WIDTH};
use crate::generation::{materialize, RenderConfig};
use crate::objects::CaveObject;
use crate::{CaveError, CaveResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// A 2D integer coordinate inside a cave.
///
/// Arithmetic never wraps. Wraparound is applied by the grid when an element
/// is stored or read.
///
/// # Examples
///
/// ```
/// use bdcave::Coordinate;
///
/// let pos = Coordinate::new(10, 5);
/// assert_eq!(pos + Coordinate::new(-12, 1), Coordinate::new(-2, 6));
/// assert_eq!(pos.to_string(), "10,5");
/// assert_eq!("3,-4".parse::<Coordinate>().unwrap(), Coordinate::new(3, -4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    /// Creates a new coordinate.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the origin (0, 0).
    pub fn origin() -> Self {
        Self::new(0, 0)
    }

    /// Orders two rectangle corners into (top-left, bottom-right).
    ///
    /// ```
    /// use bdcave::Coordinate;
    ///
    /// let (min, max) = Coordinate::normalize_rect(Coordinate::new(7, 1), Coordinate::new(2, 9));
    /// assert_eq!(min, Coordinate::new(2, 1));
    /// assert_eq!(max, Coordinate::new(7, 9));
    /// ```
    pub fn normalize_rect(p1: Coordinate, p2: Coordinate) -> (Coordinate, Coordinate) {
        (
            Coordinate::new(p1.x.min(p2.x), p1.y.min(p2.y)),
            Coordinate::new(p1.x.max(p2.x), p1.y.max(p2.y)),
        )
    }

    /// Returns the 4 cardinal neighbours in the order N, W, E, S.
    pub fn cardinal_neighbours(self) -> [Coordinate; 4] {
        [
            Coordinate::new(self.x, self.y.wrapping_sub(1)),
            Coordinate::new(self.x.wrapping_sub(1), self.y),
            Coordinate::new(self.x.wrapping_add(1), self.y),
            Coordinate::new(self.x, self.y.wrapping_add(1)),
        ]
    }

    /// Cells covered by the rectangle from `min` to `max` on each axis.
    /// Both corners must come from [`Coordinate::normalize_rect`].
    pub fn extent(min: Coordinate, max: Coordinate) -> (i64, i64) {
        (
            i64::from(max.x) - i64::from(min.x) + 1,
            i64::from(max.y) - i64::from(min.y) + 1,
        )
    }
}

impl std::ops::Add for Coordinate {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x.wrapping_add(other.x), self.y.wrapping_add(other.y))
    }
}

impl std::ops::AddAssign for Coordinate {
    fn add_assign(&mut self, other: Self) {
        self.x = self.x.wrapping_add(other.x);
        self.y = self.y.wrapping_add(other.y);
    }
}

impl std::ops::Sub for Coordinate {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x.wrapping_sub(other.x), self.y.wrapping_sub(other.y))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for Coordinate {
    type Err = CaveError;

    /// Parses the BDCFF `x,y` form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| CaveError::Parse(format!("expected x,y coordinate, got {s:?}")))?;
        let x = x
            .trim()
            .parse::<i32>()
            .map_err(|_| CaveError::Parse(format!("invalid x in coordinate {s:?}")))?;
        let y = y
            .trim()
            .parse::<i32>()
            .map_err(|_| CaveError::Parse(format!("invalid y in coordinate {s:?}")))?;
        Ok(Coordinate::new(x, y))
    }
}

/// A cave definition: dimensions, render seed and the ordered object list.
///
/// The object list is the persistent form of the cave. A concrete grid only
/// exists for the duration of a render, see [`Cave::render`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cave {
    /// Display name of the cave
    pub name: String,
    /// Width in cells
    pub width: u32,
    /// Height in cells
    pub height: u32,
    /// Seed of the render generator
    pub seed: u32,
    /// Element every cell holds before the first object is drawn
    pub initial_fill: Element,
    /// Drawing operations, applied in order
    #[serde(default)]
    pub objects: Vec<CaveObject>,
    /// Element the view layer shows in place of dirt
    #[serde(default = "default_dirt_looks_like")]
    pub dirt_looks_like: Element,
    /// Element the view layer shows in place of expanding walls
    #[serde(default = "default_expanding_wall_looks_like")]
    pub expanding_wall_looks_like: Element,
}

fn default_dirt_looks_like() -> Element {
    Element::Dirt
}

fn default_expanding_wall_looks_like() -> Element {
    Element::Wall
}

impl Cave {
    /// Creates an empty cave filled with dirt.
    ///
    /// # Examples
    ///
    /// ```
    /// use bdcave::{Cave, Element};
    ///
    /// let cave = Cave::new("Intro", 40, 22);
    /// assert!(cave.objects.is_empty());
    /// assert_eq!(cave.initial_fill, Element::Dirt);
    /// ```
    pub fn new(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            seed: 0,
            initial_fill: Element::Dirt,
            objects: Vec::new(),
            dirt_looks_like: default_dirt_looks_like(),
            expanding_wall_looks_like: default_expanding_wall_looks_like(),
        }
    }

    /// Parses a cave from its JSON form.
    pub fn from_json(json: &str) -> CaveResult<Self> {
        let cave: Cave = serde_json::from_str(json)?;
        cave.validate()?;
        Ok(cave)
    }

    /// Serializes the cave to pretty-printed JSON.
    pub fn to_json(&self) -> CaveResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Loads a cave from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> CaveResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Checks that the cave can be rendered.
    pub fn validate(&self) -> CaveResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(CaveError::InvalidCave(format!(
                "cave {:?} has zero size {}x{}",
                self.name, self.width, self.height
            )));
        }
        Ok(())
    }

    /// Render settings derived from this cave.
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig::new(self.width, self.height, self.seed).with_initial_fill(self.initial_fill)
    }

    /// Materializes the object list for a 0-based difficulty level.
    pub fn render(&self, level: usize) -> Grid {
        materialize(&self.objects, &self.render_config(), level)
    }

    /// Maps an element to the one the view layer should draw in its place.
    ///
    /// This never affects rendering; the grid keeps the real elements.
    pub fn apparent_element(&self, element: Element) -> Element {
        match element {
            Element::Dirt => self.dirt_looks_like,
            Element::HExpandingWall | Element::VExpandingWall => self.expanding_wall_looks_like,
            other => other,
        }
    }

    /// Text picture of a rendered grid with looks-like substitutions applied.
    pub fn picture(&self, grid: &Grid) -> String {
        let mut out = String::with_capacity(grid.len() + grid.height() as usize);
        for row in grid.rows() {
            out.extend(row.iter().map(|&e| self.apparent_element(e).glyph()));
            out.push('\n');
        }
        out
    }
}

impl Default for Cave {
    fn default() -> Self {
        Self::new("Cave", DEFAULT_CAVE_WIDTH, DEFAULT_CAVE_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_arithmetic() {
        let mut pos = Coordinate::new(5, 10);
        assert_eq!(pos + Coordinate::new(3, 2), Coordinate::new(8, 12));
        assert_eq!(pos - Coordinate::new(3, 2), Coordinate::new(2, 8));
        pos += Coordinate::new(-6, 0);
        assert_eq!(pos, Coordinate::new(-1, 10));
    }

    #[test]
    fn test_coordinate_arithmetic_wraps_at_limits() {
        let mut pos = Coordinate::new(i32::MAX, i32::MIN);
        assert_eq!(pos + Coordinate::new(1, 0), Coordinate::new(i32::MIN, i32::MIN));
        assert_eq!(pos - Coordinate::new(0, 1), Coordinate::new(i32::MAX, i32::MAX));
        pos += Coordinate::new(i32::MAX, -1);
        assert_eq!(pos, Coordinate::new(-2, i32::MAX));
        assert_eq!(
            Coordinate::new(i32::MIN, i32::MAX).cardinal_neighbours()[1],
            Coordinate::new(i32::MAX, i32::MAX)
        );
    }

    #[test]
    fn test_extent_of_full_range() {
        let (min, max) = Coordinate::normalize_rect(
            Coordinate::new(i32::MAX, 3),
            Coordinate::new(i32::MIN, 3),
        );
        assert_eq!(Coordinate::extent(min, max), (1 << 32, 1));
    }

    #[test]
    fn test_coordinate_parsing() {
        assert_eq!("12,7".parse::<Coordinate>().unwrap(), Coordinate::new(12, 7));
        assert_eq!("-3,+4".parse::<Coordinate>().unwrap(), Coordinate::new(-3, 4));
        assert!("12".parse::<Coordinate>().is_err());
        assert!("a,1".parse::<Coordinate>().is_err());
        assert!("1,".parse::<Coordinate>().is_err());
    }

    #[test]
    fn test_normalize_rect() {
        let (min, max) = Coordinate::normalize_rect(Coordinate::new(9, 0), Coordinate::new(0, 9));
        assert_eq!(min, Coordinate::new(0, 0));
        assert_eq!(max, Coordinate::new(9, 9));
    }

    #[test]
    fn test_cave_validation() {
        assert!(Cave::new("ok", 10, 10).validate().is_ok());
        assert!(Cave::new("flat", 10, 0).validate().is_err());
    }

    #[test]
    fn test_cave_json_round_trip() -> CaveResult<()> {
        let mut cave = Cave::new("Json", 12, 8);
        cave.seed = 77;
        cave.initial_fill = Element::Space;
        let json = cave.to_json()?;
        let back = Cave::from_json(&json)?;
        assert_eq!(back, cave);
        Ok(())
    }

    #[test]
    fn test_apparent_element() {
        let mut cave = Cave::new("Looks", 4, 4);
        cave.dirt_looks_like = Element::Dirt2;
        cave.expanding_wall_looks_like = Element::SteelWall;
        assert_eq!(cave.apparent_element(Element::Dirt), Element::Dirt2);
        assert_eq!(cave.apparent_element(Element::HExpandingWall), Element::SteelWall);
        assert_eq!(cave.apparent_element(Element::Boulder), Element::Boulder);
    }

    #[test]
    fn test_empty_cave_renders_initial_fill() {
        let cave = Cave::new("Blank", 6, 3);
        let grid = cave.render(0);
        assert_eq!(grid.count(Element::Dirt), 18);
        assert_eq!(cave.picture(&grid), "......\n......\n......\n");
    }
}
