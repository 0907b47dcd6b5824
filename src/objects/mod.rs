//! # Cave Objects
//!
//! The drawing operations a cave is made of. Every object is one of eleven
//! kinds, held in the closed [`ObjectKind`] sum type, plus a set of difficulty
//! levels it is visible on.
//!
//! Each kind implements [`ObjectShape`]; [`ObjectKind`] forwards every
//! operation to the active kind with a single `match`.

pub mod boundary_fill;
pub mod copy_paste;
pub mod fill_rect;
pub mod flood_fill;
pub mod join;
pub mod line;
pub mod maze;
pub mod point;
pub mod properties;
pub mod random_fill;
pub mod raster;
pub mod rectangle;
pub mod registry;

pub use boundary_fill::BoundaryFill;
pub use copy_paste::CopyPaste;
pub use fill_rect::FillRect;
pub use flood_fill::FloodFill;
pub use join::Join;
pub use line::Line;
pub use maze::{Maze, MazeType};
pub use point::Point;
pub use properties::{PropertyDescription, PropertyKind};
pub use random_fill::{RandomFill, RandomFillEntry};
pub use raster::Raster;
pub use rectangle::Rectangle;
pub use registry::ObjectRegistry;

use crate::cave::{Coordinate, Element};
use crate::config::{LEVEL_COUNT, MAX_OBJECT_EXTENT};
use crate::generation::RenderContext;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Behaviour shared by every object kind.
pub trait ObjectShape {
    /// Draws the object. Only reads and stores through `ctx`.
    fn draw(&self, ctx: &mut RenderContext, order_idx: usize);

    /// The BDCFF line of this object, without level information.
    fn to_bdcff(&self) -> String;

    /// One-line human readable summary.
    fn description(&self) -> String;

    /// Short coordinate summary for object lists in the editor.
    fn coordinates_text(&self) -> String;

    /// Element that best represents the object in the editor, if any.
    fn characteristic_element(&self) -> Option<Element>;

    /// Moves the object by a displacement.
    fn move_by(&mut self, displacement: Coordinate);

    /// Updates a freshly created object while the mouse is dragged.
    fn create_drag(&mut self, current: Coordinate, displacement: Coordinate);
}

/// Discriminant of the eleven object kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectType {
    Point,
    Line,
    Rectangle,
    FillRect,
    Raster,
    Join,
    BoundaryFill,
    FloodFill,
    Maze,
    RandomFill,
    CopyPaste,
}

impl ObjectType {
    /// Canonical BDCFF type name.
    pub fn name(self) -> &'static str {
        match self {
            ObjectType::Point => "Point",
            ObjectType::Line => "Line",
            ObjectType::Rectangle => "Rectangle",
            ObjectType::FillRect => "FillRect",
            ObjectType::Raster => "Raster",
            ObjectType::Join => "Join",
            ObjectType::BoundaryFill => "BoundaryFill",
            ObjectType::FloodFill => "FloodFill",
            ObjectType::Maze => "Maze",
            ObjectType::RandomFill => "RandomFill",
            ObjectType::CopyPaste => "CopyPaste",
        }
    }

    pub fn all() -> [ObjectType; 11] {
        [
            ObjectType::Point,
            ObjectType::Line,
            ObjectType::Rectangle,
            ObjectType::FillRect,
            ObjectType::Raster,
            ObjectType::Join,
            ObjectType::BoundaryFill,
            ObjectType::FloodFill,
            ObjectType::Maze,
            ObjectType::RandomFill,
            ObjectType::CopyPaste,
        ]
    }

    /// Property table the editor builds its widgets from.
    pub fn properties(self) -> &'static [PropertyDescription] {
        properties::for_type(self)
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The active kind of a cave object with its parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ObjectKind {
    Point(Point),
    Line(Line),
    Rectangle(Rectangle),
    FillRect(FillRect),
    Raster(Raster),
    Join(Join),
    BoundaryFill(BoundaryFill),
    FloodFill(FloodFill),
    Maze(Maze),
    RandomFill(RandomFill),
    CopyPaste(CopyPaste),
}

impl ObjectKind {
    pub fn object_type(&self) -> ObjectType {
        match self {
            ObjectKind::Point(_) => ObjectType::Point,
            ObjectKind::Line(_) => ObjectType::Line,
            ObjectKind::Rectangle(_) => ObjectType::Rectangle,
            ObjectKind::FillRect(_) => ObjectType::FillRect,
            ObjectKind::Raster(_) => ObjectType::Raster,
            ObjectKind::Join(_) => ObjectType::Join,
            ObjectKind::BoundaryFill(_) => ObjectType::BoundaryFill,
            ObjectKind::FloodFill(_) => ObjectType::FloodFill,
            ObjectKind::Maze(_) => ObjectType::Maze,
            ObjectKind::RandomFill(_) => ObjectType::RandomFill,
            ObjectKind::CopyPaste(_) => ObjectType::CopyPaste,
        }
    }

    fn shape(&self) -> &dyn ObjectShape {
        match self {
            ObjectKind::Point(o) => o,
            ObjectKind::Line(o) => o,
            ObjectKind::Rectangle(o) => o,
            ObjectKind::FillRect(o) => o,
            ObjectKind::Raster(o) => o,
            ObjectKind::Join(o) => o,
            ObjectKind::BoundaryFill(o) => o,
            ObjectKind::FloodFill(o) => o,
            ObjectKind::Maze(o) => o,
            ObjectKind::RandomFill(o) => o,
            ObjectKind::CopyPaste(o) => o,
        }
    }

    fn shape_mut(&mut self) -> &mut dyn ObjectShape {
        match self {
            ObjectKind::Point(o) => o,
            ObjectKind::Line(o) => o,
            ObjectKind::Rectangle(o) => o,
            ObjectKind::FillRect(o) => o,
            ObjectKind::Raster(o) => o,
            ObjectKind::Join(o) => o,
            ObjectKind::BoundaryFill(o) => o,
            ObjectKind::FloodFill(o) => o,
            ObjectKind::Maze(o) => o,
            ObjectKind::RandomFill(o) => o,
            ObjectKind::CopyPaste(o) => o,
        }
    }
}

macro_rules! impl_from_kind {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for ObjectKind {
                fn from(object: $variant) -> Self {
                    ObjectKind::$variant(object)
                }
            }
        )*
    };
}

impl_from_kind!(
    Point,
    Line,
    Rectangle,
    FillRect,
    Raster,
    Join,
    BoundaryFill,
    FloodFill,
    Maze,
    RandomFill,
    CopyPaste,
);

/// One drawing operation of a cave, with its level visibility.
///
/// Cloning gives a deep, independent copy.
///
/// # Examples
///
/// ```
/// use bdcave::{CaveObject, Coordinate, Element, Point};
///
/// let object = CaveObject::new(Point::new(Coordinate::new(2, 3), Element::Diamond))
///     .with_levels(&[0, 1]);
/// assert!(object.is_seen_on(1));
/// assert!(!object.is_seen_on(4));
/// assert_eq!(object.get_bdcff(), "Point=2,3 DIAMOND");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaveObject {
    /// Visibility per difficulty level
    pub seen_on: [bool; LEVEL_COUNT],
    pub kind: ObjectKind,
}

impl CaveObject {
    /// Creates an object visible on every level.
    pub fn new(kind: impl Into<ObjectKind>) -> Self {
        Self {
            seen_on: [true; LEVEL_COUNT],
            kind: kind.into(),
        }
    }

    /// Restricts visibility to the given 0-based levels. Indices past the last
    /// level are ignored.
    pub fn with_levels(mut self, levels: &[usize]) -> Self {
        self.seen_on = [false; LEVEL_COUNT];
        for &level in levels {
            match self.seen_on.get_mut(level) {
                Some(seen) => *seen = true,
                None => warn!("ignoring level index {level}, only {LEVEL_COUNT} levels exist"),
            }
        }
        self
    }

    /// True if the object is drawn on the 0-based `level`.
    pub fn is_seen_on(&self, level: usize) -> bool {
        self.seen_on.get(level).copied().unwrap_or(false)
    }

    pub fn is_seen_on_all(&self) -> bool {
        self.seen_on.iter().all(|&seen| seen)
    }

    pub fn is_invisible(&self) -> bool {
        self.seen_on.iter().all(|&seen| !seen)
    }

    pub fn enable_on_all(&mut self) {
        self.seen_on = [true; LEVEL_COUNT];
    }

    pub fn disable_on_all(&mut self) {
        self.seen_on = [false; LEVEL_COUNT];
    }

    pub fn object_type(&self) -> ObjectType {
        self.kind.object_type()
    }

    /// Draws the object onto the grid of `ctx`. `order_idx` is the position of
    /// the object in its list.
    pub fn draw(&self, ctx: &mut RenderContext, order_idx: usize) {
        self.kind.shape().draw(ctx, order_idx);
    }

    /// The BDCFF line of this object.
    pub fn get_bdcff(&self) -> String {
        self.kind.shape().to_bdcff()
    }

    /// Parses one BDCFF object line.
    ///
    /// Returns `None` for an unknown type name or a malformed parameter list;
    /// the reason is logged at debug level. The object is visible on all
    /// levels.
    pub fn create_from_bdcff(line: &str, registry: &ObjectRegistry) -> Option<CaveObject> {
        match registry.parse_line(line) {
            Ok(object) => Some(object),
            Err(err) => {
                debug!("no object from {line:?}: {err}");
                None
            }
        }
    }

    pub fn move_by(&mut self, displacement: Coordinate) {
        self.kind.shape_mut().move_by(displacement);
    }

    pub fn create_drag(&mut self, current: Coordinate, displacement: Coordinate) {
        self.kind.shape_mut().create_drag(current, displacement);
    }

    pub fn coordinates_text(&self) -> String {
        self.kind.shape().coordinates_text()
    }

    pub fn description(&self) -> String {
        self.kind.shape().description()
    }

    pub fn characteristic_element(&self) -> Option<Element> {
        self.kind.shape().characteristic_element()
    }

    /// Property table of this object's kind.
    pub fn properties(&self) -> &'static [PropertyDescription] {
        self.object_type().properties()
    }
}

/// Renders text for `a,b-c,d` with the rectangle corners ordered.
pub(crate) fn rect_text(p1: Coordinate, p2: Coordinate) -> String {
    let (min, max) = Coordinate::normalize_rect(p1, p2);
    format!("{min}-{max}")
}

/// Width and height of the rectangle from `min` to `max`, or `None` when
/// either side is longer than [`MAX_OBJECT_EXTENT`] cells.
pub(crate) fn drawable_extent(what: &str, min: Coordinate, max: Coordinate) -> Option<(i32, i32)> {
    let (w, h) = Coordinate::extent(min, max);
    if w > MAX_OBJECT_EXTENT || h > MAX_OBJECT_EXTENT {
        warn!("skipping {what} from {min} to {max}: larger than {MAX_OBJECT_EXTENT} cells");
        return None;
    }
    Some((w as i32, h as i32))
}
