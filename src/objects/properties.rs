//! Property tables the editor builds its widgets from.
//!
//! Every table starts with a tab marker and the level visibility row, followed
//! by the parameters of the kind in display order. Coordinate ranges are the
//! limits the editor offers, not limits enforced when drawing.

use crate::config::{MAX_CAVE_COORDINATE, MAX_JOIN_DISTANCE};
use crate::objects::ObjectType;
use serde::Serialize;

/// Widget type of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PropertyKind {
    /// Starts a new tab page
    Tab,
    /// The five level visibility flags
    Levels,
    Coordinate,
    Element,
    Boolean,
    Integer,
    /// Per-level seeds, -1 meaning random
    LevelSeeds,
    MazeType,
    /// Element and probability pairs of a random fill
    RandomFillEntries,
}

/// One row of a property table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PropertyDescription {
    pub label: &'static str,
    pub kind: PropertyKind,
    pub tooltip: &'static str,
    pub min: i32,
    pub max: i32,
}

const fn prop(label: &'static str, kind: PropertyKind, tooltip: &'static str) -> PropertyDescription {
    PropertyDescription {
        label,
        kind,
        tooltip,
        min: 0,
        max: 0,
    }
}

const fn ranged(
    label: &'static str,
    kind: PropertyKind,
    tooltip: &'static str,
    min: i32,
    max: i32,
) -> PropertyDescription {
    PropertyDescription {
        label,
        kind,
        tooltip,
        min,
        max,
    }
}

const DRAW_TAB: PropertyDescription = prop("Draw", PropertyKind::Tab, "");
const LEVELS: PropertyDescription = prop(
    "Levels",
    PropertyKind::Levels,
    "Levels on which this object is visible.",
);

const fn corner(label: &'static str, tooltip: &'static str) -> PropertyDescription {
    ranged(label, PropertyKind::Coordinate, tooltip, 0, MAX_CAVE_COORDINATE)
}

const POINT: &[PropertyDescription] = &[
    DRAW_TAB,
    LEVELS,
    corner("Position", "The position of the point."),
    prop("Element", PropertyKind::Element, "The element to draw."),
];

const LINE: &[PropertyDescription] = &[
    DRAW_TAB,
    LEVELS,
    corner("Start", "The starting point of the line."),
    corner("End", "The ending point of the line."),
    prop("Element", PropertyKind::Element, "The element to draw."),
];

const RECTANGLE: &[PropertyDescription] = &[
    DRAW_TAB,
    LEVELS,
    corner("Start", "Specifies one of the corners of the object."),
    corner("End", "Specifies one of the corners of the object."),
    prop("Element", PropertyKind::Element, "The outline will be drawn with this element."),
];

const FILL_RECT: &[PropertyDescription] = &[
    DRAW_TAB,
    LEVELS,
    corner("Start", "Specifies one of the corners of the object."),
    corner("End", "Specifies one of the corners of the object."),
    prop("Border element", PropertyKind::Element, "The outline will be drawn with this element."),
    prop(
        "Fill element",
        PropertyKind::Element,
        "The insides of the rectangle will be filled with this element.",
    ),
];

const RASTER: &[PropertyDescription] = &[
    DRAW_TAB,
    LEVELS,
    corner("Start", "Specifies one of the corners of the object."),
    corner("End", "Specifies one of the corners of the object."),
    ranged(
        "Distance",
        PropertyKind::Coordinate,
        "The distance between raster lines, horizontally and vertically.",
        1,
        MAX_JOIN_DISTANCE,
    ),
    prop("Element", PropertyKind::Element, "The element to draw."),
];

const JOIN: &[PropertyDescription] = &[
    DRAW_TAB,
    LEVELS,
    prop(
        "Search element",
        PropertyKind::Element,
        "The element to look for. Every element found will generate an add element.",
    ),
    prop("Add element", PropertyKind::Element, "The element to draw."),
    ranged(
        "Distance",
        PropertyKind::Coordinate,
        "The distance to draw the new element at.",
        -MAX_JOIN_DISTANCE,
        MAX_JOIN_DISTANCE,
    ),
    prop(
        "Backwards",
        PropertyKind::Boolean,
        "Search from the bottom right corner. New joins pick this automatically; \
         it is kept for caves that store the direction.",
    ),
];

const BOUNDARY_FILL: &[PropertyDescription] = &[
    DRAW_TAB,
    LEVELS,
    corner("Start", "The starting point of the fill."),
    prop("Border element", PropertyKind::Element, "The fill stops at this element."),
    prop("Fill element", PropertyKind::Element, "The element used to fill the area."),
];

const FLOOD_FILL: &[PropertyDescription] = &[
    DRAW_TAB,
    LEVELS,
    corner("Start", "The starting point of the fill."),
    prop("Search element", PropertyKind::Element, "The element to replace."),
    prop("Fill element", PropertyKind::Element, "The element used to fill the area."),
];

const MAZE: &[PropertyDescription] = &[
    DRAW_TAB,
    LEVELS,
    corner("Start", "Specifies one of the corners of the object."),
    corner("End", "Specifies one of the corners of the object."),
    ranged("Wall width", PropertyKind::Integer, "Thickness of the walls.", 1, 40),
    ranged("Path width", PropertyKind::Integer, "Width of the paths.", 1, 40),
    prop("Wall element", PropertyKind::Element, "The walls of the maze."),
    prop("Path element", PropertyKind::Element, "The paths of the maze."),
    ranged(
        "Horizontal",
        PropertyKind::Integer,
        "Percent chance of choosing a horizontal direction while carving.",
        0,
        100,
    ),
    prop("Seeds", PropertyKind::LevelSeeds, "Maze seed per level; -1 picks a random one."),
    prop("Type", PropertyKind::MazeType, "Perfect, braid or unicursal."),
];

const RANDOM_FILL: &[PropertyDescription] = &[
    DRAW_TAB,
    LEVELS,
    corner("Start", "Specifies one of the corners of the object."),
    corner("End", "Specifies one of the corners of the object."),
    prop("Seeds", PropertyKind::LevelSeeds, "Fill seed per level; -1 picks a random one."),
    prop("Initial fill", PropertyKind::Element, "Cells not picked by any entry get this element."),
    prop(
        "Entries",
        PropertyKind::RandomFillEntries,
        "Up to four elements with a probability between 0 and 255.",
    ),
    prop("Replace only", PropertyKind::Element, "Only cells holding this element are changed."),
    prop("C64 random", PropertyKind::Boolean, "Use the random generator of the C64 engine."),
];

const COPY_PASTE: &[PropertyDescription] = &[
    DRAW_TAB,
    LEVELS,
    corner("Start", "Specifies one of the corners of the source area."),
    corner("End", "Specifies one of the corners of the source area."),
    corner("Paste", "Specifies the upper left corner of the destination area."),
    prop("Mirror", PropertyKind::Boolean, "If checked, the contents will be mirrored horizontally."),
    prop("Flip", PropertyKind::Boolean, "If checked, the contents will be mirrored vertically."),
];

/// Property table of an object kind.
pub fn for_type(object_type: ObjectType) -> &'static [PropertyDescription] {
    match object_type {
        ObjectType::Point => POINT,
        ObjectType::Line => LINE,
        ObjectType::Rectangle => RECTANGLE,
        ObjectType::FillRect => FILL_RECT,
        ObjectType::Raster => RASTER,
        ObjectType::Join => JOIN,
        ObjectType::BoundaryFill => BOUNDARY_FILL,
        ObjectType::FloodFill => FLOOD_FILL,
        ObjectType::Maze => MAZE,
        ObjectType::RandomFill => RANDOM_FILL,
        ObjectType::CopyPaste => COPY_PASTE,
    }
}
