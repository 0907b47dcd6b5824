//! # bdcave
//!
//! The cave object system of a Boulder Dash style game engine.
//!
//! ## Architecture Overview
//!
//! A cave is not stored as a grid of elements. It is stored as an ordered list
//! of declarative drawing operations, which are materialized into a concrete
//! element grid whenever a level is played or shown:
//!
//! - **Cave**: the grid primitive with toroidal indexing, coordinates and the
//!   element name table
//! - **Objects**: the eleven drawing operations (point, line, rectangle, filled
//!   rectangle, raster, join, boundary fill, flood fill, maze, random fill and
//!   copy-paste) as one closed sum type
//! - **Generation**: the deterministic random generators and the render
//!   pipeline that turns an object list into a grid
//! - **BDCFF**: the line-oriented text encoding shared by the game and the editor
//!
//! ## Determinism
//!
//! The same object list, level and seed always produce the same grid. Replays
//! and highscore validation depend on this, so the random generators follow
//! fixed, documented recurrences instead of a library default RNG.

pub mod bdcff;
pub mod cave;
pub mod generation;
pub mod objects;

pub use cave::*;
pub use generation::*;
pub use objects::*;

pub use bdcff::object_list::{read_objects, write_objects};
pub use bdcff::{BdcffFormat, Tokens};

/// Core error type for the cave object system.
#[derive(thiserror::Error, Debug)]
pub enum CaveError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// A BDCFF line or token could not be parsed
    #[error("BDCFF parse error: {0}")]
    Parse(String),

    /// The object type name is not registered
    #[error("Unknown object type: {0}")]
    UnknownObject(String),

    /// Cave definition is unusable
    #[error("Invalid cave: {0}")]
    InvalidCave(String),
}

/// Result type used throughout the bdcave codebase.
pub type CaveResult<T> = Result<T, CaveError>;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Cave format constants.
pub mod config {
    /// Number of difficulty levels every cave is rendered on
    pub const LEVEL_COUNT: usize = 5;

    /// Default cave width in cells
    pub const DEFAULT_CAVE_WIDTH: u32 = 40;

    /// Default cave height in cells
    pub const DEFAULT_CAVE_HEIGHT: u32 = 22;

    /// Largest join displacement the editor offers on either axis
    pub const MAX_JOIN_DISTANCE: i32 = 40;

    /// Largest coordinate the editor offers for object corners
    pub const MAX_CAVE_COORDINATE: i32 = 127;

    /// Largest extent, in cells per axis, of an object that is drawn cell by
    /// cell; larger objects are skipped
    pub const MAX_OBJECT_EXTENT: i64 = 4096;
}
