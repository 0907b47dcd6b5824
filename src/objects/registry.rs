//! Name to parser table for BDCFF object lines.

use crate::bdcff::{split_object_line, Tokens};
use crate::objects::{
    BoundaryFill, CaveObject, CopyPaste, FillRect, FloodFill, Join, Line, Maze, ObjectKind, Point,
    RandomFill, Raster, Rectangle,
};
use crate::{CaveError, CaveResult};
use std::collections::HashMap;

/// Parses the parameter tail of one object line. The type name is passed
/// along for kinds whose aliases carry meaning.
pub type ObjectParser = fn(name: &str, tokens: &mut Tokens) -> CaveResult<ObjectKind>;

/// Case-sensitive map from BDCFF type names to parsers.
///
/// Build one with [`ObjectRegistry::new`] and pass it to every call that
/// reads object lines.
///
/// # Examples
///
/// ```
/// use bdcave::{ObjectRegistry, ObjectType};
///
/// let registry = ObjectRegistry::new();
/// let object = registry.parse_line("AddBackward=0,1 BOULDER DIAMOND").unwrap();
/// assert_eq!(object.object_type(), ObjectType::Join);
/// assert!(registry.parse_line("point=1,1 WALL").is_err());
/// ```
#[derive(Clone)]
pub struct ObjectRegistry {
    parsers: HashMap<&'static str, ObjectParser>,
}

macro_rules! parser_for {
    ($kind:ident) => {
        |name: &str, tokens: &mut Tokens| -> CaveResult<ObjectKind> {
            $kind::from_bdcff(name, tokens).map(ObjectKind::from)
        }
    };
}

impl ObjectRegistry {
    /// Creates a registry knowing every object kind and alias.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register("Point", parser_for!(Point));
        registry.register("Line", parser_for!(Line));
        registry.register("Rectangle", parser_for!(Rectangle));
        registry.register("FillRect", parser_for!(FillRect));
        registry.register("Raster", parser_for!(Raster));
        registry.register("Join", parser_for!(Join));
        registry.register("Add", parser_for!(Join));
        registry.register("AddBackward", parser_for!(Join));
        registry.register("BoundaryFill", parser_for!(BoundaryFill));
        registry.register("FloodFill", parser_for!(FloodFill));
        registry.register("Maze", parser_for!(Maze));
        registry.register("CopyPaste", parser_for!(CopyPaste));
        registry.register("RandomFill", parser_for!(RandomFill));
        registry.register("RandomFillC64", parser_for!(RandomFill));
        registry
    }

    /// A registry with no entries.
    pub fn empty() -> Self {
        Self {
            parsers: HashMap::new(),
        }
    }

    /// Adds or replaces the parser for a type name.
    pub fn register(&mut self, name: &'static str, parser: ObjectParser) {
        self.parsers.insert(name, parser);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.parsers.contains_key(name)
    }

    /// Registered type names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.parsers.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Parses one object line into an object visible on all levels.
    pub fn parse_line(&self, line: &str) -> CaveResult<CaveObject> {
        let (name, params) = split_object_line(line)
            .ok_or_else(|| CaveError::Parse(format!("no '=' in object line {line:?}")))?;
        let parser = self
            .parsers
            .get(name)
            .ok_or_else(|| CaveError::UnknownObject(name.to_string()))?;
        let kind = parser(name, &mut Tokens::new(params))?;
        Ok(CaveObject::new(kind))
    }
}

impl std::fmt::Debug for ObjectRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectRegistry")
            .field("names", &self.names())
            .finish()
    }
}

impl Default for ObjectRegistry {
    fn default() -> Self {
        Self::new()
    }
}
