//! Single-cell object.

use crate::bdcff::{BdcffFormat, Tokens};
use crate::cave::{Coordinate, Element};
use crate::generation::RenderContext;
use crate::objects::ObjectShape;
use crate::CaveResult;
use serde::{Deserialize, Serialize};

/// Stores one element at one position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub pos: Coordinate,
    pub element: Element,
}

impl Point {
    pub fn new(pos: Coordinate, element: Element) -> Self {
        Self { pos, element }
    }

    /// Reads `Point=x,y element`.
    pub fn from_bdcff(_name: &str, tokens: &mut Tokens) -> CaveResult<Self> {
        let pos = tokens.coordinate("point position")?;
        let element = tokens.element("point element")?;
        Ok(Self::new(pos, element))
    }
}

impl ObjectShape for Point {
    fn draw(&self, ctx: &mut RenderContext, order_idx: usize) {
        ctx.store(self.pos.x, self.pos.y, self.element, order_idx);
    }

    fn to_bdcff(&self) -> String {
        BdcffFormat::new("Point")
            .param(self.pos)
            .param(self.element)
            .finish()
    }

    fn description(&self) -> String {
        format!(
            "Point of {} at {}",
            self.element.lowercase_name(),
            self.pos
        )
    }

    fn coordinates_text(&self) -> String {
        self.pos.to_string()
    }

    fn characteristic_element(&self) -> Option<Element> {
        Some(self.element)
    }

    fn move_by(&mut self, displacement: Coordinate) {
        self.pos += displacement;
    }

    fn create_drag(&mut self, current: Coordinate, _displacement: Coordinate) {
        self.pos = current;
    }
}
