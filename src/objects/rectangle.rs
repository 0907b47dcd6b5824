//! Rectangle outline object.

use crate::bdcff::{BdcffFormat, Tokens};
use crate::cave::{Coordinate, Element};
use crate::generation::RenderContext;
use crate::objects::{drawable_extent, rect_text, ObjectShape};
use crate::CaveResult;
use serde::{Deserialize, Serialize};

/// The outline of a rectangle; the inside is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rectangle {
    pub p1: Coordinate,
    pub p2: Coordinate,
    pub element: Element,
}

impl Rectangle {
    pub fn new(p1: Coordinate, p2: Coordinate, element: Element) -> Self {
        Self { p1, p2, element }
    }

    /// Reads `Rectangle=x1,y1 x2,y2 element`.
    pub fn from_bdcff(_name: &str, tokens: &mut Tokens) -> CaveResult<Self> {
        let p1 = tokens.coordinate("rectangle start")?;
        let p2 = tokens.coordinate("rectangle end")?;
        let element = tokens.element("rectangle element")?;
        Ok(Self::new(p1, p2, element))
    }
}

impl ObjectShape for Rectangle {
    fn draw(&self, ctx: &mut RenderContext, order_idx: usize) {
        let (min, max) = Coordinate::normalize_rect(self.p1, self.p2);
        if drawable_extent("rectangle", min, max).is_none() {
            return;
        }
        for x in min.x..=max.x {
            ctx.store(x, min.y, self.element, order_idx);
            ctx.store(x, max.y, self.element, order_idx);
        }
        for y in min.y..=max.y {
            ctx.store(min.x, y, self.element, order_idx);
            ctx.store(max.x, y, self.element, order_idx);
        }
    }

    fn to_bdcff(&self) -> String {
        BdcffFormat::new("Rectangle")
            .param(self.p1)
            .param(self.p2)
            .param(self.element)
            .finish()
    }

    fn description(&self) -> String {
        format!(
            "Outline from {} to {} of {}",
            self.p1,
            self.p2,
            self.element.lowercase_name()
        )
    }

    fn coordinates_text(&self) -> String {
        rect_text(self.p1, self.p2)
    }

    fn characteristic_element(&self) -> Option<Element> {
        Some(self.element)
    }

    fn move_by(&mut self, displacement: Coordinate) {
        self.p1 += displacement;
        self.p2 += displacement;
    }

    fn create_drag(&mut self, current: Coordinate, _displacement: Coordinate) {
        self.p2 = current;
    }
}
