//! Boundary fill object.

use crate::bdcff::{BdcffFormat, Tokens};
use crate::cave::{Coordinate, Element};
use crate::generation::RenderContext;
use crate::objects::ObjectShape;
use crate::CaveResult;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Fills the 4-connected region around `start` that is bounded by
/// `border_element`.
///
/// The region wraps around the cave edges. It spreads from the start cell
/// unless that cell is border; after that both the border element and cells
/// already holding the fill element stop it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundaryFill {
    pub start: Coordinate,
    pub border_element: Element,
    pub fill_element: Element,
}

impl BoundaryFill {
    pub fn new(start: Coordinate, border_element: Element, fill_element: Element) -> Self {
        Self {
            start,
            border_element,
            fill_element,
        }
    }

    /// Reads `BoundaryFill=x,y border fill`.
    pub fn from_bdcff(_name: &str, tokens: &mut Tokens) -> CaveResult<Self> {
        let start = tokens.coordinate("boundary fill start")?;
        let border = tokens.element("boundary fill border element")?;
        let fill = tokens.element("boundary fill element")?;
        Ok(Self::new(start, border, fill))
    }

    fn fillable(&self, element: Element) -> bool {
        element != self.border_element && element != self.fill_element
    }
}

impl ObjectShape for BoundaryFill {
    fn draw(&self, ctx: &mut RenderContext, order_idx: usize) {
        let start = ctx.wrap(self.start);
        if ctx.read(start.x, start.y) == self.border_element {
            return;
        }

        // A stored cell holds the fill element, which marks it visited.
        let mut queue = VecDeque::new();
        ctx.store(start.x, start.y, self.fill_element, order_idx);
        queue.push_back(start);

        while let Some(pos) = queue.pop_front() {
            for next in pos.cardinal_neighbours() {
                let next = ctx.wrap(next);
                if self.fillable(ctx.read(next.x, next.y)) {
                    ctx.store(next.x, next.y, self.fill_element, order_idx);
                    queue.push_back(next);
                }
            }
        }
    }

    fn to_bdcff(&self) -> String {
        BdcffFormat::new("BoundaryFill")
            .param(self.start)
            .param(self.border_element)
            .param(self.fill_element)
            .finish()
    }

    fn description(&self) -> String {
        format!(
            "Boundary fill from {} of {}, border {}",
            self.start,
            self.fill_element.lowercase_name(),
            self.border_element.lowercase_name()
        )
    }

    fn coordinates_text(&self) -> String {
        self.start.to_string()
    }

    fn characteristic_element(&self) -> Option<Element> {
        Some(self.fill_element)
    }

    fn move_by(&mut self, displacement: Coordinate) {
        self.start += displacement;
    }

    fn create_drag(&mut self, current: Coordinate, _displacement: Coordinate) {
        self.start = current;
    }
}
