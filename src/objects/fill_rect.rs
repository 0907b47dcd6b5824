//! Filled rectangle object.

use crate::bdcff::{BdcffFormat, Tokens};
use crate::cave::{Coordinate, Element};
use crate::generation::RenderContext;
use crate::objects::{drawable_extent, rect_text, ObjectShape};
use crate::CaveResult;
use serde::{Deserialize, Serialize};

/// A rectangle with a border element and a separate fill element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillRect {
    pub p1: Coordinate,
    pub p2: Coordinate,
    pub border_element: Element,
    pub fill_element: Element,
}

impl FillRect {
    pub fn new(p1: Coordinate, p2: Coordinate, border_element: Element, fill_element: Element) -> Self {
        Self {
            p1,
            p2,
            border_element,
            fill_element,
        }
    }

    /// Reads `FillRect=x1,y1 x2,y2 border [fill]`. The fill element defaults
    /// to the border element.
    pub fn from_bdcff(_name: &str, tokens: &mut Tokens) -> CaveResult<Self> {
        let p1 = tokens.coordinate("fillrect start")?;
        let p2 = tokens.coordinate("fillrect end")?;
        let border = tokens.element("fillrect border element")?;
        let fill = tokens.optional_element().unwrap_or(border);
        Ok(Self::new(p1, p2, border, fill))
    }
}

impl ObjectShape for FillRect {
    fn draw(&self, ctx: &mut RenderContext, order_idx: usize) {
        let (min, max) = Coordinate::normalize_rect(self.p1, self.p2);
        if drawable_extent("filled rectangle", min, max).is_none() {
            return;
        }
        for y in min.y..=max.y {
            for x in min.x..=max.x {
                let on_border = y == min.y || y == max.y || x == min.x || x == max.x;
                let element = if on_border {
                    self.border_element
                } else {
                    self.fill_element
                };
                ctx.store(x, y, element, order_idx);
            }
        }
    }

    fn to_bdcff(&self) -> String {
        let fill = (self.fill_element != self.border_element).then_some(self.fill_element);
        BdcffFormat::new("FillRect")
            .param(self.p1)
            .param(self.p2)
            .param(self.border_element)
            .param_opt(fill)
            .finish()
    }

    fn description(&self) -> String {
        format!(
            "Rectangle from {} to {} of {}, filled with {}",
            self.p1,
            self.p2,
            self.border_element.lowercase_name(),
            self.fill_element.lowercase_name()
        )
    }

    fn coordinates_text(&self) -> String {
        rect_text(self.p1, self.p2)
    }

    fn characteristic_element(&self) -> Option<Element> {
        Some(self.fill_element)
    }

    fn move_by(&mut self, displacement: Coordinate) {
        self.p1 += displacement;
        self.p2 += displacement;
    }

    fn create_drag(&mut self, current: Coordinate, _displacement: Coordinate) {
        self.p2 = current;
    }
}
