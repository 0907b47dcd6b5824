//! Straight line object.

use crate::bdcff::{BdcffFormat, Tokens};
use crate::cave::{Coordinate, Element};
use crate::generation::RenderContext;
use crate::objects::{drawable_extent, ObjectShape};
use crate::CaveResult;
use serde::{Deserialize, Serialize};

/// A line of one element between two endpoints, both included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub p1: Coordinate,
    pub p2: Coordinate,
    pub element: Element,
}

impl Line {
    pub fn new(p1: Coordinate, p2: Coordinate, element: Element) -> Self {
        Self { p1, p2, element }
    }

    /// Reads `Line=x1,y1 x2,y2 element`.
    pub fn from_bdcff(_name: &str, tokens: &mut Tokens) -> CaveResult<Self> {
        let p1 = tokens.coordinate("line start")?;
        let p2 = tokens.coordinate("line end")?;
        let element = tokens.element("line element")?;
        Ok(Self::new(p1, p2, element))
    }

    /// Cells of the line in drawing order.
    ///
    /// Bresenham rasterization over the longer axis. Endpoints are swapped so
    /// the walk always goes towards growing values on that axis; a step on the
    /// shorter axis is taken once the accumulated error reaches half a cell.
    pub fn cells(&self) -> Vec<Coordinate> {
        let (mut x1, mut y1, mut x2, mut y2) = (self.p1.x, self.p1.y, self.p2.x, self.p2.y);
        let steep = (i64::from(y2) - i64::from(y1)).abs() > (i64::from(x2) - i64::from(x1)).abs();
        if steep {
            std::mem::swap(&mut x1, &mut y1);
            std::mem::swap(&mut x2, &mut y2);
        }
        if x1 > x2 {
            std::mem::swap(&mut x1, &mut x2);
            std::mem::swap(&mut y1, &mut y2);
        }

        let dx = i64::from(x2) - i64::from(x1);
        let dy = (i64::from(y2) - i64::from(y1)).abs();
        let ystep = if y1 < y2 { 1 } else { -1 };
        let mut y = y1;
        let mut error = 0i64;
        let mut cells = Vec::with_capacity(dx as usize + 1);

        for x in x1..=x2 {
            cells.push(if steep {
                Coordinate::new(y, x)
            } else {
                Coordinate::new(x, y)
            });
            error += dy;
            if error * 2 >= dx {
                y = y.wrapping_add(ystep);
                error -= dx;
            }
        }
        cells
    }
}

impl ObjectShape for Line {
    fn draw(&self, ctx: &mut RenderContext, order_idx: usize) {
        let (min, max) = Coordinate::normalize_rect(self.p1, self.p2);
        if drawable_extent("line", min, max).is_none() {
            return;
        }
        for cell in self.cells() {
            ctx.store(cell.x, cell.y, self.element, order_idx);
        }
    }

    fn to_bdcff(&self) -> String {
        BdcffFormat::new("Line")
            .param(self.p1)
            .param(self.p2)
            .param(self.element)
            .finish()
    }

    fn description(&self) -> String {
        format!(
            "Line from {} to {} of {}",
            self.p1,
            self.p2,
            self.element.lowercase_name()
        )
    }

    fn coordinates_text(&self) -> String {
        format!("{}-{}", self.p1, self.p2)
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
