//! Join object: puts an element next to every occurrence of another.

use crate::bdcff::{BdcffFormat, Tokens};
use crate::cave::{Coordinate, Element};
use crate::generation::RenderContext;
use crate::objects::ObjectShape;
use crate::CaveResult;
use serde::{Deserialize, Serialize};

/// For every cell holding `search_element`, stores `put_element` at the cell
/// plus `dist`. The target wraps around the cave edges like every store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Join {
    pub dist: Coordinate,
    pub search_element: Element,
    pub put_element: Element,
    /// Scan from the bottom-right corner instead of the top-left one
    pub backward: bool,
}

impl Join {
    /// Creates a join with the scan direction chosen from `dist`.
    ///
    /// ```
    /// use bdcave::{Coordinate, Element, Join};
    ///
    /// assert!(Join::new(Coordinate::new(1, 0), Element::Dirt, Element::Dirt).backward);
    /// assert!(!Join::new(Coordinate::new(0, -1), Element::Dirt, Element::Dirt).backward);
    /// ```
    pub fn new(dist: Coordinate, search_element: Element, put_element: Element) -> Self {
        Self {
            dist,
            search_element,
            put_element,
            backward: Self::needs_backward(dist),
        }
    }

    /// Creates a join with an explicit scan direction.
    pub fn with_direction(
        dist: Coordinate,
        search_element: Element,
        put_element: Element,
        backward: bool,
    ) -> Self {
        Self {
            dist,
            search_element,
            put_element,
            backward,
        }
    }

    /// True if a forward scan could reach a cell this join just wrote.
    pub fn needs_backward(dist: Coordinate) -> bool {
        dist.y > 0 || (dist.y == 0 && dist.x > 0)
    }

    /// Reads `Add=dx,dy search put` and its aliases. `AddBackward` scans
    /// backward; `Add` and `Join` scan forward.
    pub fn from_bdcff(name: &str, tokens: &mut Tokens) -> CaveResult<Self> {
        let dist = tokens.coordinate("join distance")?;
        let search = tokens.element("join search element")?;
        let put = tokens.element("join put element")?;
        let backward = name.eq_ignore_ascii_case("AddBackward");
        Ok(Self::with_direction(dist, search, put, backward))
    }

    fn visit(&self, ctx: &mut RenderContext, x: i32, y: i32, offset: Coordinate, order_idx: usize) {
        if ctx.read(x, y) == self.search_element {
            ctx.store(x + offset.x, y + offset.y, self.put_element, order_idx);
        }
    }
}

impl ObjectShape for Join {
    fn draw(&self, ctx: &mut RenderContext, order_idx: usize) {
        let (w, h) = (ctx.width(), ctx.height());
        // Same target cells as `dist`, small enough to add to any cell.
        let offset = Coordinate::new(self.dist.x.rem_euclid(w), self.dist.y.rem_euclid(h));
        if self.backward {
            for y in (0..h).rev() {
                for x in (0..w).rev() {
                    self.visit(ctx, x, y, offset, order_idx);
                }
            }
        } else {
            for y in 0..h {
                for x in 0..w {
                    self.visit(ctx, x, y, offset, order_idx);
                }
            }
        }
    }

    fn to_bdcff(&self) -> String {
        let name = if self.backward { "AddBackward" } else { "Add" };
        BdcffFormat::new(name)
            .param(self.dist)
            .param(self.search_element)
            .param(self.put_element)
            .finish()
    }

    fn description(&self) -> String {
        format!(
            "Join {} to every {}, distance {:+},{:+}",
            self.put_element.lowercase_name(),
            self.search_element.lowercase_name(),
            self.dist.x,
            self.dist.y
        )
    }

    fn coordinates_text(&self) -> String {
        format!("{:+},{:+}", self.dist.x, self.dist.y)
    }

    fn characteristic_element(&self) -> Option<Element> {
        Some(self.put_element)
    }

    fn move_by(&mut self, displacement: Coordinate) {
        self.dist += displacement;
    }

    /// Dragging changes the distance and picks the scan direction again.
    fn create_drag(&mut self, _current: Coordinate, displacement: Coordinate) {
        self.dist += displacement;
        self.backward = Self::needs_backward(self.dist);
    }
}
