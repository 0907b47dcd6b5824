//! Flood fill object.

use crate::bdcff::{BdcffFormat, Tokens};
use crate::cave::{Coordinate, Element};
use crate::generation::RenderContext;
use crate::objects::ObjectShape;
use crate::CaveResult;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Replaces the 4-connected region of `search_element` cells around `start`
/// with `fill_element`. The region wraps around the cave edges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloodFill {
    pub start: Coordinate,
    pub search_element: Element,
    pub fill_element: Element,
}

impl FloodFill {
    pub fn new(start: Coordinate, search_element: Element, fill_element: Element) -> Self {
        Self {
            start,
            search_element,
            fill_element,
        }
    }

    /// Reads `FloodFill=x,y search fill`.
    pub fn from_bdcff(_name: &str, tokens: &mut Tokens) -> CaveResult<Self> {
        let start = tokens.coordinate("flood fill start")?;
        let search = tokens.element("flood fill search element")?;
        let fill = tokens.element("flood fill element")?;
        Ok(Self::new(start, search, fill))
    }
}

impl ObjectShape for FloodFill {
    fn draw(&self, ctx: &mut RenderContext, order_idx: usize) {
        // Filling with the searched element would never terminate.
        if self.search_element == self.fill_element {
            return;
        }
        let start = ctx.wrap(self.start);
        if ctx.read(start.x, start.y) != self.search_element {
            return;
        }

        let mut queue = VecDeque::new();
        ctx.store(start.x, start.y, self.fill_element, order_idx);
        queue.push_back(start);

        while let Some(pos) = queue.pop_front() {
            for next in pos.cardinal_neighbours() {
                let next = ctx.wrap(next);
                if ctx.read(next.x, next.y) == self.search_element {
                    ctx.store(next.x, next.y, self.fill_element, order_idx);
                    queue.push_back(next);
                }
            }
        }
    }

    fn to_bdcff(&self) -> String {
        BdcffFormat::new("FloodFill")
            .param(self.start)
            .param(self.search_element)
            .param(self.fill_element)
            .finish()
    }

    fn description(&self) -> String {
        format!(
            "Flood fill from {} of {}, replacing {}",
            self.start,
            self.fill_element.lowercase_name(),
            self.search_element.lowercase_name()
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::test_support::{picture, render};
    use crate::objects::{CaveObject, Line, Point};

    #[test]
    fn test_replaces_only_connected_search_cells() {
        let objects = vec![
            CaveObject::new(Line::new(
                Coordinate::new(0, 1),
                Coordinate::new(3, 1),
                Element::Dirt,
            )),
            CaveObject::new(Point::new(Coordinate::new(0, 3), Element::Dirt)),
            CaveObject::new(FloodFill::new(
                Coordinate::new(1, 1),
                Element::Dirt,
                Element::Boulder,
            )),
        ];
        let grid = render(&objects, 5, 4, Element::Space);
        assert_eq!(
            picture(&grid),
            vec!["     ", "OOOO ", "     ", ".    "]
        );
    }

    #[test]
    fn test_same_search_and_fill_is_a_no_op() {
        let objects = vec![CaveObject::new(FloodFill::new(
            Coordinate::new(0, 0),
            Element::Space,
            Element::Space,
        ))];
        let grid = render(&objects, 3, 3, Element::Space);
        assert_eq!(grid.order_at(0, 0), None);
    }

    #[test]
    fn test_start_not_on_search_element() {
        let objects = vec![CaveObject::new(FloodFill::new(
            Coordinate::new(1, 1),
            Element::Dirt,
            Element::Wall,
        ))];
        let grid = render(&objects, 3, 3, Element::Space);
        assert_eq!(grid.count(Element::Wall), 0);
    }

    #[test]
    fn test_whole_torus_is_filled() {
        let objects = vec![CaveObject::new(FloodFill::new(
            Coordinate::new(-7, 12),
            Element::Dirt,
            Element::Diamond,
        ))];
        let grid = render(&objects, 4, 3, Element::Dirt);
        assert_eq!(grid.count(Element::Diamond), 12);
    }

    #[test]
    fn test_start_at_coordinate_limits() {
        let objects = vec![CaveObject::new(FloodFill::new(
            Coordinate::new(i32::MAX, i32::MIN),
            Element::Dirt,
            Element::Diamond,
        ))];
        let grid = render(&objects, 4, 3, Element::Dirt);
        assert_eq!(grid.count(Element::Diamond), 12);
    }

    #[test]
    fn test_flood_fill_bdcff() -> CaveResult<()> {
        let fill = FloodFill::new(Coordinate::new(1, 2), Element::Space, Element::Water);
        assert_eq!(fill.to_bdcff(), "FloodFill=1,2 SPACE WATER");
        assert_eq!(
            FloodFill::from_bdcff("FloodFill", &mut Tokens::new("1,2 SPACE WATER"))?,
            fill
        );
        Ok(())
    }
}
