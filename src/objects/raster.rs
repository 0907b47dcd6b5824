//! Raster object: a lattice of single cells.

use crate::bdcff::{BdcffFormat, Tokens};
use crate::cave::{Coordinate, Element};
use crate::generation::RenderContext;
use crate::objects::{rect_text, ObjectShape};
use crate::{CaveError, CaveResult};
use serde::{Deserialize, Serialize};

/// Points spaced by `dist` inside a rectangle, starting at its top-left
/// corner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Raster {
    pub p1: Coordinate,
    pub p2: Coordinate,
    /// Spacing; components below 1 draw as 1
    pub dist: Coordinate,
    pub element: Element,
}

impl Raster {
    pub fn new(p1: Coordinate, p2: Coordinate, dist: Coordinate, element: Element) -> Self {
        Self {
            p1,
            p2,
            dist,
            element,
        }
    }

    fn step(&self) -> Coordinate {
        Coordinate::new(self.dist.x.max(1), self.dist.y.max(1))
    }

    /// Reads `Raster=x,y count_x,count_y step_x,step_y element`. The line is
    /// rejected when the last point falls outside the coordinate range.
    pub fn from_bdcff(_name: &str, tokens: &mut Tokens) -> CaveResult<Self> {
        let origin = tokens.coordinate("raster origin")?;
        let count = tokens.coordinate("raster count")?;
        let dist = tokens.coordinate("raster step")?;
        let element = tokens.element("raster element")?;
        let end = Coordinate::new(
            last_point(origin.x, count.x, dist.x)?,
            last_point(origin.y, count.y, dist.y)?,
        );
        Ok(Self::new(origin, end, dist, element))
    }
}

fn last_point(origin: i32, count: i32, step: i32) -> CaveResult<i32> {
    (count.max(1) - 1)
        .checked_mul(step)
        .and_then(|offset| origin.checked_add(offset))
        .ok_or_else(|| {
            CaveError::Parse(format!(
                "raster of {count} points spaced {step} from {origin} is out of range"
            ))
        })
}

/// Wrapped positions of the points from `min` to `max` spaced by `step` on an
/// axis of `size` cells. Points after the first `size` only revisit cells
/// already listed.
fn lattice_points(min: i32, max: i32, step: i32, size: i32) -> Vec<i32> {
    let (min, step, size) = (i64::from(min), i64::from(step), i64::from(size));
    let count = ((i64::from(max) - min) / step + 1).min(size);
    (0..count)
        .map(|k| (min + k * step).rem_euclid(size) as i32)
        .collect()
}

impl ObjectShape for Raster {
    fn draw(&self, ctx: &mut RenderContext, order_idx: usize) {
        let (min, max) = Coordinate::normalize_rect(self.p1, self.p2);
        let step = self.step();
        let columns = lattice_points(min.x, max.x, step.x, ctx.width());
        for y in lattice_points(min.y, max.y, step.y, ctx.height()) {
            for &x in &columns {
                ctx.store(x, y, self.element, order_idx);
            }
        }
    }

    /// Written in count form from the normalized corner.
    fn to_bdcff(&self) -> String {
        let (min, max) = Coordinate::normalize_rect(self.p1, self.p2);
        let step = self.step();
        let (w, h) = Coordinate::extent(min, max);
        let count = Coordinate::new(
            i32::try_from((w - 1) / i64::from(step.x) + 1).unwrap_or(i32::MAX),
            i32::try_from((h - 1) / i64::from(step.y) + 1).unwrap_or(i32::MAX),
        );
        BdcffFormat::new("Raster")
            .param(min)
            .param(count)
            .param(step)
            .param(self.element)
            .finish()
    }

    fn description(&self) -> String {
        format!(
            "Raster from {} to {} of {}, distance {:+},{:+}",
            self.p1,
            self.p2,
            self.element.lowercase_name(),
            self.dist.x,
            self.dist.y
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
