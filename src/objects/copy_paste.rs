//! Copy and paste object.

use crate::bdcff::{format_switch, parse_switch, BdcffFormat, Tokens};
use crate::cave::{Coordinate, Element};
use crate::generation::RenderContext;
use crate::objects::{drawable_extent, rect_text, ObjectShape};
use crate::CaveResult;
use serde::{Deserialize, Serialize};

/// Copies a rectangle of the cave to another place, optionally mirrored
/// horizontally and flipped vertically.
///
/// The source is read completely before anything is written, so overlapping
/// source and destination areas are safe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyPaste {
    pub p1: Coordinate,
    pub p2: Coordinate,
    /// Top-left corner of the destination
    pub dest: Coordinate,
    pub mirror: bool,
    pub flip: bool,
}

impl CopyPaste {
    pub fn new(p1: Coordinate, p2: Coordinate, dest: Coordinate) -> Self {
        Self {
            p1,
            p2,
            dest,
            mirror: false,
            flip: false,
        }
    }

    pub fn with_mirror_flip(mut self, mirror: bool, flip: bool) -> Self {
        self.mirror = mirror;
        self.flip = flip;
        self
    }

    /// Reads `CopyPaste=x1,y1 x2,y2 dx,dy [mirror|nomirror] [flip|noflip]`.
    pub fn from_bdcff(_name: &str, tokens: &mut Tokens) -> CaveResult<Self> {
        let p1 = tokens.coordinate("copy start")?;
        let p2 = tokens.coordinate("copy end")?;
        let dest = tokens.coordinate("paste position")?;
        let mirror = parse_switch(tokens.next_word(), "mirror", "nomirror", "copypaste mirror");
        let flip = parse_switch(tokens.next_word(), "flip", "noflip", "copypaste flip");
        Ok(Self::new(p1, p2, dest).with_mirror_flip(mirror, flip))
    }
}

impl ObjectShape for CopyPaste {
    fn draw(&self, ctx: &mut RenderContext, order_idx: usize) {
        let (min, max) = Coordinate::normalize_rect(self.p1, self.p2);
        let Some((w, h)) = drawable_extent("copy source", min, max) else {
            return;
        };
        let source = ctx.wrap(min);
        let dest = ctx.wrap(self.dest);

        let mut clipboard = Vec::with_capacity(w as usize * h as usize);
        for y in 0..h {
            for x in 0..w {
                clipboard.push(ctx.read(source.x + x, source.y + y));
            }
        }

        for y in 0..h {
            let ydisp = if self.flip { h - 1 - y } else { y };
            for x in 0..w {
                let xdisp = if self.mirror { w - 1 - x } else { x };
                let element = clipboard[y as usize * w as usize + x as usize];
                ctx.store(dest.x + xdisp, dest.y + ydisp, element, order_idx);
            }
        }
    }

    fn to_bdcff(&self) -> String {
        BdcffFormat::new("CopyPaste")
            .param(self.p1)
            .param(self.p2)
            .param(self.dest)
            .param(format_switch(self.mirror, "mirror", "nomirror"))
            .param(format_switch(self.flip, "flip", "noflip"))
            .finish()
    }

    fn description(&self) -> String {
        format!(
            "Copy from {}-{}, paste to {}",
            self.p1, self.p2, self.dest
        )
    }

    fn coordinates_text(&self) -> String {
        format!("{} ({})", rect_text(self.p1, self.p2), self.dest)
    }

    fn characteristic_element(&self) -> Option<Element> {
        None
    }

    /// Only the destination moves; the source area stays.
    fn move_by(&mut self, displacement: Coordinate) {
        self.dest += displacement;
    }

    /// Sets the second source corner and puts the destination on the source.
    fn create_drag(&mut self, current: Coordinate, _displacement: Coordinate) {
        self.p2 = current;
        let (min, _) = Coordinate::normalize_rect(self.p1, self.p2);
        self.dest = min;
    }
}
