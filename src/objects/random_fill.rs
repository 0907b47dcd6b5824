//! Random fill object.

use crate::bdcff::{BdcffFormat, Tokens};
use crate::cave::{Coordinate, Element};
use crate::config::LEVEL_COUNT;
use crate::generation::{C64Random, GdRandom, RenderContext};
use crate::objects::{drawable_extent, rect_text, ObjectShape};
use crate::CaveResult;
use log::warn;
use serde::{Deserialize, Serialize};

/// Most entries a random fill can hold.
pub const MAX_RANDOM_FILL_ENTRIES: usize = 4;

/// One element of a random fill with its threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomFillEntry {
    pub element: Element,
    /// Draws below this value (0..=255) pick the element
    pub probability: u8,
}

impl RandomFillEntry {
    pub fn new(element: Element, probability: u8) -> Self {
        Self {
            element,
            probability,
        }
    }
}

/// Fills a rectangle with randomly chosen elements.
///
/// One value in `0..256` is drawn per cell. The cell gets `initial_fill`
/// unless an entry's probability is above the draw; entries are checked in
/// order and a later match overrides an earlier one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomFill {
    pub p1: Coordinate,
    pub p2: Coordinate,
    /// Fill seed per level; -1 takes one from the render generator
    pub seeds: [i32; LEVEL_COUNT],
    pub initial_fill: Element,
    pub entries: Vec<RandomFillEntry>,
    /// Only cells currently holding this element are changed
    pub replace_only: Option<Element>,
    /// Use the C64 byte generator instead of the default one
    pub c64_random: bool,
}

enum FillRandom {
    Gd(GdRandom),
    C64(C64Random),
}

impl FillRandom {
    fn next_draw(&mut self) -> i32 {
        match self {
            FillRandom::Gd(random) => random.rand_int_range(0, 256),
            FillRandom::C64(random) => random.next_byte() as i32,
        }
    }
}

impl RandomFill {
    /// Creates a fill of `initial_fill` with no entries and seeds taken from
    /// the render generator.
    pub fn new(p1: Coordinate, p2: Coordinate, initial_fill: Element) -> Self {
        Self {
            p1,
            p2,
            seeds: [-1; LEVEL_COUNT],
            initial_fill,
            entries: Vec::new(),
            replace_only: None,
            c64_random: false,
        }
    }

    /// Adds an entry. Entries past the fourth are dropped with a warning.
    pub fn with_entry(mut self, element: Element, probability: u8) -> Self {
        if self.entries.len() < MAX_RANDOM_FILL_ENTRIES {
            self.entries.push(RandomFillEntry::new(element, probability));
        } else {
            warn!("random fill holds at most {MAX_RANDOM_FILL_ENTRIES} entries, dropping {element}");
        }
        self
    }

    pub fn with_seeds(mut self, seeds: [i32; LEVEL_COUNT]) -> Self {
        self.seeds = seeds;
        self
    }

    pub fn with_replace_only(mut self, element: Element) -> Self {
        self.replace_only = Some(element);
        self
    }

    pub fn with_c64_random(mut self, c64_random: bool) -> Self {
        self.c64_random = c64_random;
        self
    }

    /// Element picked for one draw.
    pub fn choose(&self, draw: i32) -> Element {
        self.entries
            .iter()
            .rev()
            .find(|entry| draw < entry.probability as i32)
            .map_or(self.initial_fill, |entry| entry.element)
    }

    /// Reads `RandomFill=x1,y1 x2,y2 s1 s2 s3 s4 s5 initial [element probability]... [replace_only]`.
    /// The `RandomFillC64` name selects the C64 generator.
    pub fn from_bdcff(name: &str, tokens: &mut Tokens) -> CaveResult<Self> {
        let p1 = tokens.coordinate("random fill start")?;
        let p2 = tokens.coordinate("random fill end")?;
        let mut seeds = [-1; LEVEL_COUNT];
        for seed in seeds.iter_mut() {
            *seed = tokens.integer("random fill seed")?;
        }
        let initial = tokens.element("random fill initial element")?;

        let mut fill = RandomFill::new(p1, p2, initial)
            .with_seeds(seeds)
            .with_c64_random(name.eq_ignore_ascii_case("RandomFillC64"));

        while let Some(word) = tokens.next_word() {
            let element = Element::from_name_lenient(word);
            match tokens.try_integer() {
                Some(probability) => {
                    let clamped = probability.clamp(0, 255);
                    if clamped != probability {
                        warn!("random fill probability {probability} out of range, using {clamped}");
                    }
                    fill = fill.with_entry(element, clamped as u8);
                }
                None => {
                    fill.replace_only = Some(element);
                    break;
                }
            }
        }

        Ok(fill)
    }
}

impl ObjectShape for RandomFill {
    fn draw(&self, ctx: &mut RenderContext, order_idx: usize) {
        let seed = match self.seeds.get(ctx.level) {
            Some(&seed) if seed != -1 => seed,
            _ => ctx.random.rand_int_range(0, 256),
        };
        let mut random = if self.c64_random {
            FillRandom::C64(C64Random::new(seed))
        } else {
            FillRandom::Gd(GdRandom::new(seed as u32))
        };

        let (min, max) = Coordinate::normalize_rect(self.p1, self.p2);
        if drawable_extent("random fill", min, max).is_none() {
            return;
        }
        for y in min.y..=max.y {
            for x in min.x..=max.x {
                // Drawn even for filtered cells, so the sequence does not
                // depend on the grid contents.
                let element = self.choose(random.next_draw());
                let replace = self
                    .replace_only
                    .map_or(true, |only| ctx.read(x, y) == only);
                if replace {
                    ctx.store(x, y, element, order_idx);
                }
            }
        }
    }

    fn to_bdcff(&self) -> String {
        let name = if self.c64_random {
            "RandomFillC64"
        } else {
            "RandomFill"
        };
        let mut format = BdcffFormat::new(name).param(self.p1).param(self.p2);
        for seed in self.seeds {
            format = format.param(seed);
        }
        format = format.param(self.initial_fill);
        for entry in &self.entries {
            format = format.param(entry.element).param(entry.probability);
        }
        format.param_opt(self.replace_only).finish()
    }

    fn description(&self) -> String {
        let mut text = format!("Random fill from {} to {}", self.p1, self.p2);
        if let Some(only) = self.replace_only {
            text.push_str(&format!(", replacing {}", only.lowercase_name()));
        }
        text
    }

    fn coordinates_text(&self) -> String {
        rect_text(self.p1, self.p2)
    }

    fn characteristic_element(&self) -> Option<Element> {
        Some(self.initial_fill)
    }

    fn move_by(&mut self, displacement: Coordinate) {
        self.p1 += displacement;
        self.p2 += displacement;
    }

    fn create_drag(&mut self, current: Coordinate, _displacement: Coordinate) {
        self.p2 = current;
    }
}
