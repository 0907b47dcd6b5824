//! # Elements
//!
//! The element identifiers a cave cell can hold, with their canonical BDCFF
//! names and the glyphs used for text pictures.
//!
//! The object system only compares elements for equality. What an element
//! does in play lives elsewhere.

use crate::CaveError;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A cell element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Element {
    #[default]
    Space,
    Dirt,
    Dirt2,
    Wall,
    MagicWall,
    SteelWall,
    SteelWallDestructable,
    HExpandingWall,
    VExpandingWall,
    PreOutbox,
    HiddenOutbox,
    Inbox,
    Boulder,
    Diamond,
    FireflyLeft,
    FireflyUp,
    FireflyRight,
    FireflyDown,
    ButterflyLeft,
    ButterflyUp,
    ButterflyRight,
    ButterflyDown,
    Amoeba,
    Slime,
    Acid,
    Voodoo,
    Bladder,
    Clock,
    Key1,
    Key2,
    Key3,
    Door1,
    Door2,
    Door3,
    Nut,
    Bomb,
    Ghost,
    Water,
    Lava,
    Sweet,
    PneumaticHammer,
    Teleporter,
    /// Stand-in for names the table does not know
    Unknown,
}

/// Canonical name and glyph of every element, in declaration order.
const ELEMENT_TABLE: &[(Element, &str, char)] = &[
    (Element::Space, "SPACE", ' '),
    (Element::Dirt, "DIRT", '.'),
    (Element::Dirt2, "DIRT2", ','),
    (Element::Wall, "WALL", '#'),
    (Element::MagicWall, "MAGICWALL", 'M'),
    (Element::SteelWall, "STEELWALL", 'W'),
    (Element::SteelWallDestructable, "STEELWALLDESTRUCTABLE", 'w'),
    (Element::HExpandingWall, "EXPANDINGWALL", 'x'),
    (Element::VExpandingWall, "VEXPANDINGWALL", 'v'),
    (Element::PreOutbox, "OUTBOX", 'X'),
    (Element::HiddenOutbox, "HIDDENOUTBOX", 'H'),
    (Element::Inbox, "INBOX", 'P'),
    (Element::Boulder, "BOULDER", 'O'),
    (Element::Diamond, "DIAMOND", 'd'),
    (Element::FireflyLeft, "FIREFLYl", 'Q'),
    (Element::FireflyUp, "FIREFLYu", 'Q'),
    (Element::FireflyRight, "FIREFLYr", 'Q'),
    (Element::FireflyDown, "FIREFLYd", 'Q'),
    (Element::ButterflyLeft, "BUTTERFLYl", 'B'),
    (Element::ButterflyUp, "BUTTERFLYu", 'B'),
    (Element::ButterflyRight, "BUTTERFLYr", 'B'),
    (Element::ButterflyDown, "BUTTERFLYd", 'B'),
    (Element::Amoeba, "AMOEBA", 'a'),
    (Element::Slime, "SLIME", 's'),
    (Element::Acid, "ACID", 'A'),
    (Element::Voodoo, "VOODOO", 'V'),
    (Element::Bladder, "BLADDER", 'b'),
    (Element::Clock, "CLOCK", 'c'),
    (Element::Key1, "KEY1", 'k'),
    (Element::Key2, "KEY2", 'k'),
    (Element::Key3, "KEY3", 'k'),
    (Element::Door1, "DOOR1", 'D'),
    (Element::Door2, "DOOR2", 'D'),
    (Element::Door3, "DOOR3", 'D'),
    (Element::Nut, "NUT", 'n'),
    (Element::Bomb, "BOMB", 'o'),
    (Element::Ghost, "GHOST", 'g'),
    (Element::Water, "WATER", '~'),
    (Element::Lava, "LAVA", '^'),
    (Element::Sweet, "SWEET", 'S'),
    (Element::PneumaticHammer, "PNEUMATIC_HAMMER", 'h'),
    (Element::Teleporter, "TELEPORTER", 't'),
    (Element::Unknown, "UNKNOWN", '?'),
];

impl Element {
    fn entry(self) -> &'static (Element, &'static str, char) {
        // The table is in declaration order.
        &ELEMENT_TABLE[self as usize]
    }

    /// Canonical BDCFF name.
    ///
    /// ```
    /// use bdcave::Element;
    ///
    /// assert_eq!(Element::Wall.name(), "WALL");
    /// assert_eq!(Element::FireflyLeft.name(), "FIREFLYl");
    /// ```
    pub fn name(self) -> &'static str {
        self.entry().1
    }

    /// Lowercase name for human readable descriptions.
    pub fn lowercase_name(self) -> String {
        self.name().to_ascii_lowercase()
    }

    /// Single character used in text pictures of a grid.
    pub fn glyph(self) -> char {
        self.entry().2
    }

    /// Looks up an element by name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Element> {
        ELEMENT_TABLE
            .iter()
            .find(|(_, candidate, _)| candidate.eq_ignore_ascii_case(name))
            .map(|(element, _, _)| *element)
    }

    /// Resolves a name from cave content. Unknown names are reported and
    /// become [`Element::Unknown`].
    pub fn from_name_lenient(name: &str) -> Element {
        Self::from_name(name).unwrap_or_else(|| {
            warn!("invalid element name in bdcff file: {name}");
            Element::Unknown
        })
    }

    /// All elements in table order.
    pub fn all() -> impl Iterator<Item = Element> {
        ELEMENT_TABLE.iter().map(|(element, _, _)| *element)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Element {
    type Err = CaveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Element::from_name(s).ok_or_else(|| CaveError::Parse(format!("unknown element {s:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_matches_declaration_order() {
        for (index, (element, _, _)) in ELEMENT_TABLE.iter().enumerate() {
            assert_eq!(*element as usize, index, "{element:?} is out of place");
        }
    }

    #[test]
    fn test_names_are_unique() {
        let names: std::collections::HashSet<String> =
            Element::all().map(|e| e.name().to_ascii_uppercase()).collect();
        assert_eq!(names.len(), ELEMENT_TABLE.len());
    }

    #[test]
    fn test_name_lookup() {
        assert_eq!(Element::from_name("BOULDER"), Some(Element::Boulder));
        assert_eq!(Element::from_name("boulder"), Some(Element::Boulder));
        assert_eq!(Element::from_name("FIREFLYl"), Some(Element::FireflyLeft));
        assert_eq!(Element::from_name("NOSUCH"), None);
        assert_eq!("diamond".parse::<Element>().unwrap(), Element::Diamond);
        assert!("".parse::<Element>().is_err());
    }

    #[test]
    fn test_lenient_lookup_falls_back() {
        assert_eq!(Element::from_name_lenient("SLIME"), Element::Slime);
        assert_eq!(Element::from_name_lenient("GARBAGE"), Element::Unknown);
    }

    #[test]
    fn test_every_name_round_trips() {
        for element in Element::all() {
            assert_eq!(element.to_string().parse::<Element>().unwrap(), element);
        }
    }
}
