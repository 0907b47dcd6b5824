//! # BDCFF Codec
//!
//! Line-level encoding of cave objects:
//!
//! ```text
//! <TypeName>=<param> <param> ...
//! ```
//!
//! Parameters are whitespace separated. Coordinates are written `x,y`,
//! elements by their canonical name, and on/off settings as one of two words
//! chosen per property (`mirror`/`nomirror`, `flip`/`noflip`).
//!
//! Reading is lenient in the same way for every object kind: a missing
//! required parameter rejects the line, while an unreadable switch word or
//! element name falls back to a default and logs a warning.

pub mod object_list;

use crate::cave::{Coordinate, Element};
use crate::{CaveError, CaveResult};
use log::warn;
use std::fmt::Display;
use std::iter::Peekable;
use std::str::SplitWhitespace;

/// Builder for one object line.
///
/// # Examples
///
/// ```
/// use bdcave::{BdcffFormat, Coordinate, Element};
///
/// let line = BdcffFormat::new("Point")
///     .param(Coordinate::new(3, 4))
///     .param(Element::Diamond)
///     .finish();
/// assert_eq!(line, "Point=3,4 DIAMOND");
/// ```
#[derive(Debug, Clone)]
pub struct BdcffFormat {
    line: String,
    empty: bool,
}

impl BdcffFormat {
    /// Starts a line for the given type name.
    pub fn new(name: &str) -> Self {
        Self {
            line: format!("{name}="),
            empty: true,
        }
    }

    /// Appends one parameter.
    pub fn param(mut self, value: impl Display) -> Self {
        if !self.empty {
            self.line.push(' ');
        }
        self.line.push_str(&value.to_string());
        self.empty = false;
        self
    }

    /// Appends a parameter only when `value` is present.
    pub fn param_opt(self, value: Option<impl Display>) -> Self {
        match value {
            Some(value) => self.param(value),
            None => self,
        }
    }

    pub fn finish(self) -> String {
        self.line
    }
}

/// Splits an object line at the first `=` into type name and parameters.
pub fn split_object_line(line: &str) -> Option<(&str, &str)> {
    line.split_once('=').map(|(name, params)| (name.trim(), params))
}

/// Reader over the whitespace-separated parameters of one line.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    words: Peekable<SplitWhitespace<'a>>,
}

impl<'a> Tokens<'a> {
    pub fn new(params: &'a str) -> Self {
        Self {
            words: params.split_whitespace().peekable(),
        }
    }

    /// Next raw word, if any.
    pub fn next_word(&mut self) -> Option<&'a str> {
        self.words.next()
    }

    pub fn peek_word(&mut self) -> Option<&'a str> {
        self.words.peek().copied()
    }

    /// True when every word has been consumed.
    pub fn is_exhausted(&mut self) -> bool {
        self.words.peek().is_none()
    }

    fn required(&mut self, what: &str) -> CaveResult<&'a str> {
        self.next_word()
            .ok_or_else(|| CaveError::Parse(format!("missing {what}")))
    }

    /// Required `x,y` coordinate.
    pub fn coordinate(&mut self, what: &str) -> CaveResult<Coordinate> {
        self.required(what)?
            .parse::<Coordinate>()
            .map_err(|err| CaveError::Parse(format!("{what}: {err}")))
    }

    /// Required integer.
    pub fn integer(&mut self, what: &str) -> CaveResult<i32> {
        let word = self.required(what)?;
        word.parse::<i32>()
            .map_err(|_| CaveError::Parse(format!("{what}: expected a number, got {word:?}")))
    }

    /// Required element. An unknown name is not fatal; see
    /// [`Element::from_name_lenient`].
    pub fn element(&mut self, what: &str) -> CaveResult<Element> {
        self.required(what).map(Element::from_name_lenient)
    }

    /// Optional trailing element.
    pub fn optional_element(&mut self) -> Option<Element> {
        self.next_word().map(Element::from_name_lenient)
    }

    /// Next word if it parses as an integer; otherwise nothing is consumed.
    pub fn try_integer(&mut self) -> Option<i32> {
        let value = self.peek_word()?.parse::<i32>().ok()?;
        self.next_word();
        Some(value)
    }
}

/// Reads an on/off property word.
///
/// Matching ignores ASCII case. A missing word means off. Any other word is
/// reported and also means off.
///
/// ```
/// use bdcave::bdcff::parse_switch;
///
/// assert!(parse_switch(Some("MIRROR"), "mirror", "nomirror", "mirror"));
/// assert!(!parse_switch(Some("nomirror"), "mirror", "nomirror", "mirror"));
/// assert!(!parse_switch(None, "mirror", "nomirror", "mirror"));
/// assert!(!parse_switch(Some("sideways"), "mirror", "nomirror", "mirror"));
/// ```
pub fn parse_switch(word: Option<&str>, on: &str, off: &str, property: &str) -> bool {
    match word {
        None => false,
        Some(word) if word.eq_ignore_ascii_case(on) => true,
        Some(word) if word.eq_ignore_ascii_case(off) => false,
        Some(word) => {
            warn!("invalid setting for {property} property: {word}");
            false
        }
    }
}

/// Word written for an on/off property.
pub fn format_switch(value: bool, on: &'static str, off: &'static str) -> &'static str {
    if value {
        on
    } else {
        off
    }
}
