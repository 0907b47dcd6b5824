//! Multi-line object lists.
//!
//! One object per line. Objects that are not visible on every level are
//! wrapped in level blocks, with 1-based level numbers:
//!
//! ```text
//! FillRect=0,0 39,21 STEELWALL SPACE
//! [Level=1,2]
//! RandomFill=1,1 38,20 -1 -1 -1 -1 -1 DIRT BOULDER 40
//! [/Level]
//! ```
//!
//! Blank lines, `;` comments and other `[section]` markers are skipped.

use crate::config::LEVEL_COUNT;
use crate::objects::{CaveObject, ObjectRegistry};
use log::{debug, warn};

const LEVEL_BLOCK_START: &str = "[Level=";
const LEVEL_BLOCK_END: &str = "[/Level]";

/// Parses the level list of a `[Level=...]` marker.
fn parse_levels(list: &str) -> [bool; LEVEL_COUNT] {
    let mut seen_on = [false; LEVEL_COUNT];
    for entry in list.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        match entry.parse::<usize>() {
            Ok(level) if (1..=LEVEL_COUNT).contains(&level) => seen_on[level - 1] = true,
            _ => warn!("invalid level in level block: {entry}"),
        }
    }
    seen_on
}

fn format_levels(seen_on: &[bool; LEVEL_COUNT]) -> String {
    let levels: Vec<String> = seen_on
        .iter()
        .enumerate()
        .filter(|(_, seen)| **seen)
        .map(|(index, _)| (index + 1).to_string())
        .collect();
    format!("{LEVEL_BLOCK_START}{}]", levels.join(","))
}

/// Reads every object of a text. Lines that do not produce an object are
/// reported and skipped.
///
/// # Examples
///
/// ```
/// use bdcave::{read_objects, ObjectRegistry};
///
/// let text = "Point=1,1 DIAMOND\n[Level=2]\nPoint=2,2 BOULDER\n[/Level]\nBogus=1\n";
/// let objects = read_objects(text, &ObjectRegistry::new());
/// assert_eq!(objects.len(), 2);
/// assert!(objects[0].is_seen_on_all());
/// assert!(objects[1].is_seen_on(1) && !objects[1].is_seen_on(0));
/// ```
pub fn read_objects(text: &str, registry: &ObjectRegistry) -> Vec<CaveObject> {
    let mut objects = Vec::new();
    let mut block_levels: Option<[bool; LEVEL_COUNT]> = None;

    for (number, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with(';') {
            continue;
        }
        if let Some(rest) = line.strip_prefix(LEVEL_BLOCK_START) {
            let list = rest.strip_suffix(']').unwrap_or_else(|| {
                warn!("line {}: unterminated level block marker", number + 1);
                rest
            });
            block_levels = Some(parse_levels(list));
            continue;
        }
        if line.eq_ignore_ascii_case(LEVEL_BLOCK_END) {
            block_levels = None;
            continue;
        }
        if line.starts_with('[') {
            debug!("line {}: skipping section marker {line}", number + 1);
            continue;
        }

        match registry.parse_line(line) {
            Ok(mut object) => {
                if let Some(levels) = block_levels {
                    object.seen_on = levels;
                }
                objects.push(object);
            }
            Err(err) => warn!("line {}: skipping object {line:?}: {err}", number + 1),
        }
    }

    debug!("read {} objects", objects.len());
    objects
}

/// Writes objects one per line. Consecutive objects with the same partial
/// visibility share one level block.
pub fn write_objects(objects: &[CaveObject]) -> String {
    let mut out = String::new();
    let mut open_block: Option<[bool; LEVEL_COUNT]> = None;

    for object in objects {
        let wanted = (!object.is_seen_on_all()).then_some(object.seen_on);
        if wanted != open_block {
            if open_block.is_some() {
                out.push_str(LEVEL_BLOCK_END);
                out.push('\n');
            }
            if let Some(levels) = &wanted {
                out.push_str(&format_levels(levels));
                out.push('\n');
            }
            open_block = wanted;
        }
        out.push_str(&object.get_bdcff());
        out.push('\n');
    }
    if open_block.is_some() {
        out.push_str(LEVEL_BLOCK_END);
        out.push('\n');
    }
    out
}
