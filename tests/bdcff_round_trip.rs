//! Round-trip tests for the BDCFF object line codec.
//!
//! An object written with `get_bdcff` and read back must render exactly like
//! the original.

use bdcave::{
    materialize, BoundaryFill, CaveObject, Coordinate, CopyPaste, Element, FillRect, FloodFill,
    Join, Line, Maze, MazeType, ObjectKind, ObjectRegistry, Point, RandomFill, Raster, Rectangle,
    RenderConfig,
};
use proptest::prelude::*;

const WIDTH: u32 = 16;
const HEIGHT: u32 = 12;

fn coordinate() -> impl Strategy<Value = Coordinate> {
    (-4i32..20, -4i32..16).prop_map(|(x, y)| Coordinate::new(x, y))
}

fn element() -> impl Strategy<Value = Element> {
    let elements: Vec<Element> = Element::all().collect();
    prop::sample::select(elements)
}

fn seeds() -> impl Strategy<Value = [i32; 5]> {
    prop::array::uniform5(prop_oneof![Just(-1), 0i32..1000])
}

/// Kinds drawn without the random generator.
fn plain_kind() -> impl Strategy<Value = ObjectKind> {
    prop_oneof![
        (coordinate(), element()).prop_map(|(p, e)| ObjectKind::from(Point::new(p, e))),
        (coordinate(), coordinate(), element())
            .prop_map(|(a, b, e)| ObjectKind::from(Line::new(a, b, e))),
        (coordinate(), coordinate(), element())
            .prop_map(|(a, b, e)| ObjectKind::from(Rectangle::new(a, b, e))),
        (coordinate(), coordinate(), element(), element())
            .prop_map(|(a, b, e, f)| ObjectKind::from(FillRect::new(a, b, e, f))),
        (coordinate(), coordinate(), (-1i32..5, -1i32..5), element()).prop_map(
            |(a, b, (dx, dy), e)| ObjectKind::from(Raster::new(a, b, Coordinate::new(dx, dy), e))
        ),
        ((-8i32..8, -8i32..8), element(), element(), any::<bool>()).prop_map(
            |((dx, dy), s, p, back)| {
                ObjectKind::from(Join::with_direction(Coordinate::new(dx, dy), s, p, back))
            }
        ),
        (coordinate(), element(), element())
            .prop_map(|(p, b, f)| ObjectKind::from(BoundaryFill::new(p, b, f))),
        (coordinate(), element(), element())
            .prop_map(|(p, s, f)| ObjectKind::from(FloodFill::new(p, s, f))),
    ]
}

/// Mazes, random fills and copy-paste.
fn generated_kind() -> impl Strategy<Value = ObjectKind> {
    prop_oneof![
        (
            coordinate(),
            coordinate(),
            (1i32..3, 1i32..3),
            element(),
            element(),
            0i32..=100,
            seeds(),
            prop::sample::select(vec![MazeType::Perfect, MazeType::Braid, MazeType::Unicursal]),
        )
            .prop_map(|(a, b, (wall, path), we, pe, horiz, seeds, maze_type)| {
                ObjectKind::from(
                    Maze::new(a, b, we, pe)
                        .with_widths(wall, path)
                        .with_horiz(horiz)
                        .with_seeds(seeds)
                        .with_type(maze_type),
                )
            }),
        (
            coordinate(),
            coordinate(),
            seeds(),
            element(),
            prop::collection::vec((element(), any::<u8>()), 0..=4),
            prop::option::of(element()),
            any::<bool>(),
        )
            .prop_map(|(a, b, seeds, initial, entries, only, c64)| {
                let mut fill = RandomFill::new(a, b, initial)
                    .with_seeds(seeds)
                    .with_c64_random(c64);
                for (e, probability) in entries {
                    fill = fill.with_entry(e, probability);
                }
                fill.replace_only = only;
                ObjectKind::from(fill)
            }),
        (coordinate(), coordinate(), coordinate(), any::<bool>(), any::<bool>())
            .prop_map(|(a, b, d, m, f)| {
                ObjectKind::from(CopyPaste::new(a, b, d).with_mirror_flip(m, f))
            }),
    ]
}

fn object_kind() -> impl Strategy<Value = ObjectKind> {
    prop_oneof![plain_kind(), generated_kind()]
}

/// Renders a fixed backdrop and then `object`, so fills and joins have
/// something to work on.
fn render_with_backdrop(object: &CaveObject, seed: u32) -> bdcave::Grid {
    let objects = vec![
        CaveObject::new(FillRect::new(
            Coordinate::new(0, 0),
            Coordinate::new(WIDTH as i32 - 1, HEIGHT as i32 - 1),
            Element::SteelWall,
            Element::Dirt,
        )),
        CaveObject::new(Line::new(Coordinate::new(2, 2), Coordinate::new(12, 9), Element::Boulder)),
        object.clone(),
    ];
    materialize(&objects, &RenderConfig::new(WIDTH, HEIGHT, seed), 0)
}

proptest! {
    #[test]
    fn prop_bdcff_round_trip_renders_identically(kind in object_kind(), seed in any::<u32>()) {
        let registry = ObjectRegistry::new();
        let original = CaveObject::new(kind);
        let line = original.get_bdcff();
        let parsed = CaveObject::create_from_bdcff(&line, &registry);
        prop_assert!(parsed.is_some(), "{} did not parse", line);
        let parsed = parsed.unwrap();

        prop_assert_eq!(parsed.get_bdcff(), line.clone());
        prop_assert_eq!(render_with_backdrop(&parsed, seed), render_with_backdrop(&original, seed));
    }
}

/// Any `i32`, weighted towards both ends of the range and the cave.
fn extreme_int() -> impl Strategy<Value = i32> {
    prop_oneof![
        any::<i32>(),
        i32::MAX - 8..=i32::MAX,
        i32::MIN..=i32::MIN + 8,
        -20i32..20,
    ]
}

fn extreme_pair() -> impl Strategy<Value = String> {
    (extreme_int(), extreme_int()).prop_map(|(x, y)| format!("{x},{y}"))
}

/// Object lines whose numbers span the whole `i32` range.
fn extreme_line() -> impl Strategy<Value = String> {
    prop_oneof![
        extreme_pair().prop_map(|p| format!("Point={p} DIAMOND")),
        (extreme_pair(), extreme_pair()).prop_map(|(a, b)| format!("Line={a} {b} WALL")),
        (extreme_pair(), extreme_pair()).prop_map(|(a, b)| format!("FillRect={a} {b} WALL DIRT")),
        (extreme_pair(), extreme_pair(), extreme_pair())
            .prop_map(|(a, c, d)| format!("Raster={a} {c} {d} BOULDER")),
        extreme_pair().prop_map(|d| format!("Add={d} DIRT WALL")),
        extreme_pair().prop_map(|p| format!("BoundaryFill={p} STEELWALL SPACE")),
        (extreme_pair(), extreme_pair(), extreme_int(), extreme_int(), extreme_int()).prop_map(
            |(a, b, wall, path, horiz)| {
                format!("Maze={a} {b} {wall} {path} WALL SPACE {horiz} -1 {wall} {path} 1 2")
            }
        ),
        (extreme_pair(), extreme_pair(), extreme_int()).prop_map(|(a, b, seed)| {
            format!("RandomFillC64={a} {b} {seed} -1 0 0 0 DIRT BOULDER {seed} DIAMOND 300")
        }),
        (extreme_pair(), extreme_pair(), extreme_pair())
            .prop_map(|(a, b, d)| format!("CopyPaste={a} {b} {d} mirror flip")),
    ]
}

proptest! {
    #[test]
    fn prop_extreme_numbers_never_panic(line in extreme_line(), seed in any::<u32>()) {
        let registry = ObjectRegistry::new();
        if let Some(object) = CaveObject::create_from_bdcff(&line, &registry) {
            let grid = render_with_backdrop(&object, seed);
            prop_assert_eq!(grid.len(), (WIDTH * HEIGHT) as usize);
            let _ = object.get_bdcff();
            let _ = object.description();
        }
    }
}

#[test]
fn test_optional_fill_defaults_to_border() {
    let registry = ObjectRegistry::new();
    let parsed = CaveObject::create_from_bdcff("FillRect=1,1 5,5 WALL", &registry);
    let expected = CaveObject::new(FillRect::new(
        Coordinate::new(1, 1),
        Coordinate::new(5, 5),
        Element::Wall,
        Element::Wall,
    ));
    assert_eq!(parsed, Some(expected));
}

#[test]
fn test_unknown_element_is_not_fatal() {
    let registry = ObjectRegistry::new();
    let parsed = CaveObject::create_from_bdcff("Point=1,1 FLUBBER", &registry);
    assert_eq!(
        parsed,
        Some(CaveObject::new(Point::new(Coordinate::new(1, 1), Element::Unknown)))
    );
}

#[test]
fn test_bad_switch_words_fall_back_to_off() {
    let registry = ObjectRegistry::new();
    let parsed = CaveObject::create_from_bdcff("CopyPaste=0,0 3,3 5,5 yes please", &registry);
    assert_eq!(
        parsed,
        Some(CaveObject::new(CopyPaste::new(
            Coordinate::new(0, 0),
            Coordinate::new(3, 3),
            Coordinate::new(5, 5),
        )))
    );
}

#[test]
fn test_malformed_lines_produce_no_object() {
    let registry = ObjectRegistry::new();
    for line in [
        "",
        "Point",
        "Point=",
        "Point=1;1 WALL",
        "Rectangle=1,1 WALL",
        "Maze=0,0 9,9 1 1 WALL SPACE 50 1 2 3",
        "Teleport=1,1",
    ] {
        assert!(CaveObject::create_from_bdcff(line, &registry).is_none(), "{line:?}");
    }
}
