//! Integration tests for rendering object lists into grids.

use bdcave::{
    materialize, BoundaryFill, CaveObject, Coordinate, CopyPaste, Element, FillRect, Grid, Join,
    Maze, Point, RandomFill, RenderConfig,
};

fn at(x: i32, y: i32) -> Coordinate {
    Coordinate::new(x, y)
}

fn render(objects: &[CaveObject], width: u32, height: u32, level: usize, seed: u32) -> Grid {
    materialize(objects, &RenderConfig::new(width, height, seed), level)
}

/// A 10x10 walled room filled from its centre.
#[test]
fn test_walled_room_is_filled_with_dirt() {
    let objects = vec![
        CaveObject::new(FillRect::new(at(0, 0), at(9, 9), Element::Wall, Element::Space)),
        CaveObject::new(BoundaryFill::new(at(5, 5), Element::Wall, Element::Dirt)),
    ];
    let grid = render(&objects, 10, 10, 0, 0);

    for y in 0..10 {
        for x in 0..10 {
            let border = x == 0 || y == 0 || x == 9 || y == 9;
            let expected = if border { Element::Wall } else { Element::Dirt };
            assert_eq!(grid.read(x, y), expected, "cell {x},{y}");
        }
    }
}

#[test]
fn test_later_objects_overwrite_earlier_ones() {
    let a = CaveObject::new(FillRect::new(at(0, 0), at(5, 5), Element::Boulder, Element::Boulder));
    let b = CaveObject::new(FillRect::new(at(3, 3), at(8, 8), Element::Diamond, Element::Diamond))
        .with_levels(&[0]);

    let grid = render(&[a.clone(), b.clone()], 10, 10, 0, 0);
    assert_eq!(grid.read(4, 4), Element::Diamond);
    assert_eq!(grid.order_at(4, 4), Some(1));

    let reversed = render(&[b, a], 10, 10, 0, 0);
    assert_eq!(reversed.read(4, 4), Element::Boulder);
    assert_eq!(reversed.order_at(4, 4), Some(1));
}

#[test]
fn test_join_by_full_width_equals_join_in_place() {
    let seed_points = vec![
        CaveObject::new(Point::new(at(1, 1), Element::Boulder)),
        CaveObject::new(Point::new(at(6, 3), Element::Boulder)),
    ];
    let with_join = |dist: Coordinate| {
        let mut objects = seed_points.clone();
        objects.push(CaveObject::new(Join::new(dist, Element::Boulder, Element::Diamond)));
        render(&objects, 8, 5, 0, 0)
    };

    let wrapped = with_join(at(8, 0));
    let in_place = with_join(at(0, 0));
    assert_eq!(wrapped.cells(), in_place.cells());
    assert_eq!(wrapped.count(Element::Diamond), 2);
}

#[test]
fn test_auto_backward_join_adds_one_per_original() {
    let objects = vec![
        CaveObject::new(Point::new(at(0, 0), Element::Boulder)),
        CaveObject::new(Join::new(at(1, 0), Element::Boulder, Element::Boulder)),
    ];
    let grid = render(&objects, 3, 1, 0, 0);
    assert_eq!(grid.read(0, 0), Element::Boulder);
    assert_eq!(grid.read(1, 0), Element::Boulder);
    assert_eq!(grid.read(2, 0), Element::Space);
}

#[test]
fn test_level_filter() {
    let objects = vec![
        CaveObject::new(FillRect::new(at(0, 0), at(3, 3), Element::Dirt, Element::Dirt)),
        CaveObject::new(Point::new(at(1, 1), Element::Diamond)).with_levels(&[0]),
        CaveObject::new(Point::new(at(2, 2), Element::Boulder)),
    ];

    let first = render(&objects, 4, 4, 0, 0);
    assert_eq!(first.read(1, 1), Element::Diamond);

    for level in 1..5 {
        let grid = render(&objects, 4, 4, level, 0);
        assert_eq!(grid.read(1, 1), Element::Dirt, "level {level}");
        assert_eq!(grid.read(2, 2), Element::Boulder, "level {level}");
        assert_eq!(grid.order_at(1, 1), Some(0));
    }
}

#[test]
fn test_copy_paste_mirror_and_flip() {
    let block = |mirror: bool, flip: bool| {
        let objects = vec![
            CaveObject::new(Point::new(at(0, 0), Element::Boulder)),
            CaveObject::new(Point::new(at(1, 0), Element::Diamond)),
            CaveObject::new(Point::new(at(0, 1), Element::Wall)),
            CaveObject::new(Point::new(at(1, 1), Element::Dirt)),
            CaveObject::new(CopyPaste::new(at(0, 0), at(1, 1), at(3, 3)).with_mirror_flip(mirror, flip)),
        ];
        let grid = render(&objects, 6, 6, 0, 0);
        [
            [grid.read(3, 3), grid.read(4, 3)],
            [grid.read(3, 4), grid.read(4, 4)],
        ]
    };

    use Element::{Boulder as A, Diamond as B, Dirt as D, Wall as C};
    assert_eq!(block(true, false), [[B, A], [D, C]]);
    assert_eq!(block(true, true), [[D, C], [B, A]]);
}

fn random_cave() -> Vec<CaveObject> {
    vec![
        CaveObject::new(FillRect::new(at(0, 0), at(19, 11), Element::SteelWall, Element::Dirt)),
        CaveObject::new(
            RandomFill::new(at(1, 1), at(18, 10), Element::Dirt)
                .with_entry(Element::Boulder, 60)
                .with_entry(Element::Diamond, 10),
        ),
        CaveObject::new(Maze::new(at(1, 7), at(18, 10), Element::Wall, Element::Space)),
    ]
}

#[test]
fn test_rendering_is_deterministic() {
    let objects = random_cave();
    for level in 0..5 {
        let first = render(&objects, 20, 12, level, 1234);
        let second = render(&objects, 20, 12, level, 1234);
        assert_eq!(first, second, "level {level}");
    }
}

#[test]
fn test_seed_changes_random_content() {
    let objects = random_cave();
    let reference = render(&objects, 20, 12, 0, 1);
    let differing = (2..10)
        .filter(|&seed| render(&objects, 20, 12, 0, seed) != reference)
        .count();
    assert!(differing >= 7);
}

#[test]
fn test_degenerate_geometry_is_harmless() {
    let objects = vec![
        CaveObject::new(FillRect::new(at(4, 4), at(4, 4), Element::Wall, Element::Dirt)),
        CaveObject::new(CopyPaste::new(at(-3, -3), at(-3, -3), at(100, 100))),
        CaveObject::new(Maze::new(at(0, 0), at(0, 0), Element::Wall, Element::Space).with_widths(2, 2)),
    ];
    let grid = render(&objects, 5, 5, 0, 9);
    assert_eq!(grid.read(4, 4), Element::Wall);
}
