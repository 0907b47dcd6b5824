//! Maze object.

use crate::bdcff::{BdcffFormat, Tokens};
use crate::cave::{Coordinate, Element};
use crate::config::LEVEL_COUNT;
use crate::generation::{braid, carve, to_unicursal, GdRandom, MazeMap, RenderContext};
use crate::objects::{drawable_extent, rect_text, ObjectShape};
use crate::CaveResult;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Layout family of a maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MazeType {
    /// Exactly one path between any two passages
    #[default]
    Perfect,
    /// Perfect maze with every dead end opened into a loop
    Braid,
    /// A single path visiting every passage
    Unicursal,
}

impl MazeType {
    pub fn name(self) -> &'static str {
        match self {
            MazeType::Perfect => "perfect",
            MazeType::Braid => "braid",
            MazeType::Unicursal => "unicursal",
        }
    }

    /// Reads a maze type word. A missing word means perfect; an unknown one is
    /// reported and also means perfect.
    pub fn from_word(word: Option<&str>) -> MazeType {
        match word {
            None => MazeType::Perfect,
            Some(w) if w.eq_ignore_ascii_case("perfect") => MazeType::Perfect,
            Some(w) if w.eq_ignore_ascii_case("braid") => MazeType::Braid,
            Some(w) if w.eq_ignore_ascii_case("unicursal") => MazeType::Unicursal,
            Some(w) => {
                warn!("unknown maze type: {w}, defaulting to perfect");
                MazeType::Perfect
            }
        }
    }
}

impl fmt::Display for MazeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A maze of walls and paths filling a rectangle.
///
/// Passages are `path_width` cells wide and separated by walls `wall_width`
/// cells thick. Cells left over on the right and bottom become wall.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Maze {
    pub p1: Coordinate,
    pub p2: Coordinate,
    pub wall_width: i32,
    pub path_width: i32,
    pub wall_element: Element,
    pub path_element: Element,
    /// Percent chance of picking a horizontal direction while carving
    pub horiz: i32,
    /// Maze seed per level; -1 takes one from the render generator
    pub seeds: [i32; LEVEL_COUNT],
    pub maze_type: MazeType,
}

impl Maze {
    /// Creates a perfect maze with one-cell walls and paths, no direction
    /// bias and seeds taken from the render generator.
    pub fn new(p1: Coordinate, p2: Coordinate, wall_element: Element, path_element: Element) -> Self {
        Self {
            p1,
            p2,
            wall_width: 1,
            path_width: 1,
            wall_element,
            path_element,
            horiz: 50,
            seeds: [-1; LEVEL_COUNT],
            maze_type: MazeType::Perfect,
        }
    }

    pub fn with_type(mut self, maze_type: MazeType) -> Self {
        self.maze_type = maze_type;
        self
    }

    pub fn with_seeds(mut self, seeds: [i32; LEVEL_COUNT]) -> Self {
        self.seeds = seeds;
        self
    }

    pub fn with_widths(mut self, wall_width: i32, path_width: i32) -> Self {
        self.wall_width = wall_width;
        self.path_width = path_width;
        self
    }

    pub fn with_horiz(mut self, horiz: i32) -> Self {
        self.horiz = horiz;
        self
    }

    /// Reads
    /// `Maze=x1,y1 x2,y2 wall_width path_width wall path horiz s1 s2 s3 s4 s5 [type]`.
    pub fn from_bdcff(_name: &str, tokens: &mut Tokens) -> CaveResult<Self> {
        let p1 = tokens.coordinate("maze start")?;
        let p2 = tokens.coordinate("maze end")?;
        let wall_width = tokens.integer("maze wall width")?;
        let path_width = tokens.integer("maze path width")?;
        let wall_element = tokens.element("maze wall element")?;
        let path_element = tokens.element("maze path element")?;
        let horiz = tokens.integer("maze horizontal ratio")?;
        let mut seeds = [-1; LEVEL_COUNT];
        for seed in seeds.iter_mut() {
            *seed = tokens.integer("maze seed")?;
        }
        let maze_type = MazeType::from_word(tokens.next_word());

        Ok(Self {
            p1,
            p2,
            wall_width,
            path_width,
            wall_element,
            path_element,
            horiz,
            seeds,
            maze_type,
        })
    }

    /// Builds the lattice for `passages_x` x `passages_y` passage cells.
    fn layout(&self, random: &mut GdRandom, passages_x: i32, passages_y: i32) -> Option<MazeMap> {
        match self.maze_type {
            MazeType::Perfect | MazeType::Braid => {
                if passages_x < 1 || passages_y < 1 {
                    return None;
                }
                let (w, h) = (passages_x as usize * 2 - 1, passages_y as usize * 2 - 1);
                let mut map = carve(random, w, h, self.horiz);
                if self.maze_type == MazeType::Braid {
                    braid(random, &mut map);
                }
                Some(map)
            }
            MazeType::Unicursal => {
                // Each carved passage turns into a 2x2 block of the final maze.
                let (half_x, half_y) = (passages_x / 2, passages_y / 2);
                if half_x < 1 || half_y < 1 {
                    return None;
                }
                let map = carve(
                    random,
                    half_x as usize * 2 - 1,
                    half_y as usize * 2 - 1,
                    self.horiz,
                );
                Some(to_unicursal(&map))
            }
        }
    }
}

impl ObjectShape for Maze {
    fn draw(&self, ctx: &mut RenderContext, order_idx: usize) {
        let (min, max) = Coordinate::normalize_rect(self.p1, self.p2);
        let wall = self.wall_width.max(1);
        let path = self.path_width.max(1);

        let seed = match self.seeds.get(ctx.level) {
            Some(&seed) if seed != -1 => seed as u32,
            _ => ctx.random.next_u32(),
        };
        let mut random = GdRandom::new(seed);

        let Some((w, h)) = drawable_extent("maze", min, max) else {
            return;
        };
        let cell = i64::from(path) + i64::from(wall);
        let passages_x = ((i64::from(w) + i64::from(wall)) / cell) as i32;
        let passages_y = ((i64::from(h) + i64::from(wall)) / cell) as i32;
        let Some(map) = self.layout(&mut random, passages_x, passages_y) else {
            return;
        };

        // Stamped relative to the wrapped corner; every span fits in the
        // rectangle, so offsets stay below `w` and `h`.
        let origin = ctx.wrap(min);
        let span = |i: usize| if i % 2 == 0 { path } else { wall };
        let mut dy = 0;
        for j in 0..map.height() {
            for _ in 0..span(j) {
                let mut dx = 0;
                for i in 0..map.width() {
                    let element = if map.is_open(i, j) {
                        self.path_element
                    } else {
                        self.wall_element
                    };
                    for _ in 0..span(i) {
                        ctx.store(origin.x + dx, origin.y + dy, element, order_idx);
                        dx += 1;
                    }
                }
                while dx < w {
                    ctx.store(origin.x + dx, origin.y + dy, self.wall_element, order_idx);
                    dx += 1;
                }
                dy += 1;
            }
        }
        while dy < h {
            for dx in 0..w {
                ctx.store(origin.x + dx, origin.y + dy, self.wall_element, order_idx);
            }
            dy += 1;
        }
    }

    fn to_bdcff(&self) -> String {
        let mut format = BdcffFormat::new("Maze")
            .param(self.p1)
            .param(self.p2)
            .param(self.wall_width)
            .param(self.path_width)
            .param(self.wall_element)
            .param(self.path_element)
            .param(self.horiz);
        for seed in self.seeds {
            format = format.param(seed);
        }
        format.param(self.maze_type).finish()
    }

    fn description(&self) -> String {
        format!(
            "Maze from {} to {}, {} type",
            self.p1, self.p2, self.maze_type
        )
    }

    fn coordinates_text(&self) -> String {
        rect_text(self.p1, self.p2)
    }

    fn characteristic_element(&self) -> Option<Element> {
        Some(self.wall_element)
    }

    fn move_by(&mut self, displacement: Coordinate) {
        self.p1 += displacement;
        self.p2 += displacement;
    }

    fn create_drag(&mut self, current: Coordinate, _displacement: Coordinate) {
        self.p2 = current;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::{materialize, RenderConfig};
    use crate::objects::test_support::{picture, render_one};
    use crate::objects::CaveObject;

    fn maze(x2: i32, y2: i32) -> Maze {
        Maze::new(
            Coordinate::new(0, 0),
            Coordinate::new(x2, y2),
            Element::Wall,
            Element::Space,
        )
        .with_seeds([7; LEVEL_COUNT])
    }

    #[test]
    fn test_perfect_maze_layout() {
        // 9x5 cells: 5x3 passages, every even/even cell is path.
        let grid = render_one(maze(8, 4), 9, 5);
        for y in (0..5).step_by(2) {
            for x in (0..9).step_by(2) {
                assert_eq!(grid.read(x, y), Element::Space);
            }
        }
        for y in (1..5).step_by(2) {
            for x in (1..9).step_by(2) {
                assert_eq!(grid.read(x, y), Element::Wall);
            }
        }
        // 15 passages joined by 14 opened walls.
        assert_eq!(grid.count(Element::Space), 29);
    }

    #[test]
    fn test_leftover_cells_become_wall() {
        let grid = render_one(maze(9, 5), 10, 6);
        for y in 0..6 {
            assert_eq!(grid.read(9, y), Element::Wall);
        }
        for x in 0..10 {
            assert_eq!(grid.read(x, 5), Element::Wall);
        }
    }

    #[test]
    fn test_wide_paths_and_walls() {
        let wide = maze(6, 6).with_widths(1, 2);
        let grid = render_one(wide, 7, 7);
        // Passages at columns 0-1, 3-4 and a leftover wall column at 5..6.
        assert_eq!(grid.read(0, 0), Element::Space);
        assert_eq!(grid.read(1, 1), Element::Space);
        assert_eq!(grid.read(2, 2), Element::Wall);
        assert_eq!(grid.read(5, 0), Element::Wall);
        assert_eq!(grid.read(6, 6), Element::Wall);
    }

    #[test]
    fn test_seed_controls_the_maze() {
        let a = render_one(maze(20, 12), 21, 13);
        let b = render_one(maze(20, 12), 21, 13);
        let c = render_one(maze(20, 12).with_seeds([8; LEVEL_COUNT]), 21, 13);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_unset_seed_follows_render_seed() {
        let objects = vec![CaveObject::new(maze(20, 12).with_seeds([-1; LEVEL_COUNT]))];
        let a = materialize(&objects, &RenderConfig::new(21, 13, 1), 0);
        let b = materialize(&objects, &RenderConfig::new(21, 13, 1), 0);
        let c = materialize(&objects, &RenderConfig::new(21, 13, 2), 0);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_braid_has_no_dead_ends() {
        let grid = render_one(maze(14, 10).with_type(MazeType::Braid), 15, 11);
        for y in (0..11).step_by(2) {
            for x in (0..15).step_by(2) {
                let open = [(x - 1, y), (x + 1, y), (x, y - 1), (x, y + 1)]
                    .iter()
                    .filter(|(nx, ny)| {
                        (0..15).contains(nx) && (0..11).contains(ny) && grid.read(*nx, *ny) == Element::Space
                    })
                    .count();
                assert!(open >= 2, "dead end at {x},{y}");
            }
        }
    }

    #[test]
    fn test_unicursal_fills_the_rectangle() {
        // 11x7 cells give 6x4 passages, halved to a 3x2 maze of 5x3 cells,
        // converted back to 11x7.
        let grid = render_one(maze(10, 6).with_type(MazeType::Unicursal), 11, 7);
        assert_eq!(grid.read(0, 0), Element::Space);
        assert_eq!(grid.read(10, 6), Element::Space);
        assert_eq!(grid.read(1, 1), Element::Wall);
    }

    #[test]
    fn test_too_small_maze_draws_nothing() {
        let tiny = Maze::new(
            Coordinate::new(0, 0),
            Coordinate::new(0, 0),
            Element::Wall,
            Element::Dirt,
        )
        .with_widths(1, 3);
        let grid = render_one(tiny, 3, 3);
        assert_eq!(grid.order_at(0, 0), None);
        assert_eq!(picture(&grid), vec!["   ", "   ", "   "]);
    }

    #[test]
    fn test_huge_widths() -> CaveResult<()> {
        // A wall wider than the rectangle leaves room for one passage cell.
        let registry = crate::objects::ObjectRegistry::new();
        let object = registry.parse_line("Maze=0,0 9,9 2147483647 1 WALL SPACE 50 1 1 1 1 1")?;
        let grid = crate::objects::test_support::render(&[object], 10, 10, Element::Dirt);
        assert_eq!(grid.read(0, 0), Element::Space);
        assert_eq!(grid.count(Element::Space), 1);
        assert_eq!(grid.count(Element::Wall), 99);

        let wide_path = maze(9, 9).with_widths(1, i32::MAX);
        assert_eq!(render_one(wide_path, 10, 10).count(Element::Wall), 0);
        Ok(())
    }

    #[test]
    fn test_maze_at_coordinate_limits_wraps() {
        // i32::MAX - 8 is 4 modulo 5.
        let far = Maze::new(
            Coordinate::new(i32::MAX - 8, i32::MAX - 8),
            Coordinate::new(i32::MAX, i32::MAX),
            Element::Wall,
            Element::Space,
        )
        .with_seeds([7; LEVEL_COUNT]);
        let near = Maze::new(
            Coordinate::new(4, 4),
            Coordinate::new(12, 12),
            Element::Wall,
            Element::Space,
        )
        .with_seeds([7; LEVEL_COUNT]);
        assert_eq!(render_one(far, 5, 5), render_one(near, 5, 5));

        let huge = Maze::new(
            Coordinate::new(i32::MIN, 0),
            Coordinate::new(i32::MAX, 4),
            Element::Wall,
            Element::Dirt,
        );
        assert_eq!(render_one(huge, 5, 5).count(Element::Space), 25);
    }

    #[test]
    fn test_maze_bdcff() -> CaveResult<()> {
        let original = maze(10, 6)
            .with_type(MazeType::Braid)
            .with_horiz(80)
            .with_seeds([1, -1, 3, 4, 5]);
        let line = original.to_bdcff();
        assert_eq!(line, "Maze=0,0 10,6 1 1 WALL SPACE 80 1 -1 3 4 5 braid");
        let params = line.split_once('=').map(|(_, p)| p).unwrap_or_default();
        assert_eq!(Maze::from_bdcff("Maze", &mut Tokens::new(params))?, original);
        Ok(())
    }

    #[test]
    fn test_maze_type_words() {
        assert_eq!(MazeType::from_word(None), MazeType::Perfect);
        assert_eq!(MazeType::from_word(Some("UNICURSAL")), MazeType::Unicursal);
        assert_eq!(MazeType::from_word(Some("twisty")), MazeType::Perfect);
    }
}
