//! # Maze Generation
//!
//! Maze layouts on a coarse lattice. In a [`MazeMap`] even rows and columns
//! hold passage cells and odd ones hold the walls between them; `true` means
//! open. The maze object later stamps this map onto the cave at full
//! resolution.
//!
//! Every choice is taken from the supplied [`GdRandom`] in a fixed order, so a
//! seed always produces the same maze.

use crate::generation::GdRandom;

/// Direction bits of the carver: up, down, left, right.
const UP: u32 = 0;
const DOWN: u32 = 1;
const LEFT: u32 = 2;
const RIGHT: u32 = 3;
const VERTICAL_MASK: u32 = 0b0011;
const HORIZONTAL_MASK: u32 = 0b1100;

/// Boolean lattice of a maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeMap {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl MazeMap {
    /// Creates a fully closed map.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_open(&self, x: usize, y: usize) -> bool {
        self.cells[y * self.width + x]
    }

    pub fn open(&mut self, x: usize, y: usize) {
        self.cells[y * self.width + x] = true;
    }

    /// Number of open cells.
    pub fn open_count(&self) -> usize {
        self.cells.iter().filter(|&&open| open).count()
    }
}

/// Carves a perfect maze starting from the top-left passage cell.
///
/// This is a depth-first carve. At every step the carver picks the horizontal
/// axis with probability `horiz` percent (else the vertical one), falls back
/// to the other axis when the chosen one has no untried directions, and then
/// picks one of the two directions on that axis with a second draw. A
/// direction that was already tried costs the draws but changes nothing.
///
/// The carve keeps an explicit stack so large caves cannot overflow the call
/// stack. The order of draws matches the recursive formulation.
pub fn carve(random: &mut GdRandom, width: usize, height: usize, horiz: i32) -> MazeMap {
    let mut map = MazeMap::new(width, height);
    if width == 0 || height == 0 {
        return map;
    }

    // (x, y, directions not yet tried)
    let mut stack: Vec<(usize, usize, u32)> = vec![(0, 0, 0b1111)];
    map.open(0, 0);

    while let Some(top) = stack.last_mut() {
        let (x, y, dirmask) = *top;
        if dirmask == 0 {
            stack.pop();
            continue;
        }

        let mut dir = if random.rand_int_range(0, 100) < horiz {
            LEFT
        } else {
            UP
        };
        if dir == LEFT && dirmask & HORIZONTAL_MASK == 0 {
            dir = UP;
        } else if dir == UP && dirmask & VERTICAL_MASK == 0 {
            dir = LEFT;
        }
        dir += random.rand_int_range(0, 2) as u32;

        if dirmask & (1 << dir) == 0 {
            continue;
        }
        top.2 &= !(1 << dir);

        let next = match dir {
            UP if y >= 2 && !map.is_open(x, y - 2) => Some(((x, y - 1), (x, y - 2))),
            DOWN if y + 2 < height && !map.is_open(x, y + 2) => Some(((x, y + 1), (x, y + 2))),
            LEFT if x >= 2 && !map.is_open(x - 2, y) => Some(((x - 1, y), (x - 2, y))),
            RIGHT if x + 2 < width && !map.is_open(x + 2, y) => Some(((x + 1, y), (x + 2, y))),
            _ => None,
        };

        if let Some(((wall_x, wall_y), (cell_x, cell_y))) = next {
            map.open(wall_x, wall_y);
            map.open(cell_x, cell_y);
            stack.push((cell_x, cell_y, 0b1111));
        }
    }

    map
}

/// Removes dead ends by opening one random closed wall of every passage cell
/// that is closed on three sides.
///
/// Cells are visited row by row. Walls on the map edge are never opened.
pub fn braid(random: &mut GdRandom, map: &mut MazeMap) {
    let (w, h) = (map.width, map.height);
    for y in (0..h).step_by(2) {
        for x in (0..w).step_by(2) {
            let mut closed = 0;
            let mut openable: Vec<(usize, usize)> = Vec::with_capacity(4);

            if x < 1 || !map.is_open(x - 1, y) {
                closed += 1;
                if x > 0 {
                    openable.push((x - 1, y));
                }
            }
            if y < 1 || !map.is_open(x, y - 1) {
                closed += 1;
                if y > 0 {
                    openable.push((x, y - 1));
                }
            }
            if x + 1 >= w || !map.is_open(x + 1, y) {
                closed += 1;
                if x + 1 < w {
                    openable.push((x + 1, y));
                }
            }
            if y + 1 >= h || !map.is_open(x, y + 1) {
                closed += 1;
                if y + 1 < h {
                    openable.push((x, y + 1));
                }
            }

            if closed == 3 && !openable.is_empty() {
                let pick = random.rand_int_range(0, openable.len() as i32) as usize;
                let (wall_x, wall_y) = openable[pick];
                map.open(wall_x, wall_y);
            }
        }
    }
}

/// Converts a perfect maze into a unicursal one: a single path that runs
/// along both sides of every corridor of the original.
///
/// Each open cell of a `w` x `h` map becomes the centre of a 3x3 block in a
/// `(2w + 1)` x `(2h + 1)` map. Block corners are always opened, and a block
/// edge is opened where the original cell had no open neighbour.
pub fn to_unicursal(map: &MazeMap) -> MazeMap {
    let (w, h) = (map.width, map.height);
    let mut out = MazeMap::new(w * 2 + 1, h * 2 + 1);

    for y in 0..h {
        for x in 0..w {
            if !map.is_open(x, y) {
                continue;
            }
            out.open(x * 2, y * 2);
            out.open(x * 2 + 2, y * 2);
            out.open(x * 2, y * 2 + 2);
            out.open(x * 2 + 2, y * 2 + 2);

            if x < 1 || !map.is_open(x - 1, y) {
                out.open(x * 2, y * 2 + 1);
            }
            if y < 1 || !map.is_open(x, y - 1) {
                out.open(x * 2 + 1, y * 2);
            }
            if x + 1 >= w || !map.is_open(x + 1, y) {
                out.open(x * 2 + 2, y * 2 + 1);
            }
            if y + 1 >= h || !map.is_open(x, y + 1) {
                out.open(x * 2 + 1, y * 2 + 2);
            }
        }
    }

    out
}
