use aoc23::{Grid, Pos};
use fxhash::FxHashSet;

use crate::field::Field;

fn step((r, c): Pos, (dr, dc): Pos) -> Pos {
    (r + dr, c + dc)
}

fn reverse((dr, dc): Pos) -> Pos {
    (-dr, -dc)
}

struct Frame {
    pos: Pos,
    // offset pointing back to where we came from
    back: Option<Pos>,
    next: usize,
}

/// Depth-first search for the loop through the start cell.
///
/// The search walks an explicit stack of frames, which doubles as the path
/// taken so far. Cells are marked visited once, for the whole search, so every
/// pipe is entered at most one time.
pub struct LoopTracer<'a> {
    grid: &'a Grid<Field>,
    visited: FxHashSet<Pos>,
}

impl<'a> LoopTracer<'a> {
    pub fn new(grid: &'a Grid<Field>) -> Self {
        Self {
            grid,
            visited: FxHashSet::default(),
        }
    }

    pub fn find_start(&self) -> Option<Pos> {
        self.grid
            .indices()
            .find(|&i| self.grid[i] == Field::Start)
            .map(|(r, c)| (r as i64, c as i64))
    }

    /// The longest closed path through the start, beginning with the start
    /// itself. Empty when there is no start or no path closes.
    pub fn trace(&mut self) -> Vec<Pos> {
        let Some(start) = self.find_start() else {
            return vec![];
        };

        log::debug!("start at {start:?}");

        self.visited.clear();
        self.visited.insert(start);

        let mut best: Vec<Pos> = vec![];
        let mut stack = vec![Frame {
            pos: start,
            back: None,
            next: 0,
        }];

        while let Some(frame) = stack.last_mut() {
            let field = self.grid[(frame.pos.0 as usize, frame.pos.1 as usize)];

            let Some(&offset) = field.offsets().get(frame.next) else {
                stack.pop();
                continue;
            };
            frame.next += 1;

            if frame.back == Some(offset) {
                continue;
            }

            let target = step(frame.pos, offset);
            let connected = self
                .grid
                .get(target)
                .is_some_and(|f| f.connects(reverse(offset)));

            if !connected {
                continue;
            }

            if target == start {
                log::trace!("closed a loop of length {}", stack.len());
                if stack.len() > best.len() {
                    best = stack.iter().map(|frame| frame.pos).collect();
                }
            } else if self.visited.insert(target) {
                stack.push(Frame {
                    pos: target,
                    back: Some(reverse(offset)),
                    next: 0,
                });
            }
        }

        log::debug!("loop length {}", best.len());

        best
    }
}

pub fn find_loop(grid: &Grid<Field>) -> Vec<Pos> {
    LoopTracer::new(grid).trace()
}

/// The pipe shape the start cell must have, given the loop through it.
pub fn start_shape(path: &[Pos]) -> Option<Field> {
    let (&start, &next, &prev) = match path {
        [start, next, .., prev] => (start, next, prev),
        _ => return None,
    };

    let offset = |(r, c): Pos| (r - start.0, c - start.1);
    Field::from_offsets(offset(next), offset(prev))
}

#[cfg(test)]
fn parse(input: &str) -> Grid<Field> {
    aoc23::parse_grid(input, Field::from_char).unwrap()
}

#[test]
fn test_square() {
    let grid = parse(
        "
.....
.S-7.
.|.|.
.L-J.
.....
"
        .trim(),
    );

    let path = find_loop(&grid);
    assert_eq!(
        path,
        vec![
            (1, 1),
            (2, 1),
            (3, 1),
            (3, 2),
            (3, 3),
            (2, 3),
            (1, 3),
            (1, 2)
        ]
    );
    assert_eq!(start_shape(&path), Some(Field::SouthEast));
}

#[test]
fn test_start_in_corner_of_grid() {
    let grid = parse("S7\nLJ");
    let path = find_loop(&grid);
    assert_eq!(path, vec![(0, 0), (1, 0), (1, 1), (0, 1)]);
    assert_eq!(start_shape(&path), Some(Field::SouthEast));
}

#[test]
fn test_ignores_pipes_not_pointing_back() {
    // the pipes left of and above the start don't connect to it
    let grid = parse(
        "
.-...
|S-7.
.|.|.
.L-J.
"
        .trim(),
    );

    let path = find_loop(&grid);
    assert_eq!(path.len(), 8);
    assert_eq!(path[0], (1, 1));
    assert_eq!(start_shape(&path), Some(Field::SouthEast));
}

#[test]
fn test_longest_loop_wins() {
    // going south first closes the small loop, the big one comes second
    let grid = parse(
        "
F-7..
|.|..
L-S7.
..LJ.
"
        .trim(),
    );

    assert_eq!(
        find_loop(&grid),
        vec![
            (2, 2),
            (1, 2),
            (0, 2),
            (0, 1),
            (0, 0),
            (1, 0),
            (2, 0),
            (2, 1)
        ]
    );
}

#[test]
fn test_first_of_equal_loops_wins() {
    let grid = parse(
        "
F7..
LS7.
.LJ.
"
        .trim(),
    );

    assert_eq!(find_loop(&grid), vec![(1, 1), (2, 1), (2, 2), (1, 2)]);
}

#[test]
fn test_no_loop() {
    assert_eq!(find_loop(&parse("S-7\n..|")), vec![]);
    assert_eq!(find_loop(&parse("S")), vec![]);
    assert_eq!(find_loop(&parse("F7\nLJ")), vec![]);
}

#[test]
fn test_deterministic() {
    let grid = parse(
        "
..F7.
.FJ|.
SJ.L7
|F--J
LJ...
"
        .trim(),
    );

    let path = find_loop(&grid);
    assert_eq!(path.len(), 16);
    assert_eq!(LoopTracer::new(&grid).trace(), path);

    let mut tracer = LoopTracer::new(&grid);
    assert_eq!(tracer.trace(), path);
    assert_eq!(tracer.trace(), path);
}
