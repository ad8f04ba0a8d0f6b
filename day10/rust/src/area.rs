//! Counting the cells enclosed by the loop.
//!
//! Loop pipes may squeeze past each other without leaving a full cell of room,
//! so a flood fill at the original resolution would either leak or get stuck.
//! Instead, the loop is redrawn at three times the resolution, where every
//! connection between two loop cells becomes a solid run of wire, and any gap
//! between pipes becomes at least two cells wide. The fill runs there, and only
//! the hub cells (one per original cell) are read back.

use aoc23::{Grid, Pos};

use crate::{
    field::Field::{self, *},
    trace::start_shape,
};

pub const SCALE: usize = 3;

/// Clears everything that isn't part of the loop. The start cell gets the
/// shape the loop gives it.
pub fn mask(grid: &Grid<Field>, path: &[Pos]) -> Grid<Field> {
    let mut masked = Grid::new(grid.rows(), grid.cols());

    for &pos in path {
        if let (Some(&field), Some(cell)) = (grid.get(pos), masked.get_mut(pos)) {
            *cell = field;
        }
    }

    if let (Some(&start), Some(shape)) = (path.first(), start_shape(path)) {
        if let Some(cell) = masked.get_mut(start) {
            *cell = shape;
        }
    }

    masked
}

/// Each occupied cell becomes a hub at `(r * 3, c * 3)`, with a wire cell next
/// to it for every direction it connects in.
pub fn upscale(masked: &Grid<Field>) -> Grid<Field> {
    let mut scaled = Grid::new(masked.rows() * SCALE, masked.cols() * SCALE);

    for (r, c) in masked.indices() {
        let field = masked[(r, c)];
        if field == Empty {
            continue;
        }

        let hub = ((r * SCALE) as i64, (c * SCALE) as i64);
        scaled[(r * SCALE, c * SCALE)] = field;

        for &(dr, dc) in field.offsets() {
            let wire = if dr != 0 { Vertical } else { Horizontal };
            if let Some(cell) = scaled.get_mut((hub.0 + dr, hub.1 + dc)) {
                if *cell == Empty {
                    *cell = wire;
                }
            }
        }
    }

    scaled
}

/// Marks every empty cell reachable from the border as [`Filled`].
pub fn flood_exterior(scaled: &mut Grid<Field>) {
    let (rows, cols) = (scaled.rows() as i64, scaled.cols() as i64);
    if rows == 0 || cols == 0 {
        return;
    }

    // corners first
    let mut seeds = vec![(0, 0), (0, cols - 1), (rows - 1, 0), (rows - 1, cols - 1)];
    seeds.extend((0..rows).flat_map(|r| [(r, 0), (r, cols - 1)]));
    seeds.extend((0..cols).flat_map(|c| [(0, c), (rows - 1, c)]));

    let mut todo = vec![];
    for p in seeds {
        if fill(scaled, p) {
            todo.push(p);
        }
    }

    while let Some((r, c)) = todo.pop() {
        for p in [(r - 1, c), (r + 1, c), (r, c - 1), (r, c + 1)] {
            if fill(scaled, p) {
                todo.push(p);
            }
        }
    }
}

fn fill(scaled: &mut Grid<Field>, p: Pos) -> bool {
    match scaled.get_mut(p) {
        Some(cell) if *cell == Empty => {
            *cell = Filled;
            true
        }
        _ => false,
    }
}

pub fn downsample(scaled: &Grid<Field>) -> Grid<Field> {
    let (rows, cols) = (scaled.rows() / SCALE, scaled.cols() / SCALE);
    let mut grid = Grid::new(rows, cols);

    for r in 0..rows {
        for c in 0..cols {
            grid[(r, c)] = scaled[(r * SCALE, c * SCALE)];
        }
    }

    grid
}

/// The grid at its original size, with the loop in place, the outside
/// [`Filled`] and the inside left [`Empty`].
pub fn classify(grid: &Grid<Field>, path: &[Pos]) -> Grid<Field> {
    let mut scaled = upscale(&mask(grid, path));
    log::debug!("flood filling {}x{}", scaled.rows(), scaled.cols());

    flood_exterior(&mut scaled);
    downsample(&scaled)
}

/// Cells of a [`classify`]-ed grid the fill never reached.
pub fn interior(classified: &Grid<Field>) -> usize {
    classified
        .data()
        .iter()
        .filter(|&&field| field == Empty)
        .count()
}

pub fn count_interior(grid: &Grid<Field>, path: &[Pos]) -> usize {
    interior(&classify(grid, path))
}

#[cfg(test)]
fn parse(input: &str) -> Grid<Field> {
    aoc23::parse_grid(input, Field::from_char).unwrap()
}

#[test]
fn test_mask() {
    let grid = parse(
        "
-L|F7
7S-7|
L|7||
-L-J|
L|-JF
"
        .trim(),
    );

    let path = crate::trace::find_loop(&grid);
    assert_eq!(
        mask(&grid, &path).to_string(),
        "
.....
.F-7.
.|.|.
.L-J.
.....
"
        .trim_start()
    );
}

#[test]
fn test_upscale() {
    let masked = parse("F7\nLJ");
    let scaled = upscale(&masked);

    assert_eq!(
        scaled.to_string(),
        "
F--7..
|..|..
|..|..
L--J..
......
......
"
        .trim_start()
    );

    assert_eq!(downsample(&scaled), masked);
}

#[test]
fn test_squeeze_between_pipes() {
    // the pipes in the middle touch, the outside still gets in between them
    let grid = parse(
        "
..........
.S------7.
.|F----7|.
.||....||.
.||....||.
.|L-7F-J|.
.|..||..|.
.L--JL--J.
..........
"
        .trim(),
    );

    let path = crate::trace::find_loop(&grid);
    let classified = classify(&grid, &path);

    assert_eq!(
        classified.map(|f| f.to_char()).to_string(),
        "
OOOOOOOOOO
OF------7O
O|F----7|O
O||OOOO||O
O||OOOO||O
O|L-7F-J|O
O|..||..|O
OL--JL--JO
OOOOOOOOOO
"
        .trim_start()
    );
    assert_eq!(interior(&classified), 4);
    assert_eq!(count_interior(&grid, &path), 4);
}

#[test]
fn test_pocket_along_border() {
    // the outside between the two arms is cut off from every corner
    let grid = parse(
        "
F7.F7
|L-J|
S---J
"
        .trim(),
    );

    let path = crate::trace::find_loop(&grid);
    assert_eq!(path.len(), 14);
    assert_eq!(count_interior(&grid, &path), 0);
}
