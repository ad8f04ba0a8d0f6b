use aoc23::Pos;
use day10::{
    area::{count_interior, downsample, mask, upscale},
    farthest, parse, pipe_loop, solve,
    trace::LoopTracer,
};
use proptest::{collection::vec, prelude::*, sample::select};

/// A rectangular loop somewhere in the grid, surrounded and filled with
/// random pipes that aren't part of it.
#[derive(Debug, Clone)]
struct Maze {
    text: String,
    start: Pos,
    loop_len: usize,
    interior: usize,
    cells: usize,
}

fn build_maze(
    (rows, cols): (usize, usize),
    (r0, c0, r1, c1): (usize, usize, usize, usize),
    start: usize,
    clutter: Vec<char>,
) -> Maze {
    let mut chars = clutter.chunks(cols).map(<[char]>::to_vec).collect::<Vec<_>>();

    let mut ring = vec![];
    ring.extend((c0..=c1).map(|c| (r0, c)));
    ring.extend((r0 + 1..=r1).map(|r| (r, c1)));
    ring.extend((c0..c1).rev().map(|c| (r1, c)));
    ring.extend((r0 + 1..r1).rev().map(|r| (r, c0)));

    for &(r, c) in &ring {
        chars[r][c] = match (r, c) {
            _ if (r, c) == (r0, c0) => 'F',
            _ if (r, c) == (r0, c1) => '7',
            _ if (r, c) == (r1, c1) => 'J',
            _ if (r, c) == (r1, c0) => 'L',
            _ if r == r0 || r == r1 => '-',
            _ => '|',
        };
    }

    // the start only touches the loop, so nothing else can be mistaken for it
    let (sr, sc) = ring[start % ring.len()];
    chars[sr][sc] = 'S';
    for (dr, dc) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
        let (r, c) = (sr as i64 + dr, sc as i64 + dc);
        if r < 0 || c < 0 || r as usize >= rows || c as usize >= cols {
            continue;
        }
        let (r, c) = (r as usize, c as usize);
        if !ring.contains(&(r, c)) {
            chars[r][c] = '.';
        }
    }

    Maze {
        text: chars
            .iter()
            .map(|row| row.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n"),
        start: (sr as i64, sc as i64),
        loop_len: ring.len(),
        interior: (r1 - r0 - 1) * (c1 - c0 - 1),
        cells: rows * cols,
    }
}

fn maze() -> impl Strategy<Value = Maze> {
    (3usize..12, 3usize..12)
        .prop_flat_map(|(rows, cols)| {
            (
                Just((rows, cols)),
                0..rows - 1,
                0..cols - 1,
                any::<usize>(),
                vec(select(vec!['|', '-', 'L', 'J', '7', 'F', '.']), rows * cols),
            )
        })
        .prop_flat_map(|((rows, cols), r0, c0, start, clutter)| {
            (
                Just((rows, cols)),
                Just((r0, c0)),
                r0 + 1..rows,
                c0 + 1..cols,
                Just(start),
                Just(clutter),
            )
        })
        .prop_map(|(size, (r0, c0), r1, c1, start, clutter)| {
            build_maze(size, (r0, c0, r1, c1), start, clutter)
        })
}

proptest! {
    #[test]
    fn solves_rectangular_loops(maze in maze()) {
        prop_assert_eq!(solve(&maze.text).unwrap(), (maze.loop_len / 2, maze.interior));
    }

    #[test]
    fn loop_is_even_and_starts_at_start(maze in maze()) {
        let grid = parse(&maze.text).unwrap();
        let path = pipe_loop(&grid).unwrap();

        prop_assert_eq!(path.len(), maze.loop_len);
        prop_assert_eq!(path.len() % 2, 0);
        prop_assert_eq!(path[0], maze.start);
        prop_assert_eq!(farthest(&path) * 2, path.len());
    }

    #[test]
    fn trace_is_deterministic(maze in maze()) {
        let grid = parse(&maze.text).unwrap();
        let mut tracer = LoopTracer::new(&grid);
        let first = tracer.trace();

        prop_assert_eq!(tracer.trace(), first.clone());
        prop_assert_eq!(LoopTracer::new(&grid).trace(), first);
    }

    #[test]
    fn scaling_keeps_the_loop(maze in maze()) {
        let grid = parse(&maze.text).unwrap();
        let path = pipe_loop(&grid).unwrap();
        let masked = mask(&grid, &path);

        prop_assert_eq!(downsample(&upscale(&masked)), masked);
    }

    #[test]
    fn interior_is_bounded(maze in maze()) {
        let grid = parse(&maze.text).unwrap();
        let path = pipe_loop(&grid).unwrap();

        prop_assert!(count_interior(&grid, &path) <= maze.cells - path.len());
    }
}
