use day10::{area::count_interior, parse, pipe_loop, solve};

#[test]
fn square_loop() {
    assert_eq!(
        solve(
            "
.....
.S-7.
.|.|.
.L-J.
.....
"
            .trim()
        )
        .unwrap(),
        (4, 1)
    );

    // clutter all around it
    assert_eq!(
        solve(
            "
-L|F7
7S-7|
L|7||
-L-J|
L|-JF
"
            .trim()
        )
        .unwrap(),
        (4, 1)
    );
}

#[test]
fn complex_loop() {
    assert_eq!(
        solve(
            "
..F7.
.FJ|.
SJ.L7
|F--J
LJ...
"
            .trim()
        )
        .unwrap(),
        (8, 1)
    );

    assert_eq!(
        solve(
            "
7-F7-
.FJ|7
SJLL7
|F--J
LJ.LJ
"
            .trim()
        )
        .unwrap(),
        (8, 1)
    );
}

#[test]
fn enclosed_area() {
    assert_eq!(
        solve(
            "
...........
.S-------7.
.|F-----7|.
.||.....||.
.||.....||.
.|L-7.F-J|.
.|..|.|..|.
.L--J.L--J.
...........
"
            .trim(),
        )
        .unwrap(),
        (23, 4)
    );

    assert_eq!(
        solve(
            "
.F----7F7F7F7F-7....
.|F--7||||||||FJ....
.||.FJ||||||||L7....
FJL7L7LJLJ||LJ.L-7..
L--J.L7...LJS7F-7L7.
....F-J..F7FJ|L7L7L7
....L7.F7||L7|.L7L7|
.....|FJLJ|FJ|F7|.LJ
....FJL-7.||.||||...
....L---J.LJ.LJLJ...
"
            .trim(),
        )
        .unwrap(),
        (70, 8)
    );
}

#[test]
fn enclosed_area_with_clutter() {
    let grid = parse(
        "
FF7FSF7F7F7F7F7F---7
L|LJ||||||||||||F--J
FL-7LJLJ||||||LJL-77
F--JF--7||LJLJ7F7FJ-
L---JF-JLJ.||-FJLJJ7
|F|F-JF---7F7-L7L|7|
|FFJF7L7F-JF7|JL---7
7-L-JL7||F7|L7F-7F7|
L.L7LFJ|||||FJL7||LJ
L7JLJL-JLJLJL--JLJ.L
"
        .trim(),
    )
    .unwrap();

    let path = pipe_loop(&grid).unwrap();
    assert_eq!(path[0], (0, 4));
    assert_eq!(count_interior(&grid, &path), 10);
}

#[test]
fn trailing_newline() {
    assert_eq!(solve("S7\nLJ\n").unwrap(), (2, 0));
}
