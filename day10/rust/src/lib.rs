use aoc23::{parse_grid, Grid, ParseGridError, Pos};
use thiserror::Error;

pub mod area;
pub mod field;
pub mod trace;

use field::Field;

#[derive(Debug, Error)]
pub enum Day10Error {
    #[error("malformed input: {0}")]
    Parse(#[from] ParseGridError),

    #[error("there is no start cell")]
    NoStart,

    #[error("no loop runs through the start cell")]
    NoLoop,
}

pub fn parse(input: &str) -> Result<Grid<Field>, ParseGridError> {
    parse_grid(input, Field::from_char)
}

pub fn pipe_loop(grid: &Grid<Field>) -> Result<Vec<Pos>, Day10Error> {
    let mut tracer = trace::LoopTracer::new(grid);
    if tracer.find_start().is_none() {
        return Err(Day10Error::NoStart);
    }

    let path = tracer.trace();
    if path.is_empty() {
        return Err(Day10Error::NoLoop);
    }

    Ok(path)
}

pub fn farthest(path: &[Pos]) -> usize {
    path.len() / 2
}

/// Farthest distance from the start along the loop, and the number of cells
/// the loop encloses.
pub fn solve(input: &str) -> Result<(usize, usize), Day10Error> {
    let grid = parse(input)?;
    let path = pipe_loop(&grid)?;

    Ok((farthest(&path), area::count_interior(&grid, &path)))
}

#[test]
fn test_errors() {
    assert!(matches!(solve(""), Err(Day10Error::Parse(ParseGridError::Empty))));
    assert!(matches!(
        solve("S-7\n|.x"),
        Err(Day10Error::Parse(ParseGridError::InvalidChar { ch: 'x', .. }))
    ));
    assert!(matches!(solve("F7\nLJ"), Err(Day10Error::NoStart)));
    assert!(matches!(solve("S-7\n..|"), Err(Day10Error::NoLoop)));
    assert_eq!(
        solve("F7\nLJJ").unwrap_err().to_string(),
        "malformed input: row 1 has 3 columns, expected 2"
    );
}
