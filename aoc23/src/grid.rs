use std::{
    fmt,
    ops::{Index, IndexMut},
};

use crate::error::ParseGridError;

/// A `(row, col)` position. Signed, so that neighbor offsets can step off the
/// grid before being bounds-checked.
pub type Pos = (i64, i64);

/// Fixed-size, dense, row-major 2D storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Default + Clone> Grid<T> {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![T::default(); rows * cols],
        }
    }
}

impl<T> Grid<T> {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn indices(&self) -> impl Iterator<Item = (usize, usize)> + Clone {
        let cols = self.cols;
        (0..self.rows).flat_map(move |r| (0..cols).map(move |c| (r, c)))
    }

    pub fn contains(&self, (r, c): Pos) -> bool {
        r >= 0 && c >= 0 && (r as usize) < self.rows && (c as usize) < self.cols
    }

    fn offset(&self, pos: Pos) -> Option<usize> {
        self.contains(pos)
            .then(|| pos.0 as usize * self.cols + pos.1 as usize)
    }

    pub fn get(&self, pos: Pos) -> Option<&T> {
        self.offset(pos).map(|i| &self.data[i])
    }

    pub fn get_mut(&mut self, pos: Pos) -> Option<&mut T> {
        self.offset(pos).map(|i| &mut self.data[i])
    }

    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(f).collect(),
        }
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (r, c): (usize, usize)) -> &T {
        debug_assert!(r < self.rows && c < self.cols, "({r}, {c}) out of bounds");
        &self.data[r * self.cols + c]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut T {
        debug_assert!(r < self.rows && c < self.cols, "({r}, {c}) out of bounds");
        &mut self.data[r * self.cols + c]
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks(self.cols.max(1)) {
            for cell in row {
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Reads a block of equal-length lines into a grid, converting every character
/// with `f`, left-to-right, top-to-bottom.
///
/// Trailing line endings are ignored. Ragged rows and characters that `f`
/// rejects are errors.
pub fn parse_grid<T>(
    text: &str,
    mut f: impl FnMut(char) -> Option<T>,
) -> Result<Grid<T>, ParseGridError> {
    let text = text.trim_end_matches(['\n', '\r']);
    if text.is_empty() {
        return Err(ParseGridError::Empty);
    }

    let lines = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect::<Vec<_>>();

    let cols = lines[0].chars().count();
    if cols == 0 {
        return Err(ParseGridError::EmptyRow);
    }

    let mut data = Vec::with_capacity(lines.len() * cols);

    for (row, line) in lines.iter().enumerate() {
        let found = line.chars().count();
        if found != cols {
            return Err(ParseGridError::Ragged {
                row,
                expected: cols,
                found,
            });
        }

        for (col, ch) in line.chars().enumerate() {
            data.push(f(ch).ok_or(ParseGridError::InvalidChar { ch, row, col })?);
        }
    }

    log::debug!("parsed {}x{} grid", lines.len(), cols);

    Ok(Grid {
        rows: lines.len(),
        cols,
        data,
    })
}

#[test]
fn test_parse() {
    let grid = parse_grid("ab\ncd\nef\n", Some).unwrap();

    assert_eq!(grid.rows(), 3);
    assert_eq!(grid.cols(), 2);
    assert_eq!(grid[(0, 1)], 'b');
    assert_eq!(grid[(2, 0)], 'e');
    assert_eq!(grid.data(), &['a', 'b', 'c', 'd', 'e', 'f']);
    assert_eq!(grid.to_string(), "ab\ncd\nef\n");
}

#[test]
fn test_parse_crlf() {
    let grid = parse_grid("ab\r\ncd\r\n", Some).unwrap();
    assert_eq!((grid.rows(), grid.cols()), (2, 2));
    assert_eq!(grid[(1, 1)], 'd');
}

#[test]
fn test_parse_errors() {
    assert_eq!(parse_grid("", Some), Err(ParseGridError::Empty));
    assert_eq!(parse_grid("\n\n", Some), Err(ParseGridError::Empty));
    assert_eq!(parse_grid("\nab", Some), Err(ParseGridError::EmptyRow));
    assert_eq!(
        parse_grid("abc\nab\nabc", Some),
        Err(ParseGridError::Ragged {
            row: 1,
            expected: 3,
            found: 2
        })
    );
    assert_eq!(
        parse_grid("abc\nabcd", Some),
        Err(ParseGridError::Ragged {
            row: 1,
            expected: 3,
            found: 4
        })
    );
    assert_eq!(
        parse_grid("ab\ncx", |c| (c != 'x').then_some(c)),
        Err(ParseGridError::InvalidChar {
            ch: 'x',
            row: 1,
            col: 1
        })
    );
}

#[test]
fn test_indices() {
    let grid: Grid<u8> = Grid::new(2, 3);
    let indices = grid.indices();

    let expected = vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)];
    assert_eq!(indices.clone().collect::<Vec<_>>(), expected);
    assert_eq!(indices.collect::<Vec<_>>(), expected);
    assert_eq!(grid.indices().count(), 6);
}

#[test]
fn test_access() {
    let mut grid: Grid<i32> = Grid::new(2, 2);
    grid[(1, 0)] = 5;
    *grid.get_mut((0, 1)).unwrap() = 7;

    assert_eq!(grid.get((1, 0)), Some(&5));
    assert_eq!(grid.get((0, 1)), Some(&7));
    assert_eq!(grid.get((-1, 0)), None);
    assert_eq!(grid.get((0, 2)), None);
    assert_eq!(grid.get_mut((2, 0)), None);
    assert_eq!(grid.get_mut((0, -1)), None);
    assert_eq!(grid.get((1, 1)), Some(&0));
    assert!(grid.contains((1, 1)));
    assert!(!grid.contains((1, -1)));

    let doubled = grid.map(|n| n * 2);
    assert_eq!(doubled.data(), &[0, 14, 10, 0]);
}
