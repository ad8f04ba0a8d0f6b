use std::fmt;

use aoc23::Pos;

/// What a single cell of the pipe maze holds.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    #[default]
    Empty,
    Vertical,
    Horizontal,
    NorthEast,
    NorthWest,
    SouthWest,
    SouthEast,
    Start,
    /// Flood-fill marker, only used while classifying the area.
    Filled,
}

use Field::*;

pub const NORTH: Pos = (-1, 0);
pub const SOUTH: Pos = (1, 0);
pub const WEST: Pos = (0, -1);
pub const EAST: Pos = (0, 1);

const PIPES: [Field; 6] = [Vertical, Horizontal, NorthEast, NorthWest, SouthWest, SouthEast];

impl Field {
    pub fn from_char(c: char) -> Option<Self> {
        Some(match c {
            '|' => Vertical,
            '-' => Horizontal,
            'L' => NorthEast,
            'J' => NorthWest,
            '7' => SouthWest,
            'F' => SouthEast,
            '.' => Empty,
            'S' => Start,
            _ => return None,
        })
    }

    pub fn to_char(self) -> char {
        match self {
            Empty => '.',
            Vertical => '|',
            Horizontal => '-',
            NorthEast => 'L',
            NorthWest => 'J',
            SouthWest => '7',
            SouthEast => 'F',
            Start => 'S',
            Filled => 'O',
        }
    }

    /// Relative neighbors this cell connects to. The start's real shape is
    /// unknown, so it connects everywhere.
    pub fn offsets(self) -> &'static [Pos] {
        match self {
            Empty | Filled => &[],
            Vertical => &[NORTH, SOUTH],
            Horizontal => &[WEST, EAST],
            NorthEast => &[NORTH, EAST],
            NorthWest => &[NORTH, WEST],
            SouthWest => &[SOUTH, WEST],
            SouthEast => &[SOUTH, EAST],
            Start => &[SOUTH, NORTH, EAST, WEST],
        }
    }

    pub fn connects(self, offset: Pos) -> bool {
        self.offsets().contains(&offset)
    }

    /// The pipe connecting exactly the two given offsets, in either order.
    pub fn from_offsets(a: Pos, b: Pos) -> Option<Self> {
        PIPES
            .into_iter()
            .find(|pipe| a != b && pipe.connects(a) && pipe.connects(b))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[test]
fn test_chars() {
    for c in "|-LJ7F.S".chars() {
        assert_eq!(Field::from_char(c).map(Field::to_char), Some(c));
    }

    assert_eq!(Field::from_char('x'), None);
    assert_eq!(Field::from_char('O'), None);
}

#[test]
fn test_offsets() {
    assert!(NorthEast.connects(NORTH));
    assert!(NorthEast.connects(EAST));
    assert!(!NorthEast.connects(SOUTH));
    assert_eq!(Start.offsets().len(), 4);
    assert!(Empty.offsets().is_empty());

    for pipe in PIPES {
        let &[a, b] = pipe.offsets() else {
            panic!("{pipe:?} should connect two ways");
        };
        assert_eq!(Field::from_offsets(a, b), Some(pipe));
        assert_eq!(Field::from_offsets(b, a), Some(pipe));
    }

    assert_eq!(Field::from_offsets(NORTH, NORTH), None);
}
