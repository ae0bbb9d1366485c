//! A [`Board`] is an N×N grid of distinct tile labels in `[0, N²)`, where the
//! label `0` is the blank. Boards are immutable, successors are created by
//! copying a board and swapping the blank with one of its neighbours (see
//! [`crate::search::moves`]).

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub type Tile = u16;

/// The label of the blank cell.
pub const BLANK: Tile = 0;

/// Largest number of cells a board may have, every label must fit in a
/// [`Tile`].
pub const MAX_CELLS: usize = Tile::MAX as usize + 1;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board has no tiles")]
    Empty,
    #[error("board has {len} tiles, which is not a perfect square")]
    NotSquare { len: usize },
    #[error("board has {len} tiles, at most {} are supported", MAX_CELLS)]
    TooLarge { len: usize },
    #[error("board has no blank tile")]
    MissingBlank,
    #[error("board has {count} blank tiles, expected exactly one")]
    MultipleBlanks { count: usize },
    #[error("tile {tile} is out of range for a {side}x{side} board")]
    OutOfRange { tile: Tile, side: usize },
    #[error("tile {tile} appears more than once")]
    Duplicate { tile: Tile },
    #[error("board is {found}x{found}, expected {expected}x{expected}")]
    SideMismatch { expected: usize, found: usize },
    #[error("could not parse {token:?} as a tile")]
    Parse { token: String },
}

/// Returns the position of the blank, failing if there is not exactly one.
pub fn blank_index(tiles: &[Tile]) -> Result<usize, BoardError> {
    let mut blanks = tiles.iter().positions(|&tile| tile == BLANK);
    match (blanks.next(), blanks.count()) {
        (None, _) => Err(BoardError::MissingBlank),
        (Some(position), 0) => Ok(position),
        (Some(_), others) => Err(BoardError::MultipleBlanks { count: others + 1 }),
    }
}

/// Returns true iff the tiles form a permutation of `[0, N²)` for some N.
pub fn is_valid(tiles: &[Tile]) -> bool {
    validate(tiles).is_ok()
}

/// Checks that `tiles` describe a square board, returning its side length.
fn validate(tiles: &[Tile]) -> Result<usize, BoardError> {
    let len = tiles.len();
    if len == 0 {
        return Err(BoardError::Empty);
    }
    if len > MAX_CELLS {
        return Err(BoardError::TooLarge { len });
    }
    let side = integer_sqrt(len).ok_or(BoardError::NotSquare { len })?;

    blank_index(tiles)?;
    let mut seen = vec![false; len];
    for &tile in tiles {
        let index = tile as usize;
        if index >= len {
            return Err(BoardError::OutOfRange { tile, side });
        }
        if seen[index] {
            return Err(BoardError::Duplicate { tile });
        }
        seen[index] = true;
    }
    Ok(side)
}

fn integer_sqrt(n: usize) -> Option<usize> {
    let mut side = (n as f64).sqrt() as usize;
    // Guard against rounding in the float square root.
    while side * side > n {
        side -= 1;
    }
    while (side + 1) * (side + 1) <= n {
        side += 1;
    }
    (side * side == n).then_some(side)
}

/// A valid N×N sliding-tile board. The blank position is cached since it is
/// needed on every expansion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Tile>", into = "Vec<Tile>")]
pub struct Board {
    side: usize,
    blank: usize,
    tiles: Box<[Tile]>,
}

impl Board {
    pub fn new(tiles: Vec<Tile>) -> Result<Self, BoardError> {
        let side = validate(&tiles)?;
        let blank = blank_index(&tiles)?;
        Ok(Self {
            side,
            blank,
            tiles: tiles.into_boxed_slice(),
        })
    }

    /// The conventional goal board `1, 2, ..., N²-1` followed by the blank.
    pub fn goal(side: usize) -> Result<Self, BoardError> {
        // A square that overflows is reported as the largest possible size.
        let cells = side
            .checked_mul(side)
            .ok_or(BoardError::TooLarge { len: usize::MAX })?;
        if cells == 0 {
            return Err(BoardError::Empty);
        }
        if cells > MAX_CELLS {
            return Err(BoardError::TooLarge { len: cells });
        }
        let tiles = (1..cells)
            .map(|tile| tile as Tile)
            .chain(std::iter::once(BLANK))
            .collect();
        Self::new(tiles)
    }

    /// Builds the board obtained by swapping the blank with the tile at
    /// `position`. The caller guarantees `position` is adjacent to the blank.
    pub(crate) fn swap_blank(&self, position: usize) -> Self {
        let mut tiles = self.tiles.clone();
        tiles.swap(self.blank, position);
        Self {
            side: self.side,
            blank: position,
            tiles,
        }
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn blank_index(&self) -> usize {
        self.blank
    }

    pub fn row_col(&self, position: usize) -> (usize, usize) {
        (position / self.side, position % self.side)
    }

    pub fn is_goal(&self, goal: &Board) -> bool {
        self.tiles == goal.tiles
    }

    /// Fails if `other` does not have the same side length as this board.
    pub fn check_same_side(&self, other: &Board) -> Result<(), BoardError> {
        if self.side != other.side {
            return Err(BoardError::SideMismatch {
                expected: self.side,
                found: other.side,
            });
        }
        Ok(())
    }
}

impl TryFrom<Vec<Tile>> for Board {
    type Error = BoardError;

    fn try_from(tiles: Vec<Tile>) -> Result<Self, Self::Error> {
        Self::new(tiles)
    }
}

impl From<Board> for Vec<Tile> {
    fn from(board: Board) -> Self {
        board.tiles.into_vec()
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses labels separated by commas and/or whitespace, e.g.
    /// `"7,2,4,5,0,6,8,3,1"` or `"7 2 4 / 5 0 6 / 8 3 1"`. Slashes may be used
    /// to separate rows and are otherwise ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tiles = s
            .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| {
                token.parse::<Tile>().map_err(|_| BoardError::Parse {
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(tiles)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.len() - 1).to_string().len();
        for (i, row) in self.tiles.chunks(self.side).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line = row
                .iter()
                .map(|&tile| {
                    if tile == BLANK {
                        format!("{:>width$}", ".")
                    } else {
                        format!("{:>width$}", tile)
                    }
                })
                .join(" ");
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}
