//! Move generation. A move slides the blank into one of its orthogonal
//! neighbours, and is named after the direction the blank travels.

use crate::search::Board;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

/// The direction the blank moves in. The declaration order is the order in
/// which successors are generated, and hence decides tie-breaking in the
/// search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    /// Position the blank moves to from `blank` on a board with the given
    /// side, or `None` if that would leave the board.
    fn target(&self, blank: usize, side: usize) -> Option<usize> {
        let (row, col) = (blank / side, blank % side);
        match self {
            Direction::Left => (col > 0).then(|| blank - 1),
            Direction::Right => (col + 1 < side).then(|| blank + 1),
            Direction::Up => (row > 0).then(|| blank - side),
            Direction::Down => (row + 1 < side).then(|| blank + side),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::iter()
            .find(|direction| direction.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown direction {:?}", s))
    }
}

impl Board {
    /// Returns the board after moving the blank in `direction`, if legal.
    pub fn apply(&self, direction: Direction) -> Option<Board> {
        direction
            .target(self.blank_index(), self.side())
            .map(|position| self.swap_blank(position))
    }

    /// Returns the single move that turns this board into `next`, if any.
    pub fn direction_to(&self, next: &Board) -> Option<Direction> {
        Direction::iter().find(|&direction| {
            self.apply(direction)
                .is_some_and(|candidate| candidate == *next)
        })
    }
}

/// All legal successors of `board`, in the fixed order left, right, up, down.
pub fn successors(board: &Board) -> SmallVec<[(Direction, Board); 4]> {
    Direction::iter()
        .filter_map(|direction| board.apply(direction).map(|next| (direction, next)))
        .collect()
}
