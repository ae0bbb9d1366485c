use crate::search::{board::Tile, Board};
use smallvec::SmallVec;

/// The [`PackedBoard`] struct is a canonical, compact encoding of a board,
/// used as the key for duplicate detection in the search space.
///
/// The tiles are read as digits in base N². Consecutive digits are packed into
/// a `u64` word for as long as the word cannot overflow, after which a new
/// word is started. A 3×3 board fits into a single word, a 4×4 board into
/// two.
#[derive(Debug, Hash, PartialEq, Eq, Clone)]
pub struct PackedBoard {
    words: SmallVec<[u64; 2]>,
}

impl PackedBoard {
    pub fn words(&self) -> &[u64] {
        &self.words
    }
}

/// The [`BoardPacker`] struct is used to pack and unpack boards of one side
/// length.
///
/// For every board position it stores the word the digit lands in and the
/// multiplier of the digit within that word.
#[derive(Debug, Clone)]
pub struct BoardPacker {
    side: usize,
    base: u64,
    num_words: usize,
    layout: Vec<(usize, u64)>,
}

impl BoardPacker {
    pub fn new(side: usize) -> Self {
        let cells = side * side;
        let base = cells as u64;
        let mut layout = Vec::with_capacity(cells);

        let mut word = 0;
        let mut multiplier: u64 = 1;
        for _ in 0..cells {
            match multiplier.checked_mul(base) {
                Some(next) => {
                    layout.push((word, multiplier));
                    multiplier = next;
                }
                None => {
                    word += 1;
                    layout.push((word, 1));
                    multiplier = base;
                }
            }
        }

        Self {
            side,
            base,
            num_words: word + 1,
            layout,
        }
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn num_words(&self) -> usize {
        self.num_words
    }

    pub fn pack(&self, board: &Board) -> PackedBoard {
        debug_assert_eq!(board.side(), self.side, "Board has the wrong side");
        let mut words: SmallVec<[u64; 2]> = SmallVec::from_elem(0, self.num_words);
        for (&tile, &(word, multiplier)) in board.tiles().iter().zip(self.layout.iter()) {
            words[word] += multiplier * tile as u64;
        }
        PackedBoard { words }
    }

    pub fn unpack(&self, packed: &PackedBoard) -> Board {
        let tiles = self
            .layout
            .iter()
            .map(|&(word, multiplier)| ((packed.words[word] / multiplier) % self.base) as Tile)
            .collect();
        // Only boards produced by `pack` are unpacked, so they are valid.
        Board::new(tiles).expect("Packed board does not describe a valid board")
    }
}
