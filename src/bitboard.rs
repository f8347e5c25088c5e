use crate::file::*;
use crate::rank::*;
use crate::square::*;
use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use lazy_static::lazy_static;

lazy_static! {
    pub static ref RANK_MASKS: [Bitboard; 8] = rank_masks();
    pub static ref FILE_MASKS: [Bitboard; 8] = file_masks();
}

// Every square of each rank, a-file first
fn rank_masks() -> [Bitboard; 8] {
    let mut masks = [Bitboard::empty(); 8];

    for rank in RANKS.iter() {
        for file in FILES.iter() {
            let i = rank.index() as usize;
            masks[i] = masks[i].set(Square::new(*file, *rank));
        }
    }

    masks
}

fn file_masks() -> [Bitboard; 8] {
    let mut masks = [Bitboard::empty(); 8];

    for file in FILES.iter() {
        for rank in RANKS.iter() {
            let i = file.index() as usize;
            masks[i] = masks[i].set(Square::new(*file, *rank));
        }
    }

    masks
}

pub const A_FILE: Bitboard = Bitboard(0x0101010101010101);
pub const B_FILE: Bitboard = Bitboard(0x0202020202020202);
pub const C_FILE: Bitboard = Bitboard(0x0404040404040404);
pub const D_FILE: Bitboard = Bitboard(0x0808080808080808);
pub const E_FILE: Bitboard = Bitboard(0x1010101010101010);
pub const F_FILE: Bitboard = Bitboard(0x2020202020202020);
pub const G_FILE: Bitboard = Bitboard(0x4040404040404040);
pub const H_FILE: Bitboard = Bitboard(0x8080808080808080);

pub fn bitboard_for_file(file: File) -> Bitboard {
    FILE_MASKS[file.index() as usize]
}

pub const RANK_1: Bitboard = Bitboard(0x00000000000000ff);
pub const RANK_2: Bitboard = Bitboard(0x000000000000ff00);
pub const RANK_7: Bitboard = Bitboard(0x00ff000000000000);
pub const RANK_8: Bitboard = Bitboard(0xff00000000000000);

pub fn bitboard_for_rank(rank: Rank) -> Bitboard {
    RANK_MASKS[rank.index() as usize]
}

#[macro_export]
macro_rules! bitboard {
    ( $( $square:expr ),* ) => {
        $crate::bitboard::Bitboard::empty()
            $(
                .set($square)
            )*
    };
}

/*
 * A set of squares packed into a u64, bit i standing for the square with index i.
 */
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Bitboard(u64);

impl Bitboard {
    pub const fn empty() -> Self {
        Bitboard(0x0)
    }

    pub const fn full() -> Self {
        Self(u64::MAX)
    }

    pub const fn from_bits(bits: u64) -> Self {
        Bitboard(bits)
    }

    pub fn bits(&self) -> u64 {
        self.0
    }

    pub fn set(&self, square: Square) -> Self {
        Bitboard(self.0 | 1 << square.index())
    }

    pub fn clear(&self, square: Square) -> Self {
        Bitboard(self.0 & !(1 << square.index()))
    }

    pub fn contains(&self, square: Square) -> bool {
        self.0 & (1 << square.index()) != 0
    }

    pub fn set_all(squares: &[Square]) -> Self {
        squares
            .iter()
            .fold(Bitboard::empty(), |board, square| board.set(*square))
    }

    /*
     * Return all set squares in the bitboard
     */
    pub fn squares(&self) -> SquareIterator {
        SquareIterator::new(self)
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn popcnt(&self) -> u32 {
        self.0.count_ones()
    }

    /*
     * "0x" followed by lowercase hex digits, zero-padded to 16 digits if requested.
     */
    pub fn to_hex(&self, padded: bool) -> String {
        if padded {
            format!("{:#018x}", self.0)
        } else {
            format!("{:#x}", self.0)
        }
    }
}

pub struct SquareIterator {
    bitboard: Bitboard,
}

impl SquareIterator {
    fn new(bitboard: &Bitboard) -> Self {
        SquareIterator {
            bitboard: *bitboard,
        }
    }
}

impl Iterator for SquareIterator {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bitboard.is_empty() {
            None
        } else {
            let trailing_zeros = self.bitboard.0.trailing_zeros() as i64;
            self.bitboard.0 &= self.bitboard.0 - 1;
            Square::try_from_index(trailing_zeros).ok()
        }
    }
}

impl From<u64> for Bitboard {
    fn from(bits: u64) -> Self {
        Bitboard(bits)
    }
}

impl From<Bitboard> for u64 {
    fn from(b: Bitboard) -> Self {
        b.0
    }
}

impl BitAnd for Bitboard {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for Bitboard {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitOr for Bitboard {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Bitboard {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl Not for Bitboard {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self(!self.0)
    }
}

impl BitXor for Bitboard {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self::Output {
        Self(self.0 ^ rhs.0)
    }
}

impl BitXorAssign for Bitboard {
    fn bitxor_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

impl fmt::LowerHex for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f) // delegate to u64's implementation
    }
}

impl fmt::UpperHex for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

impl fmt::Display for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in RANKS.iter().rev() {
            for file in FILES.iter() {
                let symbol = if self.contains(Square::new(*file, *rank)) {
                    '1'
                } else {
                    '.'
                };
                write!(f, "{} ", symbol)?;
            }
            writeln!(f)?;
        }

        fmt::Result::Ok(())
    }
}

#[test]
fn test_square() {
    let b = Bitboard::set_all(&[D2, H4, A6]);
    assert_eq!(b.squares().collect::<Vec<Square>>(), vec![D2, H4, A6]);
}

#[test]
fn test_print() {
    let board = bitboard![G1, G2, G3, G4, G5, G6, G7, G8];
    let rendered = board.to_string();
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines.len(), 8);
    assert!(lines.iter().all(|l| *l == ". . . . . . 1 . "));
}

#[test]
fn test_print_orientation() {
    let rendered = bitboard![A8, H1].to_string();
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines[0], "1 . . . . . . . ");
    assert_eq!(lines[7], ". . . . . . . 1 ");
}

#[test]
fn test_bitboard_squares_no_panic_when_h8_is_set() {
    let squares = vec![F8, H8];
    let bitboard = Bitboard::set_all(&squares);
    assert_eq!(squares, bitboard.squares().collect::<Vec<Square>>());
}

#[test]
fn test_hex_formatting() {
    let castle = bitboard![F1, G1];

    assert_eq!(format!("{:#x}", castle), "0x60");
    assert_eq!(format!("{:X}", castle), "60");
    assert_eq!(castle.to_hex(false), "0x60");
    assert_eq!(castle.to_hex(true), "0x0000000000000060");
    assert_eq!(bitboard![H8].to_hex(true), "0x8000000000000000");
    assert_eq!(Bitboard::empty().to_hex(false), "0x0");
}

#[test]
fn test_set_clear_contains() {
    let b = bitboard![C3, E5];

    assert!(b.contains(C3));
    assert!(!b.contains(D4));
    assert_eq!(b.clear(C3), bitboard![E5]);
    assert_eq!(b.clear(D4), b);
    assert_eq!(b.popcnt(), 2);
}

#[test]
fn test_operators() {
    assert_eq!(RANK_1 & A_FILE, bitboard![A1]);
    assert_eq!(RANK_1 | RANK_8, Bitboard::from_bits(0xff000000000000ff));
    assert_eq!(RANK_1 ^ bitboard![A1], Bitboard::from_bits(0xfe));
    assert_eq!(!Bitboard::empty(), Bitboard::full());
}

#[test]
fn test_bitboard_for_file() {
    assert_eq!(bitboard_for_file(File::A), A_FILE);
    assert_eq!(bitboard_for_file(File::C), C_FILE);
    assert_eq!(bitboard_for_file(File::H), H_FILE);
}

#[test]
fn test_generated_masks_match_constants() {
    assert_eq!(
        *FILE_MASKS,
        [A_FILE, B_FILE, C_FILE, D_FILE, E_FILE, F_FILE, G_FILE, H_FILE]
    );

    assert_eq!(bitboard_for_rank(Rank::_1), RANK_1);
    assert_eq!(bitboard_for_rank(Rank::_2), RANK_2);
    assert_eq!(bitboard_for_rank(Rank::_7), RANK_7);
    assert_eq!(bitboard_for_rank(Rank::_8), RANK_8);

    for (i, mask) in RANK_MASKS.iter().enumerate() {
        assert_eq!(mask.bits(), 0xff << (8 * i));
    }
}
