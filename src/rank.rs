use crate::constants::*;
use std::fmt;

#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash)]
pub enum Rank {
    _1,
    _2,
    _3,
    _4,
    _5,
    _6,
    _7,
    _8,
}

impl Rank {
    pub fn index(&self) -> u8 {
        use Rank::*;
        match self {
            _1 => 0,
            _2 => 1,
            _3 => 2,
            _4 => 3,
            _5 => 4,
            _6 => 5,
            _7 => 6,
            _8 => 7,
        }
    }

    // rank of the square with index i, wrapping past the eighth rank
    pub fn from_index(i: usize) -> Self {
        RANKS[(i / N_FILES) % N_RANKS]
    }

    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10)
            .filter(|d| (1..=N_RANKS as u32).contains(d))
            .map(|d| RANKS[d as usize - 1])
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format!("{:?}", self).trim_start_matches("_"))
    }
}

pub const RANKS: [Rank; 8] = [
    Rank::_1,
    Rank::_2,
    Rank::_3,
    Rank::_4,
    Rank::_5,
    Rank::_6,
    Rank::_7,
    Rank::_8,
];

#[test]
fn test_rank_from_index() {
    assert_eq!(Rank::from_index(0), Rank::_1);
    assert_eq!(Rank::from_index(7), Rank::_1);
    assert_eq!(Rank::from_index(8), Rank::_2);
    assert_eq!(Rank::from_index(63), Rank::_8);
}

#[test]
fn test_rank_from_char() {
    assert_eq!(Rank::from_char('1'), Some(Rank::_1));
    assert_eq!(Rank::from_char('8'), Some(Rank::_8));
    assert_eq!(Rank::from_char('0'), None);
    assert_eq!(Rank::from_char('9'), None);
    assert_eq!(Rank::from_char('x'), None);
    assert_eq!(Rank::_7.to_string(), "7");
}
