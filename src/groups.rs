use crate::bitboard::Bitboard;
use crate::builder::build_squares;
use crate::error::{MaskError, Result};
use crate::square::*;

use lazy_static::lazy_static;

lazy_static! {
    static ref BUILTIN_GROUPS: Vec<SquareGroup> = vec![
        SquareGroup::new("rank7", "Rank 7", &[A7, B7, C7, D7, E7, F7, G7, H7]),
        SquareGroup::new("rank2", "Rank 2", &[A2, B2, C2, D2, E2, F2, G2, H2]),
        SquareGroup::new("rank1", "Rank 1", &[A1, B1, C1, D1, E1, F1, G1, H1]),
        SquareGroup::new("file1", "File 1", &[A1, A2, A3, A4, A5, A6, A7, A8]),
        SquareGroup::new("file8", "File 8", &[H1, H2, H3, H4, H5, H6, H7, H8]),
        SquareGroup::new("cast_wk", "cast wk", &[F1, G1]),
        SquareGroup::new("cast_wq", "cast wq", &[B1, C1, D1]),
        SquareGroup::new("cast_bk", "cast bk", &[F8, G8]),
        SquareGroup::new("cast_bq", "cast bq", &[B8, C8, D8]),
    ];
}

/*
 * A named list of squares whose mask is worth knowing, such as a rank or
 * the squares a king passes over when castling.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquareGroup {
    pub name: &'static str,
    pub label: &'static str,
    pub squares: Vec<Square>,
}

impl SquareGroup {
    pub fn new(name: &'static str, label: &'static str, squares: &[Square]) -> Self {
        SquareGroup {
            name,
            label,
            squares: squares.to_vec(),
        }
    }

    pub fn mask(&self) -> Bitboard {
        build_squares(&self.squares)
    }
}

pub fn builtin_groups() -> &'static [SquareGroup] {
    BUILTIN_GROUPS.as_slice()
}

pub fn find_group(name: &str) -> Result<&'static SquareGroup> {
    BUILTIN_GROUPS
        .iter()
        .find(|g| g.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| MaskError::UnknownGroup(name.to_string()))
}

/*
 * Generate a test checking the mask of a built-in group
 */
#[cfg(test)]
macro_rules! group_test {
    ( name=$name:ident, expected=$expected:literal ) => {
        paste::item! {
            #[test]
            fn [<test_group_ $name>]() {
                let group = find_group(stringify!($name)).unwrap();
                assert_eq!(group.mask().bits(), $expected);
            }
        }
    };
}

#[cfg(test)]
group_test!(name = rank7, expected = 0x00ff000000000000);
#[cfg(test)]
group_test!(name = rank2, expected = 0x000000000000ff00);
#[cfg(test)]
group_test!(name = rank1, expected = 0x00000000000000ff);
#[cfg(test)]
group_test!(name = file1, expected = 0x0101010101010101);
#[cfg(test)]
group_test!(name = file8, expected = 0x8080808080808080);
#[cfg(test)]
group_test!(name = cast_wk, expected = 0x0000000000000060);
#[cfg(test)]
group_test!(name = cast_wq, expected = 0x000000000000000e);
#[cfg(test)]
group_test!(name = cast_bk, expected = 0x6000000000000000);
#[cfg(test)]
group_test!(name = cast_bq, expected = 0x0e00000000000000);

#[test]
fn test_builtin_group_order() {
    let names: Vec<&str> = builtin_groups().iter().map(|g| g.name).collect();
    assert_eq!(
        names,
        vec!["rank7", "rank2", "rank1", "file1", "file8", "cast_wk", "cast_wq", "cast_bk", "cast_bq"]
    );
}

#[test]
fn test_groups_agree_with_precomputed_masks() {
    use crate::bitboard::*;

    assert_eq!(find_group("rank1").unwrap().mask(), RANK_1);
    assert_eq!(find_group("rank2").unwrap().mask(), RANK_2);
    assert_eq!(find_group("rank7").unwrap().mask(), RANK_7);
    assert_eq!(find_group("file1").unwrap().mask(), A_FILE);
    assert_eq!(find_group("file8").unwrap().mask(), H_FILE);
}

#[test]
fn test_find_group() {
    assert_eq!(find_group("CAST_WK").unwrap().squares, vec![F1, G1]);
    assert_eq!(
        find_group("rank9"),
        Err(MaskError::UnknownGroup(String::from("rank9")))
    );
}
