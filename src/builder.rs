use crate::bitboard::Bitboard;
use crate::error::Result;
use crate::square::Square;
use log::trace;

/*
 * Build a bitmask with bit i set iff square index i appears in `squares`.
 *
 * Every value is validated before any bit is set, so an out of range value
 * yields InvalidSquare and never a partial mask. Order and duplicates do not
 * affect the result.
 */
pub fn build(squares: &[i64]) -> Result<Bitboard> {
    let validated = squares
        .iter()
        .map(|&i| Square::try_from_index(i))
        .collect::<Result<Vec<Square>>>()?;

    let mask = build_squares(&validated);
    trace!("Built {:#x} from {:?}", mask, squares);

    Ok(mask)
}

pub fn build_squares(squares: &[Square]) -> Bitboard {
    squares
        .iter()
        .fold(0u64, |acc, square| acc | 1 << square.index())
        .into()
}

#[cfg(test)]
use crate::error::MaskError;
#[cfg(test)]
use crate::square::*;
#[cfg(test)]
use itertools::Itertools;

#[cfg(test)]
fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_build_empty() {
    init();
    assert_eq!(build(&[]).unwrap().bits(), 0);
}

#[test]
fn test_build_corners() {
    init();
    assert_eq!(build(&[0]).unwrap().bits(), 1);
    assert_eq!(build(&[63]).unwrap().bits(), 0x8000000000000000);
}

#[test]
fn test_build_named_scenarios() {
    init();
    let rank_1: Vec<i64> = (0..8).collect();
    let a_file: Vec<i64> = (0..8).map(|r| r * 8).collect();

    assert_eq!(build(&rank_1).unwrap().bits(), 0x00000000000000FF);
    assert_eq!(build(&a_file).unwrap().bits(), 0x0101010101010101);
    assert_eq!(build(&[5, 6]).unwrap().bits(), 0x0000000000000060);
}

#[test]
fn test_build_rejects_out_of_range() {
    init();
    assert_eq!(build(&[64]), Err(MaskError::InvalidSquare(64)));
    assert_eq!(build(&[-1]), Err(MaskError::InvalidSquare(-1)));

    // first offending value is reported, valid ones before it are discarded
    assert_eq!(build(&[5, 6, 99, -3]), Err(MaskError::InvalidSquare(99)));
}

#[test]
fn test_popcnt_counts_distinct_squares() {
    init();
    let lists: Vec<Vec<i64>> = vec![
        vec![],
        vec![12],
        vec![12, 12, 12],
        vec![0, 63, 0, 63, 31],
        vec![5, 6, 1, 2, 3, 5, 6],
        (0..64).collect(),
        (0..64).rev().chain(0..64).collect(),
    ];

    for list in lists {
        let distinct = list.iter().unique().count() as u32;
        assert_eq!(build(&list).unwrap().popcnt(), distinct, "{:?}", list);
    }
}

#[test]
fn test_order_independence() {
    init();
    let list = vec![61, 0, 7, 7, 33];
    let expected = build(&list).unwrap();

    for permutation in list.iter().cloned().permutations(list.len()) {
        assert_eq!(build(&permutation).unwrap(), expected);
    }
}

#[test]
fn test_idempotent_under_duplication() {
    init();
    let list = vec![1, 9, 17, 25, 58];
    let doubled: Vec<i64> = list.iter().chain(list.iter()).cloned().collect();

    assert_eq!(build(&list).unwrap(), build(&doubled).unwrap());
}

#[test]
fn test_build_squares_matches_set_all() {
    let squares = [B1, C1, D1, B8, C8, D8];

    assert_eq!(build_squares(&squares), Bitboard::set_all(&squares));
    assert_eq!(build_squares(&squares).bits(), 0x0e0000000000000e);
}
