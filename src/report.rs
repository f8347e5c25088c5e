use crate::bitboard::Bitboard;
use crate::square::Square;

/*
 * Two line summary of a mask and the squares it was built from:
 *
 *   Generating bitboard for squares : [f1, g1]
 *   The answer is 0x60
 */
pub fn describe(squares: &[Square], mask: Bitboard, padded: bool) -> String {
    let names: Vec<String> = squares.iter().map(|s| s.to_string()).collect();
    render(&names, mask, padded)
}

// Raw index input, shown as numbers
pub fn describe_indices(squares: &[i64], mask: Bitboard, padded: bool) -> String {
    let names: Vec<String> = squares.iter().map(|i| i.to_string()).collect();
    render(&names, mask, padded)
}

fn render(names: &[String], mask: Bitboard, padded: bool) -> String {
    format!(
        "Generating bitboard for squares : [{}]\nThe answer is {}",
        names.join(", "),
        mask.to_hex(padded)
    )
}

#[test]
fn test_describe_castle() {
    use crate::square::*;

    let squares = [F1, G1];
    let mask = Bitboard::set_all(&squares);

    assert_eq!(
        describe(&squares, mask, false),
        "Generating bitboard for squares : [f1, g1]\nThe answer is 0x60"
    );
    assert_eq!(
        describe(&squares, mask, true),
        "Generating bitboard for squares : [f1, g1]\nThe answer is 0x0000000000000060"
    );
}

#[test]
fn test_describe_indices() {
    assert_eq!(
        describe_indices(&[], Bitboard::empty(), false),
        "Generating bitboard for squares : []\nThe answer is 0x0"
    );
    assert_eq!(
        describe_indices(&[0, 8], Bitboard::from_bits(0x101), false),
        "Generating bitboard for squares : [0, 8]\nThe answer is 0x101"
    );
}
