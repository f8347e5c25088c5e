use crate::error::{MaskError, Result};
use crate::file::*;
use crate::rank::*;
use crate::square::*;
use log::{debug, error};

use nom::{
    branch::alt,
    character::complete::{char, digit1, multispace0, multispace1, one_of},
    combinator::{all_consuming, map, map_opt, opt, recognize},
    multi::separated_list0,
    sequence::{delimited, pair},
    Finish, IResult,
};

/*
 * Parse a list of squares such as "[a7, b7, c7]", "f1 g1" or "5,6".
 *
 * Names are turned into their index, numbers are kept as-is (including
 * negative and out of range ones) so the builder can reject them.
 */
pub fn parse_square_list(input: &str) -> Result<Vec<i64>> {
    debug!("Parsing square list: {}", input);

    all_consuming(square_list_parser)(input)
        .finish()
        .map(|(_, squares)| squares)
        .map_err(|e| {
            error!("{:?}", e);
            MaskError::ParseError(format!("Could not parse square list '{}': {}", input, e))
        })
}

pub fn parse_square(input: &str) -> Result<Square> {
    all_consuming(square_parser)(input)
        .finish()
        .map(|(_, s)| s)
        .map_err(|e| MaskError::ParseError(format!("Could not parse square '{}': {}", input, e)))
}

fn square_list_parser(input: &str) -> IResult<&str, Vec<i64>> {
    let (input, _) = multispace0(input)?;
    let (input, open) = opt(char('['))(input)?;

    let (input, squares) = separated_list0(separator, token)(input)?;

    let (input, _) = multispace0(input)?;
    let (input, _) = match open {
        Some(_) => map(char(']'), |_| ())(input)?,
        None => (input, ()),
    };
    let (input, _) = multispace0(input)?;

    Ok((input, squares))
}

// commas and/or whitespace between tokens
fn separator(input: &str) -> IResult<&str, ()> {
    alt((
        map(delimited(multispace0, char(','), multispace0), |_| ()),
        map(multispace1, |_| ()),
    ))(input)
}

fn token(input: &str) -> IResult<&str, i64> {
    let (input, _) = multispace0(input)?;
    alt((map(square_parser, |s| s.index() as i64), index_parser))(input)
}

// numbers too large for i64 saturate, so they still fail as InvalidSquare
fn index_parser(input: &str) -> IResult<&str, i64> {
    map(recognize(pair(opt(char('-')), digit1)), |s: &str| {
        s.parse::<i64>().unwrap_or(if s.starts_with('-') {
            i64::MIN
        } else {
            i64::MAX
        })
    })(input)
}

fn square_parser(input: &str) -> IResult<&str, Square> {
    map_opt(
        pair(one_of("abcdefghABCDEFGH"), one_of("12345678")),
        |(f, r)| Some(Square::new(File::from_char(f)?, Rank::from_char(r)?)),
    )(input)
}

#[cfg(test)]
fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_parse_names() {
    init();
    assert_eq!(parse_square_list("f1 g1").unwrap(), vec![5, 6]);
    assert_eq!(parse_square_list("B8,C8,D8").unwrap(), vec![57, 58, 59]);
    assert_eq!(
        parse_square_list("[a7, b7, c7, d7, e7, f7, g7, h7]").unwrap(),
        (48..56).collect::<Vec<i64>>()
    );
}

#[test]
fn test_parse_indices() {
    init();
    assert_eq!(parse_square_list("0, 8, 16").unwrap(), vec![0, 8, 16]);
    assert_eq!(parse_square_list("  63  ").unwrap(), vec![63]);
    assert_eq!(parse_square_list("5 , g1").unwrap(), vec![5, 6]);
}

#[test]
fn test_parse_keeps_out_of_range_values() {
    init();
    assert_eq!(parse_square_list("64 -1").unwrap(), vec![64, -1]);
}

#[test]
fn test_parse_saturates_huge_numbers() {
    init();
    assert_eq!(
        parse_square_list("5 99999999999999999999 -99999999999999999999").unwrap(),
        vec![5, i64::MAX, i64::MIN]
    );
}

#[test]
fn test_parse_empty() {
    init();
    assert_eq!(parse_square_list("").unwrap(), Vec::<i64>::new());
    assert_eq!(parse_square_list("[]").unwrap(), Vec::<i64>::new());
    assert_eq!(parse_square_list("[ ]").unwrap(), Vec::<i64>::new());
}

#[test]
fn test_parse_errors() {
    init();
    assert!(matches!(
        parse_square_list("i9"),
        Err(MaskError::ParseError(_))
    ));
    assert!(parse_square_list("[a1, b1").is_err());
    assert!(parse_square_list("a1 ?").is_err());
}

#[test]
fn test_parse_square() {
    assert_eq!(parse_square("e4").unwrap(), E4);
    assert!(parse_square("e").is_err());
    assert!(parse_square("e44").is_err());
}
