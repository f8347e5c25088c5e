use crate::builder::build;
use crate::error::Result;
use crate::groups::{builtin_groups, find_group, SquareGroup};
use crate::parse::parse_square_list;
use crate::report::{describe, describe_indices};
use log::info;

pub const USAGE: &str = "\
Usage: square-masks [--padded] [GROUP | SQUARES...]

With no arguments, print the mask of every built-in group.
GROUP is one of: rank7 rank2 rank1 file1 file8 cast_wk cast_wq cast_bk cast_bq
SQUARES are names or indices, e.g. `f1 g1` or `5,6`.

  --padded    zero-pad the hex value to 16 digits
  -h, --help  show this message";

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    AllGroups,
    Group(String),
    Squares(String),
}

#[derive(Debug, PartialEq, Eq)]
pub struct Invocation {
    pub command: Command,
    pub padded: bool,
}

/*
 * Interpret command line arguments (without the program name).
 */
pub fn parse_args<I, S>(args: I) -> Invocation
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut padded = false;
    let mut rest: Vec<String> = Vec::new();

    for arg in args {
        match arg.as_ref() {
            "--padded" => padded = true,
            "-h" | "--help" => {
                return Invocation {
                    command: Command::Help,
                    padded,
                }
            }
            other => rest.push(other.to_string()),
        }
    }

    let command = match rest.as_slice() {
        [] => Command::AllGroups,
        [single] if find_group(single).is_ok() => Command::Group(single.clone()),
        _ => Command::Squares(rest.join(" ")),
    };

    Invocation { command, padded }
}

pub fn run(invocation: &Invocation) -> Result<String> {
    info!("Running {:?}", invocation);

    match &invocation.command {
        Command::Help => Ok(USAGE.to_string()),
        Command::AllGroups => Ok(builtin_groups()
            .iter()
            .map(|g| report_group(g, invocation.padded))
            .collect::<Vec<String>>()
            .join("\n")),
        Command::Group(name) => Ok(report_group(find_group(name)?, invocation.padded)),
        Command::Squares(input) => {
            let squares = parse_square_list(input)?;
            let mask = build(&squares)?;
            Ok(describe_indices(&squares, mask, invocation.padded))
        }
    }
}

// Label line, blank line, then the report, as the original utility printed it
fn report_group(group: &SquareGroup, padded: bool) -> String {
    format!(
        "{}\n\n{}",
        group.label,
        describe(&group.squares, group.mask(), padded)
    )
}

#[cfg(test)]
use crate::error::MaskError;

#[test]
fn test_parse_args() {
    assert_eq!(parse_args(Vec::<String>::new()).command, Command::AllGroups);
    assert_eq!(
        parse_args(vec!["cast_wk"]).command,
        Command::Group(String::from("cast_wk"))
    );
    assert_eq!(
        parse_args(vec!["f1", "g1", "--padded"]),
        Invocation {
            command: Command::Squares(String::from("f1 g1")),
            padded: true,
        }
    );
    assert_eq!(parse_args(vec!["a1", "--help"]).command, Command::Help);
}

#[test]
fn test_run_squares() {
    let output = run(&parse_args(vec!["f1,", "g1"])).unwrap();
    assert_eq!(
        output,
        "Generating bitboard for squares : [5, 6]\nThe answer is 0x60"
    );
}

#[test]
fn test_run_group() {
    let output = run(&parse_args(vec!["--padded", "cast_bq"])).unwrap();
    assert_eq!(
        output,
        "cast bq\n\nGenerating bitboard for squares : [b8, c8, d8]\nThe answer is 0x0e00000000000000"
    );
}

#[test]
fn test_run_all_groups() {
    let output = run(&parse_args(Vec::<String>::new())).unwrap();

    assert!(output.starts_with("Rank 7\n\nGenerating bitboard for squares : [a7, b7"));
    assert!(output.contains("The answer is 0xff000000000000\n"));
    assert!(output.ends_with("The answer is 0xe00000000000000"));
    assert_eq!(output.matches("The answer is").count(), builtin_groups().len());
}

#[test]
fn test_run_errors() {
    assert_eq!(
        run(&parse_args(vec!["5", "64"])),
        Err(MaskError::InvalidSquare(64))
    );
    assert_eq!(
        run(&parse_args(vec!["5", "99999999999999999999"])),
        Err(MaskError::InvalidSquare(i64::MAX))
    );
    assert!(matches!(
        run(&parse_args(vec!["x1"])),
        Err(MaskError::ParseError(_))
    ));
    assert_eq!(
        run(&Invocation {
            command: Command::Group(String::from("rank9")),
            padded: false,
        }),
        Err(MaskError::UnknownGroup(String::from("rank9")))
    );
}
