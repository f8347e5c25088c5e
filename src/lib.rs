#[macro_use]
pub mod bitboard;
pub mod builder;
pub mod cli;
pub mod constants;
pub mod error;
pub mod file;
pub mod groups;
pub mod logging;
pub mod parse;
pub mod rank;
pub mod report;
pub mod square;

pub use bitboard::Bitboard;
pub use builder::{build, build_squares};
pub use error::{MaskError, Result};
pub use square::Square;
