use std::fmt;

use crate::constants::*;

#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash)]
pub enum File {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

impl File {
    pub fn index(&self) -> u8 {
        use File::*;

        match self {
            A => 0,
            B => 1,
            C => 2,
            D => 3,
            E => 4,
            F => 5,
            G => 6,
            H => 7,
        }
    }

    /*
     * File of the square with the given index.
     */
    pub fn from_index(i: usize) -> Self {
        FILES[i % N_FILES]
    }

    pub fn from_char(c: char) -> Option<Self> {
        use File::*;

        match c.to_ascii_lowercase() {
            'a' => Some(A),
            'b' => Some(B),
            'c' => Some(C),
            'd' => Some(D),
            'e' => Some(E),
            'f' => Some(F),
            'g' => Some(G),
            'h' => Some(H),
            _ => None,
        }
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format!("{:?}", self).to_ascii_lowercase())
    }
}

pub const FILES: [File; 8] = [
    File::A,
    File::B,
    File::C,
    File::D,
    File::E,
    File::F,
    File::G,
    File::H,
];

#[test]
fn test_file_from_index() {
    assert_eq!(File::from_index(0), File::A);
    assert_eq!(File::from_index(7), File::H);
    assert_eq!(File::from_index(8), File::A);
    assert_eq!(File::from_index(61), File::F);
}

#[test]
fn test_file_from_char() {
    assert_eq!(File::from_char('g'), Some(File::G));
    assert_eq!(File::from_char('G'), Some(File::G));
    assert_eq!(File::from_char('i'), None);
    assert_eq!(File::C.to_string(), "c");
}
