use std::fmt::{Display, Formatter};

/// Variable identifier: one of the 26 uppercase letters `A`..=`Z`.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct Letter(u8);

impl Letter {
    pub const COUNT: usize = 26;

    pub const fn new(index: usize) -> Self {
        debug_assert!(index < Letter::COUNT, "letter index must be in 0..26");
        Letter(index as u8)
    }

    /// Case-insensitive conversion, `None` for anything but an ASCII letter.
    pub fn from_char(c: char) -> Option<Self> {
        let c = c.to_ascii_uppercase();
        if c.is_ascii_uppercase() {
            Some(Letter(c as u8 - b'A'))
        } else {
            None
        }
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub const fn as_char(self) -> char {
        (b'A' + self.0) as char
    }

    pub fn all() -> impl Iterator<Item = Letter> {
        (0..Letter::COUNT).map(Letter::new)
    }
}

impl Display for Letter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

// Into<char>
impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        letter.as_char()
    }
}
