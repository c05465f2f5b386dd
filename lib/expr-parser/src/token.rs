use std::fmt::{Display, Formatter};
use std::str::FromStr;

use itertools::Itertools;

use crate::error::{MalformedExpressionSnafu, ParseError};
use crate::letter::Letter;

pub const NOT: char = '~';
pub const AND: char = '&';
pub const OR: char = '?';

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    Not,
    And,
    Or,
    Var(Letter),
}

impl Token {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            NOT => Some(Token::Not),
            AND => Some(Token::And),
            OR => Some(Token::Or),
            _ => Letter::from_char(c).map(Token::Var),
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Token::Not => NOT,
            Token::And => AND,
            Token::Or => OR,
            Token::Var(letter) => letter.as_char(),
        }
    }

    pub fn is_binary(self) -> bool {
        matches!(self, Token::And | Token::Or)
    }

    /// The operator De Morgan's law swaps this one for.
    pub fn dual(self) -> Self {
        match self {
            Token::And => Token::Or,
            Token::Or => Token::And,
            t => t,
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Flattened expression: every operator precedes the encodings of its operands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preorder(Vec<Token>);

impl Preorder {
    pub fn new(tokens: Vec<Token>) -> Self {
        Preorder(tokens)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.0.iter()
    }
}

impl From<Vec<Token>> for Preorder {
    fn from(tokens: Vec<Token>) -> Self {
        Preorder(tokens)
    }
}

impl IntoIterator for Preorder {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Preorder {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Preorder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            write!(f, "{}", self.0.iter().join(" "))
        } else {
            write!(f, "{}", self.0.iter().join(""))
        }
    }
}

impl FromStr for Preorder {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| {
                Token::from_char(c).ok_or_else(|| {
                    MalformedExpressionSnafu {
                        input: s,
                        reason: format!("'{c}' is not a preorder token"),
                    }
                    .build()
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Preorder)
    }
}
