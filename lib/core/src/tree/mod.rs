use std::fmt::{Display, Formatter};
use std::ops;

use crate::Letter;

pub use build::{build, parse};

mod build;

/// Expression tree.
///
/// Operator nodes own their children. A `Var` leaf only names its letter: the
/// cell behind it lives in the session's [`VariableTable`](crate::VariableTable),
/// so every occurrence of a letter reads the same value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Var(Letter),
    Not { arg: Box<Node> },
    And { lhs: Box<Node>, rhs: Box<Node> },
    Or { lhs: Box<Node>, rhs: Box<Node> },
}

// Constructors
impl Node {
    pub fn not(arg: Self) -> Self {
        Node::Not { arg: Box::new(arg) }
    }

    pub fn and(lhs: Self, rhs: Self) -> Self {
        Node::And {
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn or(lhs: Self, rhs: Self) -> Self {
        Node::Or {
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }
}

impl Node {
    /// Children in construction order: `[arg]` or `[lhs, rhs]`.
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Node::Var(_) => vec![],
            Node::Not { arg } => vec![arg.as_ref()],
            Node::And { lhs, rhs } | Node::Or { lhs, rhs } => vec![lhs.as_ref(), rhs.as_ref()],
        }
    }

    pub fn size(&self) -> usize {
        1 + self.children().into_iter().map(Node::size).sum::<usize>()
    }

    /// Letters of the leaves, in preorder, with repetitions.
    pub fn letters(&self) -> Vec<Letter> {
        match self {
            Node::Var(letter) => vec![*letter],
            _ => self.children().into_iter().flat_map(Node::letters).collect(),
        }
    }
}

impl From<Letter> for Node {
    fn from(letter: Letter) -> Self {
        Node::Var(letter)
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            match self {
                Node::Var(letter) => {
                    write!(f, "Var({letter})")
                }
                Node::Not { arg } => {
                    write!(f, "Not({arg:#})")
                }
                Node::And { lhs, rhs } => {
                    write!(f, "And({lhs:#}, {rhs:#})")
                }
                Node::Or { lhs, rhs } => {
                    write!(f, "Or({lhs:#}, {rhs:#})")
                }
            }
        } else {
            match self {
                Node::Var(letter) => {
                    write!(f, "{letter}")
                }
                Node::Not { arg } => {
                    write!(f, "~{arg}")
                }
                Node::And { lhs, rhs } => {
                    write!(f, "({lhs} & {rhs})")
                }
                Node::Or { lhs, rhs } => {
                    write!(f, "({lhs} ? {rhs})")
                }
            }
        }
    }
}

impl ops::Not for Node {
    type Output = Self;

    fn not(self) -> Self::Output {
        Node::not(self)
    }
}

impl ops::BitAnd for Node {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Node::and(self, rhs)
    }
}

impl ops::BitOr for Node {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Node::or(self, rhs)
    }
}
