use std::fmt::{Display, Formatter};

use itertools::Itertools;
use snafu::Snafu;

use crate::Letter;

pub const IFF: char = '=';
pub const IMPLY: char = '>';
pub const NOT: char = '~';

#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
pub enum PredicateWarning {
    #[snafu(display("Malformed predicate `{}`: {}", predicate, reason))]
    MalformedPredicate { predicate: String, reason: String },
}

/// A fact about the variables, applied by the inference engine.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Predicate {
    /// `P` or `~P`
    Assignment { var: Letter, negated: bool },
    /// `P=Q`
    Biconditional { lhs: Letter, rhs: Letter },
    /// `P>Q`, `P>~Q`, `~P>Q`, `~P>~Q`
    Conditional {
        antecedent: Letter,
        antecedent_negated: bool,
        consequent: Letter,
        consequent_negated: bool,
    },
}

impl Predicate {
    /// Parses one predicate. Whitespace and case are ignored, and a blank
    /// string yields `Ok(None)`.
    pub fn parse(input: &str) -> Result<Option<Self>, PredicateWarning> {
        let formatted = canonical(input);
        if formatted.is_empty() {
            return Ok(None);
        }
        let malformed = |reason: &str| {
            MalformedPredicateSnafu {
                predicate: input.trim(),
                reason,
            }
            .fail()
        };

        if formatted.contains(IFF) && !formatted.contains(IMPLY) {
            let sides = formatted.split(IFF).collect_vec();
            if sides.len() != 2 {
                return malformed("a biconditional needs exactly two sides");
            }
            match (single_letter(sides[0]), single_letter(sides[1])) {
                (Some(lhs), Some(rhs)) => Ok(Some(Predicate::Biconditional { lhs, rhs })),
                _ => malformed("each side of a biconditional must be a single variable"),
            }
        } else if formatted.contains(IMPLY) {
            let sides = formatted.split(IMPLY).collect_vec();
            if sides.len() != 2 {
                return malformed("a conditional needs exactly one antecedent and one consequent");
            }
            match (literal(sides[0]), literal(sides[1])) {
                (Some((antecedent_negated, antecedent)), Some((consequent_negated, consequent))) => {
                    Ok(Some(Predicate::Conditional {
                        antecedent,
                        antecedent_negated,
                        consequent,
                        consequent_negated,
                    }))
                }
                _ => malformed("each side of a conditional must be a variable or its negation"),
            }
        } else {
            match literal(&formatted) {
                Some((negated, var)) => Ok(Some(Predicate::Assignment { var, negated })),
                None => malformed("an assignment must be a variable or its negation"),
            }
        }
    }

    pub fn letters(&self) -> Vec<Letter> {
        match *self {
            Predicate::Assignment { var, .. } => vec![var],
            Predicate::Biconditional { lhs, rhs } => vec![lhs, rhs],
            Predicate::Conditional {
                antecedent, consequent, ..
            } => vec![antecedent, consequent],
        }
    }
}

/// Whitespace-free, upper-cased form of a predicate string.
pub(crate) fn canonical(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_uppercase()
}

fn single_letter(s: &str) -> Option<Letter> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Letter::from_char(c),
        _ => None,
    }
}

fn literal(s: &str) -> Option<(bool, Letter)> {
    match s.strip_prefix(NOT) {
        Some(rest) => single_letter(rest).map(|letter| (true, letter)),
        None => single_letter(s).map(|letter| (false, letter)),
    }
}

impl Display for Predicate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let neg = |negated: bool| if negated { "~" } else { "" };
        match *self {
            Predicate::Assignment { var, negated } => {
                write!(f, "{}{var}", neg(negated))
            }
            Predicate::Biconditional { lhs, rhs } => {
                write!(f, "{lhs}{IFF}{rhs}")
            }
            Predicate::Conditional {
                antecedent,
                antecedent_negated,
                consequent,
                consequent_negated,
            } => {
                write!(
                    f,
                    "{}{antecedent}{IMPLY}{}{consequent}",
                    neg(antecedent_negated),
                    neg(consequent_negated)
                )
            }
        }
    }
}
