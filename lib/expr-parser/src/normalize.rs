use itertools::Itertools;
use log::debug;
use snafu::ensure;

use crate::error::{EmptyExpressionSnafu, MalformedExpressionSnafu, Result};
use crate::letter::Letter;
use crate::token::{Preorder, Token, AND, NOT, OR};

pub const IMPLY: char = '>';

fn is_surface_char(c: char) -> bool {
    c.is_ascii_uppercase() || matches!(c, NOT | AND | OR | IMPLY | '(' | ')')
}

/// Converts a surface expression into its preorder encoding.
///
/// Whitespace is dropped and letters are upper-cased first. A single top-level
/// `A > B` is expanded to `~A ? B`. Negated groups `~(...)` are pushed inwards
/// with De Morgan's law before the generic binary split, which always happens
/// at the *first* top-level `&`/`?`, so nested operators must be parenthesized.
pub fn normalize(expr: &str) -> Result<Preorder> {
    let formatted = expr
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_uppercase();
    debug!("normalize({expr:?}): formatted = {formatted:?}");

    ensure!(!formatted.is_empty(), EmptyExpressionSnafu);
    if let Some(c) = formatted.chars().find(|&c| !is_surface_char(c)) {
        return MalformedExpressionSnafu {
            input: &formatted,
            reason: format!("unexpected character '{c}'"),
        }
        .fail();
    }
    check_balanced(&formatted)?;

    let formatted = expand_conditional(formatted)?;
    let mut tokens = Vec::with_capacity(formatted.len());
    normalize_into(&formatted, &mut tokens)?;

    let preorder = Preorder::new(tokens);
    debug!("normalize({expr:?}) = {preorder}");
    Ok(preorder)
}

fn check_balanced(s: &str) -> Result<()> {
    let mut depth = 0i32;
    for c in s.chars() {
        match c {
            '(' => depth += 1,
            ')' => depth -= 1,
            _ => {}
        }
        ensure!(
            depth >= 0,
            MalformedExpressionSnafu {
                input: s,
                reason: "unmatched ')'",
            }
        );
    }
    ensure!(
        depth == 0,
        MalformedExpressionSnafu {
            input: s,
            reason: "unmatched '('",
        }
    );
    Ok(())
}

// Material implication: `A > B` |- `~A ? B`
fn expand_conditional(formatted: String) -> Result<String> {
    let mut depth = 0i32;
    let mut found = false;
    for c in formatted.chars() {
        match c {
            '(' => depth += 1,
            ')' => depth -= 1,
            IMPLY if depth == 0 => found = true,
            IMPLY => {
                return MalformedExpressionSnafu {
                    input: &formatted,
                    reason: "a conditional must not be nested inside parentheses",
                }
                .fail()
            }
            _ => {}
        }
    }
    if !found {
        return Ok(formatted);
    }

    let parts = formatted.split(IMPLY).collect_vec();
    ensure!(
        parts.len() == 2 && parts.iter().all(|part| !part.is_empty()),
        MalformedExpressionSnafu {
            input: &formatted,
            reason: "a conditional needs exactly one antecedent and one consequent",
        }
    );
    let expanded = format!("{}{OR}{}", negate(parts[0]), parts[1]);
    debug!("expand_conditional({formatted:?}) = {expanded:?}");
    Ok(expanded)
}

/// Prefixes `~`, wrapping `s` first when it has a top-level operator.
fn negate(s: &str) -> String {
    if find_main_operator_index(s).is_some() {
        format!("{NOT}({s})")
    } else {
        format!("{NOT}{s}")
    }
}

fn normalize_into(s: &str, out: &mut Vec<Token>) -> Result<()> {
    debug!("normalize_into({s:?})");
    ensure!(
        !s.is_empty(),
        MalformedExpressionSnafu {
            input: s,
            reason: "missing operand",
        }
    );

    // De Morgan's law goes before the operator split, in case of `~(...)`
    if let Some(inner) = negated_group(s) {
        match find_main_operator_index(inner) {
            Some(index) => {
                let (lhs, rhs) = split_operands(inner, index)?;
                // ~(A & B) |- ~A ? ~B
                // ~(A ? B) |- ~A & ~B
                out.push(operator_at(inner, index).dual());
                normalize_into(&negate(lhs), out)?;
                normalize_into(&negate(rhs), out)?;
            }
            None => {
                out.push(Token::Not);
                normalize_into(inner, out)?;
            }
        }
        return Ok(());
    }

    match find_main_operator_index(s) {
        Some(index) => {
            let (lhs, rhs) = split_operands(s, index)?;
            out.push(operator_at(s, index));
            normalize_into(strip_parens(lhs), out)?;
            normalize_into(strip_parens(rhs), out)?;
        }
        None => {
            if let Some(rest) = s.strip_prefix(NOT) {
                out.push(Token::Not);
                return normalize_into(rest, out);
            }
            let inner = strip_parens(s);
            if inner.len() != s.len() {
                return normalize_into(inner, out);
            }
            let mut chars = s.chars();
            match (chars.next().and_then(Letter::from_char), chars.next()) {
                (Some(letter), None) => out.push(Token::Var(letter)),
                _ => {
                    return MalformedExpressionSnafu {
                        input: s,
                        reason: "expected a single variable",
                    }
                    .fail()
                }
            }
        }
    }
    Ok(())
}

fn split_operands(s: &str, index: usize) -> Result<(&str, &str)> {
    let (lhs, rhs) = (&s[..index], &s[index + 1..]);
    ensure!(
        !lhs.is_empty() && !rhs.is_empty(),
        MalformedExpressionSnafu {
            input: s,
            reason: format!("operator '{}' needs two operands", &s[index..=index]),
        }
    );
    Ok((lhs, rhs))
}

fn operator_at(s: &str, index: usize) -> Token {
    match s.as_bytes()[index] as char {
        AND => Token::And,
        OR => Token::Or,
        c => unreachable!("'{c}' is not a binary operator"),
    }
}

/// The content of `s` when it has the exact shape `~(...)`.
fn negated_group(s: &str) -> Option<&str> {
    let rest = s.strip_prefix(NOT)?;
    if rest.starts_with('(') && matching_paren(rest, 0) == Some(rest.len() - 1) {
        Some(&rest[1..rest.len() - 1])
    } else {
        None
    }
}

fn matching_paren(s: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, b) in s.bytes().enumerate().skip(open) {
        match b {
            b'(' => depth += 1,
            b')' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Index of the first `&` or `?` outside of any parentheses.
pub fn find_main_operator_index(s: &str) -> Option<usize> {
    let mut depth = 0i32;
    for (i, c) in s.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth -= 1,
            AND | OR if depth == 0 => return Some(i),
            _ => {}
        }
    }
    None
}

/// Removes one layer of parentheses, but only when they wrap the whole string.
pub fn strip_parens(s: &str) -> &str {
    if s.starts_with('(') && matching_paren(s, 0) == Some(s.len() - 1) {
        &s[1..s.len() - 1]
    } else {
        s
    }
}
