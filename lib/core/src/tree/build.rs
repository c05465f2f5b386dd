use log::debug;

use expr_parser::{normalize, ParseError, Preorder, Token};

use super::Node;
use crate::table::VariableTable;

/// Builds a tree from its preorder encoding, declaring every letter it meets.
///
/// A single cursor is shared by the whole recursion, so each operator takes its
/// operands from the tokens right after it.
pub fn build(tokens: Preorder, table: &mut VariableTable) -> Result<Node, ParseError> {
    debug!("build({tokens})");
    if tokens.is_empty() {
        return Err(ParseError::EmptyExpression);
    }

    let input = tokens.to_string();
    let mut cursor = tokens.into_iter();
    let root = build_node(&mut cursor, table)?;

    let rest: Preorder = cursor.collect::<Vec<_>>().into();
    if !rest.is_empty() {
        return Err(ParseError::MalformedExpression {
            input,
            reason: format!("trailing tokens `{rest}` after a complete expression"),
        });
    }

    debug!("build: root = {root:#}");
    Ok(root)
}

fn build_node<I>(cursor: &mut I, table: &mut VariableTable) -> Result<Node, ParseError>
where
    I: Iterator<Item = Token>,
{
    let token = cursor.next().ok_or(ParseError::TruncatedExpression)?;
    let node = match token {
        Token::And => {
            let lhs = build_node(cursor, table)?;
            let rhs = build_node(cursor, table)?;
            Node::and(lhs, rhs)
        }
        Token::Or => {
            let lhs = build_node(cursor, table)?;
            let rhs = build_node(cursor, table)?;
            Node::or(lhs, rhs)
        }
        Token::Not => Node::not(build_node(cursor, table)?),
        Token::Var(letter) => Node::Var(table.declare(letter)),
    };
    Ok(node)
}

/// Normalizes `expression` and builds its tree against `table`.
pub fn parse(expression: &str, table: &mut VariableTable) -> Result<Node, ParseError> {
    let tokens = normalize(expression)?;
    build(tokens, table)
}
