use itertools::Itertools;

use logic_tree_core::{Eval, LogicTree, Node, TruthTable, VariableTable};

/// Sideways tree diagram: the right operand is drawn above its operator and
/// the left operand (or the negated subtree) below it.
pub fn render_tree(tree: &LogicTree) -> String {
    let mut out = String::new();
    render_node(tree.root(), tree.table(), "", true, &mut out);
    out
}

fn render_node(node: &Node, table: &VariableTable, prefix: &str, is_tail: bool, out: &mut String) {
    let (above, below) = match node {
        Node::Var(_) => (None, None),
        Node::Not { arg } => (None, Some(arg.as_ref())),
        Node::And { lhs, rhs } | Node::Or { lhs, rhs } => (Some(rhs.as_ref()), Some(lhs.as_ref())),
    };

    if let Some(child) = above {
        let prefix = format!("{prefix}{}", if is_tail { "│   " } else { "    " });
        render_node(child, table, &prefix, false, out);
    }
    out.push_str(&format!(
        "{prefix}{}{}: {}\n",
        if is_tail { "└── " } else { "┌── " },
        label(node),
        node.eval(table)
    ));
    if let Some(child) = below {
        let prefix = format!("{prefix}{}", if is_tail { "    " } else { "│   " });
        render_node(child, table, &prefix, true, out);
    }
}

fn label(node: &Node) -> String {
    match node {
        Node::Var(letter) => letter.to_string(),
        Node::Not { .. } => "NOT".to_string(),
        Node::And { .. } => "AND".to_string(),
        Node::Or { .. } => "OR".to_string(),
    }
}

pub fn render_table(table: &TruthTable) -> String {
    let header = format!("{}\t| Result\n", table.columns().iter().join("\t"));
    let rows = table.rows().map(|row| {
        let values = row.values.iter().map(|v| format!("{v:#}")).join("\t");
        format!("{values}\t| {}\n", row.result)
    });
    std::iter::once(header).chain(rows).collect()
}
