use log::debug;
use tap::Tap;

use crate::table::VariableTable;
use crate::tree::Node;
use crate::validity::Validity;
use crate::Letter;

pub trait Eval {
    fn eval(&self, table: &VariableTable) -> Validity;
}

impl Eval for Letter {
    fn eval(&self, table: &VariableTable) -> Validity {
        table.get(*self)
    }
}

impl Eval for Node {
    fn eval(&self, table: &VariableTable) -> Validity {
        match self {
            Node::Var(letter) => letter.eval(table),
            Node::Not { arg } => !arg.eval(table),
            Node::And { lhs, rhs } => lhs.eval(table) & rhs.eval(table),
            Node::Or { lhs, rhs } => lhs.eval(table) | rhs.eval(table),
        }
        .tap(|x| debug!("eval({self}) = {x}"))
    }
}
