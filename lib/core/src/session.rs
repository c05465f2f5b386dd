use expr_parser::ParseError;

use crate::eval::Eval;
use crate::infer::{infer, Inference};
use crate::table::VariableTable;
use crate::tree::{parse, Node};
use crate::validity::Validity;
use crate::Letter;

/// One expression together with its own variable table.
#[derive(Debug, Clone)]
pub struct LogicTree {
    root: Node,
    table: VariableTable,
}

impl LogicTree {
    pub fn parse(expression: &str) -> Result<Self, ParseError> {
        let mut table = VariableTable::new();
        let root = parse(expression, &mut table)?;
        Ok(Self { root, table })
    }

    /// Parses `expression`, then runs inference over `predicates`.
    pub fn new<I, S>(expression: &str, predicates: I) -> Result<(Self, Inference), ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tree = Self::parse(expression)?;
        let inference = tree.infer(predicates);
        Ok((tree, inference))
    }
}

impl LogicTree {
    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn table(&self) -> &VariableTable {
        &self.table
    }

    pub fn infer<I, S>(&mut self, predicates: I) -> Inference
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        infer(&mut self.table, predicates)
    }

    pub fn evaluate(&self) -> Validity {
        self.root.eval(&self.table)
    }

    pub fn value(&self, letter: Letter) -> Validity {
        self.table.get(letter)
    }

    /// Every declared letter with its current value, alphabetically.
    pub fn values(&self) -> impl Iterator<Item = (Letter, Validity)> + '_ {
        self.table.declared().map(|letter| (letter, self.table.get(letter)))
    }
}
