pub mod eval;
pub mod infer;
pub mod predicate;
pub mod session;
pub mod table;
pub mod tree;
pub mod truth;
pub mod validity;

pub use expr_parser::{Letter, ParseError};

pub use eval::Eval;
pub use infer::{infer, Inference};
pub use predicate::{Predicate, PredicateWarning};
pub use session::LogicTree;
pub use table::VariableTable;
pub use tree::{build, parse, Node};
pub use truth::{Row, TruthTable, TruthTableError};
pub use validity::Validity;
