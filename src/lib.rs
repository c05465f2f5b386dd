//! Four-valued propositional logic: expression trees, predicate inference and
//! evaluation.
//!
//! ```
//! use logic_tree::core::{LogicTree, Validity};
//!
//! let (tree, _) = LogicTree::new("P & ~(S ? Q)", ["P", "Q > ~P"]).unwrap();
//! assert_eq!(tree.evaluate(), Validity::Unknown);
//! ```

pub use expr_parser as parser;
pub use logic_tree_core as core;
