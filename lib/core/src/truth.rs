use itertools::Itertools;
use snafu::{ensure, Snafu};

use crate::eval::Eval;
use crate::session::LogicTree;
use crate::validity::Validity;
use crate::Letter;

/// Largest number of free cells a table is enumerated for (`2^16` rows).
pub const MAX_FREE_VARIABLES: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
pub enum TruthTableError {
    #[snafu(display("Too many free variables for a truth table: {} (at most {})", count, max))]
    TooManyVariables { count: usize, max: usize },
}

/// Truth table over the cells that inference left `Unknown`.
///
/// Linked letters share a cell, so only their representative is enumerated.
/// Free cells are enumerated with the first one as the most significant bit,
/// `False` before `True`.
#[derive(Debug)]
pub struct TruthTable<'a> {
    tree: &'a LogicTree,
    columns: Vec<Letter>,
    free: Vec<Letter>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// One value per column.
    pub values: Vec<Validity>,
    pub result: Validity,
}

impl<'a> TruthTable<'a> {
    pub fn new(tree: &'a LogicTree) -> Result<Self, TruthTableError> {
        let table = tree.table();
        let columns = table.declared().collect_vec();
        let free = columns
            .iter()
            .filter(|&&letter| table.get(letter) == Validity::Unknown)
            .map(|&letter| table.representative(letter))
            .unique()
            .collect_vec();
        ensure!(
            free.len() <= MAX_FREE_VARIABLES,
            TooManyVariablesSnafu {
                count: free.len(),
                max: MAX_FREE_VARIABLES,
            }
        );
        Ok(Self { tree, columns, free })
    }

    pub fn columns(&self) -> &[Letter] {
        &self.columns
    }

    pub fn free(&self) -> &[Letter] {
        &self.free
    }

    pub fn num_rows(&self) -> usize {
        1 << self.free.len()
    }

    pub fn rows(&self) -> Rows<'_, 'a> {
        Rows { table: self, next: 0 }
    }
}

pub struct Rows<'t, 'a> {
    table: &'t TruthTable<'a>,
    next: usize,
}

impl Iterator for Rows<'_, '_> {
    type Item = Row;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.table.num_rows() {
            return None;
        }
        let bits = self.next;
        self.next += 1;

        let mut scratch = self.table.tree.table().clone();
        let n = self.table.free.len();
        for (j, &letter) in self.table.free.iter().enumerate() {
            scratch.assign(letter, (bits >> (n - j - 1)) & 1 == 1);
        }
        let values = self.table.columns.iter().map(|&letter| scratch.get(letter)).collect_vec();
        let result = self.table.tree.root().eval(&scratch);
        Some(Row { values, result })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.table.num_rows() - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Rows<'_, '_> {}
