use std::fmt::{Display, Formatter};

use itertools::Itertools;
use log::debug;

use crate::validity::Validity;
use crate::Letter;

/// Per-session mapping from the letters `A`..=`Z` to their truth cells.
///
/// Cells live in a fixed arena indexed by letter. Biconditionals link two
/// letters by pointing one representative at the other (union-find), so every
/// letter of a linked group reads and writes the cell of the group root.
#[derive(Debug, Clone)]
pub struct VariableTable {
    declared: [bool; Letter::COUNT],
    parent: [u8; Letter::COUNT],
    cells: [Validity; Letter::COUNT],
}

impl VariableTable {
    pub fn new() -> Self {
        let mut parent = [0; Letter::COUNT];
        for (i, p) in parent.iter_mut().enumerate() {
            *p = i as u8;
        }
        Self {
            declared: [false; Letter::COUNT],
            parent,
            cells: [Validity::Unknown; Letter::COUNT],
        }
    }
}

impl Default for VariableTable {
    fn default() -> Self {
        Self::new()
    }
}

impl VariableTable {
    pub fn declare(&mut self, letter: Letter) -> Letter {
        if !self.declared[letter.index()] {
            debug!("declare({letter})");
            self.declared[letter.index()] = true;
        }
        letter
    }

    pub fn is_declared(&self, letter: Letter) -> bool {
        self.declared[letter.index()]
    }

    /// Declared letters in alphabetical order.
    pub fn declared(&self) -> impl Iterator<Item = Letter> + '_ {
        Letter::all().filter(|&letter| self.is_declared(letter))
    }

    pub fn len(&self) -> usize {
        self.declared().count()
    }

    pub fn is_empty(&self) -> bool {
        !self.declared.contains(&true)
    }

    pub fn representative(&self, letter: Letter) -> Letter {
        let mut i = letter.index();
        while self.parent[i] as usize != i {
            i = self.parent[i] as usize;
        }
        Letter::new(i)
    }

    pub fn are_linked(&self, a: Letter, b: Letter) -> bool {
        self.representative(a) == self.representative(b)
    }

    /// Current value of the letter's cell; `Unknown` for undeclared letters.
    pub fn get(&self, letter: Letter) -> Validity {
        self.cells[self.representative(letter).index()]
    }

    pub fn snapshot(&self) -> [Validity; Letter::COUNT] {
        let mut values = [Validity::Unknown; Letter::COUNT];
        for letter in Letter::all() {
            values[letter.index()] = self.get(letter);
        }
        values
    }

    /// Monotone write: an `Unknown` cell takes `value`, an equal cell is left
    /// alone, and any other cell becomes `Invalid`.
    pub fn assert_value(&mut self, letter: Letter, value: Validity) -> Validity {
        self.declare(letter);
        let root = self.representative(letter).index();
        let current = self.cells[root];
        let new = match current {
            Validity::Unknown => value,
            _ if current == value => current,
            _ => Validity::Invalid,
        };
        if new != current {
            debug!("{letter}: {current} -> {new}");
            self.cells[root] = new;
        }
        new
    }

    pub fn poison(&mut self, letter: Letter) {
        self.declare(letter);
        let root = self.representative(letter).index();
        if self.cells[root] != Validity::Invalid {
            debug!("{letter}: {} -> {}", self.cells[root], Validity::Invalid);
            self.cells[root] = Validity::Invalid;
        }
    }

    /// Merges the cells of `a` and `b`. The merged cell keeps the known value,
    /// or becomes `Invalid` when both are known and disagree.
    pub fn link(&mut self, a: Letter, b: Letter) -> Validity {
        self.declare(a);
        self.declare(b);
        let (ra, rb) = (self.representative(a).index(), self.representative(b).index());
        let (va, vb) = (self.cells[ra], self.cells[rb]);
        let merged = match (va, vb) {
            (Validity::Unknown, v) | (v, Validity::Unknown) => v,
            _ if va == vb => va,
            _ => Validity::Invalid,
        };
        // The unknown side joins the known one.
        let (root, child) = if !va.is_known() && vb.is_known() { (rb, ra) } else { (ra, rb) };
        if root != child {
            debug!("link({a}, {b}): {} joins {}", Letter::new(child), Letter::new(root));
            self.parent[child] = root as u8;
        }
        self.cells[root] = merged;
        merged
    }

    /// Raw overwrite of the letter's cell, bypassing the monotone rules.
    ///
    /// Only meant for enumerating assignments on a scratch copy of the table.
    pub fn assign(&mut self, letter: Letter, value: bool) {
        self.declare(letter);
        let root = self.representative(letter).index();
        self.cells[root] = Validity::from(value);
    }
}

impl Display for VariableTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{{}}}",
            self.declared().map(|letter| format!("{letter}: {}", self.get(letter))).join(", ")
        )
    }
}
