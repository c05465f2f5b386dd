use itertools::Itertools;
use log::{debug, info, warn};

use crate::predicate::{canonical, Predicate, PredicateWarning};
use crate::table::VariableTable;

pub use rules::apply;

mod rules;

/// Upper bound on full passes; a correct rule set settles long before this.
pub const MAX_PASSES: usize = 64;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inference {
    /// Number of full passes over the predicates, including the final quiet one.
    pub passes: usize,
    pub converged: bool,
    pub warnings: Vec<PredicateWarning>,
}

impl Inference {
    pub fn into_result(self) -> Result<(), Vec<PredicateWarning>> {
        if self.warnings.is_empty() {
            Ok(())
        } else {
            Err(self.warnings)
        }
    }
}

/// Parses `predicates`, skipping malformed ones with a warning, and applies
/// them to `table` until a full pass changes no cell.
///
/// Shorter predicates go first (stable), which lets plain assignments seed the
/// table before the conditionals read it.
pub fn infer<I, S>(table: &mut VariableTable, predicates: I) -> Inference
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut warnings = Vec::new();
    let parsed = predicates
        .into_iter()
        .filter_map(|s| {
            let s = s.as_ref();
            match Predicate::parse(s) {
                Ok(Some(predicate)) => Some((canonical(s).len(), predicate)),
                Ok(None) => None,
                Err(warning) => {
                    warn!("{warning}");
                    warnings.push(warning);
                    None
                }
            }
        })
        .sorted_by_key(|(len, _)| *len)
        .map(|(_, predicate)| predicate)
        .collect_vec();
    debug!("infer: predicates = [{}]", parsed.iter().join(", "));

    let mut passes = 0;
    let mut converged = false;
    while passes < MAX_PASSES {
        passes += 1;
        let before = table.snapshot();
        for predicate in parsed.iter() {
            apply(table, predicate);
        }
        if table.snapshot() == before {
            converged = true;
            break;
        }
        debug!("infer: pass {passes} -> {table}");
    }

    if converged {
        info!("Inference settled after {passes} passes: {table}");
    } else {
        warn!("Inference did not settle after {MAX_PASSES} passes: {table}");
    }

    Inference {
        passes,
        converged,
        warnings,
    }
}

#[cfg(test)]
mod tests;
