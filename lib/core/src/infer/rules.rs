use log::debug;

use crate::predicate::Predicate;
use crate::table::VariableTable;
use crate::validity::Validity;
use crate::Letter;

/// Applies one predicate to the table, once.
pub fn apply(table: &mut VariableTable, predicate: &Predicate) {
    debug!("apply({predicate})");
    match *predicate {
        Predicate::Assignment { var, negated } => assignment(table, var, negated),
        Predicate::Biconditional { lhs, rhs } => biconditional(table, lhs, rhs),
        Predicate::Conditional {
            antecedent,
            antecedent_negated,
            consequent,
            consequent_negated,
        } => conditional(table, antecedent, antecedent_negated, consequent, consequent_negated),
    }
}

fn required(negated: bool) -> Validity {
    Validity::from(!negated)
}

fn assignment(table: &mut VariableTable, var: Letter, negated: bool) {
    table.assert_value(var, required(negated));
}

fn biconditional(table: &mut VariableTable, lhs: Letter, rhs: Letter) {
    table.link(lhs, rhs);
}

fn conditional(
    table: &mut VariableTable,
    antecedent: Letter,
    antecedent_negated: bool,
    consequent: Letter,
    consequent_negated: bool,
) {
    table.declare(antecedent);
    table.declare(consequent);
    let required_consequent = required(consequent_negated);

    // Modus ponens: the antecedent holds, so the consequent must too.
    if table.get(antecedent) == required(antecedent_negated) {
        let current = table.get(consequent);
        if current == Validity::Unknown {
            debug!("modus ponens: {consequent} = {required_consequent}");
            table.assert_value(consequent, required_consequent);
        } else if current != required_consequent {
            debug!("modus ponens: {consequent} is {current}, expected {required_consequent}");
            table.poison(antecedent);
            table.poison(consequent);
        }
    }

    // Modus tollens: the consequent fails, so the antecedent must fail too.
    let current = table.get(consequent);
    if current.is_concrete() && current != required_consequent {
        let required_antecedent = required(!antecedent_negated);
        let antecedent_value = table.get(antecedent);
        if antecedent_value == Validity::Unknown {
            debug!("modus tollens: {antecedent} = {required_antecedent}");
            table.assert_value(antecedent, required_antecedent);
        } else if antecedent_value != required_antecedent {
            debug!("modus tollens: {antecedent} is {antecedent_value}, expected {required_antecedent}");
            table.poison(antecedent);
            table.poison(consequent);
        }
    }
}
