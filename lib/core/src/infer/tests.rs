use test_log::test;

use super::*;
use crate::tree::parse;
use crate::validity::Validity;
use crate::{Eval, Letter};

fn letter(c: char) -> Letter {
    Letter::from_char(c).unwrap()
}

#[test]
fn test_chained_modus_ponens() {
    let mut table = VariableTable::new();
    let inference = infer(&mut table, ["R>S", "S>Q", "R"]);
    assert!(inference.converged);
    assert!(inference.passes <= 3, "took {} passes", inference.passes);
    assert_eq!(table.get(letter('Q')), Validity::True);
    assert_eq!(table.get(letter('S')), Validity::True);
}

#[test]
fn test_chain_in_reverse_needs_extra_passes() {
    let mut table = VariableTable::new();
    // Same length, so the order is kept: Q>R runs before P>Q has fired.
    let inference = infer(&mut table, ["Q>R", "P>Q", "P"]);
    assert!(inference.converged);
    assert_eq!(table.get(letter('R')), Validity::True);
    assert_eq!(inference.passes, 3);
}

#[test]
fn test_contradiction() {
    let mut table = VariableTable::new();
    let root = parse("P & Q", &mut table).unwrap();
    infer(&mut table, ["P", "~P"]);
    assert_eq!(table.get(letter('P')), Validity::Invalid);
    assert_eq!(root.eval(&table), Validity::Invalid);
}

#[test]
fn test_biconditional_before_assignment() {
    let mut table = VariableTable::new();
    let root = parse("P", &mut table).unwrap();
    infer(&mut table, ["P=Q", "~Q"]);
    assert_eq!(root.eval(&table), Validity::False);
}

#[test]
fn test_end_to_end() {
    let mut table = VariableTable::new();
    let root = parse("P&~(S?Q)", &mut table).unwrap();
    let inference = infer(&mut table, ["P", "Q>~P"]);
    assert!(inference.converged);
    assert_eq!(table.get(letter('P')), Validity::True);
    assert_eq!(table.get(letter('Q')), Validity::False);
    assert_eq!(table.get(letter('S')), Validity::Unknown);
    assert_eq!(root.eval(&table), Validity::Unknown);
}

#[test]
fn test_malformed_predicates_are_skipped() {
    let mut table = VariableTable::new();
    let inference = infer(&mut table, ["P", "P=Q=R", "", "P>Q>R", "P>Q"]);
    assert_eq!(inference.warnings.len(), 2);
    assert_eq!(table.get(letter('Q')), Validity::True);
    assert!(!table.is_declared(letter('R')));
    assert!(inference.into_result().is_err());
}

#[test]
fn test_clean_inference_into_result() {
    let mut table = VariableTable::new();
    let inference = infer(&mut table, Vec::<String>::new());
    assert_eq!(inference.passes, 1);
    assert_eq!(inference.into_result(), Ok(()));
}

#[test]
fn test_predicates_declare_new_letters() {
    let mut table = VariableTable::new();
    parse("P", &mut table).unwrap();
    infer(&mut table, ["Z"]);
    assert!(table.is_declared(letter('Z')));
    assert_eq!(table.get(letter('Z')), Validity::True);
}

#[test]
fn test_result_is_a_fixpoint() {
    let mut table = VariableTable::new();
    let predicates = ["A=B", "B>~C", "~C>D", "A", "D>E", "~E>F"];
    infer(&mut table, predicates);
    let before = table.snapshot();
    for s in predicates {
        apply(&mut table, &Predicate::parse(s).unwrap().unwrap());
    }
    assert_eq!(table.snapshot(), before);
    assert_eq!(table.get(letter('E')), Validity::True);
    assert_eq!(table.get(letter('F')), Validity::Unknown);
}
