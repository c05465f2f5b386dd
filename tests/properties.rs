use std::fmt::{Display, Formatter};

use itertools::Itertools;
use quickcheck::{Arbitrary, Gen, TestResult};
use quickcheck_macros::quickcheck;

use logic_tree::core::infer::apply;
use logic_tree::core::{infer, Eval, Letter, LogicTree, Predicate, Validity, VariableTable};
use logic_tree::parser::normalize;

const LETTERS: [char; 6] = ['A', 'B', 'C', 'D', 'E', 'F'];

/// Fully parenthesized formula over `A`..=`F`.
#[derive(Debug, Clone)]
enum Formula {
    Var(char),
    Not(Box<Formula>),
    And(Box<Formula>, Box<Formula>),
    Or(Box<Formula>, Box<Formula>),
}

impl Formula {
    fn generate(g: &mut Gen, depth: usize) -> Self {
        let choice = if depth == 0 { 0 } else { u8::arbitrary(g) % 4 };
        match choice {
            0 => Formula::Var(*g.choose(&LETTERS).unwrap()),
            1 => Formula::Not(Box::new(Formula::generate(g, depth - 1))),
            2 => Formula::And(
                Box::new(Formula::generate(g, depth - 1)),
                Box::new(Formula::generate(g, depth - 1)),
            ),
            _ => Formula::Or(
                Box::new(Formula::generate(g, depth - 1)),
                Box::new(Formula::generate(g, depth - 1)),
            ),
        }
    }

    fn eval(&self, mask: u8) -> bool {
        match self {
            Formula::Var(c) => {
                let i = LETTERS.iter().position(|x| x == c).unwrap();
                (mask >> i) & 1 == 1
            }
            Formula::Not(arg) => !arg.eval(mask),
            Formula::And(lhs, rhs) => lhs.eval(mask) && rhs.eval(mask),
            Formula::Or(lhs, rhs) => lhs.eval(mask) || rhs.eval(mask),
        }
    }

    fn is_binary(&self) -> bool {
        matches!(self, Formula::And(..) | Formula::Or(..))
    }

    /// Prints with as few parentheses as the left-first split allows: a
    /// binary left operand stays wrapped, the right operand does not.
    fn loose(&self) -> String {
        let wrapped = |f: &Formula| {
            if f.is_binary() {
                format!("({})", f.loose())
            } else {
                f.loose()
            }
        };
        match self {
            Formula::Var(c) => c.to_string(),
            Formula::Not(arg) => format!("~{}", wrapped(arg)),
            Formula::And(lhs, rhs) => format!("{} & {}", wrapped(lhs), rhs.loose()),
            Formula::Or(lhs, rhs) => format!("{} ? {}", wrapped(lhs), rhs.loose()),
        }
    }
}

impl Display for Formula {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Formula::Var(c) => write!(f, "{c}"),
            Formula::Not(arg) => write!(f, "~{arg}"),
            Formula::And(lhs, rhs) => write!(f, "({lhs} & {rhs})"),
            Formula::Or(lhs, rhs) => write!(f, "({lhs} ? {rhs})"),
        }
    }
}

impl Arbitrary for Formula {
    fn arbitrary(g: &mut Gen) -> Self {
        let depth = usize::arbitrary(g) % 5;
        Formula::generate(g, depth)
    }
}

/// Predicate strings over `A`..=`F`, occasionally malformed.
#[derive(Debug, Clone)]
struct Predicates(Vec<String>);

impl Arbitrary for Predicates {
    fn arbitrary(g: &mut Gen) -> Self {
        let n = usize::arbitrary(g) % 10;
        let literal = |g: &mut Gen| {
            let neg = if bool::arbitrary(g) { "~" } else { "" };
            format!("{neg}{}", g.choose(&LETTERS).unwrap())
        };
        let predicates = (0..n)
            .map(|_| match u8::arbitrary(g) % 10 {
                0..=3 => literal(g),
                4..=5 => format!("{}={}", g.choose(&LETTERS).unwrap(), g.choose(&LETTERS).unwrap()),
                6..=8 => format!("{}>{}", literal(g), literal(g)),
                _ => "A=B=C".to_string(),
            })
            .collect();
        Predicates(predicates)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(Predicates))
    }
}

fn assignment(mask: u8) -> Vec<String> {
    LETTERS
        .iter()
        .enumerate()
        .map(|(i, c)| if (mask >> i) & 1 == 1 { c.to_string() } else { format!("~{c}") })
        .collect()
}

#[quickcheck]
fn evaluation_is_total(formula: Formula, predicates: Predicates) -> bool {
    let (tree, _) = LogicTree::new(&formula.to_string(), &predicates.0).unwrap();
    matches!(
        tree.evaluate(),
        Validity::True | Validity::False | Validity::Unknown | Validity::Invalid
    )
}

#[quickcheck]
fn normalization_preserves_boolean_semantics(formula: Formula, mask: u8) -> bool {
    let (tree, _) = LogicTree::new(&formula.to_string(), assignment(mask)).unwrap();
    tree.evaluate() == Validity::from(formula.eval(mask))
}

#[quickcheck]
fn loose_printing_preserves_boolean_semantics(formula: Formula, mask: u8) -> bool {
    let (tree, _) = LogicTree::new(&formula.loose(), assignment(mask)).unwrap();
    tree.evaluate() == Validity::from(formula.eval(mask))
}

#[quickcheck]
fn negation_flips_concrete_results(formula: Formula, mask: u8) -> bool {
    let (tree, _) = LogicTree::new(&formula.loose(), assignment(mask)).unwrap();
    let (negated, _) = LogicTree::new(&format!("~({})", formula.loose()), assignment(mask)).unwrap();
    negated.evaluate() == !tree.evaluate() && negated.evaluate() == Validity::from(!formula.eval(mask))
}

#[quickcheck]
fn conditional_is_material_implication(lhs: Formula, rhs: Formula, mask: u8) -> bool {
    let expression = format!("{} > {}", lhs.loose(), rhs.loose());
    let (tree, _) = LogicTree::new(&expression, assignment(mask)).unwrap();
    tree.evaluate() == Validity::from(!lhs.eval(mask) || rhs.eval(mask))
}

#[quickcheck]
fn de_morgan_preorder(lhs: Formula, rhs: Formula) -> bool {
    let rewritten = normalize(&format!("~({lhs} & {rhs})")).unwrap().to_string();
    let expected = format!(
        "?{}{}",
        normalize(&format!("~{lhs}")).unwrap(),
        normalize(&format!("~{rhs}")).unwrap()
    );
    rewritten == expected
}

#[quickcheck]
fn cells_are_monotone(predicates: Predicates) -> bool {
    let mut table = VariableTable::new();
    let parsed = predicates
        .0
        .iter()
        .filter_map(|s| Predicate::parse(s).ok().flatten())
        .collect_vec();
    // A few rounds, so later predicates see earlier results.
    for predicate in parsed.iter().cycle().take(parsed.len() * 3) {
        let before = table.snapshot();
        apply(&mut table, predicate);
        let after = table.snapshot();
        let ok = before.iter().zip(after.iter()).all(|(&b, &a)| match b {
            Validity::Unknown => true,
            Validity::True | Validity::False => a == b || a == Validity::Invalid,
            Validity::Invalid => a == Validity::Invalid,
        });
        if !ok {
            return false;
        }
    }
    true
}

#[quickcheck]
fn inference_reaches_a_fixpoint(predicates: Predicates) -> bool {
    let mut table = VariableTable::new();
    let inference = infer(&mut table, &predicates.0);
    let before = table.snapshot();
    for predicate in predicates.0.iter().filter_map(|s| Predicate::parse(s).ok().flatten()) {
        apply(&mut table, &predicate);
    }
    inference.converged && table.snapshot() == before
}

#[quickcheck]
fn consistent_inference_ignores_predicate_order(predicates: Predicates, shift: usize) -> TestResult {
    let mut table = VariableTable::new();
    infer(&mut table, &predicates.0);
    if table.snapshot().contains(&Validity::Invalid) {
        // With contradictions, which cells get poisoned first depends on order.
        return TestResult::discard();
    }

    let mut reordered = predicates.0.clone();
    reordered.reverse();
    if !reordered.is_empty() {
        let k = shift % reordered.len();
        reordered.rotate_left(k);
    }
    let mut other = VariableTable::new();
    infer(&mut other, &reordered);

    TestResult::from_bool(other.snapshot() == table.snapshot())
}

#[quickcheck]
fn linked_letters_read_the_same_value(predicates: Predicates) -> bool {
    let mut table = VariableTable::new();
    infer(&mut table, &predicates.0);
    let pairs = predicates.0.iter().filter_map(|s| match Predicate::parse(s) {
        Ok(Some(Predicate::Biconditional { lhs, rhs })) => Some((lhs, rhs)),
        _ => None,
    });
    pairs.into_iter().all(|(lhs, rhs)| {
        table.are_linked(lhs, rhs) && lhs.eval(&table) == rhs.eval(&table) && table.get(lhs) == table.get(rhs)
    })
}

#[test]
fn order_matters_once_contradictions_appear() {
    let letter = |c| Letter::from_char(c).unwrap();

    let mut table = VariableTable::new();
    infer(&mut table, ["A", "D", "A>~D", "A>~B"]);
    assert_eq!(table.get(letter('B')), Validity::Unknown);

    let mut table = VariableTable::new();
    infer(&mut table, ["A", "D", "A>~B", "A>~D"]);
    assert_eq!(table.get(letter('B')), Validity::False);
}
