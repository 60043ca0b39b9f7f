//! Property-based tests for unification using proptest.

use super::unify_terms;
use crate::fol::{Substitution, Term};
use proptest::prelude::*;

/// Generate a random term of bounded depth over a small fixed signature:
/// variables x..w, constants a0..a3, functions f0/f1 of arity 1-2.
fn arb_term(max_depth: u32) -> BoxedStrategy<Term> {
    if max_depth == 0 {
        prop_oneof![
            (0..4u8).prop_map(|i| Term::variable(var_name(i))),
            (0..4u8).prop_map(|i| Term::constant(format!("a{}", i))),
        ]
        .boxed()
    } else {
        prop_oneof![
            3 => (0..4u8).prop_map(|i| Term::variable(var_name(i))),
            3 => (0..4u8).prop_map(|i| Term::constant(format!("a{}", i))),
            2 => (0..2u8, proptest::collection::vec(arb_term(max_depth - 1), 1..=2))
                .prop_map(|(f, args)| Term::function(format!("f{}", f), args)),
        ]
        .boxed()
    }
}

fn var_name(i: u8) -> String {
    ["x", "y", "z", "w"][i as usize].to_string()
}

proptest! {
    /// Soundness: if unify(s, t) = σ, then sσ and tσ stringify identically
    #[test]
    fn unification_soundness(t1 in arb_term(3), t2 in arb_term(3)) {
        if let Ok(sigma) = unify_terms(&t1, &t2, Substitution::new()) {
            let t1_sigma = t1.apply(&sigma);
            let t2_sigma = t2.apply(&sigma);
            prop_assert!(
                t1_sigma.same_text(&t2_sigma),
                "unifier must make terms equal: {} vs {}",
                t1_sigma,
                t2_sigma
            );
        }
        // Failed unification carries no property to check
    }

    /// Symmetry: unify(s, t) succeeds iff unify(t, s) succeeds
    #[test]
    fn unification_symmetry(t1 in arb_term(3), t2 in arb_term(3)) {
        let r1 = unify_terms(&t1, &t2, Substitution::new());
        let r2 = unify_terms(&t2, &t1, Substitution::new());
        prop_assert_eq!(r1.is_ok(), r2.is_ok(), "unification should be symmetric");
    }

    /// Occurs check: unify(x, f(...x...)) always fails, at any nesting depth
    #[test]
    fn unification_occurs_check(func_idx in 0..2u8, depth in 1..4u32) {
        let x = Term::variable("x");
        let mut term = x.clone();
        for _ in 0..depth {
            term = Term::function(format!("f{}", func_idx), vec![term]);
        }
        prop_assert!(
            unify_terms(&x, &term, Substitution::new()).is_err(),
            "occurs check should prevent x = f(...x...)"
        );
    }

    /// Identity: a term always unifies with itself, and the unifier leaves
    /// a ground term unchanged
    #[test]
    fn unification_identity(t in arb_term(3)) {
        let result = unify_terms(&t, &t, Substitution::new());
        prop_assert!(result.is_ok(), "term should unify with itself");
        if let Ok(sigma) = result {
            prop_assert!(t.apply(&sigma).same_text(&t));
        }
    }
}
