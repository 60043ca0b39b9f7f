//! Most general unifier computation (Robinson's algorithm with occurs-check)

use crate::fol::{Literal, Substitution, Term};
use thiserror::Error;

/// Result of a unification attempt
pub type UnificationResult = Result<Substitution, UnificationError>;

/// Why a unification attempt failed. Failure is expected control flow: a
/// resolution candidate that does not unify simply yields no resolvent.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnificationError {
    #[error("occurs check: {var} occurs in {term}")]
    OccursCheck { var: String, term: Term },
    #[error("predicate mismatch: {0} vs {1}")]
    PredicateClash(String, String),
    #[error("symbol clash: {0} vs {1}")]
    SymbolClash(String, String),
    #[error("arity mismatch: {0} vs {1}")]
    ArityMismatch(usize, usize),
}

/// Unify two terms under an existing substitution.
///
/// Θ is taken and returned by value: every step yields a fresh substitution
/// and the caller's previous one is gone, so a failed branch inside
/// resolution cannot leak partial bindings.
pub fn unify_terms(x: &Term, y: &Term, theta: Substitution) -> UnificationResult {
    if x.same_text(y) {
        return Ok(theta);
    }
    match (x, y) {
        (Term::Variable { name }, _) => unify_var(name, y, theta),
        (_, Term::Variable { name }) => unify_var(name, x, theta),
        (
            Term::Function { name: f, args: xs },
            Term::Function { name: g, args: ys },
        ) => {
            if f != g {
                return Err(UnificationError::SymbolClash(f.clone(), g.clone()));
            }
            if xs.len() != ys.len() {
                return Err(UnificationError::ArityMismatch(xs.len(), ys.len()));
            }
            unify_args(xs, ys, theta)
        }
        _ => Err(UnificationError::SymbolClash(
            x.name().to_string(),
            y.name().to_string(),
        )),
    }
}

/// Unify two literals: predicates and arities must match, then the
/// argument lists are unified pairwise. The sign is the caller's concern.
pub fn unify_literals(x: &Literal, y: &Literal, theta: Substitution) -> UnificationResult {
    if x.predicate != y.predicate {
        return Err(UnificationError::PredicateClash(
            x.predicate.clone(),
            y.predicate.clone(),
        ));
    }
    if x.args.len() != y.args.len() {
        return Err(UnificationError::ArityMismatch(x.args.len(), y.args.len()));
    }
    unify_args(&x.args, &y.args, theta)
}

/// Unify two argument lists pairwise, threading Θ through each pair
pub fn unify_args(xs: &[Term], ys: &[Term], theta: Substitution) -> UnificationResult {
    if xs.len() != ys.len() {
        return Err(UnificationError::ArityMismatch(xs.len(), ys.len()));
    }
    let mut theta = theta;
    for (x, y) in xs.iter().zip(ys) {
        theta = unify_terms(x, y, theta)?;
    }
    Ok(theta)
}

fn unify_var(var: &str, term: &Term, theta: Substitution) -> UnificationResult {
    if let Some(bound) = theta.get(var) {
        let bound = bound.clone();
        return unify_terms(&bound, term, theta);
    }
    if let Term::Variable { name } = term {
        if let Some(bound) = theta.get(name) {
            let bound = bound.clone();
            return unify_terms(&Term::variable(var), &bound, theta);
        }
    }
    // Binding var to a term containing it would build an infinite term.
    // The check runs against the term's Θ-image so a cycle cannot form
    // through an existing binding chain.
    if term.apply(&theta).contains_var(var) {
        return Err(UnificationError::OccursCheck {
            var: var.to_string(),
            term: term.clone(),
        });
    }
    Ok(theta.bind(var, term.clone()))
}
