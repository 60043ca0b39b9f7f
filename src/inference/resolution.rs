//! Binary resolution over clause pairs

use crate::fol::{Clause, Literal, Substitution};
use crate::unification::unify_literals;

/// A candidate resolvent: the rewritten side literals plus the rule text
/// describing the unifying substitution. The saturation loop turns it into
/// a clause once it decides to keep it.
#[derive(Debug, Clone)]
pub struct Resolvent {
    pub literals: Vec<Literal>,
    pub rule: String,
}

/// Produce every resolvent of an ordered clause pair.
///
/// For each literal pair `(i, j)` with the same predicate and opposite
/// signs, `c1[i]` is unified against the complement of `c2[j]`; on success
/// the remaining literals of both parents are rewritten through Θ.
///
/// Variables are NOT standardized apart between the parents: a shared
/// variable name is treated as the same variable on both sides. See
/// DESIGN.md for the consequences.
pub fn resolve_pair(c1: &Clause, c2: &Clause) -> Vec<Resolvent> {
    let mut resolvents = Vec::new();

    for (i, l1) in c1.literals.iter().enumerate() {
        for (j, l2) in c2.literals.iter().enumerate() {
            if l1.predicate != l2.predicate || l1.negated == l2.negated {
                continue;
            }
            let Ok(theta) = unify_literals(l1, &l2.negate(), Substitution::new()) else {
                continue;
            };

            let mut literals: Vec<Literal> = Vec::new();
            literals.extend(
                c1.literals
                    .iter()
                    .enumerate()
                    .filter(|(idx, _)| *idx != i)
                    .map(|(_, lit)| lit.apply(&theta)),
            );
            literals.extend(
                c2.literals
                    .iter()
                    .enumerate()
                    .filter(|(idx, _)| *idx != j)
                    .map(|(_, lit)| lit.apply(&theta)),
            );

            resolvents.push(Resolvent {
                literals,
                rule: format!("Unification {}", theta),
            });
        }
    }

    resolvents
}
