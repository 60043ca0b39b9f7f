//! Proof-chain reconstruction from the parent DAG

use crate::fol::Clause;
use std::collections::HashSet;
use std::sync::Arc;

/// Collect the derivation chain of a clause: a depth-first post-order
/// traversal of the parent DAG, visiting each clause id at most once, so
/// every resolved clause appears after both of its parents.
pub fn proof_chain(contradiction: &Arc<Clause>) -> Vec<Arc<Clause>> {
    let mut visited: HashSet<usize> = HashSet::new();
    let mut chain: Vec<Arc<Clause>> = Vec::new();
    collect(contradiction, &mut visited, &mut chain);
    chain
}

fn collect(clause: &Arc<Clause>, visited: &mut HashSet<usize>, chain: &mut Vec<Arc<Clause>>) {
    if !visited.insert(clause.id) {
        return;
    }
    if let Some(parents) = &clause.parents {
        for parent in parents {
            collect(parent, visited, chain);
        }
    }
    chain.push(Arc::clone(clause));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fol::{Literal, Term};

    fn unit(id: usize, pred: &str, negated: bool) -> Arc<Clause> {
        Arc::new(Clause::initial(
            id,
            vec![Literal::new(pred, vec![Term::constant("a")], negated)],
        ))
    }

    #[test]
    fn parents_precede_children_and_ids_are_unique() {
        let c1 = unit(1, "P", false);
        let c2 = unit(2, "P", true);
        let c3 = Arc::new(Clause::resolved(
            3,
            vec![],
            [Arc::clone(&c1), Arc::clone(&c2)],
            "Unification (empty)".to_string(),
        ));
        let chain = proof_chain(&c3);

        let ids: Vec<usize> = chain.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn shared_ancestors_are_visited_once() {
        // c1 feeds both intermediate steps; the chain must list it once
        let c1 = unit(1, "P", false);
        let c2 = unit(2, "P", true);
        let c3 = Arc::new(Clause::resolved(
            3,
            vec![Literal::new("Q", vec![Term::constant("a")], false)],
            [Arc::clone(&c1), Arc::clone(&c2)],
            "Unification (empty)".to_string(),
        ));
        let c4 = Arc::new(Clause::resolved(
            4,
            vec![],
            [Arc::clone(&c1), Arc::clone(&c3)],
            "Unification (empty)".to_string(),
        ));
        let chain = proof_chain(&c4);

        let ids: Vec<usize> = chain.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }
}
