//! Clauses: deduplicated, canonically ordered literal sets with parentage

use super::literal::Literal;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// How a clause entered the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClauseOrigin {
    /// Part of the input clause set
    Initial,
    /// Produced by a resolution step
    Resolved,
}

/// A disjunction of literals. The empty clause `□` denotes contradiction.
///
/// Parents are shared handles; the parent graph is a DAG because parent ids
/// are strictly smaller than the child's id.
#[derive(Debug, Clone)]
pub struct Clause {
    pub id: usize,
    pub literals: Vec<Literal>,
    pub origin: ClauseOrigin,
    pub parents: Option<[Arc<Clause>; 2]>,
    /// Description of the unifying substitution (empty for initial clauses)
    pub rule: String,
}

impl Clause {
    /// Create an initial clause
    pub fn initial(id: usize, literals: Vec<Literal>) -> Clause {
        Clause {
            id,
            literals: canonicalize(literals),
            origin: ClauseOrigin::Initial,
            parents: None,
            rule: String::new(),
        }
    }

    /// Create a resolvent of two parent clauses
    pub fn resolved(
        id: usize,
        literals: Vec<Literal>,
        parents: [Arc<Clause>; 2],
        rule: String,
    ) -> Clause {
        Clause {
            id,
            literals: canonicalize(literals),
            origin: ClauseOrigin::Resolved,
            parents: Some(parents),
            rule,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// Clause equality is by literal-set equality under the canonical order;
    /// ids, origins, and parentage are ignored.
    pub fn same_literals(&self, other: &Clause) -> bool {
        self.literals.len() == other.literals.len()
            && self.literals.iter().zip(&other.literals).all(|(a, b)| a == b)
    }
}

/// Remove duplicate literals by display key (first occurrence wins), then
/// sort by the key. Stable sort keeps input order among equal keys.
fn canonicalize(literals: Vec<Literal>) -> Vec<Literal> {
    let mut seen: IndexSet<String> = IndexSet::with_capacity(literals.len());
    let mut unique: Vec<Literal> = Vec::with_capacity(literals.len());
    for lit in literals {
        if seen.insert(lit.to_string()) {
            unique.push(lit);
        }
    }
    unique.sort_by(|a, b| a.to_string().cmp(&b.to_string()));
    unique
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "□");
        }
        for (i, lit) in self.literals.iter().enumerate() {
            if i > 0 {
                write!(f, " ∨ ")?;
            }
            write!(f, "{}", lit)?;
        }
        Ok(())
    }
}
