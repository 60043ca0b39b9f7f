//! Variable substitutions

use super::literal::Literal;
use super::term::Term;
use std::collections::{BTreeMap, HashSet};
use std::fmt;

/// A substitution Θ mapping variable names to terms.
///
/// Backed by a `BTreeMap` so iteration and `Display` are lexicographically
/// sorted by variable name, which keeps the proof logs deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Substitution {
    map: BTreeMap<String, Term>,
}

impl Substitution {
    pub fn new() -> Substitution {
        Substitution::default()
    }

    /// The term bound to `var`, if any
    pub fn get(&self, var: &str) -> Option<&Term> {
        self.map.get(var)
    }

    pub fn contains(&self, var: &str) -> bool {
        self.map.contains_key(var)
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// This substitution extended with `var ↦ term`
    pub fn bind(mut self, var: impl Into<String>, term: Term) -> Substitution {
        self.map.insert(var.into(), term);
        self
    }
}

impl Term {
    /// Apply a substitution, returning a fresh term.
    ///
    /// A variable bound to another variable is chased through the chain; a
    /// per-chain visited set stops a cycle that slipped past the unifier's
    /// occurs-check. Function terms recurse into their arguments.
    pub fn apply(&self, theta: &Substitution) -> Term {
        match self {
            Term::Constant { .. } => self.clone(),
            Term::Function { name, args } => Term::Function {
                name: name.clone(),
                args: args.iter().map(|arg| arg.apply(theta)).collect(),
            },
            Term::Variable { name } => {
                let mut visited: HashSet<&str> = HashSet::new();
                let mut current: &str = name;
                while let Some(bound) = theta.get(current) {
                    if !visited.insert(current) {
                        return Term::variable(current);
                    }
                    match bound {
                        Term::Variable { name: next } => current = next,
                        other => return other.apply(theta),
                    }
                }
                Term::variable(current)
            }
        }
    }
}

impl Literal {
    /// Apply a substitution to every argument, returning a fresh literal
    pub fn apply(&self, theta: &Substitution) -> Literal {
        Literal {
            predicate: self.predicate.clone(),
            args: self.args.iter().map(|arg| arg.apply(theta)).collect(),
            negated: self.negated,
        }
    }
}

impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.map.is_empty() {
            return write!(f, "(empty)");
        }
        for (i, (var, term)) in self.map.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} ↦ {}", var, term)?;
        }
        Ok(())
    }
}
